//! Error type definitions.
//!
//! This module defines the error types used throughout the application and the
//! categories resolution failures are counted under.

use log::SetLoggerError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// The nameserver address given on the command line is not usable.
    #[error("Invalid nameserver address {address:?}: expected IP or IP:port")]
    EndpointAddressError {
        /// The address as supplied by the user
        address: String,
    },
}

/// Error types for reading the records file.
#[derive(Error, Debug)]
pub enum InputError {
    /// A row that cannot be turned into a record request. Local to that row.
    #[error("Ignoring bad data at line {line}: \"{reason}\"")]
    Malformed {
        /// 1-based line number of the row in the input file
        line: u64,
        /// Why the row was rejected
        reason: String,
    },

    /// Reading the file itself failed.
    #[error("Failed to read records file: {0}")]
    Read(#[from] csv::Error),
}

impl InputError {
    /// Returns `true` if the error only affects a single row.
    pub fn is_row_local(&self) -> bool {
        matches!(self, InputError::Malformed { .. })
    }
}

/// Error types for the line deduplicator.
#[derive(Error, Debug)]
pub enum DedupError {
    /// Reading the input or writing the output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The deduplicated temporary file could not replace the input.
    #[error("Error while replacing file: {0}")]
    Replace(#[from] tempfile::PersistError),
}

/// Categories of resolution failure.
///
/// Every failed lookup counts as one exception; the category only drives the
/// breakdown printed at the end of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum FailureKind {
    /// The nameserver did not answer in time
    Timeout,
    /// The name does not exist (NXDOMAIN)
    NxDomain,
    /// The name exists but has no records of the requested type
    NoRecords,
    /// The nameserver answered with an error code (SERVFAIL, REFUSED, ...)
    ServerFailure,
    /// The query could not be built (unknown record type, bad name)
    InvalidQuery,
    /// Anything else: I/O, protocol errors, no usable connection
    Other,
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FailureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::Timeout => "DNS timeout",
            FailureKind::NxDomain => "Name does not exist (NXDOMAIN)",
            FailureKind::NoRecords => "No records of requested type",
            FailureKind::ServerFailure => "Server returned an error code",
            FailureKind::InvalidQuery => "Invalid query",
            FailureKind::Other => "Other resolution error",
        }
    }
}
