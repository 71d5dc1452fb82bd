//! Output artifact naming.

use std::fmt;
use std::path::{Path, PathBuf};

use chrono::{DateTime, TimeZone};

use crate::config::{
    ERRORS_SUFFIX, EXCEPTIONS_SUFFIX, IDENTICAL_SUFFIX, PROBLEMS_SUFFIX, RUN_LOG_SUFFIX,
    RUN_TIMESTAMP_FORMAT,
};

/// Paths of the five files a comparison run writes.
///
/// All names share a `%Y%m%d-%H%M%S_` prefix so consecutive runs do not
/// overwrite each other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    /// Every record's outcome plus both raw answer lists
    pub run_log: PathBuf,
    /// One FQDN per line for records both servers agree on
    pub identical: PathBuf,
    /// `name,type` rows that mismatched, re-feedable as input
    pub problems: PathBuf,
    /// Mismatched records with both answer lists
    pub errors: PathBuf,
    /// One line per failed lookup or rejected input row
    pub exceptions: PathBuf,
}

impl ArtifactPaths {
    /// Builds the artifact paths for a run started at `started`.
    pub fn for_run<Tz>(output_dir: &Path, started: &DateTime<Tz>) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        let stamp = started.format(RUN_TIMESTAMP_FORMAT).to_string();
        let path = |suffix: &str| output_dir.join(format!("{stamp}_{suffix}"));
        Self {
            run_log: path(RUN_LOG_SUFFIX),
            identical: path(IDENTICAL_SUFFIX),
            problems: path(PROBLEMS_SUFFIX),
            errors: path(ERRORS_SUFFIX),
            exceptions: path(EXCEPTIONS_SUFFIX),
        }
    }
}
