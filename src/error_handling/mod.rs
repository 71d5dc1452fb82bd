//! Error handling and failure statistics.
//!
//! This module provides:
//! - Error type definitions (initialization, input, deduplication)
//! - Resolution failure categories and their counters
//! - Categorization of resolver errors
//!
//! Only a fatal I/O problem stops a run. Malformed input rows and failed
//! lookups are recorded and processing continues.

mod categorization;
mod stats;
mod types;

// Re-export public API
pub use categorization::{categorize_resolve_error, categorize_response_code};
pub use stats::FailureStats;
pub use types::{DedupError, FailureKind, InitializationError, InputError};
