//! Main application modules.
//!
//! This module provides the console progress spinner and the run counters
//! used by the run driver.

pub mod progress;
pub mod statistics;

// Re-export public API
pub use progress::Progress;
pub use statistics::{print_failure_statistics, RunSummary};
