//! Run counters and the final statistics.

use log::info;
use strum::IntoEnumIterator;

use crate::compare::ComparisonOutcome;
use crate::error_handling::{FailureKind, FailureStats};

/// Counters for one comparison run.
///
/// Owned by the run driver and updated once per processed record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Records that were looked up and compared (rejected rows excluded)
    pub records_tested: usize,
    /// Records whose answers differed
    pub mismatches: usize,
    /// Failed lookups, counted per endpoint
    pub exceptions: usize,
    /// Failed lookups by category
    pub failures: FailureStats,
}

impl RunSummary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one compared record.
    pub fn record_outcome(&mut self, outcome: ComparisonOutcome) {
        self.records_tested += 1;
        if outcome.is_mismatch() {
            self.mismatches += 1;
        }
    }

    /// Counts one failed lookup.
    pub fn record_failure(&mut self, kind: FailureKind) {
        self.exceptions += 1;
        self.failures.increment(kind);
    }

    /// `Finished. N records tested, M mismatched, E exceptions.`
    pub fn summary_line(&self) -> String {
        format!(
            "Finished. {} records tested, {} mismatched, {} exceptions.",
            self.records_tested, self.mismatches, self.exceptions
        )
    }
}

/// Logs the failed lookups per category.
pub fn print_failure_statistics(summary: &RunSummary) {
    let total = summary.failures.total();
    if total == 0 {
        return;
    }
    info!("Lookup failures ({} total):", total);
    for kind in FailureKind::iter() {
        let count = summary.failures.get(kind);
        if count > 0 {
            info!("   {}: {}", kind.as_str(), count);
        }
    }
}
