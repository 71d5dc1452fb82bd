//! Answer comparison.

use crate::dns::ResolutionOutcome;

/// Result of comparing the answers of the two nameservers for one record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonOutcome {
    Identical,
    Mismatch,
}

impl ComparisonOutcome {
    pub fn is_mismatch(&self) -> bool {
        matches!(self, ComparisonOutcome::Mismatch)
    }
}

/// Compares two outcomes as multisets of answer strings.
///
/// Answers are already sorted, so answer order from the server is irrelevant,
/// but duplicates count. A failure compares through its placeholder answer:
/// it never equals a real answer set, and two failures are identical only if
/// their error text is byte-for-byte the same.
pub fn compare(first: &ResolutionOutcome, second: &ResolutionOutcome) -> ComparisonOutcome {
    if compare_lists(&first.answer_list(), &second.answer_list()) {
        ComparisonOutcome::Identical
    } else {
        ComparisonOutcome::Mismatch
    }
}

/// Element-wise equality of two answer lists after sorting.
pub fn compare_lists(first: &[String], second: &[String]) -> bool {
    if first.len() != second.len() {
        return false;
    }
    let mut first = first.to_vec();
    let mut second = second.to_vec();
    first.sort();
    second.sort();
    first == second
}
