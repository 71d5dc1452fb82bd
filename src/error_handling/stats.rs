//! Resolution failure statistics.
//!
//! Counts failed lookups per `FailureKind`. A run is processed by a single
//! thread of control, so plain counters are enough.

use std::collections::HashMap;
use strum::IntoEnumIterator;

use super::types::FailureKind;

/// Per-category failure counter.
///
/// All kinds are initialized to zero on creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureStats {
    counts: HashMap<FailureKind, usize>,
}

impl FailureStats {
    pub fn new() -> Self {
        let counts = FailureKind::iter().map(|kind| (kind, 0)).collect();
        FailureStats { counts }
    }

    /// Increment the counter for `kind`.
    pub fn increment(&mut self, kind: FailureKind) {
        *self.counts.entry(kind).or_insert(0) += 1;
    }

    pub fn get(&self, kind: FailureKind) -> usize {
        self.counts.get(&kind).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }
}

impl Default for FailureStats {
    fn default() -> Self {
        Self::new()
    }
}
