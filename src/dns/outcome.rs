//! Resolution outcomes.

use crate::config::FAILURE_MARKER_PREFIX;
use crate::error_handling::FailureKind;

/// What one nameserver said about one record request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionOutcome {
    /// Answer records as lowercase text, sorted lexicographically
    Answers(Vec<String>),
    /// The lookup failed; `reason` is the resolver's error text
    Failed {
        /// Category the failure is counted under
        kind: FailureKind,
        /// Error text from the resolver
        reason: String,
    },
}

impl ResolutionOutcome {
    /// Builds an `Answers` outcome, normalizing each answer to lowercase and
    /// sorting them so answer order from the server does not matter.
    pub fn from_answers<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut normalized: Vec<String> = answers
            .into_iter()
            .map(|answer| answer.as_ref().to_lowercase())
            .collect();
        normalized.sort();
        ResolutionOutcome::Answers(normalized)
    }

    pub fn failed(kind: FailureKind, reason: impl Into<String>) -> Self {
        ResolutionOutcome::Failed {
            kind,
            reason: reason.into(),
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, ResolutionOutcome::Failed { .. })
    }

    /// The list the comparison runs on.
    ///
    /// A failure becomes a single placeholder answer embedding the error text,
    /// so it never equals a real answer set.
    pub fn answer_list(&self) -> Vec<String> {
        match self {
            ResolutionOutcome::Answers(answers) => answers.clone(),
            ResolutionOutcome::Failed { reason, .. } => {
                vec![failure_marker(reason)]
            }
        }
    }
}

/// `bad response "<reason>"`
pub fn failure_marker(reason: &str) -> String {
    format!("{FAILURE_MARKER_PREFIX} \"{reason}\"")
}
