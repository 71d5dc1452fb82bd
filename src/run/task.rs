//! Per-record processing.

use std::io::{self, Write};

use log::debug;

use crate::app::RunSummary;
use crate::compare::{compare, ComparisonOutcome};
use crate::dns::{resolve_pair, RecordResolver, ResolutionOutcome};
use crate::input::RecordRequest;
use crate::report::Reporter;

/// Looks up one record on both nameservers, compares and reports it.
///
/// Failed lookups are logged to the exceptions sink and counted; they do not
/// stop the record from being compared.
///
/// # Errors
///
/// Only writing to a sink can fail.
pub async fn process_request<A, B, W>(
    request: &RecordRequest,
    first: &A,
    second: &B,
    reporter: &mut Reporter<W>,
    summary: &mut RunSummary,
) -> io::Result<ComparisonOutcome>
where
    A: RecordResolver,
    B: RecordResolver,
    W: Write,
{
    let (first_outcome, second_outcome) = resolve_pair(request, first, second).await;

    for (label, outcome) in [
        (first.label(), &first_outcome),
        (second.label(), &second_outcome),
    ] {
        if let ResolutionOutcome::Failed { kind, reason } = outcome {
            summary.record_failure(*kind);
            reporter.record_resolution_failure(label, request, reason)?;
        }
    }

    let first_answers = first_outcome.answer_list();
    let second_answers = second_outcome.answer_list();
    let comparison = compare(&first_outcome, &second_outcome);
    summary.record_outcome(comparison);

    debug!(
        "{} {} (line {}): {:?}",
        request.name, request.record_type, request.line, comparison
    );
    reporter.record_comparison(request, comparison, &first_answers, &second_answers)?;
    Ok(comparison)
}
