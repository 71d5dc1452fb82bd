//! Run finalization.

use std::io::Write;
use std::time::Instant;

use anyhow::{Context, Result};
use log::info;

use crate::app::{print_failure_statistics, Progress, RunSummary};
use crate::report::{ArtifactPaths, Reporter};

use super::ComparisonReport;

/// Finishes a run and produces the final report.
///
/// 1. Stop the progress spinner
/// 2. Append the summary line to the run log
/// 3. Flush and close every artifact
/// 4. Print the summary line and failure statistics
///
/// # Errors
///
/// Returns an error if the summary cannot be written or an artifact cannot be
/// flushed.
pub fn finalize_run<W: Write>(
    mut reporter: Reporter<W>,
    progress: &Progress,
    summary: RunSummary,
    artifacts: ArtifactPaths,
    parse_errors: usize,
    start_time: Instant,
) -> Result<ComparisonReport> {
    progress.finish();

    let summary_line = summary.summary_line();
    reporter
        .write_summary(&summary_line)
        .context("Failed to write summary to run log")?;
    // Sinks are dropped, and their files closed, right here
    reporter.finish().context("Failed to flush output files")?;

    println!("{summary_line}");
    print_failure_statistics(&summary);

    let elapsed_seconds = start_time.elapsed().as_secs_f64();
    info!(
        "Compared {} records in {:.1}s ({} input rows rejected)",
        summary.records_tested, elapsed_seconds, parse_errors
    );

    Ok(ComparisonReport {
        summary,
        artifacts,
        parse_errors,
        elapsed_seconds,
    })
}
