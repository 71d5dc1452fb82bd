//! The comparison run.
//!
//! A run moves through three stages:
//! - starting: open the records file and the five artifacts, print the header
//! - processing: one record at a time, both lookups, compare, report
//! - finished: summary line, artifacts flushed and closed
//!
//! A rejected input row or a failed lookup is recorded and the run carries on.
//! Only an I/O failure on the input or an artifact aborts it.

mod finalize;
mod init;
mod task;

use std::time::Instant;

use anyhow::{Context, Result};
use chrono::Local;
use log::{debug, info};

use crate::app::{Progress, RunSummary};
use crate::config::Config;
use crate::dns::{Endpoint, RecordResolver};
use crate::initialization::init_endpoint_resolver;
use crate::input::RecordReader;
use crate::report::{ArtifactPaths, Reporter};

pub use finalize::finalize_run;
pub use init::{header_lines, open_artifacts};
pub use task::process_request;

/// Results of a comparison run.
#[derive(Debug, Clone)]
pub struct ComparisonReport {
    /// Record, mismatch and exception counters
    pub summary: RunSummary,
    /// Where the run's output files were written
    pub artifacts: ArtifactPaths,
    /// Input rows rejected as malformed
    pub parse_errors: usize,
    /// Elapsed time in seconds
    pub elapsed_seconds: f64,
}

/// Runs a comparison between the two nameservers named in `config`.
///
/// # Errors
///
/// Returns an error if an endpoint address is invalid, the records file
/// cannot be read, or an output file cannot be written.
///
/// # Example
///
/// ```no_run
/// use dns_compare::{run_compare, Config};
/// use std::path::PathBuf;
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config {
///     endpoint_a: "192.0.2.53".to_string(),
///     endpoint_b: "198.51.100.53".to_string(),
///     records: PathBuf::from("records.csv"),
///     ..Default::default()
/// };
/// let report = run_compare(config).await?;
/// println!("{} mismatches", report.summary.mismatches);
/// # Ok(())
/// # }
/// ```
pub async fn run_compare(config: Config) -> Result<ComparisonReport> {
    let first_endpoint =
        Endpoint::parse(&config.endpoint_a).context("Invalid first nameserver")?;
    let second_endpoint =
        Endpoint::parse(&config.endpoint_b).context("Invalid second nameserver")?;

    let first = init_endpoint_resolver(first_endpoint, config.timeout_seconds, config.attempts);
    let second = init_endpoint_resolver(second_endpoint, config.timeout_seconds, config.attempts);

    run_compare_with(&config, &first, &second).await
}

/// Runs a comparison with caller-supplied resolvers.
///
/// `config.endpoint_a`/`endpoint_b` are ignored; the resolvers' labels name
/// the endpoints in every report.
///
/// # Errors
///
/// Returns an error if the records file cannot be read or an output file
/// cannot be written. Buffered output is flushed on a best-effort basis when
/// the run aborts.
pub async fn run_compare_with<A, B>(
    config: &Config,
    first: &A,
    second: &B,
) -> Result<ComparisonReport>
where
    A: RecordResolver,
    B: RecordResolver,
{
    let start_time = Instant::now();

    let records = RecordReader::open(&config.records).with_context(|| {
        format!("Failed to open records file {}", config.records.display())
    })?;
    let (artifacts, sinks) = open_artifacts(&config.output_dir, &Local::now())?;

    let header = header_lines(first.label(), second.label(), &artifacts);
    println!();
    for line in &header {
        println!("{line}");
    }
    println!();

    let mut reporter = Reporter::new(sinks, first.label(), second.label());
    reporter
        .write_header(&header)
        .context("Failed to write run log header")?;

    let progress = Progress::new(config.show_progress);
    let mut summary = RunSummary::new();
    let mut parse_errors = 0usize;

    for row in records {
        match row {
            Ok(request) => {
                process_request(&request, first, second, &mut reporter, &mut summary)
                    .await
                    .context("Failed to write comparison results")?;
                progress.record_processed(summary.records_tested);
            }
            Err(e) if e.is_row_local() => {
                debug!("Rejected input row: {e}");
                parse_errors += 1;
                progress.println(&e.to_string());
                reporter
                    .record_parse_error(&e)
                    .context("Failed to record rejected input row")?;
            }
            Err(e) => {
                return Err(e).context("Failed to read records file");
            }
        }
    }

    info!(
        "Processed {} records ({} rejected rows)",
        summary.records_tested, parse_errors
    );
    finalize_run(
        reporter,
        &progress,
        summary,
        artifacts,
        parse_errors,
        start_time,
    )
}
