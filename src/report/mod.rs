//! Run output: the five report sinks and their line formats.
//!
//! `Reporter` writes to sinks it is handed; it never opens files itself. The
//! run driver opens the artifact files and passes them in, tests pass
//! `Vec<u8>`s.

mod artifacts;

pub use artifacts::ArtifactPaths;

use std::io::{self, Write};

use crate::compare::ComparisonOutcome;
use crate::config::ENDPOINT_LABEL_WIDTH;
use crate::error_handling::InputError;
use crate::input::RecordRequest;

/// The five output sinks of a run.
#[derive(Debug)]
pub struct Sinks<W> {
    pub run_log: W,
    pub identical: W,
    pub problems: W,
    pub errors: W,
    pub exceptions: W,
}

impl<W: Write> Sinks<W> {
    /// Flushes every sink, stopping at the first failure.
    pub fn flush_all(&mut self) -> io::Result<()> {
        self.run_log.flush()?;
        self.identical.flush()?;
        self.problems.flush()?;
        self.errors.flush()?;
        self.exceptions.flush()
    }
}

/// Formats an answer list as `['a', 'b']`.
pub fn format_answers(answers: &[String]) -> String {
    let quoted: Vec<String> = answers.iter().map(|a| format!("'{a}'")).collect();
    format!("[{}]", quoted.join(", "))
}

/// Encodes one CSV row, quoting fields only where needed, so the problems
/// file reads back exactly like the records file it came from.
pub fn csv_row(fields: &[&str]) -> io::Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    writer.write_record(fields)?;
    writer.into_inner().map_err(|e| e.into_error())
}

/// `    <label>: ['a', 'b']` with the label right-aligned.
pub fn answer_line(label: &str, answers: &[String]) -> String {
    format!(
        "    {label:>width$}: {}",
        format_answers(answers),
        width = ENDPOINT_LABEL_WIDTH
    )
}

/// Writes per-record results to the run's sinks.
pub struct Reporter<W: Write> {
    sinks: Sinks<W>,
    first_label: String,
    second_label: String,
}

impl<W: Write> Reporter<W> {
    pub fn new(sinks: Sinks<W>, first_label: &str, second_label: &str) -> Self {
        Self {
            sinks,
            first_label: first_label.to_string(),
            second_label: second_label.to_string(),
        }
    }

    /// Mirrors the console header into the run log.
    pub fn write_header(&mut self, lines: &[String]) -> io::Result<()> {
        for line in lines {
            writeln!(self.sinks.run_log, "{line}")?;
        }
        Ok(())
    }

    /// Records a rejected input row in the run log and the exceptions log.
    pub fn record_parse_error(&mut self, error: &InputError) -> io::Result<()> {
        writeln!(self.sinks.run_log)?;
        writeln!(self.sinks.run_log, "{error}")?;
        writeln!(self.sinks.exceptions, "{error}")
    }

    /// Records a failed lookup on the endpoint labelled `label`.
    pub fn record_resolution_failure(
        &mut self,
        label: &str,
        request: &RecordRequest,
        reason: &str,
    ) -> io::Result<()> {
        writeln!(
            self.sinks.exceptions,
            "Exception from {label}: {} {}: \"{reason}\"",
            request.name, request.record_type
        )
    }

    /// Records the comparison of one request.
    ///
    /// Identical records go to the identical list; mismatches go to the error
    /// log and the problems file. Both answer lists always go to the run log.
    pub fn record_comparison(
        &mut self,
        request: &RecordRequest,
        outcome: ComparisonOutcome,
        first_answers: &[String],
        second_answers: &[String],
    ) -> io::Result<()> {
        let first_line = answer_line(&self.first_label, first_answers);
        let second_line = answer_line(&self.second_label, second_answers);

        writeln!(self.sinks.run_log)?;
        match outcome {
            ComparisonOutcome::Mismatch => {
                writeln!(
                    self.sinks.run_log,
                    "{} {}: mismatch",
                    request.name, request.record_type
                )?;
                writeln!(
                    self.sinks.errors,
                    "{} {}:",
                    request.name, request.record_type
                )?;
                writeln!(self.sinks.errors, "{first_line}")?;
                writeln!(self.sinks.errors, "{second_line}")?;
                let row = csv_row(&[request.name.as_str(), request.record_type.as_str()])?;
                self.sinks.problems.write_all(&row)?;
            }
            ComparisonOutcome::Identical => {
                writeln!(
                    self.sinks.run_log,
                    "{} {}: OK identical",
                    request.name, request.record_type
                )?;
                writeln!(self.sinks.identical, "{}", request.name)?;
            }
        }
        writeln!(self.sinks.run_log, "{first_line}")?;
        writeln!(self.sinks.run_log, "{second_line}")
    }

    /// Appends the final summary line to the run log.
    pub fn write_summary(&mut self, summary: &str) -> io::Result<()> {
        writeln!(self.sinks.run_log)?;
        writeln!(self.sinks.run_log, "{summary}")
    }

    /// Flushes every sink and hands them back.
    pub fn finish(mut self) -> io::Result<Sinks<W>> {
        self.sinks.flush_all()?;
        Ok(self.sinks)
    }
}
