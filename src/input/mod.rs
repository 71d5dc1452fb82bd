//! Records file parsing.
//!
//! The records file is CSV with one `fqdn,type` row per record, no header row.
//! `RecordReader` turns it into a lazy sequence of `RecordRequest`s:
//! - blank rows and rows whose first field is blank are skipped
//! - rows whose first field starts with `#` are comments and are skipped
//! - rows with fewer than two fields are reported as `InputError::Malformed`
//!   and the reader moves on to the next row
//!
//! Columns after the second are ignored.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error_handling::InputError;

/// One record to look up on both nameservers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordRequest {
    /// Domain name, trimmed
    pub name: String,
    /// Record type as written in the input (`A`, `MX`, ...), trimmed
    pub record_type: String,
    /// 1-based line of the input file the row started on
    pub line: u64,
}

impl RecordRequest {
    pub fn new(name: impl Into<String>, record_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            record_type: record_type.into(),
            line: 0,
        }
    }
}

/// Lazy reader over a records file.
///
/// Yields `Ok(RecordRequest)` for usable rows and `Err(InputError)` for
/// problems. Check `InputError::is_row_local` to tell a skippable row from a
/// read failure.
pub struct RecordReader<R: Read> {
    records: csv::StringRecordsIntoIter<R>,
}

impl RecordReader<File> {
    /// Opens the records file at `path`.
    ///
    /// # Errors
    ///
    /// Returns `InputError::Read` if the file cannot be opened.
    pub fn open(path: &Path) -> Result<Self, InputError> {
        let reader = reader_builder().from_path(path)?;
        Ok(Self {
            records: reader.into_records(),
        })
    }
}

impl<R: Read> RecordReader<R> {
    /// Reads records from any byte source.
    pub fn from_reader(source: R) -> Self {
        Self {
            records: reader_builder().from_reader(source).into_records(),
        }
    }
}

fn reader_builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::None);
    builder
}

impl<R: Read> Iterator for RecordReader<R> {
    type Item = Result<RecordRequest, InputError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let record = match self.records.next()? {
                Ok(record) => record,
                Err(e) => return Some(Err(classify_csv_error(e))),
            };
            let line = record.position().map(|pos| pos.line()).unwrap_or(0);
            match parse_row(&record, line) {
                Some(parsed) => return Some(parsed),
                None => continue,
            }
        }
    }
}

/// Parses one CSV row.
///
/// Returns `None` for rows that are skipped silently.
fn parse_row(
    record: &csv::StringRecord,
    line: u64,
) -> Option<Result<RecordRequest, InputError>> {
    let raw = record.get(0)?;
    // Only a `#` in the very first column marks a comment
    if raw.starts_with('#') {
        return None;
    }
    let first = raw.trim();
    if first.is_empty() {
        return None;
    }

    let Some(record_type) = record.get(1) else {
        return Some(Err(InputError::Malformed {
            line,
            reason: format!("expected 2 fields, found {}", record.len()),
        }));
    };

    Some(Ok(RecordRequest {
        name: first.to_string(),
        record_type: record_type.trim().to_string(),
        line,
    }))
}

/// Invalid UTF-8 only spoils the row it is in; everything else is a read failure.
fn classify_csv_error(error: csv::Error) -> InputError {
    if let csv::ErrorKind::Utf8 { pos, err } = error.kind() {
        return InputError::Malformed {
            line: pos.as_ref().map(|p| p.line()).unwrap_or(0),
            reason: format!("invalid UTF-8: {err}"),
        };
    }
    InputError::Read(error)
}
