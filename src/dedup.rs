//! Order-preserving line deduplication.
//!
//! Backs the `dedup-lines` binary. Lines are compared as raw bytes including
//! their terminator, so a last line without a trailing newline is distinct
//! from the same text followed by one.

use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use log::debug;
use tempfile::NamedTempFile;

use crate::error_handling::DedupError;

/// Line counts of one deduplication pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DedupStats {
    pub input_lines: usize,
    pub unique_lines: usize,
}

/// Copies `input` to `output`, dropping every line already seen.
///
/// The first occurrence of each line is kept, in its original position.
pub fn deduplicate_lines<R, W>(mut input: R, output: &mut W) -> io::Result<DedupStats>
where
    R: BufRead,
    W: Write,
{
    let mut seen: HashSet<Vec<u8>> = HashSet::new();
    let mut stats = DedupStats::default();
    let mut line = Vec::new();

    loop {
        line.clear();
        if input.read_until(b'\n', &mut line)? == 0 {
            break;
        }
        stats.input_lines += 1;
        if !seen.contains(&line) {
            output.write_all(&line)?;
            seen.insert(line.clone());
            stats.unique_lines += 1;
        }
    }

    output.flush()?;
    Ok(stats)
}

/// Deduplicates the file at `input` into `output`.
pub fn dedup_to_path(input: &Path, output: &Path) -> Result<DedupStats, DedupError> {
    let reader = BufReader::new(File::open(input)?);
    let mut writer = BufWriter::new(File::create(output)?);
    let stats = deduplicate_lines(reader, &mut writer)?;
    debug!(
        "Deduplicated {} into {}: {:?}",
        input.display(),
        output.display(),
        stats
    );
    Ok(stats)
}

/// Deduplicates the file at `path` in place.
///
/// Output goes to a temporary file next to `path`, which then replaces it.
/// The original file's permissions are kept.
pub fn dedup_in_place(path: &Path) -> Result<DedupStats, DedupError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let permissions = std::fs::metadata(path)?.permissions();

    let reader = BufReader::new(File::open(path)?);
    let mut temp = NamedTempFile::new_in(dir)?;
    let stats = {
        let mut writer = BufWriter::new(temp.as_file_mut());
        deduplicate_lines(reader, &mut writer)?
    };

    let replaced = temp.persist(path)?;
    replaced.set_permissions(permissions)?;
    debug!("Deduplicated {} in place: {:?}", path.display(), stats);
    Ok(stats)
}
