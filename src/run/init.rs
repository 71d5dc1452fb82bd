//! Run setup: output artifacts and the run header.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use log::info;

use crate::config::HEADER_RULE;
use crate::report::{ArtifactPaths, Sinks};

/// Buffered file sinks, as opened for a real run.
pub type FileSinks = Sinks<BufWriter<File>>;

/// Creates the output directory if needed and opens the five artifacts.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or any artifact
/// cannot be opened for writing.
pub fn open_artifacts(
    output_dir: &Path,
    started: &DateTime<Local>,
) -> Result<(ArtifactPaths, FileSinks)> {
    std::fs::create_dir_all(output_dir).with_context(|| {
        format!("Failed to create output directory {}", output_dir.display())
    })?;

    let paths = ArtifactPaths::for_run(output_dir, started);
    let sinks = Sinks {
        run_log: create(&paths.run_log)?,
        identical: create(&paths.identical)?,
        problems: create(&paths.problems)?,
        errors: create(&paths.errors)?,
        exceptions: create(&paths.exceptions)?,
    };
    info!("Writing run output to {}", output_dir.display());
    Ok((paths, sinks))
}

fn create(path: &Path) -> Result<BufWriter<File>> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create output file {}", path.display()))?;
    Ok(BufWriter::new(file))
}

/// The lines printed when a run starts, also mirrored into the run log.
pub fn header_lines(first_label: &str, second_label: &str, paths: &ArtifactPaths) -> Vec<String> {
    vec![
        format!("Starting DNS compare between {first_label} versus {second_label}"),
        format!("Log file: {}", paths.run_log.display()),
        format!("Errors logged in: {}", paths.errors.display()),
        format!("Exceptions logged in: {}", paths.exceptions.display()),
        format!("Problem items logged in: {}", paths.problems.display()),
        format!("Identical items logged in: {}", paths.identical.display()),
        HEADER_RULE.to_string(),
    ]
}
