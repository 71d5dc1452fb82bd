//! `dedup-lines` binary: remove duplicate lines from a file, preserving order.

use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;

use dns_compare::dedup::{dedup_in_place, dedup_to_path, deduplicate_lines, DedupStats};
use dns_compare::error_handling::DedupError;

/// Command-line options for `dedup-lines`.
///
/// Without `--output` or `--inplace` the result is written to stdout.
#[derive(Debug, Parser)]
#[command(
    name = "dedup-lines",
    version,
    about = "Remove duplicate lines from a CSV file, preserving order."
)]
struct Opt {
    /// Path to input CSV file
    input_file: PathBuf,

    /// Path to write output CSV (does not modify input)
    #[arg(short, long = "output", value_name = "OUTPUT_FILE", conflicts_with = "inplace")]
    output_file: Option<PathBuf>,

    /// Rewrite the input file in place (uses temp file)
    #[arg(long)]
    inplace: bool,

    /// Print input and output line counts to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let opt = match Opt::try_parse() {
        Ok(opt) => opt,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            // Usage errors go to stderr, exit status 1
            let _ = e.print();
            process::exit(1);
        }
    };

    let stats = if opt.inplace {
        match dedup_in_place(&opt.input_file) {
            Ok(stats) => stats,
            Err(e @ DedupError::Replace(_)) => {
                eprintln!("{e}");
                process::exit(1);
            }
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("Failed to deduplicate {}", opt.input_file.display()))
            }
        }
    } else if let Some(output) = &opt.output_file {
        dedup_to_path(&opt.input_file, output)
            .with_context(|| format!("Failed to write {}", output.display()))?
    } else {
        let file = std::fs::File::open(&opt.input_file)
            .with_context(|| format!("Failed to open {}", opt.input_file.display()))?;
        let stdout = io::stdout();
        let mut out = stdout.lock();
        deduplicate_lines(BufReader::new(file), &mut out).context("Failed to write output")?
    };

    if opt.verbose {
        print_counts(&stats);
    }
    Ok(())
}

fn print_counts(stats: &DedupStats) {
    eprintln!("Input lines: {}", stats.input_lines);
    eprintln!("Unique output lines: {}", stats.unique_lines);
}
