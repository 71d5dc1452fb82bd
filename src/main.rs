//! `compare-dns` binary.
//!
//! Thin wrapper around the `dns_compare` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Exit status
//!
//! All comparison logic lives in the library crate.

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use std::process;

use dns_compare::initialization::init_logger_with;
use dns_compare::{run_compare, Config, Opt};

#[tokio::main]
async fn main() -> Result<()> {
    let opt = parse_args();
    let config = Config::from(opt);

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    // Mismatches are a result, not a failure: any completed run exits 0
    if let Err(e) = run_compare(config).await {
        eprintln!("compare-dns error: {:#}", e);
        process::exit(1);
    }
    Ok(())
}

/// Parses the command line.
///
/// Any problem with the arguments prints the usage line to stdout and exits
/// with status 1; `--help` and `--version` exit normally.
fn parse_args() -> Opt {
    match Opt::try_parse() {
        Ok(opt) => opt,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            ErrorKind::MissingRequiredArgument | ErrorKind::UnknownArgument => {
                println!("{}", Opt::command().render_usage());
                process::exit(1);
            }
            _ => {
                let _ = e.print();
                println!("{}", Opt::command().render_usage());
                process::exit(1);
            }
        },
    }
}
