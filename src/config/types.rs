//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::{DEFAULT_OUTPUT_DIR, DNS_ATTEMPTS, DNS_TIMEOUT_SECS};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Command-line options for `compare-dns`.
///
/// ```bash
/// compare-dns 192.0.2.53 198.51.100.53 records.csv
/// compare-dns 192.0.2.53 198.51.100.53:5353 records.csv --output-dir ./runs
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "compare-dns",
    version,
    about = "Compares DNS answers from two nameservers for a list of records."
)]
pub struct Opt {
    /// First nameserver (IP or IP:port)
    pub endpoint_a: String,

    /// Second nameserver (IP or IP:port)
    pub endpoint_b: String,

    /// CSV file of `fqdn,type` rows
    #[arg(value_parser)]
    pub records: PathBuf,

    /// Directory the timestamped output files are written to
    #[arg(long, value_parser, default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Per-attempt DNS timeout in seconds
    #[arg(long, default_value_t = DNS_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// Resolver attempts per lookup before it counts as a failure
    #[arg(long, default_value_t = DNS_ATTEMPTS)]
    pub attempts: usize,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Disable the progress spinner
    #[arg(long)]
    pub no_progress: bool,
}

/// Library configuration (no CLI dependencies).
///
/// # Examples
///
/// ```no_run
/// use dns_compare::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     endpoint_a: "192.0.2.53".to_string(),
///     endpoint_b: "198.51.100.53".to_string(),
///     records: PathBuf::from("records.csv"),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// First nameserver address, as given by the user
    pub endpoint_a: String,

    /// Second nameserver address, as given by the user
    pub endpoint_b: String,

    /// CSV file of records to compare
    pub records: PathBuf,

    /// Directory for the run artifacts
    pub output_dir: PathBuf,

    /// Per-attempt DNS timeout in seconds
    pub timeout_seconds: u64,

    /// Resolver attempts per lookup
    pub attempts: usize,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,

    /// Show the progress spinner on the console
    pub show_progress: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint_a: String::new(),
            endpoint_b: String::new(),
            records: PathBuf::from("records.csv"),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            timeout_seconds: DNS_TIMEOUT_SECS,
            attempts: DNS_ATTEMPTS,
            log_level: LogLevel::Warn,
            log_format: LogFormat::Plain,
            show_progress: true,
        }
    }
}

impl From<Opt> for Config {
    fn from(opt: Opt) -> Self {
        Self {
            endpoint_a: opt.endpoint_a,
            endpoint_b: opt.endpoint_b,
            records: opt.records,
            output_dir: opt.output_dir,
            timeout_seconds: opt.timeout_seconds,
            attempts: opt.attempts,
            log_level: opt.log_level,
            log_format: opt.log_format,
            show_progress: !opt.no_progress,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.output_dir, PathBuf::from("output"));
        assert_eq!(config.timeout_seconds, 5);
        assert_eq!(config.attempts, 2);
        assert!(config.show_progress);
    }

    #[test]
    fn test_opt_parses_three_positionals() {
        let opt = Opt::try_parse_from(["compare-dns", "192.0.2.1", "192.0.2.2", "records.csv"])
            .expect("three positionals should parse");
        let config = Config::from(opt);
        assert_eq!(config.endpoint_a, "192.0.2.1");
        assert_eq!(config.endpoint_b, "192.0.2.2");
        assert_eq!(config.records, PathBuf::from("records.csv"));
        assert_eq!(config.output_dir, PathBuf::from("output"));
        assert!(config.show_progress);
    }

    #[test]
    fn test_opt_options_do_not_change_arity() {
        let opt = Opt::try_parse_from([
            "compare-dns",
            "192.0.2.1",
            "192.0.2.2:5353",
            "records.csv",
            "--output-dir",
            "/tmp/runs",
            "--timeout-seconds",
            "1",
            "--no-progress",
        ])
        .expect("options should parse");
        let config = Config::from(opt);
        assert_eq!(config.endpoint_b, "192.0.2.2:5353");
        assert_eq!(config.output_dir, PathBuf::from("/tmp/runs"));
        assert_eq!(config.timeout_seconds, 1);
        assert!(!config.show_progress);
    }

    #[test]
    fn test_opt_rejects_wrong_arity() {
        assert!(Opt::try_parse_from(["compare-dns", "192.0.2.1", "192.0.2.2"]).is_err());
        assert!(Opt::try_parse_from([
            "compare-dns",
            "192.0.2.1",
            "192.0.2.2",
            "records.csv",
            "extra"
        ])
        .is_err());
    }
}
