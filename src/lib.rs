//! dns_compare library: compare DNS answers between two nameservers
//!
//! Reads a CSV list of `fqdn,type` records, asks both nameservers for every
//! record, and reports which records they answer identically and which they
//! don't. A run writes five files: a run log, the identical records, the
//! mismatched records as re-feedable CSV, the mismatch details, and the
//! lookup failures.
//!
//! # Example
//!
//! ```no_run
//! use dns_compare::{run_compare, Config};
//! use std::path::PathBuf;
//!
//! # #[tokio::main]
//! # async fn main() -> anyhow::Result<()> {
//! let config = Config {
//!     endpoint_a: "192.0.2.53".to_string(),
//!     endpoint_b: "198.51.100.53".to_string(),
//!     records: PathBuf::from("records.csv"),
//!     ..Default::default()
//! };
//!
//! let report = run_compare(config).await?;
//! println!(
//!     "{} records, {} mismatched",
//!     report.summary.records_tested, report.summary.mismatches
//! );
//! # Ok(())
//! # }
//! ```
//!
//! The crate also ships `dedup-lines`, an order-preserving line
//! deduplicator (see [`dedup`]).

mod app;
pub mod compare;
pub mod config;
pub mod dedup;
pub mod dns;
pub mod error_handling;
pub mod initialization;
pub mod input;
pub mod report;
mod run;

// Re-export public API
pub use app::{Progress, RunSummary};
pub use compare::{compare, ComparisonOutcome};
pub use config::{Config, LogFormat, LogLevel, Opt};
pub use dns::{Endpoint, EndpointResolver, RecordResolver, ResolutionOutcome};
pub use error_handling::FailureKind;
pub use input::{RecordReader, RecordRequest};
pub use run::{run_compare, run_compare_with, ComparisonReport};
