//! Configuration constants.
//!
//! Defaults used by both the CLI options and the library `Config`.

// Resolver behaviour
/// DNS query timeout in seconds, per attempt
pub const DNS_TIMEOUT_SECS: u64 = 5;
/// Number of attempts the resolver makes before reporting a failure
pub const DNS_ATTEMPTS: usize = 2;
/// Port used when an endpoint is given as a bare IP address
pub const DEFAULT_DNS_PORT: u16 = 53;

// Output artifacts
/// Directory the run artifacts are written to
pub const DEFAULT_OUTPUT_DIR: &str = "output";
/// `chrono` format used to prefix artifact file names
pub const RUN_TIMESTAMP_FORMAT: &str = "%Y%m%d-%H%M%S";
pub const RUN_LOG_SUFFIX: &str = "compare-dns.log";
pub const IDENTICAL_SUFFIX: &str = "identical.txt";
pub const PROBLEMS_SUFFIX: &str = "problems.csv";
pub const ERRORS_SUFFIX: &str = "compare-dns.errors";
pub const EXCEPTIONS_SUFFIX: &str = "compare-dns.exceptions";

// Report formatting
/// Width the endpoint label is right-aligned to in answer lines
pub const ENDPOINT_LABEL_WIDTH: usize = 16;
/// Prefix of the placeholder answer that stands in for a failed lookup
pub const FAILURE_MARKER_PREFIX: &str = "bad response";
/// Separator line closing the run header
pub const HEADER_RULE: &str = "-----------------------------";

// Progress
/// A running count is shown every this many processed records
pub const PROGRESS_INTERVAL: usize = 100;
/// Glyphs cycled by the progress spinner
pub const SPINNER_GLYPHS: &str = "|/-\\";
