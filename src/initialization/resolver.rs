//! DNS resolver initialization.
//!
//! Each compared nameserver gets its own resolver that talks to that server
//! and nothing else.

use std::time::Duration;

use hickory_resolver::config::{NameServerConfigGroup, ResolverConfig, ResolverOpts};
use hickory_resolver::TokioAsyncResolver;
use log::debug;

use crate::dns::{Endpoint, EndpointResolver};

/// Builds a resolver bound to `endpoint` only.
///
/// The system configuration (`/etc/resolv.conf`, hosts file, search domains)
/// is never consulted, and answers are not cached so every record is really
/// asked of the server.
///
/// # Arguments
///
/// * `endpoint` - The nameserver to query (UDP, falling back to TCP)
/// * `timeout_seconds` - Per-attempt timeout
/// * `attempts` - Attempts before a lookup is reported as failed
pub fn init_resolver(
    endpoint: &Endpoint,
    timeout_seconds: u64,
    attempts: usize,
) -> TokioAsyncResolver {
    let address = endpoint.address();
    let name_servers =
        NameServerConfigGroup::from_ips_clear(&[address.ip()], address.port(), true);
    let config = ResolverConfig::from_parts(None, Vec::new(), name_servers);

    let mut opts = ResolverOpts::default();
    opts.timeout = Duration::from_secs(timeout_seconds);
    opts.attempts = attempts;
    // Names are always made absolute before lookup; ndots 0 keeps it that way
    opts.ndots = 0;
    opts.cache_size = 0;
    opts.use_hosts_file = false;

    debug!(
        "Resolver for {} at {} (timeout {}s, {} attempt(s))",
        endpoint, address, timeout_seconds, attempts
    );
    TokioAsyncResolver::tokio(config, opts)
}

/// Builds the `EndpointResolver` for `endpoint`.
pub fn init_endpoint_resolver(
    endpoint: Endpoint,
    timeout_seconds: u64,
    attempts: usize,
) -> EndpointResolver {
    let resolver = init_resolver(&endpoint, timeout_seconds, attempts);
    EndpointResolver::new(endpoint, resolver)
}
