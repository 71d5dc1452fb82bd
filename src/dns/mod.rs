//! DNS resolution against the two nameservers being compared.
//!
//! This module provides:
//! - `Endpoint`: a nameserver address given on the command line
//! - `ResolutionOutcome`: the answers (or failure) from one nameserver
//! - `RecordResolver`: the lookup seam, implemented by `EndpointResolver`
//! - `resolve_pair`: one request against both nameservers, in order

mod endpoint;
mod outcome;
mod resolution;

// Re-export public API
pub use endpoint::Endpoint;
pub use outcome::{failure_marker, ResolutionOutcome};
pub use resolution::{EndpointResolver, RecordResolver};

use crate::input::RecordRequest;

/// Resolves `request` on `first`, then on `second`.
///
/// Both lookups always happen; a failure on the first does not skip the second.
pub async fn resolve_pair<A, B>(
    request: &RecordRequest,
    first: &A,
    second: &B,
) -> (ResolutionOutcome, ResolutionOutcome)
where
    A: RecordResolver,
    B: RecordResolver,
{
    let first_outcome = first.resolve(request).await;
    let second_outcome = second.resolve(request).await;
    (first_outcome, second_outcome)
}
