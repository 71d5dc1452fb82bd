//! Record lookups against a single nameserver.
//!
//! `RecordResolver` is the seam between the comparison run and DNS: the run
//! only ever asks "what does this endpoint answer for (name, type)?" and gets
//! a `ResolutionOutcome` back. `EndpointResolver` is the hickory-backed
//! implementation.

use std::str::FromStr;

use hickory_resolver::proto::rr::{Name, RecordType};
use hickory_resolver::TokioAsyncResolver;
use log::{debug, warn};

use super::endpoint::Endpoint;
use super::outcome::ResolutionOutcome;
use crate::error_handling::{categorize_resolve_error, FailureKind};
use crate::input::RecordRequest;

/// Looks up records on one nameserver.
///
/// Implementations never fail outright: any error is reported as
/// `ResolutionOutcome::Failed`.
#[allow(async_fn_in_trait)] // The run drives resolvers on a single task; no Send bound needed
pub trait RecordResolver {
    /// Name used for this resolver in reports
    fn label(&self) -> &str;

    /// Resolves `request` against this resolver's nameserver.
    async fn resolve(&self, request: &RecordRequest) -> ResolutionOutcome;
}

/// A resolver bound to exactly one nameserver.
pub struct EndpointResolver {
    endpoint: Endpoint,
    resolver: TokioAsyncResolver,
}

impl EndpointResolver {
    /// Wraps a resolver built by `initialization::init_resolver` for `endpoint`.
    pub fn new(endpoint: Endpoint, resolver: TokioAsyncResolver) -> Self {
        Self { endpoint, resolver }
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }
}

impl RecordResolver for EndpointResolver {
    fn label(&self) -> &str {
        self.endpoint.label()
    }

    async fn resolve(&self, request: &RecordRequest) -> ResolutionOutcome {
        let (name, record_type) = match build_query(request) {
            Ok(query) => query,
            Err(outcome) => return outcome,
        };

        match self.resolver.lookup(name, record_type).await {
            Ok(lookup) => {
                // Only the requested type counts; CNAMEs followed on the way are dropped
                let answers: Vec<String> = lookup
                    .record_iter()
                    .filter(|record| record.record_type() == record_type)
                    .filter_map(|record| record.data())
                    .map(|rdata| rdata.to_string())
                    .collect();
                debug!(
                    "{} answered {} {} with {} record(s)",
                    self.endpoint,
                    request.name,
                    request.record_type,
                    answers.len()
                );
                if answers.is_empty() {
                    return ResolutionOutcome::failed(
                        FailureKind::NoRecords,
                        format!("no {record_type} records in answer for {}", request.name),
                    );
                }
                ResolutionOutcome::from_answers(answers)
            }
            Err(e) => {
                let kind = categorize_resolve_error(&e);
                if kind == FailureKind::Timeout {
                    warn!(
                        "Lookup of {} {} on {} timed out: {e}",
                        request.name, request.record_type, self.endpoint
                    );
                } else {
                    debug!(
                        "Lookup of {} {} on {} failed: {e}",
                        request.name, request.record_type, self.endpoint
                    );
                }
                ResolutionOutcome::failed(kind, e.to_string())
            }
        }
    }
}

/// Turns a request into an absolute name and a record type.
///
/// Record types are matched case-insensitively. Names are made absolute so no
/// search domain is ever appended.
fn build_query(request: &RecordRequest) -> Result<(Name, RecordType), ResolutionOutcome> {
    let record_type = RecordType::from_str(&request.record_type.to_uppercase()).map_err(|e| {
        ResolutionOutcome::failed(
            FailureKind::InvalidQuery,
            format!("unknown record type {:?}: {e}", request.record_type),
        )
    })?;
    let mut name = Name::from_str(&request.name).map_err(|e| {
        ResolutionOutcome::failed(
            FailureKind::InvalidQuery,
            format!("invalid name {:?}: {e}", request.name),
        )
    })?;
    name.set_fqdn(true);
    Ok((name, record_type))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_query_accepts_lowercase_type() {
        let (name, record_type) = build_query(&RecordRequest::new("example.com", "mx")).unwrap();
        assert_eq!(record_type, RecordType::MX);
        assert!(name.is_fqdn());
        assert_eq!(name.to_string(), "example.com.");
    }

    #[test]
    fn test_build_query_keeps_trailing_dot() {
        let (name, _) = build_query(&RecordRequest::new("example.com.", "A")).unwrap();
        assert_eq!(name.to_string(), "example.com.");
    }

    #[test]
    fn test_build_query_unknown_type() {
        let outcome = build_query(&RecordRequest::new("example.com", "NOTATYPE")).unwrap_err();
        match outcome {
            ResolutionOutcome::Failed { kind, reason } => {
                assert_eq!(kind, FailureKind::InvalidQuery);
                assert!(reason.contains("NOTATYPE"));
            }
            other => panic!("expected failure, got {other:?}"),
        }
    }

    #[test]
    fn test_build_query_invalid_name() {
        let long_label = "a".repeat(70);
        let outcome =
            build_query(&RecordRequest::new(format!("{long_label}.com"), "A")).unwrap_err();
        assert!(outcome.is_failure());
    }
}
