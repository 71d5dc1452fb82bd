//! Resolution error categorization.

use hickory_resolver::error::{ResolveError, ResolveErrorKind};
use hickory_resolver::proto::op::ResponseCode;

use super::types::FailureKind;

/// Categorizes a `ResolveError` into a `FailureKind`.
///
/// # Arguments
///
/// * `error` - The error returned by the resolver
///
/// # Returns
///
/// The `FailureKind` the failure is counted under.
pub fn categorize_resolve_error(error: &ResolveError) -> FailureKind {
    match error.kind() {
        ResolveErrorKind::Timeout => FailureKind::Timeout,
        ResolveErrorKind::NoRecordsFound { response_code, .. } => {
            categorize_response_code(*response_code)
        }
        _ => {
            // Protocol-level timeouts surface as Proto/Io errors
            let message = error.to_string().to_lowercase();
            if message.contains("timed out") || message.contains("timeout") {
                FailureKind::Timeout
            } else {
                FailureKind::Other
            }
        }
    }
}

/// Maps the response code of an empty answer to a `FailureKind`.
pub fn categorize_response_code(code: ResponseCode) -> FailureKind {
    match code {
        ResponseCode::NoError => FailureKind::NoRecords,
        ResponseCode::NXDomain => FailureKind::NxDomain,
        ResponseCode::FormErr => FailureKind::InvalidQuery,
        _ => FailureKind::ServerFailure,
    }
}
