//! Error categorization.

use super::types::FailureKind;

/// Categorizes a `reqwest::Error` into a `FailureKind`.
///
/// Status codes are checked first, then the transport-level error flags.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> FailureKind {
    if let Some(status) = error.status() {
        match status.as_u16() {
            404 => return FailureKind::NotFound,
            _ if status.is_server_error() => return FailureKind::ServerError,
            _ if status.is_client_error() => return FailureKind::OtherStatus,
            _ => {}
        }
    }

    if error.is_timeout() {
        FailureKind::Timeout
    } else if error.is_connect() {
        FailureKind::Connect
    } else if error.is_decode() || error.is_body() {
        FailureKind::Decode
    } else {
        FailureKind::Other
    }
}
