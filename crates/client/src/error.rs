//! Errors for the backend API boundary.
//!
//! Every failure is surfaced to the caller at the call site - there is no
//! retry and no global handler. A 401/403 maps to a typed error and nothing
//! more; session teardown is the caller's decision.

use thiserror::Error;

/// Errors that can occur when talking to the book platform backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP transport failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body was not the expected JSON shape.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Request lacked a valid bearer token.
    #[error("Unauthorized")]
    Unauthorized,

    /// Token was valid but the role lacks the capability.
    #[error("Forbidden")]
    Forbidden,

    /// Any other non-success status.
    #[error("Unexpected status {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Truncated response body for diagnostics.
        body: String,
    },

    /// A response deserialized but carried an invalid field (e.g., a
    /// malformed email on an order record).
    #[error("Invalid record: {0}")]
    Data(String),
}

impl ApiError {
    /// Whether the failure is an auth failure (401 or 403).
    #[must_use]
    pub const fn is_auth_failure(&self) -> bool {
        matches!(self, Self::Unauthorized | Self::Forbidden)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = ApiError::NotFound("book/64fa12".to_owned());
        assert_eq!(err.to_string(), "Not found: book/64fa12");

        let err = ApiError::Status {
            status: 502,
            body: "bad gateway".to_owned(),
        };
        assert_eq!(err.to_string(), "Unexpected status 502: bad gateway");
    }

    #[test]
    fn test_auth_failure_classification() {
        assert!(ApiError::Unauthorized.is_auth_failure());
        assert!(ApiError::Forbidden.is_auth_failure());
        assert!(!ApiError::NotFound(String::new()).is_auth_failure());
    }
}
