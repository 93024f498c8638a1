//! Advisory service error types.

use std::time::Duration;

use thiserror::Error;

/// Errors that can occur when calling the advisory service.
#[derive(Debug, Error)]
pub enum AdvisoryError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Service returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the service.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// The service returned a 429 Too Many Requests response.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds to wait before retrying.
        retry_after_secs: u64,
    },

    /// A single attempt exceeded the configured timeout.
    #[error("advisory request timed out after {}s", after.as_secs())]
    Timeout { after: Duration },

    /// Failed to parse or encode an advisory payload.
    #[error("parse error: {0}")]
    Parse(String),

    /// Endpoint or API key missing from configuration.
    #[error("advisory service is not configured (set advisory.endpoint and advisory.api_key)")]
    NotConfigured,
}

impl AdvisoryError {
    /// Whether a later attempt may succeed.
    ///
    /// Rate limits, timeouts, connection failures and 5xx responses are
    /// transient. Client errors and malformed payloads are not.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::RateLimited { .. } | Self::Timeout { .. } => true,
            Self::Http(error) => error.is_connect() || error.is_timeout() || error.is_request(),
            Self::Api { status, .. } => *status >= 500,
            Self::Parse(_) | Self::NotConfigured => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transient_errors_are_retryable() {
        assert!(AdvisoryError::RateLimited { retry_after_secs: 1 }.is_retryable());
        assert!(
            AdvisoryError::Timeout {
                after: Duration::from_secs(1)
            }
            .is_retryable()
        );
        assert!(
            AdvisoryError::Api {
                status: 503,
                message: String::new()
            }
            .is_retryable()
        );
    }

    #[test]
    fn permanent_errors_are_not_retryable() {
        assert!(
            !AdvisoryError::Api {
                status: 401,
                message: "bad key".to_string()
            }
            .is_retryable()
        );
        assert!(!AdvisoryError::Parse("eof".to_string()).is_retryable());
        assert!(!AdvisoryError::NotConfigured.is_retryable());
    }
}
