//! Places error types

use thiserror::Error;

/// Errors that can occur during place search and recommendation lookups
#[derive(Debug, Error)]
pub enum PlacesError {
    /// Connection to the service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// The service answered with a non-success status
    #[error("Request failed with HTTP {status}: {body}")]
    RequestFailed {
        /// HTTP status code
        status: u16,
        /// Response body, possibly truncated
        body: String,
    },

    /// Failed to parse the service response
    #[error("Parse error: {0}")]
    ParseError(String),

    /// The request itself was unusable
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Request timeout
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },
}

impl PlacesError {
    /// Returns true if this error is retryable
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        match self {
            Self::ConnectionFailed(_) | Self::Timeout { .. } => true,
            Self::RequestFailed { status, .. } => *status >= 500 || *status == 429,
            Self::ParseError(_) | Self::InvalidRequest(_) | Self::ConfigurationError(_) => false,
        }
    }

    /// Map a reqwest send error, distinguishing timeouts
    pub(crate) fn from_send(err: &reqwest::Error, timeout_secs: u64) -> Self {
        if err.is_timeout() {
            Self::Timeout { timeout_secs }
        } else {
            Self::ConnectionFailed(err.to_string())
        }
    }
}
