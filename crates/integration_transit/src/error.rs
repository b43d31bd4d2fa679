//! Transit error types

use thiserror::Error;

/// Errors that can occur during transit directions requests
#[derive(Debug, Error)]
pub enum TransitError {
    /// Connection to the directions service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// The directions service answered with a non-success status
    #[error("Request failed with HTTP {status}: {body}")]
    RequestFailed {
        /// HTTP status code
        status: u16,
        /// Response body, possibly truncated
        body: String,
    },

    /// The directions service reported a logic error in its payload
    #[error("Provider error {code}: {message}")]
    ProviderError {
        /// Provider error code
        code: String,
        /// Provider error message
        message: String,
    },

    /// Failed to parse response from the directions service
    #[error("Parse error: {0}")]
    ParseError(String),

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

impl TransitError {
    /// Returns true if this error is retryable
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        match self {
            Self::ConnectionFailed(_) | Self::Timeout { .. } => true,
            Self::RequestFailed { status, .. } => *status >= 500 || *status == 429,
            Self::ProviderError { .. } | Self::ParseError(_) | Self::ConfigurationError(_) => {
                false
            },
        }
    }
}
