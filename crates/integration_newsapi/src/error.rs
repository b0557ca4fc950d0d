//! NewsAPI error types

use thiserror::Error;

/// Errors that can occur while querying NewsAPI
#[derive(Debug, Error)]
pub enum NewsError {
    /// Connection to the news service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request timeout
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },

    /// API key is missing, invalid or disabled
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// The provider answered with `status: "error"`
    #[error("NewsAPI error {code}: {message}")]
    ApiError {
        /// Provider error code, e.g. "apiKeyInvalid"
        code: String,
        /// Human-readable provider message
        message: String,
    },

    /// HTTP request failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Failed to parse response
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

impl NewsError {
    pub(crate) fn from_reqwest(e: &reqwest::Error, timeout_secs: u64) -> Self {
        if e.is_timeout() {
            Self::Timeout { timeout_secs }
        } else if e.is_connect() {
            Self::ConnectionFailed(e.to_string())
        } else {
            Self::RequestFailed(e.to_string())
        }
    }
}
