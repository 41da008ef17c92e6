//! API-specific error types
//!
//! Provides error classification for API operations with retry metadata.

use std::time::Duration;

use gobarber_domain::GoBarberError;
use thiserror::Error;

/// Categories of API errors for retry logic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorCategory {
    /// Missing session or 401/403
    Authentication,
    /// Rate limiting errors (429) - retry with backoff
    RateLimit,
    /// Server errors (5xx) - retryable
    Server,
    /// Client errors (4xx except auth) - non-retryable
    Client,
    /// Network/connection errors - retryable
    Network,
    /// Response body did not match the expected shape
    Payload,
    /// Configuration errors - non-retryable
    Config,
}

/// API operation errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Rate limit exceeded: {0}")]
    RateLimit(String),

    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    #[error("Client error ({status}): {message}")]
    Client { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Malformed response: {0}")]
    Payload(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Timeout after {0:?}")]
    Timeout(Duration),
}

impl ApiError {
    /// Get the error category for this error
    pub fn category(&self) -> ApiErrorCategory {
        match self {
            Self::Auth(_) => ApiErrorCategory::Authentication,
            Self::RateLimit(_) => ApiErrorCategory::RateLimit,
            Self::Server { .. } => ApiErrorCategory::Server,
            Self::Client { .. } => ApiErrorCategory::Client,
            Self::Network(_) | Self::Timeout(_) => ApiErrorCategory::Network,
            Self::Payload(_) => ApiErrorCategory::Payload,
            Self::Config(_) => ApiErrorCategory::Config,
        }
    }

    /// Check if this error should be retried
    pub fn should_retry(&self) -> bool {
        matches!(
            self.category(),
            ApiErrorCategory::RateLimit | ApiErrorCategory::Server | ApiErrorCategory::Network
        )
    }
}

impl From<ApiError> for GoBarberError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Auth(message) => GoBarberError::Auth(message),
            ApiError::RateLimit(message) => GoBarberError::Status { status: 429, message },
            ApiError::Server { status, message } | ApiError::Client { status, message } => {
                GoBarberError::Status { status, message }
            }
            ApiError::Network(message) => GoBarberError::Network(message),
            ApiError::Timeout(timeout) => {
                GoBarberError::Network(format!("request timed out after {timeout:?}"))
            }
            ApiError::Payload(message) => GoBarberError::MalformedPayload(message),
            ApiError::Config(message) => GoBarberError::Config(message),
        }
    }
}
