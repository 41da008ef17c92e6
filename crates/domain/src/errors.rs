//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::impl_label_conversions;

/// Main error type for GoBarber
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "details")]
pub enum GoBarberError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request failed with status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Coarse classification of a [`GoBarberError`], used for inline notices
/// and log fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Connection refused, DNS failure, timeout
    Network,
    /// The server answered with a non-2xx status
    Status,
    /// The body could not be decoded into the expected shape
    MalformedPayload,
    /// Missing or rejected session
    Session,
    /// Invalid local configuration
    Config,
    /// Anything else
    Internal,
}

impl_label_conversions!(ErrorKind {
    Network => "network",
    Status => "status",
    MalformedPayload => "malformed_payload",
    Session => "session",
    Config => "config",
    Internal => "internal",
});

impl GoBarberError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Network(_) => ErrorKind::Network,
            Self::Status { .. } => ErrorKind::Status,
            Self::MalformedPayload(_) => ErrorKind::MalformedPayload,
            Self::Auth(_) => ErrorKind::Session,
            Self::Config(_) => ErrorKind::Config,
            Self::InvalidInput(_) | Self::Internal(_) => ErrorKind::Internal,
        }
    }
}

/// Result type alias for GoBarber operations
pub type Result<T> = std::result::Result<T, GoBarberError>;
