//! Error types used throughout the client

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Business error reported by a remote mailing-list service.
///
/// Produced when a well-formed response carries a failure discriminator.
/// The `code` is service-defined and is surfaced as-is; callers branch on
/// it when they need to tell e.g. "already subscribed" from "list not
/// found".
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("{service} error {code}: {message}")]
pub struct ServiceError {
    pub service: String,
    pub message: String,
    pub code: i64,
}

impl ServiceError {
    /// Create a service error
    pub fn new(service: impl Into<String>, message: impl Into<String>, code: i64) -> Self {
        Self { service: service.into(), message: message.into(), code }
    }
}

/// Main error type for Mailvan
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "details")]
pub enum MailvanError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Remote service error: {0}")]
    Service(#[from] ServiceError),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl MailvanError {
    /// Whether the error came from the transport rather than the service.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Network(_) | Self::Auth(_))
    }

    /// The remote business error, if this is one.
    pub fn service_error(&self) -> Option<&ServiceError> {
        match self {
            Self::Service(err) => Some(err),
            _ => None,
        }
    }
}

/// Result type alias for Mailvan operations
pub type Result<T> = std::result::Result<T, MailvanError>;
