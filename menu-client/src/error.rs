//! Client error types

use shared::ValidationError;
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Authentication required
    #[error("Authentication required: {0}")]
    Unauthorized(String),

    /// Permission denied
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Server rejected the request
    #[error("Validation error: {0}")]
    Validation(String),

    /// Server error with an `{"error": ...}` body
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Form input failed local checks; nothing was sent
    #[error("Invalid input: {0}")]
    Invalid(#[from] ValidationError),

    /// No restaurant is attached to the session cookie
    #[error("No restaurant session; create a restaurant first")]
    NoSession,

    /// The restaurant is already created and can no longer change
    #[error("Restaurant already created")]
    AlreadyCreated,

    /// Another submission is still in flight
    #[error("A submission is already in progress")]
    Busy,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// HTTP status the server answered with, if the error came from a response
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            ClientError::Unauthorized(_) => Some(401),
            ClientError::Forbidden(_) => Some(403),
            ClientError::NotFound(_) => Some(404),
            ClientError::Validation(_) => Some(400),
            ClientError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Whether the server reported that the session holds no restaurant
    pub fn is_missing_session(&self) -> bool {
        matches!(self, ClientError::NoSession) || matches!(self.status(), Some(401) | Some(404))
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
