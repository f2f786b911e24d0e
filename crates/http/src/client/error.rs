//! Client error types

use coursedesk_core::ApiError;
use thiserror::Error;

/// Client error types
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network or request error
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server returned an error status without a readable envelope
    #[error("Server error {status}: {message}")]
    ServerError { status: u16, message: String },

    /// Login rejected at the HTTP level
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Unknown student or route
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Bad request
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Configuration(String),
}

impl ClientError {
    /// Create error from HTTP status code
    pub fn from_status(status: reqwest::StatusCode, message: String) -> Self {
        match status.as_u16() {
            400 => Self::BadRequest(message),
            401 => Self::AuthenticationFailed(message),
            404 => Self::NotFound(message),
            _ => Self::ServerError {
                status: status.as_u16(),
                message,
            },
        }
    }

    /// HTTP status behind this error, when there was a response
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Request(e) => e.status().map(|s| s.as_u16()),
            Self::ServerError { status, .. } => Some(*status),
            Self::AuthenticationFailed(_) => Some(401),
            Self::NotFound(_) => Some(404),
            Self::BadRequest(_) => Some(400),
            Self::Serialization(_) | Self::Configuration(_) => None,
        }
    }
}

impl From<ClientError> for ApiError {
    fn from(err: ClientError) -> Self {
        let status = err.status();
        match err {
            ClientError::Serialization(e) => ApiError::Decode(e.to_string()),
            ClientError::ServerError { message, .. }
            | ClientError::AuthenticationFailed(message)
            | ClientError::NotFound(message)
            | ClientError::BadRequest(message) => ApiError::Status {
                status: status.unwrap_or_default(),
                message,
            },
            other => ApiError::Transport(other.to_string()),
        }
    }
}
