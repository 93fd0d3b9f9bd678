//! Client error types

use serde::Deserialize;
use shared::{AppError, ErrorCode};
use thiserror::Error;

/// Error response body returned by the server on non-success statuses
#[derive(Debug, Deserialize)]
pub struct ApiErrorResponse {
    pub code: u16,
    pub message: String,
    #[serde(default)]
    pub details: Option<serde_json::Value>,
}

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Structured API error returned by the server
    #[error("API error {code}: {message}")]
    Api {
        code: u16,
        message: String,
        details: Option<serde_json::Value>,
    },

    /// Authentication required
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Permission denied
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

impl From<ClientError> for AppError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Http(e) => {
                AppError::with_message(ErrorCode::TransportUnavailable, e.to_string())
            }
            ClientError::InvalidResponse(msg) => {
                AppError::with_message(ErrorCode::InvalidResponse, msg)
            }
            ClientError::Serialization(e) => {
                AppError::with_message(ErrorCode::InvalidResponse, e.to_string())
            }
            ClientError::Api {
                code,
                message,
                details,
            } => {
                // Prefer the server's own code when it is one of ours.
                let code = ErrorCode::try_from(code).unwrap_or(ErrorCode::SaveFailed);
                let mut app = AppError::with_message(code, message);
                if let Some(details) = details {
                    app = app.with_detail("server", details);
                }
                app
            }
            ClientError::NotFound(msg) => AppError::with_message(ErrorCode::NotFound, msg),
            ClientError::Validation(msg) => {
                AppError::with_message(ErrorCode::ValidationFailed, msg)
            }
            ClientError::Unauthorized(msg)
            | ClientError::Forbidden(msg)
            | ClientError::Internal(msg) => AppError::with_message(ErrorCode::SaveFailed, msg),
        }
    }
}
