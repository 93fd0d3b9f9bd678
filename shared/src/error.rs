//! Unified error system for the Boo floor-plan framework
//!
//! This module provides:
//! - [`ErrorCode`]: standardized error codes grouped by domain range
//! - [`AppError`]: rich error type with codes, messages, and details
//! - [`AppResult`]: result alias used across crates
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 4xxx: Persistence errors
//! - 7xxx: Floor / table errors

use http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// Unified error code enum
///
/// Codes are represented as u16 values for efficient serialization and
/// cross-language compatibility (Rust, TypeScript, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Invalid request
    InvalidRequest = 5,

    // ==================== 4xxx: Persistence ====================
    /// Save request was rejected by the server
    SaveFailed = 4001,
    /// Batch position update was rejected as a whole
    BatchRejected = 4002,
    /// Server could not be reached
    TransportUnavailable = 4003,
    /// Response body could not be decoded
    InvalidResponse = 4004,

    // ==================== 7xxx: Floor / Table ====================
    /// Table not found in the layout
    TableNotFound = 7001,
    /// Zone not found in the layout
    ZoneNotFound = 7002,
    /// A drag session is already in progress
    DragInProgress = 7003,
}

impl ErrorCode {
    /// Default human-readable message for this code
    pub fn message(&self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Unknown => "Unknown error",
            Self::ValidationFailed => "Validation failed",
            Self::NotFound => "Resource not found",
            Self::InvalidRequest => "Invalid request",
            Self::SaveFailed => "Save failed",
            Self::BatchRejected => "Batch update rejected",
            Self::TransportUnavailable => "Server unreachable",
            Self::InvalidResponse => "Invalid server response",
            Self::TableNotFound => "Table not found",
            Self::ZoneNotFound => "Zone not found",
            Self::DragInProgress => "Drag already in progress",
        }
    }

    /// HTTP status code this error maps to
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::Success => StatusCode::OK,
            Self::ValidationFailed | Self::InvalidRequest => StatusCode::BAD_REQUEST,
            Self::NotFound | Self::TableNotFound | Self::ZoneNotFound => StatusCode::NOT_FOUND,
            Self::DragInProgress => StatusCode::CONFLICT,
            Self::SaveFailed | Self::BatchRejected => StatusCode::UNPROCESSABLE_ENTITY,
            Self::TransportUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            Self::InvalidResponse | Self::Unknown => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> Self {
        code as u16
    }
}

/// Error returned when converting an unknown numeric code
#[derive(Debug, Clone, Error)]
#[error("invalid error code: {0}")]
pub struct InvalidErrorCode(pub u16);

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Success),
            1 => Ok(Self::Unknown),
            2 => Ok(Self::ValidationFailed),
            3 => Ok(Self::NotFound),
            5 => Ok(Self::InvalidRequest),
            4001 => Ok(Self::SaveFailed),
            4002 => Ok(Self::BatchRejected),
            4003 => Ok(Self::TransportUnavailable),
            4004 => Ok(Self::InvalidResponse),
            7001 => Ok(Self::TableNotFound),
            7002 => Ok(Self::ZoneNotFound),
            7003 => Ok(Self::DragInProgress),
            other => Err(InvalidErrorCode(other)),
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message(), *self as u16)
    }
}

/// Application error with structured error code and details
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the type of error
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details (field-level errors, context, etc.)
    pub details: Option<HashMap<String, Value>>,
}

impl AppError {
    /// Create a new error with the default message for the error code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
            details: None,
        }
    }

    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Add a detail entry to this error
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    // ==================== Convenience constructors ====================

    /// Create a not found error
    pub fn not_found(resource: impl Into<String>) -> Self {
        let r = resource.into();
        Self::with_message(ErrorCode::NotFound, format!("{} not found", r)).with_detail("resource", r)
    }

    /// Create a persistence error (retryable, surfaced to the user)
    pub fn save_failed(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::SaveFailed, msg)
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ValidationFailed, msg)
    }
}

/// Result type used across the framework
pub type AppResult<T> = Result<T, AppError>;
