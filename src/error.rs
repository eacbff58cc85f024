//! Error types for the climate-api application.
//!
//! This module defines the error enum covering every failure the server can
//! hit, from configuration problems at startup to store errors while a
//! request is being served.

use axum::http::StatusCode;
use thiserror::Error;

/// The main error type for climate-api operations.
#[derive(Error, Debug)]
pub enum ClimateError {
    /// SQLite store errors
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Data not found errors
    #[error("Data not found: {message}")]
    DataNotFound { message: String },

    /// Stored dates that are not ISO `YYYY-MM-DD`
    #[error("Date parse error: {0}")]
    DateParse(#[from] chrono::ParseError),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Server errors
    #[error("Server error: {message}")]
    Server { message: String },
}

impl ClimateError {
    /// HTTP status used when this error escapes a handler
    pub fn status_code(&self) -> StatusCode {
        match self {
            ClimateError::DataNotFound { .. } => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Convenience type alias for Results with ClimateError
pub type Result<T> = std::result::Result<T, ClimateError>;
