//! Error types for Ribbon Tracker core operations.
//!
//! Errors are descriptive at the core level; the CLI layer maps these
//! to exit codes and user-friendly messages.

use thiserror::Error;

/// Result type alias for Ribbon Tracker operations.
pub type Result<T> = std::result::Result<T, RibbonError>;

/// Core error type for Ribbon Tracker operations.
#[derive(Debug, Error)]
pub enum RibbonError {
    /// Malformed import document or invalid data shape
    #[error("Validation error: {0}")]
    Validation(String),

    /// Local storage backend error
    #[error("Storage error: {0}")]
    Storage(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid user input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Generic error (fallback)
    #[error("{0}")]
    Other(String),
}

impl From<std::io::Error> for RibbonError {
    fn from(err: std::io::Error) -> Self {
        RibbonError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for RibbonError {
    fn from(err: serde_json::Error) -> Self {
        RibbonError::Validation(err.to_string())
    }
}

impl From<rusqlite::Error> for RibbonError {
    fn from(err: rusqlite::Error) -> Self {
        RibbonError::Storage(format!("SQLite error: {}", err))
    }
}
