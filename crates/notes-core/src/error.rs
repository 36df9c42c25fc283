//! Error types for the notes service.

use thiserror::Error;

/// Result type alias using the notes Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Message returned whenever a note body is missing its title or content.
pub const REQUIRED_FIELDS_MSG: &str = "Title and content are required";

/// Core error type for note operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Request payload failed validation
    #[error("Validation error: {0}")]
    Validation(String),

    /// Note not found
    #[error("Note not found: {0}")]
    NoteNotFound(i64),

    /// Database operation failed (wraps sqlx::Error)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// File I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// True for failures of the backing store rather than of the request.
    pub fn is_store_fault(&self) -> bool {
        !matches!(self, Error::Validation(_) | Error::NoteNotFound(_))
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
