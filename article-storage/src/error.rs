//! Storage error types.
//!
//! Every fallible repository operation returns [`StorageError`]; callers branch on the variant.

use thiserror::Error;

use crate::cursor::CursorError;

/// Errors that can occur when using storage operations.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Caller-supplied input (cursor, page size) was rejected.
    #[error("Bad param input: {0}")]
    BadParamInput(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    /// A single-row mutation touched zero or several rows.
    #[error("Unexpected affected rows: expected 1, got {0}")]
    UnexpectedAffectedRows(u64),
    #[error("Operation cancelled")]
    Cancelled,
    #[error("Deadline exceeded")]
    DeadlineExceeded,
}

impl From<CursorError> for StorageError {
    fn from(err: CursorError) -> Self {
        StorageError::BadParamInput(format!("invalid cursor: {}", err))
    }
}

pub type Result<T> = std::result::Result<T, StorageError>;
