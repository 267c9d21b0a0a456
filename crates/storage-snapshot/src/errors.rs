//! Storage-specific error types for snapshot files.
//!
//! These wrap file and JSON errors and convert them to the storage-agnostic
//! error types defined in `salesboard_core`.

use salesboard_core::errors::{DatabaseError, Error};
use thiserror::Error;

/// Storage-specific errors raised while loading a snapshot.
///
/// These errors are internal to the storage layer and are converted to
/// `salesboard_core::Error` before being returned to callers.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Failed to read snapshot file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed snapshot JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid {table} row '{id}': {reason}")]
    InvalidRow {
        table: &'static str,
        id: String,
        reason: String,
    },
}

impl From<StorageError> for Error {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Io(e) => Error::Database(DatabaseError::ConnectionFailed(e.to_string())),
            StorageError::Parse(e) => Error::Database(DatabaseError::QueryFailed(e.to_string())),
            e @ StorageError::InvalidRow { .. } => {
                Error::Database(DatabaseError::Internal(e.to_string()))
            }
        }
    }
}
