//! Core error types for the Salesboard application.
//!
//! This module defines storage-agnostic error types. Adapter-specific errors
//! (JSON snapshots, remote data services) are converted to these types by the
//! storage layer.

use chrono::ParseError as ChronoParseError;
use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the sales dashboard.
///
/// Storage-specific errors are wrapped in string form to keep this type
/// independent of any particular data source.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Database operation failed: {0}")]
    Database(#[from] DatabaseError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Failed to load configuration: {0}")]
    ConfigIO(String),

    #[error("Invalid configuration value: {0}")]
    InvalidConfigValue(String),
}

/// Storage-agnostic error type for data-access operations.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Failed to reach the data source.
    #[error("Failed to connect to data source: {0}")]
    ConnectionFailed(String),

    /// A query failed to execute.
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Internal/unexpected storage error.
    #[error("Internal storage error: {0}")]
    Internal(String),
}

/// Validation errors for user input and data parsing.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Month {0} is outside 1-12")]
    InvalidMonth(u32),

    #[error("Failed to parse decimal number: {0}")]
    DecimalParse(#[from] rust_decimal::Error),

    #[error("Failed to parse date/time: {0}")]
    DateTimeParse(#[from] ChronoParseError),
}

// === From implementations for common error types ===

impl From<rust_decimal::Error> for Error {
    fn from(err: rust_decimal::Error) -> Self {
        Error::Validation(ValidationError::DecimalParse(err))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::ConfigIO(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Validation(ValidationError::InvalidInput(err.to_string()))
    }
}

impl From<ChronoParseError> for Error {
    fn from(err: ChronoParseError) -> Self {
        Error::Validation(ValidationError::DateTimeParse(err))
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
