//! Error types for the address book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Value-object validation errors live in [`crate::domain::errors`].

use thiserror::Error;

/// Errors that can occur when mutating a contact record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// Tried to edit a phone number the record does not contain
    #[error("Phone {phone} not found for contact {contact}")]
    PhoneNotFound { phone: String, contact: String },
}

/// Errors that can occur while saving or loading the address book.
///
/// A missing file on load is NOT an error; it yields an empty book.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing the book file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The book file is not valid JSON or violates the schema
    #[error("Malformed book file: {0}")]
    Json(#[from] serde_json::Error),

    /// The book file was written by a newer version of the program
    #[error("Unsupported book file version {found} (newest supported: {supported})")]
    UnsupportedVersion { found: u32, supported: u32 },
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with RecordError
pub type RecordResult<T> = Result<T, RecordError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
