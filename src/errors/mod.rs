//! Error handling utilities for the selah application.
//!
//! This module provides the central error type `AppError` which represents all
//! possible error conditions that might occur in the application, as well as the
//! convenience type alias `AppResult` for functions that can return these errors.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Represents specific error cases that can occur when persisting annotation state.
///
/// This enum provides detailed, contextual error information for different failure
/// modes when writing the favorites/journal state file. Read failures are not
/// represented here: loading state is deliberately fail-soft and degrades to an
/// empty state instead of erroring.
///
/// # Examples
///
/// Creating and formatting a file busy error:
///
/// ```
/// use selah::errors::StoreError;
/// use std::path::PathBuf;
///
/// let error = StoreError::FileBusy {
///     path: PathBuf::from("/data/devotional-v1.json"),
/// };
///
/// assert!(format!("{}", error).contains("locked by another process"));
/// assert!(format!("{}", error).contains("devotional-v1.json"));
/// ```
///
/// Creating a write failed error:
///
/// ```
/// use selah::errors::StoreError;
/// use std::io::{self, ErrorKind};
/// use std::path::PathBuf;
///
/// let io_error = io::Error::new(ErrorKind::PermissionDenied, "permission denied");
/// let error = StoreError::WriteFailed {
///     path: PathBuf::from("/data/devotional-v1.json"),
///     source: io_error,
/// };
///
/// assert!(format!("{}", error).contains("Failed to write"));
/// assert!(format!("{}", error).contains("permission denied"));
/// ```
#[derive(Debug, Error)]
pub enum StoreError {
    /// Error when the state file is already locked by another process.
    #[error("State file is currently locked by another process: {path}. Please wait for the other selah instance to finish or check for stale processes.")]
    FileBusy {
        /// The path to the state file that is locked
        path: PathBuf,
    },

    /// Error when writing the state file fails.
    #[error("Failed to write state file {path}: {source}. Please check file permissions and available disk space.")]
    WriteFailed {
        /// The path to the state file that couldn't be written
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Error when serializing the in-memory state to JSON fails.
    #[error("Failed to encode annotation state: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Represents all possible errors that can occur in the selah application.
///
/// This enum is the central error type used across the application, with variants
/// for different error categories. It uses `thiserror` for deriving the `Error` trait
/// implementation and formatted error messages.
///
/// Note: This type does not implement `Clone` to avoid losing error context when
/// cloning `std::io::Error` values.
///
/// # Examples
///
/// Creating a configuration error:
/// ```
/// use selah::errors::AppError;
///
/// let error = AppError::Config("Missing data directory".to_string());
/// assert_eq!(format!("{}", error), "Configuration error: Missing data directory");
/// ```
///
/// Converting from an IO error:
/// ```
/// use selah::errors::AppError;
/// use std::io::{self, ErrorKind};
///
/// let io_error = io::Error::new(ErrorKind::NotFound, "file not found");
/// let app_error: AppError = io_error.into();
///
/// match app_error {
///     AppError::Io(inner) => assert_eq!(inner.kind(), ErrorKind::NotFound),
///     _ => panic!("Expected Io variant"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Errors related to configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input/output errors from filesystem operations.
    ///
    /// This variant automatically converts from `std::io::Error` through the `From` trait.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Errors in search or filter input (e.g., an unknown category label).
    #[error("Query error: {0}")]
    Query(String),

    /// Errors when persisting annotation state.
    ///
    /// This variant uses a dedicated StoreError type to provide detailed
    /// information about what went wrong with the state file.
    #[error("Annotation store error: {0}")]
    Store(#[from] StoreError),
}

/// A type alias for `Result<T, AppError>` to simplify function signatures.
///
/// This type alias is used throughout the application to represent operations
/// that may fail with an `AppError`.
///
/// # Examples
///
/// ```
/// use selah::errors::{AppResult, AppError};
///
/// fn might_fail() -> AppResult<String> {
///     // Operation that could fail
///     if false {
///         return Err(AppError::Query("Something went wrong".to_string()));
///     }
///     Ok("Operation succeeded".to_string())
/// }
/// ```
pub type AppResult<T> = Result<T, AppError>;
