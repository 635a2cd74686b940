//! Error handling for personnel-store
//!
//! Wraps personnel-core ExError with store-specific helpers

use personnel_core::errors::{ExError, ExErrorKind};
use personnel_core::PersonnelError;

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Create a seed validation error
pub fn seed_validation(reason: &str) -> ExError {
    ExError::new(ExErrorKind::InvalidInput)
        .with_op("seed_parse")
        .with_message(reason.to_string())
}

/// Create an IO error
pub fn io_error(operation: &str, err: std::io::Error) -> ExError {
    ExError::new(ExErrorKind::Io)
        .with_op(operation.to_string())
        .with_message(err.to_string())
}

/// Create a serialization error
pub fn serialization_error(operation: &str, err: serde_json::Error) -> ExError {
    ExError::new(ExErrorKind::Serialization)
        .with_op(operation.to_string())
        .with_message(err.to_string())
}

/// Attach the import operation to a domain error raised while populating the store
pub fn import_error(err: PersonnelError) -> ExError {
    ExError::from(err).with_op("seed_import")
}
