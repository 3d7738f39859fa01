//! Error types for the SSH deployment form

use thiserror::Error;

use crate::form::validate::ValidationErrors;

/// Operational errors around the form model.
///
/// Field validation problems are never reported through this type while
/// editing; they only show up in the error map.
#[derive(Error, Debug)]
pub enum FormError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Validation error: {0}")]
    ValidationError(#[from] ValidationErrors),
}
