//! Error types for qnn-options.
//!
//! Building a configuration never fails. Errors only come from reading
//! documents back, validating them, and loading profiles.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for qnn-options operations.
#[derive(Error, Debug)]
pub enum QnnError {
    /// The key is not part of the QNN option vocabulary.
    #[error("Unknown QNN option: {0}")]
    UnknownOption(String),

    /// The value is not one of the tokens allowed for the key.
    #[error("Invalid value '{value}' for QNN option '{key}' (valid values: {})", .allowed.join(", "))]
    InvalidValue {
        key: String,
        value: String,
        allowed: &'static [&'static str],
    },

    /// The text is not a flat object of string pairs.
    #[error("Malformed configuration document: {0}")]
    MalformedDocument(String),

    /// A profile could not be parsed.
    #[error("Invalid profile: {0}")]
    Profile(String),

    /// Reading an input file failed.
    #[error("{0}")]
    Io(String),

    /// The caller provided invalid arguments.
    #[error("{0}")]
    Usage(String),
}

impl QnnError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            QnnError::UnknownOption(_)
            | QnnError::InvalidValue { .. }
            | QnnError::MalformedDocument(_) => exit_codes::VALIDATION_FAILURE,
            QnnError::Profile(_) => exit_codes::PROFILE_FAILURE,
            QnnError::Io(_) | QnnError::Usage(_) => exit_codes::USAGE_ERROR,
        }
    }
}

/// Result type alias for qnn-options operations.
pub type Result<T> = std::result::Result<T, QnnError>;
