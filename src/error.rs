//! Error types for the resxcheck CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for resxcheck operations.
///
/// Every variant is terminal at the process boundary and maps to exit code 1;
/// the variants exist to keep messages and call sites structured, not to fan
/// out into distinct exit codes.
#[derive(Error, Debug)]
pub enum ResxCheckError {
    /// User provided invalid arguments or pointed the tool at something
    /// that is not a usable repository or file.
    #[error("{0}")]
    UserError(String),

    /// Git operation failed (fetch, head resolution, or diff).
    #[error("Git operation failed: {0}")]
    GitError(String),

    /// One or more changed files contain unmatched brackets.
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

impl ResxCheckError {
    /// Returns the process exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            ResxCheckError::UserError(_) => exit_codes::FAILURE,
            ResxCheckError::GitError(_) => exit_codes::FAILURE,
            ResxCheckError::ValidationError(_) => exit_codes::FAILURE,
        }
    }
}

/// Result type alias for resxcheck operations.
pub type Result<T> = std::result::Result<T, ResxCheckError>;
