//! Cross-cutting error types for studydesk.
//!
//! Only validation lives here: everything in `desk-core` is pure, so the only
//! way to fail is to hand it input that does not describe a valid task.
//! Backend and auth failures are defined in `desk-store` and `desk-auth`.

use thiserror::Error;

/// Errors raised before any data leaves the process.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// Data failed validation (blank title, empty update, bad date).
    #[error("Validation error: {0}")]
    Validation(String),

    /// A value did not match any member of a closed enumeration.
    #[error("Invalid {field} value: '{value}'")]
    InvalidValue { field: String, value: String },
}

impl CoreError {
    pub(crate) fn invalid_value(field: &str, value: &str) -> Self {
        Self::InvalidValue {
            field: field.to_string(),
            value: value.to_string(),
        }
    }
}
