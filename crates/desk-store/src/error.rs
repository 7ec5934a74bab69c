//! Store error types for desk-store.

use desk_core::errors::CoreError;
use thiserror::Error;

/// Errors from task persistence.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Rejected before any request was made.
    #[error(transparent)]
    Validation(#[from] CoreError),

    /// The backend refused the access token (expired, revoked, or wrong project).
    #[error("Not authorized, run `desk auth login`")]
    Unauthorized,

    /// No row with this ID is visible to the signed-in user.
    #[error("Task not found: {0}")]
    NotFound(String),

    /// The backend answered with a non-success status.
    #[error("Backend returned {status}: {body}")]
    Status { status: u16, body: String },

    /// The request never completed.
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body did not match the expected row shape.
    #[error("Decode failed: {0}")]
    Decode(String),
}

impl StoreError {
    /// Validation errors are the caller's fault; everything else may succeed
    /// on retry.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
