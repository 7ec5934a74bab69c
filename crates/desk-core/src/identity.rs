use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The signed-in user, as far as the task layer cares.
///
/// Produced by `desk-auth`, consumed by `desk-store` to scope every fetch to
/// the owner's rows.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AuthIdentity {
    /// Backend user ID (JWT `sub` claim).
    pub user_id: String,
    /// Account email, when the token carries one.
    pub email: Option<String>,
}
