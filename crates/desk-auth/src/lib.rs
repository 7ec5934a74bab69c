//! # desk-auth
//!
//! Email/password authentication for the `desk` CLI.
//!
//! Talks to the backend's auth endpoint with `reqwest`, stores the resulting
//! session in the OS keychain (`keyring`) with a file fallback, and refreshes
//! it shortly before expiry.

pub mod claims;
pub mod client;
pub mod error;
pub mod refresh;
pub mod session;
pub mod token_store;

pub use client::{AuthClient, SignUpOutcome};
pub use error::AuthError;
pub use refresh::resolve_session;
pub use session::AuthSession;

/// Sign in and persist the session.
///
/// # Errors
///
/// Returns `AuthError` if sign-in fails or the session cannot be stored.
pub async fn login(
    client: &AuthClient,
    email: &str,
    password: &str,
) -> Result<AuthSession, AuthError> {
    let session = client.sign_in_with_password(email, password).await?;
    token_store::store(&session)?;
    Ok(session)
}

/// Revoke the stored session server-side (best effort) and clear it locally.
///
/// Returns whether a session was stored.
///
/// # Errors
///
/// Returns `AuthError::TokenStore` if local credentials cannot be removed.
pub async fn logout(client: &AuthClient) -> Result<bool, AuthError> {
    let stored = token_store::load();
    if let Some(session) = &stored
        && let Err(error) = client.sign_out(&session.access_token).await
    {
        tracing::warn!(%error, "remote sign-out failed; clearing local session anyway");
    }
    token_store::delete()?;
    Ok(stored.is_some())
}

/// The signed-in session, or `AuthError::NotAuthenticated`.
///
/// # Errors
///
/// Returns `AuthError::NotAuthenticated` when no usable session is stored.
pub async fn require_session(client: &AuthClient) -> Result<AuthSession, AuthError> {
    resolve_session(client)
        .await?
        .ok_or(AuthError::NotAuthenticated)
}
