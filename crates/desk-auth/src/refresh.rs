use crate::client::AuthClient;
use crate::error::AuthError;
use crate::session::AuthSession;

/// Sessions expiring within this window are refreshed before use.
pub const EXPIRY_BUFFER_SECS: i64 = 60;

/// Load the stored session and make sure it is usable.
///
/// Refreshes (and re-stores) a session that expires within
/// [`EXPIRY_BUFFER_SECS`]. Returns `None` when nothing is stored or the stored
/// session can no longer be refreshed.
///
/// # Errors
///
/// Returns `AuthError::Http` on a transport failure during refresh, or
/// `AuthError::TokenStore` if the refreshed session cannot be saved.
pub async fn resolve_session(client: &AuthClient) -> Result<Option<AuthSession>, AuthError> {
    let Some(session) = crate::token_store::load() else {
        return Ok(None);
    };
    let before = session.access_token.clone();
    let resolved = refresh_if_needed(client, session).await?;
    if let Some(fresh) = &resolved
        && fresh.access_token != before
    {
        crate::token_store::store(fresh)?;
    }
    Ok(resolved)
}

/// Refresh `session` if it is near expiry. Does not touch storage.
///
/// # Errors
///
/// Returns `AuthError::Http` on a transport failure. A rejected refresh token
/// yields `Ok(None)`.
pub async fn refresh_if_needed(
    client: &AuthClient,
    session: AuthSession,
) -> Result<Option<AuthSession>, AuthError> {
    if !session.is_near_expiry(EXPIRY_BUFFER_SECS) {
        return Ok(Some(session));
    }

    let Some(refresh_token) = session.refresh_token.as_deref() else {
        tracing::warn!(
            expires_at = %session.expires_at,
            "stored token expired and has no refresh token; run `desk auth login`",
        );
        return Ok(None);
    };

    match client.refresh(refresh_token).await {
        Ok(fresh) => {
            tracing::debug!(expires_at = %fresh.expires_at, "session refreshed");
            Ok(Some(fresh))
        }
        Err(AuthError::Api { status, message }) => {
            tracing::warn!(status, %message, "session refresh rejected; run `desk auth login`");
            Ok(None)
        }
        Err(error) => Err(error),
    }
}
