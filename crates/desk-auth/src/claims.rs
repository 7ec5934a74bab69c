//! Unverified JWT payload decoding.
//!
//! The backend checks signatures and enforces row-level security on every
//! request. Locally we only need to know who the token belongs to and when it
//! runs out.

use base64::Engine as _;
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::error::AuthError;

/// The claims `desk` reads from an access token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionClaims {
    /// Backend user ID (`sub` claim).
    pub user_id: String,
    pub email: Option<String>,
    pub expires_at: DateTime<Utc>,
}

#[derive(Deserialize)]
struct RawClaims {
    sub: Option<String>,
    email: Option<String>,
    exp: Option<i64>,
}

/// Decode `sub`, `email` and `exp` from a JWT without verifying it.
///
/// # Errors
///
/// Returns `AuthError::Decode` if the token is not three dot-separated
/// segments, the payload is not base64url JSON, or `sub`/`exp` are missing.
pub fn decode(jwt: &str) -> Result<SessionClaims, AuthError> {
    let mut parts = jwt.trim().split('.');
    let (Some(_header), Some(payload), Some(_sig), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(AuthError::Decode("invalid JWT format".into()));
    };

    let bytes = base64::engine::general_purpose::URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|e| AuthError::Decode(format!("base64 decode failed: {e}")))?;
    let raw: RawClaims = serde_json::from_slice(&bytes)
        .map_err(|e| AuthError::Decode(format!("JSON parse failed: {e}")))?;

    let user_id = raw
        .sub
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AuthError::Decode("missing sub claim".into()))?;
    let exp = raw
        .exp
        .ok_or_else(|| AuthError::Decode("missing exp claim".into()))?;
    let expires_at = DateTime::from_timestamp(exp, 0)
        .ok_or_else(|| AuthError::Decode("invalid exp timestamp".into()))?;

    Ok(SessionClaims {
        user_id,
        email: raw.email.filter(|e| !e.is_empty()),
        expires_at,
    })
}

#[cfg(test)]
pub(crate) fn make_jwt(payload: &serde_json::Value) -> String {
    let engine = base64::engine::general_purpose::URL_SAFE_NO_PAD;
    let header = engine.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
    let body = engine.encode(payload.to_string());
    let signature = engine.encode("fake_sig");
    format!("{header}.{body}.{signature}")
}
