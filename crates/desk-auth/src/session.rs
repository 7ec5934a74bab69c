use chrono::{DateTime, TimeDelta, Utc};
use desk_core::identity::AuthIdentity;
use serde::{Deserialize, Serialize};

use crate::claims;
use crate::error::AuthError;

/// A signed-in session as stored on disk or in the keyring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSession {
    pub access_token: String,
    /// Absent for bare tokens supplied through the environment.
    pub refresh_token: Option<String>,
    pub user_id: String,
    pub email: Option<String>,
    pub expires_at: DateTime<Utc>,
}

impl AuthSession {
    /// Build a session from a bare access token by decoding its claims.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Decode` if the token payload is unreadable.
    pub fn from_access_token(access_token: &str) -> Result<Self, AuthError> {
        let claims = claims::decode(access_token)?;
        Ok(Self {
            access_token: access_token.trim().to_string(),
            refresh_token: None,
            user_id: claims.user_id,
            email: claims.email,
            expires_at: claims.expires_at,
        })
    }

    #[must_use]
    pub fn to_identity(&self) -> AuthIdentity {
        AuthIdentity {
            user_id: self.user_id.clone(),
            email: self.email.clone(),
        }
    }

    /// Check if the token is expired or expires within `buffer_secs`.
    #[must_use]
    pub fn is_near_expiry(&self, buffer_secs: i64) -> bool {
        self.is_near_expiry_at(Utc::now(), buffer_secs)
    }

    #[must_use]
    pub fn is_near_expiry_at(&self, now: DateTime<Utc>, buffer_secs: i64) -> bool {
        self.expires_at <= now + TimeDelta::seconds(buffer_secs)
    }

    #[must_use]
    pub const fn can_refresh(&self) -> bool {
        self.refresh_token.is_some()
    }
}
