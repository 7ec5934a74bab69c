//! Password auth against the backend's GoTrue endpoint (`{url}/auth/v1`).

use chrono::{DateTime, TimeDelta, Utc};
use reqwest::{RequestBuilder, Response, StatusCode};
use serde::Deserialize;
use serde_json::json;

use crate::claims;
use crate::error::AuthError;
use crate::session::AuthSession;

/// Result of `sign_up`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignUpOutcome {
    /// The backend auto-confirmed the account and issued a session.
    SignedIn(AuthSession),
    /// The account exists but the email must be confirmed before sign-in.
    ConfirmationPending { user_id: String, email: String },
}

#[derive(Debug, Clone)]
pub struct AuthClient {
    http: reqwest::Client,
    base_url: String,
    anon_key: String,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    refresh_token: Option<String>,
    expires_in: Option<i64>,
    expires_at: Option<i64>,
    user: UserResponse,
}

#[derive(Deserialize)]
struct UserResponse {
    id: String,
    email: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SignUpResponse {
    Session(TokenResponse),
    Wrapped { user: UserResponse },
    User(UserResponse),
}

impl AuthClient {
    /// `project_url` is the backend root; `/auth/v1` is appended.
    #[must_use]
    pub fn new(project_url: &str, anon_key: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: format!("{}/auth/v1", project_url.trim_end_matches('/')),
            anon_key: anon_key.to_string(),
        }
    }

    /// # Errors
    ///
    /// `AuthError::InvalidCredentials` on a rejected email/password pair,
    /// `AuthError::Api` or `AuthError::Http` otherwise.
    pub async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AuthSession, AuthError> {
        tracing::debug!(%email, "signing in with password");
        let req = self
            .post("token")
            .query(&[("grant_type", "password")])
            .json(&json!({ "email": email, "password": password }));
        let resp = Self::send(req).await.map_err(|e| match e {
            AuthError::Api { status, .. } if status == StatusCode::BAD_REQUEST.as_u16() => {
                AuthError::InvalidCredentials
            }
            other => other,
        })?;
        let body: TokenResponse = resp.json().await?;
        Ok(into_session(body))
    }

    /// Register a new account. `full_name` is stored as user metadata, which
    /// the backend copies into the profile row.
    ///
    /// # Errors
    ///
    /// `AuthError::Api` if the backend rejects the sign-up.
    pub async fn sign_up(
        &self,
        email: &str,
        password: &str,
        full_name: &str,
    ) -> Result<SignUpOutcome, AuthError> {
        tracing::debug!(%email, "signing up");
        let req = self.post("signup").json(&json!({
            "email": email,
            "password": password,
            "data": { "full_name": full_name },
        }));
        let resp = Self::send(req).await?;
        let body: SignUpResponse = resp.json().await?;
        Ok(match body {
            SignUpResponse::Session(token) => SignUpOutcome::SignedIn(into_session(token)),
            SignUpResponse::Wrapped { user } | SignUpResponse::User(user) => {
                SignUpOutcome::ConfirmationPending {
                    email: user.email.unwrap_or_else(|| email.to_string()),
                    user_id: user.id,
                }
            }
        })
    }

    /// Exchange a refresh token for a new session.
    ///
    /// # Errors
    ///
    /// `AuthError::Api` if the refresh token was revoked or already used.
    pub async fn refresh(&self, refresh_token: &str) -> Result<AuthSession, AuthError> {
        tracing::debug!("refreshing session");
        let req = self
            .post("token")
            .query(&[("grant_type", "refresh_token")])
            .json(&json!({ "refresh_token": refresh_token }));
        let resp = Self::send(req).await?;
        let body: TokenResponse = resp.json().await?;
        Ok(into_session(body))
    }

    /// Revoke the session server-side.
    ///
    /// # Errors
    ///
    /// `AuthError::Api` or `AuthError::Http` if the request fails.
    pub async fn sign_out(&self, access_token: &str) -> Result<(), AuthError> {
        let req = self.post("logout").bearer_auth(access_token);
        Self::send(req).await?;
        Ok(())
    }

    fn post(&self, path: &str) -> RequestBuilder {
        self.http
            .post(format!("{}/{path}", self.base_url))
            .header("apikey", &self.anon_key)
    }

    async fn send(req: RequestBuilder) -> Result<Response, AuthError> {
        let resp = req.send().await?;
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let text = resp.text().await.unwrap_or_default();
        Err(AuthError::Api {
            status: status.as_u16(),
            message: error_message(&text),
        })
    }
}

fn into_session(token: TokenResponse) -> AuthSession {
    let expires_at = token
        .expires_at
        .and_then(|ts| DateTime::from_timestamp(ts, 0))
        .or_else(|| {
            token
                .expires_in
                .map(|secs| Utc::now() + TimeDelta::seconds(secs))
        })
        .or_else(|| {
            claims::decode(&token.access_token)
                .ok()
                .map(|c| c.expires_at)
        })
        .unwrap_or_else(Utc::now);

    AuthSession {
        access_token: token.access_token,
        refresh_token: token.refresh_token.filter(|t| !t.is_empty()),
        user_id: token.user.id,
        email: token.user.email,
        expires_at,
    }
}

/// GoTrue reports errors under several keys depending on the endpoint.
fn error_message(body: &str) -> String {
    let parsed: Option<serde_json::Value> = serde_json::from_str(body).ok();
    parsed
        .as_ref()
        .and_then(|v| {
            ["error_description", "msg", "message", "error"]
                .iter()
                .find_map(|key| v.get(*key).and_then(serde_json::Value::as_str))
        })
        .map_or_else(|| body.trim().to_string(), str::to_string)
}
