use desk_auth::{AuthSession, token_store};
use desk_config::DeskConfig;
use desk_store::{RestStore, TaskStore};
use serde::Serialize;

use super::auth_client;
use crate::cli::GlobalFlags;
use crate::output::output;

#[derive(Serialize, Default)]
struct AuthStatusResponse {
    authenticated: bool,
    user_id: Option<String>,
    email: Option<String>,
    full_name: Option<String>,
    expires_at: Option<String>,
    token_source: Option<String>,
    note: Option<String>,
}

impl AuthStatusResponse {
    fn unauthenticated(note: impl Into<String>) -> Self {
        Self {
            note: Some(note.into()),
            ..Self::default()
        }
    }
}

pub async fn handle(flags: &GlobalFlags, config: &DeskConfig) -> anyhow::Result<()> {
    let status = match auth_client(config) {
        Err(error) => AuthStatusResponse::unauthenticated(error.to_string()),
        Ok(client) => {
            let source = token_store::load_with_source().map(|(_, source)| source);
            match desk_auth::resolve_session(&client).await {
                Ok(Some(session)) => AuthStatusResponse {
                    authenticated: true,
                    full_name: profile_name(config, &session).await,
                    user_id: Some(session.user_id),
                    email: session.email,
                    expires_at: Some(session.expires_at.to_rfc3339()),
                    token_source: source.map(|s| s.as_str().to_string()),
                    note: None,
                },
                Ok(None) => AuthStatusResponse::unauthenticated(
                    "no valid session; run `desk auth login`",
                ),
                Err(error) => AuthStatusResponse::unauthenticated(error.to_string()),
            }
        }
    };

    output(&status, flags.format)
}

/// Best effort: a missing or unreadable profile only drops the name.
async fn profile_name(config: &DeskConfig, session: &AuthSession) -> Option<String> {
    let supabase = config.require_supabase().ok()?;
    let store = RestStore::new(
        supabase.base_url(),
        &supabase.anon_key,
        &session.access_token,
    );
    match store.get_profile(&session.user_id).await {
        Ok(profile) => profile
            .map(|p| p.full_name)
            .filter(|name| !name.trim().is_empty()),
        Err(error) => {
            tracing::warn!(%error, "could not load profile");
            None
        }
    }
}
