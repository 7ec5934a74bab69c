use anyhow::Context;
use desk_auth::{AuthClient, AuthSession};
use desk_config::DeskConfig;
use desk_store::{RestStore, TaskBoard};

/// Shared resources for commands that work on the signed-in user's tasks.
pub struct AppContext {
    pub config: DeskConfig,
    pub session: AuthSession,
    pub board: TaskBoard<RestStore>,
}

impl AppContext {
    /// Resolve (and refresh, if needed) the stored session and bind a task
    /// board to it. The collection starts empty; commands load it on demand.
    pub async fn init(config: DeskConfig) -> anyhow::Result<Self> {
        let supabase = config.require_supabase()?;
        let auth = AuthClient::new(supabase.base_url(), &supabase.anon_key);

        let session = desk_auth::require_session(&auth)
            .await
            .context("no usable session")?;
        tracing::debug!(user_id = %session.user_id, "session resolved");

        let store = RestStore::new(
            supabase.base_url(),
            &supabase.anon_key,
            &session.access_token,
        );
        let board = TaskBoard::new(store, session.to_identity());

        Ok(Self {
            config,
            session,
            board,
        })
    }
}
