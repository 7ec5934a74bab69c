use desk_auth::token_store;
use desk_config::DeskConfig;
use serde::Serialize;

use super::auth_client;
use crate::cli::GlobalFlags;
use crate::output::output;

#[derive(Serialize)]
struct AuthLogoutResponse {
    cleared: bool,
    had_session: bool,
}

pub async fn handle(flags: &GlobalFlags, config: &DeskConfig) -> anyhow::Result<()> {
    let had_session = match auth_client(config) {
        Ok(client) => desk_auth::logout(&client).await?,
        Err(error) => {
            // Without a backend there is nothing to revoke remotely.
            tracing::debug!(%error, "clearing local session only");
            let had_session = token_store::load().is_some();
            token_store::delete()?;
            had_session
        }
    };

    output(
        &AuthLogoutResponse {
            cleared: true,
            had_session,
        },
        flags.format,
    )
}
