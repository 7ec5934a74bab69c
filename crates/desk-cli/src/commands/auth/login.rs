use serde::Serialize;

use desk_config::DeskConfig;

use super::{auth_client, resolve_password};
use crate::cli::GlobalFlags;
use crate::cli::subcommands::auth::AuthLoginArgs;
use crate::output::output;

#[derive(Serialize)]
struct AuthLoginResponse {
    authenticated: bool,
    user_id: String,
    email: Option<String>,
    expires_at: String,
}

pub async fn handle(
    args: &AuthLoginArgs,
    flags: &GlobalFlags,
    config: &DeskConfig,
) -> anyhow::Result<()> {
    let client = auth_client(config)?;
    let password = resolve_password(args.password.as_deref(), false)?;

    let session = desk_auth::login(&client, &args.email, &password).await?;

    output(
        &AuthLoginResponse {
            authenticated: true,
            user_id: session.user_id,
            email: session.email,
            expires_at: session.expires_at.to_rfc3339(),
        },
        flags.format,
    )
}
