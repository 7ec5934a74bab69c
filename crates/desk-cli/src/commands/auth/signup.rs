use desk_auth::{SignUpOutcome, token_store};
use desk_config::DeskConfig;
use serde::Serialize;

use super::{auth_client, resolve_password};
use crate::cli::GlobalFlags;
use crate::cli::subcommands::auth::AuthSignupArgs;
use crate::output::output;

#[derive(Serialize)]
struct AuthSignupResponse {
    signed_up: bool,
    authenticated: bool,
    user_id: String,
    email: Option<String>,
    note: Option<String>,
}

pub async fn handle(
    args: &AuthSignupArgs,
    flags: &GlobalFlags,
    config: &DeskConfig,
) -> anyhow::Result<()> {
    if args.name.trim().is_empty() {
        anyhow::bail!("--name must not be empty");
    }
    let client = auth_client(config)?;
    let password = resolve_password(args.password.as_deref(), true)?;

    let outcome = client
        .sign_up(&args.email, &password, args.name.trim())
        .await?;

    let response = match outcome {
        SignUpOutcome::SignedIn(session) => {
            token_store::store(&session)?;
            AuthSignupResponse {
                signed_up: true,
                authenticated: true,
                user_id: session.user_id,
                email: session.email,
                note: None,
            }
        }
        SignUpOutcome::ConfirmationPending { user_id, email } => AuthSignupResponse {
            signed_up: true,
            authenticated: false,
            user_id,
            email: Some(email),
            note: Some("confirm the address from your inbox, then run `desk auth login`".into()),
        },
    };
    output(&response, flags.format)
}
