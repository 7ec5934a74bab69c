mod login;
mod logout;
mod signup;
mod status;

use desk_auth::AuthClient;
use desk_config::DeskConfig;
use dialoguer::Password;
use dialoguer::theme::ColorfulTheme;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AuthCommands;
use crate::ui;

/// Handle `desk auth <subcommand>`.
pub async fn handle(
    action: &AuthCommands,
    flags: &GlobalFlags,
    config: &DeskConfig,
) -> anyhow::Result<()> {
    match action {
        AuthCommands::Login(args) => login::handle(args, flags, config).await,
        AuthCommands::Signup(args) => signup::handle(args, flags, config).await,
        AuthCommands::Logout => logout::handle(flags, config).await,
        AuthCommands::Status => status::handle(flags, config).await,
    }
}

fn auth_client(config: &DeskConfig) -> anyhow::Result<AuthClient> {
    let supabase = config.require_supabase()?;
    Ok(AuthClient::new(supabase.base_url(), &supabase.anon_key))
}

/// Use the `--password` value, or prompt for one on a terminal.
fn resolve_password(given: Option<&str>, confirm: bool) -> anyhow::Result<String> {
    if let Some(password) = given {
        return Ok(password.to_string());
    }
    if !ui::prefs().interactive {
        anyhow::bail!("--password is required when stdin is not a terminal");
    }

    let theme = ColorfulTheme::default();
    let mut prompt = Password::with_theme(&theme).with_prompt("Password");
    if confirm {
        prompt = prompt.with_confirmation("Confirm password", "Passwords do not match");
    }
    Ok(prompt.interact()?)
}
