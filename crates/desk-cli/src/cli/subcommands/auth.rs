use clap::{Args, Subcommand};

/// Authentication commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AuthCommands {
    /// Sign in with email and password.
    Login(AuthLoginArgs),
    /// Create an account.
    Signup(AuthSignupArgs),
    /// Sign out and clear the stored session.
    Logout,
    /// Show current auth status.
    Status,
}

#[derive(Clone, Debug, Args)]
pub struct AuthLoginArgs {
    #[arg(long)]
    pub email: String,
    /// Prompted for when omitted.
    #[arg(long)]
    pub password: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct AuthSignupArgs {
    #[arg(long)]
    pub email: String,
    /// Full name shown on the profile.
    #[arg(long)]
    pub name: String,
    /// Prompted for (with confirmation) when omitted.
    #[arg(long)]
    pub password: Option<String>,
}
