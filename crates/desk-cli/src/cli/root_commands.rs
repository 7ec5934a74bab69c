use clap::{Args, Subcommand};

use crate::cli::subcommands::{AuthCommands, TaskCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Sign in, sign up, sign out.
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },
    /// Tasks.
    Task {
        #[command(subcommand)]
        action: TaskCommands,
    },
    /// Summary counts over all tasks.
    Stats,
    /// Stats plus the filtered, sorted task list.
    Dashboard(ViewArgs),
}

/// Filter and sort options shared by `task list` and `dashboard`.
#[derive(Clone, Debug, Default, Args)]
pub struct ViewArgs {
    /// Category filter (Assignment, Project, Exam, "Personal Study", All).
    #[arg(long)]
    pub category: Option<String>,
    /// Status filter (Pending, "In Progress", Completed, All).
    #[arg(long)]
    pub status: Option<String>,
    /// Priority filter (High, Medium, Low, All).
    #[arg(long)]
    pub priority: Option<String>,
    /// Sort key: due_date, priority, created.
    #[arg(long)]
    pub sort: Option<String>,
}
