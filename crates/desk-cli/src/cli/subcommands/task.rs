use clap::{Args, Subcommand};

use crate::cli::root_commands::ViewArgs;

/// Task commands.
#[derive(Clone, Debug, Subcommand)]
pub enum TaskCommands {
    /// List tasks with due-date countdowns.
    List(ViewArgs),
    /// Get a task by ID.
    Get { id: String },
    /// Create a task.
    Create(TaskCreateArgs),
    /// Update fields of a task.
    Update(TaskUpdateArgs),
    /// Set a task's status.
    Status { id: String, status: String },
    /// Complete a task, or reopen it if already completed.
    Toggle { id: String },
    /// Delete a task.
    Delete {
        id: String,
        /// Skip the confirmation prompt.
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

/// Optional task fields shared by create and update.
#[derive(Clone, Debug, Default, Args)]
pub struct TaskFieldArgs {
    #[arg(long)]
    pub description: Option<String>,
    /// Course or subject, e.g. "Chemistry".
    #[arg(long)]
    pub subject: Option<String>,
    #[arg(long)]
    pub category: Option<String>,
    #[arg(long)]
    pub priority: Option<String>,
    #[arg(long)]
    pub status: Option<String>,
    /// Start date, YYYY-MM-DD.
    #[arg(long)]
    pub start: Option<String>,
    /// Due date, YYYY-MM-DD.
    #[arg(long)]
    pub due: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct TaskCreateArgs {
    #[arg(long)]
    pub title: String,
    #[command(flatten)]
    pub fields: TaskFieldArgs,
}

#[derive(Clone, Debug, Args)]
pub struct TaskUpdateArgs {
    pub id: String,
    #[arg(long)]
    pub title: Option<String>,
    #[command(flatten)]
    pub fields: TaskFieldArgs,
    /// Remove the due date.
    #[arg(long, conflicts_with = "due")]
    pub clear_due: bool,
    /// Remove the start date.
    #[arg(long, conflicts_with = "start")]
    pub clear_start: bool,
}
