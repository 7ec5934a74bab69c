mod create;
mod delete;
mod get;
mod list;
mod status;
mod toggle;
mod update;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::TaskCommands;
use crate::context::AppContext;

/// Handle `desk task <subcommand>`.
pub async fn handle(
    action: &TaskCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        TaskCommands::List(args) => list::run(args, ctx, flags).await,
        TaskCommands::Get { id } => get::run(id, ctx, flags).await,
        TaskCommands::Create(args) => create::run(args, ctx, flags).await,
        TaskCommands::Update(args) => update::run(args, ctx, flags).await,
        TaskCommands::Status { id, status } => status::run(id, status, ctx, flags).await,
        TaskCommands::Toggle { id } => toggle::run(id, ctx, flags).await,
        TaskCommands::Delete { id, yes } => delete::run(id, *yes, ctx, flags).await,
    }
}
