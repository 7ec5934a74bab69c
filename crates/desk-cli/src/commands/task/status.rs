use desk_core::enums::TaskStatus;

use crate::cli::GlobalFlags;
use crate::commands::shared::notice::{load, or_notice};
use crate::commands::shared::parse::parse_value;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    id: &str,
    status: &str,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let status: TaskStatus = parse_value(status)?;
    if !load(ctx, flags).await? {
        return Ok(());
    }

    let result = ctx.board.set_status(id, status).await;
    if let Some(task) = or_notice("status", result, flags)? {
        output(&task, flags.format)?;
    }
    Ok(())
}
