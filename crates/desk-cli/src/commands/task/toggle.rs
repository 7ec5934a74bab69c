use crate::cli::GlobalFlags;
use crate::commands::shared::notice::{load, or_notice};
use crate::context::AppContext;
use crate::output::output;

pub async fn run(id: &str, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    if !load(ctx, flags).await? {
        return Ok(());
    }

    let result = ctx.board.toggle_completion(id).await;
    if let Some(task) = or_notice("toggle", result, flags)? {
        output(&task, flags.format)?;
    }
    Ok(())
}
