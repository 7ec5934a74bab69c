use chrono::Utc;

use crate::cli::GlobalFlags;
use crate::commands::shared::notice::load;
use crate::context::AppContext;
use crate::output::output;

/// Handle `desk stats`. Counts cover every task, whatever the list filters.
pub async fn handle(ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    if !load(ctx, flags).await? {
        return Ok(());
    }
    output(&ctx.board.stats(Utc::now()), flags.format)
}
