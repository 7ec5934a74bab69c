use crate::cli::GlobalFlags;
use crate::commands::shared::notice::load;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(id: &str, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    if !load(ctx, flags).await? {
        return Ok(());
    }
    let Some(task) = ctx.board.find(id) else {
        anyhow::bail!("task not found: {id}");
    };
    output(task, flags.format)
}
