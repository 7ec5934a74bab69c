use chrono::Utc;
use desk_core::responses::TaskRow;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ViewArgs;
use crate::commands::shared::notice::load;
use crate::commands::shared::view::build_view;
use crate::context::AppContext;
use crate::output::output_tasks;

pub async fn run(args: &ViewArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let view = build_view(args, &ctx.config.general)?;
    if !load(ctx, flags).await? {
        return Ok(());
    }

    let now = Utc::now();
    let rows: Vec<TaskRow> = ctx
        .board
        .view(&view)
        .iter()
        .map(|task| TaskRow::from_task(task, now))
        .collect();
    output_tasks(&rows, flags.format)
}
