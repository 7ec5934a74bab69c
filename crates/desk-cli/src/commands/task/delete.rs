use desk_core::responses::TaskDeleteResponse;
use dialoguer::Confirm;
use dialoguer::theme::ColorfulTheme;

use crate::cli::GlobalFlags;
use crate::commands::shared::notice::{load, or_notice};
use crate::context::AppContext;
use crate::output::output;
use crate::ui;

pub async fn run(
    id: &str,
    yes: bool,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    if !load(ctx, flags).await? {
        return Ok(());
    }

    if !yes {
        let label = ctx
            .board
            .find(id)
            .map_or_else(|| id.to_string(), |task| format!("'{}'", task.title));
        if !confirm(&label)? {
            return output(
                &TaskDeleteResponse {
                    deleted: false,
                    id: id.to_string(),
                    remaining: ctx.board.tasks().len(),
                },
                flags.format,
            );
        }
    }

    let result = ctx.board.delete(id).await;
    if or_notice("delete", result, flags)?.is_none() {
        return Ok(());
    }
    output(
        &TaskDeleteResponse {
            deleted: true,
            id: id.to_string(),
            remaining: ctx.board.tasks().len(),
        },
        flags.format,
    )
}

fn confirm(label: &str) -> anyhow::Result<bool> {
    if !ui::prefs().interactive {
        anyhow::bail!("refusing to delete without confirmation; pass --yes");
    }
    Ok(Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(format!("Delete task {label}? This cannot be undone"))
        .default(false)
        .interact()?)
}
