use desk_core::enums::TaskStatus;
use desk_store::{TaskUpdate, TaskUpdateBuilder};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::task::TaskUpdateArgs;
use crate::commands::shared::notice::{load, or_notice};
use crate::commands::shared::parse::{non_blank, parse_date, parse_value};
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    args: &TaskUpdateArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let update = build_update(args)?;

    // The completion stamp depends on the task's current status.
    if update.status.is_some() && !load(ctx, flags).await? {
        return Ok(());
    }

    let result = ctx.board.update(&args.id, update).await;
    if let Some(task) = or_notice("update", result, flags)? {
        output(&task, flags.format)?;
    }
    Ok(())
}

/// An empty `--description ""` or `--subject ""` clears the field.
fn build_update(args: &TaskUpdateArgs) -> anyhow::Result<TaskUpdate> {
    let fields = &args.fields;
    let mut builder = TaskUpdateBuilder::new();

    if let Some(title) = args.title.as_deref() {
        builder = builder.title(title.trim());
    }
    if let Some(raw) = fields.description.as_deref() {
        builder = builder.description(non_blank(Some(raw)));
    }
    if let Some(raw) = fields.subject.as_deref() {
        builder = builder.subject(non_blank(Some(raw)));
    }
    if let Some(raw) = fields.category.as_deref() {
        builder = builder.category(parse_value(raw)?);
    }
    if let Some(raw) = fields.priority.as_deref() {
        builder = builder.priority(parse_value(raw)?);
    }
    if let Some(raw) = fields.status.as_deref() {
        builder = builder.status(parse_value::<TaskStatus>(raw)?);
    }
    if let Some(raw) = fields.start.as_deref() {
        builder = builder.start_date(Some(parse_date(raw, "start")?));
    } else if args.clear_start {
        builder = builder.start_date(None);
    }
    if let Some(raw) = fields.due.as_deref() {
        builder = builder.due_date(Some(parse_date(raw, "due")?));
    } else if args.clear_due {
        builder = builder.due_date(None);
    }

    let update = builder.build();
    if update.is_empty() {
        anyhow::bail!(
            "At least one of --title, --description, --subject, --category, --priority, \
             --status, --start, --due, --clear-start or --clear-due must be provided"
        );
    }
    update.validate()?;
    Ok(update)
}
