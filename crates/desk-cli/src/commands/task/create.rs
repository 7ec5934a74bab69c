use desk_core::entities::NewTask;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::task::TaskCreateArgs;
use crate::commands::shared::notice::or_notice;
use crate::commands::shared::parse::{non_blank, parse_optional_date, parse_value};
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    args: &TaskCreateArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let form = build_form(args)?;
    let result = ctx.board.create(form).await;
    if let Some(task) = or_notice("create", result, flags)? {
        output(&task, flags.format)?;
    }
    Ok(())
}

/// Unset fields keep the creation-form defaults.
fn build_form(args: &TaskCreateArgs) -> anyhow::Result<NewTask> {
    let fields = &args.fields;
    let mut form = NewTask::new(args.title.trim());

    form.description = non_blank(fields.description.as_deref());
    form.subject = non_blank(fields.subject.as_deref());
    if let Some(raw) = fields.category.as_deref() {
        form.category = parse_value(raw)?;
    }
    if let Some(raw) = fields.priority.as_deref() {
        form.priority = parse_value(raw)?;
    }
    if let Some(raw) = fields.status.as_deref() {
        form.status = parse_value(raw)?;
    }
    form.start_date = parse_optional_date(fields.start.as_deref(), "start")?;
    form.due_date = parse_optional_date(fields.due.as_deref(), "due")?;

    form.validate()?;
    Ok(form)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use desk_core::enums::{Category, Priority, TaskStatus};
    use pretty_assertions::assert_eq;

    use super::build_form;
    use crate::cli::subcommands::task::{TaskCreateArgs, TaskFieldArgs};

    fn args(title: &str, fields: TaskFieldArgs) -> TaskCreateArgs {
        TaskCreateArgs {
            title: title.into(),
            fields,
        }
    }

    #[test]
    fn title_only_uses_form_defaults() {
        let form = build_form(&args("Read chapter 4", TaskFieldArgs::default())).unwrap();
        assert_eq!(form.category, Category::Assignment);
        assert_eq!(form.priority, Priority::Medium);
        assert_eq!(form.status, TaskStatus::Pending);
        assert_eq!(form.due_date, None);
    }

    #[test]
    fn all_fields_are_parsed() {
        let fields = TaskFieldArgs {
            description: Some("Chapters 1-3".into()),
            subject: Some("History".into()),
            category: Some("exam".into()),
            priority: Some("high".into()),
            status: Some("in-progress".into()),
            start: Some("2026-10-20".into()),
            due: Some("2026-11-02".into()),
        };
        let form = build_form(&args("Midterm", fields)).unwrap();

        assert_eq!(form.category, Category::Exam);
        assert_eq!(form.priority, Priority::High);
        assert_eq!(form.status, TaskStatus::InProgress);
        assert_eq!(form.subject.as_deref(), Some("History"));
        assert_eq!(form.start_date, NaiveDate::from_ymd_opt(2026, 10, 20));
        assert_eq!(form.due_date, NaiveDate::from_ymd_opt(2026, 11, 2));
    }

    #[test]
    fn blank_title_is_rejected_locally() {
        assert!(build_form(&args("   ", TaskFieldArgs::default())).is_err());
    }

    #[test]
    fn bad_date_is_rejected_locally() {
        let fields = TaskFieldArgs {
            due: Some("next week".into()),
            ..TaskFieldArgs::default()
        };
        assert!(build_form(&args("Essay", fields)).is_err());
    }
}
