use chrono::{DateTime, Utc};
use desk_core::entities::Task;
use desk_core::pipeline::ViewConfig;
use desk_core::responses::{DashboardResponse, TaskRow};
use desk_core::stats::TaskStats;

use crate::cli::root_commands::ViewArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared::notice::load;
use crate::commands::shared::view::{build_view, describe_filters};
use crate::context::AppContext;
use crate::output::{output, output_tasks};

/// Handle `desk dashboard`.
pub async fn handle(
    args: &ViewArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let view = build_view(args, &ctx.config.general)?;
    if !load(ctx, flags).await? {
        return Ok(());
    }

    let response = build_dashboard(ctx.board.tasks(), &ctx.board.view(&view), &view, Utc::now());

    // A table cannot nest, so stats and rows print as two tables.
    if flags.format == OutputFormat::Table {
        output(&response.stats, flags.format)?;
        println!();
        return output_tasks(&response.tasks, flags.format);
    }
    output(&response, flags.format)
}

/// Stats over `all`, rows from the already filtered and sorted `visible`.
fn build_dashboard(
    all: &[Task],
    visible: &[Task],
    view: &ViewConfig,
    now: DateTime<Utc>,
) -> DashboardResponse {
    DashboardResponse {
        stats: TaskStats::compute(all, now),
        filters: describe_filters(view),
        sort: view.sort.map(|key| key.as_str().to_string()),
        tasks: visible.iter().map(|task| TaskRow::from_task(task, now)).collect(),
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, TimeZone, Utc};
    use desk_core::entities::Task;
    use desk_core::enums::{Category, Priority, TaskStatus};
    use desk_core::pipeline::{FieldFilter, FilterConfig, SortKey, ViewConfig, apply_view};
    use pretty_assertions::assert_eq;

    use super::build_dashboard;

    fn task(id: &str, status: TaskStatus, priority: Priority, due_day: Option<u32>) -> Task {
        let created = Utc.with_ymd_and_hms(2026, 10, 1, 8, 0, 0).unwrap();
        Task {
            id: id.into(),
            user_id: "u-1".into(),
            title: format!("task {id}"),
            description: None,
            subject: None,
            category: Category::Exam,
            priority,
            status,
            start_date: None,
            due_date: due_day.and_then(|d| NaiveDate::from_ymd_opt(2026, 10, d)),
            completed_at: None,
            created_at: created,
            updated_at: created,
        }
    }

    #[test]
    fn stats_ignore_filters_but_rows_respect_them() {
        let now = Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap();
        let all = vec![
            task("a", TaskStatus::Pending, Priority::Low, Some(17)),
            task("b", TaskStatus::Completed, Priority::High, None),
            task("c", TaskStatus::InProgress, Priority::High, Some(25)),
        ];
        let view = ViewConfig {
            filter: FilterConfig {
                priority: FieldFilter::Only(Priority::High),
                ..FilterConfig::default()
            },
            sort: Some(SortKey::DueDate),
        };

        let response = build_dashboard(&all, &apply_view(&all, &view), &view, now);

        assert_eq!(response.stats.total, 3);
        assert_eq!(response.stats.overdue, 1);
        let ids: Vec<&str> = response.tasks.iter().map(|row| row.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "b"]);
        assert_eq!(response.sort.as_deref(), Some("due_date"));
        assert_eq!(response.filters, "category=All status=All priority=High");
    }
}
