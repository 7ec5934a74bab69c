//! Summary statistics over the full task collection.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Task;
use crate::enums::TaskStatus;
use crate::lifecycle::is_overdue;

/// Counts shown above the task list.
///
/// Always computed over the unfiltered collection. `pending + in_progress +
/// completed == total` because the three statuses partition every task.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TaskStats {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    pub in_progress: usize,
    pub overdue: usize,
    /// Whole-number percentage of completed tasks, 0 for an empty collection.
    pub completion_rate: u8,
}

impl TaskStats {
    #[must_use]
    pub fn compute(tasks: &[Task], now: DateTime<Utc>) -> Self {
        let mut stats = Self {
            total: tasks.len(),
            ..Self::default()
        };

        for task in tasks {
            match task.status {
                TaskStatus::Completed => stats.completed += 1,
                TaskStatus::Pending => stats.pending += 1,
                TaskStatus::InProgress => stats.in_progress += 1,
            }
            if is_overdue(task, now) {
                stats.overdue += 1;
            }
        }

        stats.completion_rate = completion_rate(stats.completed, stats.total);
        stats
    }
}

/// `round(completed / total * 100)`, with halves rounding up.
#[must_use]
pub fn completion_rate(completed: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let rate = (completed.min(total) * 200 + total) / (total * 2);
    u8::try_from(rate).unwrap_or(100)
}
