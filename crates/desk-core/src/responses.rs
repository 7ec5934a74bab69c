//! Response types rendered by `desk` commands.

use chrono::{DateTime, NaiveDate, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Task;
use crate::enums::{Category, Priority, TaskStatus};
use crate::lifecycle::{Dueness, classify_dueness, is_overdue};
use crate::stats::TaskStats;

/// One line of the task list, with derived due-date fields resolved at `now`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TaskRow {
    pub id: String,
    pub title: String,
    pub category: Category,
    pub priority: Priority,
    pub status: TaskStatus,
    pub subject: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub due_date: Option<NaiveDate>,
    pub due: String,
    pub overdue: bool,
}

impl TaskRow {
    #[must_use]
    pub fn from_task(task: &Task, now: DateTime<Utc>) -> Self {
        let dueness = classify_dueness(task, now);
        // Completed tasks show no countdown.
        let due = match (task.status.is_completed(), dueness) {
            (_, Dueness::NoDueDate) => String::from("-"),
            (true, _) => String::from("done"),
            (false, d) => d.label(),
        };
        Self {
            id: task.id.clone(),
            title: task.title.clone(),
            category: task.category,
            priority: task.priority,
            status: task.status,
            subject: task.subject.clone(),
            start_date: task.start_date,
            due_date: task.due_date,
            due,
            overdue: is_overdue(task, now),
        }
    }
}

/// Response from `desk dashboard`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DashboardResponse {
    pub stats: TaskStats,
    pub filters: String,
    pub sort: Option<String>,
    pub tasks: Vec<TaskRow>,
}

/// Response from an action that failed at the backend.
///
/// The displayed data is unchanged; the user may retry.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ActionNotice {
    pub ok: bool,
    pub action: String,
    pub notice: String,
}

/// Response from `desk task delete`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TaskDeleteResponse {
    pub deleted: bool,
    pub id: String,
    pub remaining: usize,
}
