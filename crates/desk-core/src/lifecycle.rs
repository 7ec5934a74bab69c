//! Status transitions and due-date classification.
//!
//! The one business rule in the system lives here: entering `Completed`
//! stamps `completed_at`, leaving it clears the stamp, and re-saving a task
//! that is already `Completed` leaves the stamp alone.
//!
//! Due dates are calendar dates. They are anchored at UTC midnight, so "today"
//! means the current UTC calendar day regardless of the local timezone.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Task;
use crate::enums::TaskStatus;

const MILLIS_PER_DAY: i64 = 86_400_000;

/// Move `task` to `new_status`, applying the completion-timestamp rule.
///
/// Always sets `status` and refreshes `updated_at` to `now`.
#[must_use]
pub fn apply_status_change(task: &Task, new_status: TaskStatus, now: DateTime<Utc>) -> Task {
    let completed_at = if new_status.is_completed() && !task.status.is_completed() {
        Some(now)
    } else if !new_status.is_completed() && task.completed_at.is_some() {
        None
    } else {
        task.completed_at
    };

    Task {
        status: new_status,
        completed_at,
        updated_at: now,
        ..task.clone()
    }
}

/// Target status for the quick-complete toggle.
#[must_use]
pub const fn toggle_completion(status: TaskStatus) -> TaskStatus {
    match status {
        TaskStatus::Completed => TaskStatus::Pending,
        TaskStatus::Pending | TaskStatus::InProgress => TaskStatus::Completed,
    }
}

/// `completed_at` for a task created directly in `status`.
#[must_use]
pub fn completion_stamp_for_new(status: TaskStatus, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
    status.is_completed().then_some(now)
}

/// The instant a calendar due date is measured from.
#[must_use]
pub fn due_instant(due_date: NaiveDate) -> DateTime<Utc> {
    due_date.and_time(NaiveTime::MIN).and_utc()
}

/// Whole days from `now` until `due_date`, rounded up.
///
/// Positive means days remain, zero means due today, negative means past due.
#[must_use]
pub fn days_until_due(due_date: NaiveDate, now: DateTime<Utc>) -> i64 {
    let diff = (due_instant(due_date) - now).num_milliseconds();
    // Integer division truncates toward zero, which is already the ceiling
    // for negative differences.
    let days = diff / MILLIS_PER_DAY;
    if diff % MILLIS_PER_DAY > 0 { days + 1 } else { days }
}

/// How a task stands relative to its due date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Dueness {
    NoDueDate,
    DueToday,
    OnTrack { days_left: u32 },
    Overdue { days_overdue: u32 },
}

impl Dueness {
    /// Short label for list rows: `Today`, `3d left`, `2d overdue`.
    #[must_use]
    pub fn label(self) -> String {
        match self {
            Self::NoDueDate => "No due date".to_string(),
            Self::DueToday => "Today".to_string(),
            Self::OnTrack { days_left } => format!("{days_left}d left"),
            Self::Overdue { days_overdue } => format!("{days_overdue}d overdue"),
        }
    }

    #[must_use]
    pub const fn is_overdue(self) -> bool {
        matches!(self, Self::Overdue { .. })
    }
}

/// Classify a task against its due date at `now`.
///
/// A completed task is never overdue: a past due date on a completed task
/// classifies as `OnTrack { days_left: 0 }`.
#[must_use]
pub fn classify_dueness(task: &Task, now: DateTime<Utc>) -> Dueness {
    let Some(due_date) = task.due_date else {
        return Dueness::NoDueDate;
    };

    let days = days_until_due(due_date, now);
    let clamp = |d: i64| u32::try_from(d.unsigned_abs()).unwrap_or(u32::MAX);

    match days {
        0 => Dueness::DueToday,
        d if d < 0 && task.status.is_completed() => Dueness::OnTrack { days_left: 0 },
        d if d < 0 => Dueness::Overdue {
            days_overdue: clamp(d),
        },
        d => Dueness::OnTrack {
            days_left: clamp(d),
        },
    }
}

/// Overdue as counted by the statistics: not completed, and the due date's
/// UTC midnight is strictly before `now`.
#[must_use]
pub fn is_overdue(task: &Task, now: DateTime<Utc>) -> bool {
    !task.status.is_completed() && task.due_date.is_some_and(|due| due_instant(due) < now)
}
