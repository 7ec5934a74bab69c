//! Filter and sort a task collection into an ordered view.
//!
//! The pipeline is recomputed from scratch on every call: clone, filter on
//! the active predicates (a conjunction), then stable-sort. The input slice is
//! never touched, and ties keep their incoming relative order.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::entities::Task;
use crate::enums::{Category, Priority, TaskStatus};
use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// Filters
// ---------------------------------------------------------------------------

/// Equality-or-wildcard predicate over one enumerated field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldFilter<T> {
    All,
    Only(T),
}

impl<T> Default for FieldFilter<T> {
    fn default() -> Self {
        Self::All
    }
}

impl<T: PartialEq + Copy> FieldFilter<T> {
    #[must_use]
    pub fn matches(&self, value: T) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => *wanted == value,
        }
    }
}

impl<T> From<Option<T>> for FieldFilter<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::All, Self::Only)
    }
}

impl<T> FromStr for FieldFilter<T>
where
    T: FromStr<Err = CoreError>,
{
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        s.parse().map(Self::Only)
    }
}

impl<T: fmt::Display> fmt::Display for FieldFilter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("All"),
            Self::Only(value) => value.fmt(f),
        }
    }
}

/// Conjunction of the three list filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterConfig {
    pub category: FieldFilter<Category>,
    pub status: FieldFilter<TaskStatus>,
    pub priority: FieldFilter<Priority>,
}

impl FilterConfig {
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        self.category.matches(task.category)
            && self.status.matches(task.status)
            && self.priority.matches(task.priority)
    }
}

// ---------------------------------------------------------------------------
// Sorting
// ---------------------------------------------------------------------------

/// Ordering applied after filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Earliest due date first; tasks without a due date go last.
    DueDate,
    /// High, then Medium, then Low.
    Priority,
    /// Most recently created first.
    Created,
}

impl SortKey {
    pub const ALL: [Self; 3] = [Self::DueDate, Self::Priority, Self::Created];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DueDate => "due_date",
            Self::Priority => "priority",
            Self::Created => "created",
        }
    }

    /// Parse a sort key, returning `None` for anything unrecognized.
    ///
    /// Callers treat `None` as "keep the filtered order".
    #[must_use]
    pub fn parse_lenient(raw: &str) -> Option<Self> {
        raw.parse().ok()
    }

    fn compare(self, a: &Task, b: &Task) -> Ordering {
        match self {
            Self::DueDate => match (a.due_date, b.due_date) {
                (Some(a), Some(b)) => a.cmp(&b),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            },
            Self::Priority => a.priority.ordinal().cmp(&b.priority.ordinal()),
            Self::Created => b.created_at.cmp(&a.created_at),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == wanted)
            .ok_or_else(|| CoreError::invalid_value("sort key", s))
    }
}

// ---------------------------------------------------------------------------
// View
// ---------------------------------------------------------------------------

/// Everything the list view needs to turn a collection into rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewConfig {
    pub filter: FilterConfig,
    /// `None` keeps the filtered order untouched.
    pub sort: Option<SortKey>,
}

/// Filter then stable-sort a copy of `tasks`.
#[must_use]
pub fn apply_view(tasks: &[Task], view: &ViewConfig) -> Vec<Task> {
    let mut out: Vec<Task> = tasks
        .iter()
        .filter(|task| view.filter.matches(task))
        .cloned()
        .collect();

    if let Some(key) = view.sort {
        out.sort_by(|a, b| key.compare(a, b));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, NaiveDate, TimeZone, Utc};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn created(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, day, 9, 0, 0).unwrap()
    }

    fn task(
        id: &str,
        category: Category,
        priority: Priority,
        status: TaskStatus,
        due: Option<(u32, u32)>,
        created_day: u32,
    ) -> Task {
        Task {
            id: id.into(),
            user_id: "u-1".into(),
            title: format!("task {id}"),
            description: None,
            subject: None,
            category,
            priority,
            status,
            start_date: None,
            due_date: due.and_then(|(m, d)| NaiveDate::from_ymd_opt(2026, m, d)),
            completed_at: None,
            created_at: created(created_day),
            updated_at: created(created_day),
        }
    }

    fn ids(tasks: &[Task]) -> Vec<&str> {
        tasks.iter().map(|t| t.id.as_str()).collect()
    }

    fn mixed() -> Vec<Task> {
        vec![
            task("a", Category::Exam, Priority::Low, TaskStatus::Pending, Some((11, 2)), 1),
            task("b", Category::Project, Priority::High, TaskStatus::Completed, None, 2),
            task("c", Category::Exam, Priority::High, TaskStatus::InProgress, Some((10, 25)), 3),
            task("d", Category::Assignment, Priority::Medium, TaskStatus::Pending, Some((10, 21)), 4),
            task("e", Category::Exam, Priority::Medium, TaskStatus::Completed, None, 5),
        ]
    }

    #[test]
    fn category_filter_keeps_only_matching_tasks_in_order() {
        let view = ViewConfig {
            filter: FilterConfig {
                category: FieldFilter::Only(Category::Exam),
                ..FilterConfig::default()
            },
            sort: None,
        };
        assert_eq!(ids(&apply_view(&mixed(), &view)), vec!["a", "c", "e"]);
    }

    #[test]
    fn wildcard_filters_are_a_no_op() {
        let tasks = mixed();
        let out = apply_view(&tasks, &ViewConfig::default());
        assert_eq!(out, tasks);
    }

    #[test]
    fn filters_combine_as_conjunction() {
        let view = ViewConfig {
            filter: FilterConfig {
                category: FieldFilter::Only(Category::Exam),
                status: FieldFilter::Only(TaskStatus::Completed),
                priority: FieldFilter::All,
            },
            sort: None,
        };
        assert_eq!(ids(&apply_view(&mixed(), &view)), vec!["e"]);
    }

    #[test]
    fn due_date_sort_puts_undated_last_and_keeps_their_order() {
        let view = ViewConfig {
            sort: Some(SortKey::DueDate),
            ..ViewConfig::default()
        };
        assert_eq!(ids(&apply_view(&mixed(), &view)), vec!["d", "c", "a", "b", "e"]);
    }

    #[test]
    fn priority_sort_is_stable_within_a_level() {
        let view = ViewConfig {
            sort: Some(SortKey::Priority),
            ..ViewConfig::default()
        };
        assert_eq!(ids(&apply_view(&mixed(), &view)), vec!["b", "c", "d", "e", "a"]);
    }

    #[test]
    fn created_sort_is_newest_first() {
        let tasks = vec![
            task("t1", Category::Exam, Priority::Low, TaskStatus::Pending, None, 1),
            task("t2", Category::Exam, Priority::Low, TaskStatus::Pending, None, 2),
            task("t3", Category::Exam, Priority::Low, TaskStatus::Pending, None, 3),
        ];
        let view = ViewConfig {
            sort: Some(SortKey::Created),
            ..ViewConfig::default()
        };
        assert_eq!(ids(&apply_view(&tasks, &view)), vec!["t3", "t2", "t1"]);
    }

    #[test]
    fn input_collection_is_not_reordered() {
        let tasks = mixed();
        let before = tasks.clone();
        let view = ViewConfig {
            sort: Some(SortKey::Priority),
            ..ViewConfig::default()
        };
        let _ = apply_view(&tasks, &view);
        assert_eq!(tasks, before);
    }

    #[rstest]
    #[case("due_date", Some(SortKey::DueDate))]
    #[case("due-date", Some(SortKey::DueDate))]
    #[case("Priority", Some(SortKey::Priority))]
    #[case("created", Some(SortKey::Created))]
    #[case("title", None)]
    #[case("", None)]
    fn lenient_sort_parsing(#[case] raw: &str, #[case] expected: Option<SortKey>) {
        assert_eq!(SortKey::parse_lenient(raw), expected);
    }

    #[rstest]
    #[case("All", FieldFilter::All)]
    #[case("all", FieldFilter::All)]
    #[case("In Progress", FieldFilter::Only(TaskStatus::InProgress))]
    fn field_filter_parses_wildcard(
        #[case] raw: &str,
        #[case] expected: FieldFilter<TaskStatus>,
    ) {
        assert_eq!(raw.parse::<FieldFilter<TaskStatus>>().unwrap(), expected);
    }

    #[test]
    fn field_filter_rejects_unknown_values() {
        assert!("Someday".parse::<FieldFilter<TaskStatus>>().is_err());
    }
}
