//! Task update builder.
//!
//! Only `Some` fields are serialized, so a PATCH carries exactly the columns
//! that changed. Nullable columns use `Option<Option<_>>`: `Some(None)` writes
//! an explicit `null`.

use chrono::{DateTime, NaiveDate, Utc};
use desk_core::entities::{Task, validate_title};
use desk_core::enums::{Category, Priority, TaskStatus};
use desk_core::errors::CoreError;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TaskUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<Option<NaiveDate>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<Option<NaiveDate>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<Option<DateTime<Utc>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl TaskUpdate {
    /// The patch implied by moving `before` to `after` through
    /// `desk_core::lifecycle::apply_status_change`.
    #[must_use]
    pub fn from_status_change(before: &Task, after: &Task) -> Self {
        Self {
            status: Some(after.status),
            updated_at: Some(after.updated_at),
            completed_at: (before.completed_at != after.completed_at).then_some(after.completed_at),
            ..Self::default()
        }
    }

    /// True when no user-editable column is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.subject.is_none()
            && self.category.is_none()
            && self.priority.is_none()
            && self.status.is_none()
            && self.start_date.is_none()
            && self.due_date.is_none()
            && self.completed_at.is_none()
    }

    /// # Errors
    ///
    /// Returns `CoreError::Validation` for an empty update or a blank title.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.is_empty() {
            return Err(CoreError::Validation("update changes no fields".into()));
        }
        if let Some(title) = &self.title {
            validate_title(title)?;
        }
        Ok(())
    }

    /// Fold another update on top of this one; fields set in `other` win.
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        Self {
            title: other.title.or(self.title),
            description: other.description.or(self.description),
            subject: other.subject.or(self.subject),
            category: other.category.or(self.category),
            priority: other.priority.or(self.priority),
            status: other.status.or(self.status),
            start_date: other.start_date.or(self.start_date),
            due_date: other.due_date.or(self.due_date),
            completed_at: other.completed_at.or(self.completed_at),
            updated_at: other.updated_at.or(self.updated_at),
        }
    }
}

pub struct TaskUpdateBuilder(TaskUpdate);

impl Default for TaskUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(TaskUpdate::default())
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.0.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: Option<String>) -> Self {
        self.0.description = Some(description);
        self
    }

    #[must_use]
    pub fn subject(mut self, subject: Option<String>) -> Self {
        self.0.subject = Some(subject);
        self
    }

    #[must_use]
    pub const fn category(mut self, category: Category) -> Self {
        self.0.category = Some(category);
        self
    }

    #[must_use]
    pub const fn priority(mut self, priority: Priority) -> Self {
        self.0.priority = Some(priority);
        self
    }

    #[must_use]
    pub const fn status(mut self, status: TaskStatus) -> Self {
        self.0.status = Some(status);
        self
    }

    #[must_use]
    pub const fn start_date(mut self, start_date: Option<NaiveDate>) -> Self {
        self.0.start_date = Some(start_date);
        self
    }

    #[must_use]
    pub const fn due_date(mut self, due_date: Option<NaiveDate>) -> Self {
        self.0.due_date = Some(due_date);
        self
    }

    #[must_use]
    pub const fn updated_at(mut self, updated_at: DateTime<Utc>) -> Self {
        self.0.updated_at = Some(updated_at);
        self
    }

    #[must_use]
    pub fn build(self) -> TaskUpdate {
        self.0
    }
}
