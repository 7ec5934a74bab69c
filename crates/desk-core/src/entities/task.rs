use chrono::{DateTime, NaiveDate, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

use crate::enums::{Category, Priority, TaskStatus};
use crate::errors::CoreError;

/// A user-owned to-do item.
///
/// `id`, `user_id` and `created_at` are assigned by the backend and never
/// change. `completed_at` is maintained by [`crate::lifecycle`].
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Task {
    pub id: String,
    pub user_id: String,
    pub title: String,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub subject: Option<String>,
    pub category: Category,
    pub priority: Priority,
    pub status: TaskStatus,
    pub start_date: Option<NaiveDate>,
    pub due_date: Option<NaiveDate>,
    pub completed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields submitted by the creation form.
///
/// The backend fills in `id`, `created_at` and `updated_at`; the owner comes
/// from the signed-in identity.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewTask {
    pub title: String,
    pub description: Option<String>,
    pub subject: Option<String>,
    pub category: Category,
    pub priority: Priority,
    pub status: TaskStatus,
    pub start_date: Option<NaiveDate>,
    pub due_date: Option<NaiveDate>,
}

impl NewTask {
    /// A Pending, Medium-priority Assignment with the given title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            subject: None,
            category: Category::Assignment,
            priority: Priority::Medium,
            status: TaskStatus::Pending,
            start_date: None,
            due_date: None,
        }
    }

    /// Check the form before it is sent anywhere.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if the title is blank.
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_title(&self.title)
    }
}

/// Titles must contain at least one non-whitespace character.
///
/// # Errors
///
/// Returns `CoreError::Validation` for empty or whitespace-only titles.
pub fn validate_title(title: &str) -> Result<(), CoreError> {
    if title.trim().is_empty() {
        return Err(CoreError::Validation("title must not be empty".into()));
    }
    Ok(())
}

/// The backend stores missing text as `""` as often as `null`.
fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.filter(|s| !s.trim().is_empty()))
}
