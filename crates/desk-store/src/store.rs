//! The persistence contract the task board is written against.

use std::future::Future;

use chrono::{DateTime, Utc};
use desk_core::entities::{NewTask, Profile, Task};

use crate::error::StoreError;
use crate::updates::TaskUpdate;

/// Remote task storage scoped to one signed-in user.
///
/// Implementations never reorder rows: `list_tasks` returns the backend's
/// newest-first order.
pub trait TaskStore: Send + Sync {
    /// All tasks owned by `user_id`, newest first.
    fn list_tasks(
        &self,
        user_id: &str,
    ) -> impl Future<Output = Result<Vec<Task>, StoreError>> + Send;

    /// Insert a task. The backend assigns `id`, `created_at` and `updated_at`.
    fn create_task(
        &self,
        user_id: &str,
        task: &NewTask,
        completed_at: Option<DateTime<Utc>>,
    ) -> impl Future<Output = Result<Task, StoreError>> + Send;

    /// Apply a partial update and return the stored row.
    fn update_task(
        &self,
        id: &str,
        update: &TaskUpdate,
    ) -> impl Future<Output = Result<Task, StoreError>> + Send;

    fn delete_task(&self, id: &str) -> impl Future<Output = Result<(), StoreError>> + Send;

    /// The profile row created at sign-up, if the backend has one.
    fn get_profile(
        &self,
        user_id: &str,
    ) -> impl Future<Output = Result<Option<Profile>, StoreError>> + Send;
}
