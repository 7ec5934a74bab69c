//! The action boundary between the view and the store.
//!
//! `TaskBoard` owns the in-memory task collection for one signed-in user.
//! Every mutation follows the same protocol:
//! 1. Validate locally; reject before any request
//! 2. Call the store
//! 3. On success, re-fetch the full collection
//! 4. On failure, log and return the error with the collection untouched

use chrono::{DateTime, Utc};
use desk_core::entities::{NewTask, Profile, Task};
use desk_core::enums::TaskStatus;
use desk_core::identity::AuthIdentity;
use desk_core::lifecycle::{apply_status_change, completion_stamp_for_new, toggle_completion};
use desk_core::pipeline::{ViewConfig, apply_view};
use desk_core::stats::TaskStats;

use crate::error::StoreError;
use crate::store::TaskStore;
use crate::updates::TaskUpdate;

pub struct TaskBoard<S> {
    store: S,
    identity: AuthIdentity,
    tasks: Vec<Task>,
    clock: fn() -> DateTime<Utc>,
}

impl<S: TaskStore> TaskBoard<S> {
    /// An empty board. Call [`TaskBoard::refresh`] to load the collection.
    #[must_use]
    pub fn new(store: S, identity: AuthIdentity) -> Self {
        Self {
            store,
            identity,
            tasks: Vec::new(),
            clock: Utc::now,
        }
    }

    /// Replace the wall clock used for lifecycle timestamps.
    #[must_use]
    pub fn with_clock(mut self, clock: fn() -> DateTime<Utc>) -> Self {
        self.clock = clock;
        self
    }

    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    #[must_use]
    pub const fn identity(&self) -> &AuthIdentity {
        &self.identity
    }

    #[must_use]
    pub fn find(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Filtered, sorted copy of the collection.
    #[must_use]
    pub fn view(&self, view: &ViewConfig) -> Vec<Task> {
        apply_view(&self.tasks, view)
    }

    /// Statistics over the full, unfiltered collection.
    #[must_use]
    pub fn stats(&self, now: DateTime<Utc>) -> TaskStats {
        TaskStats::compute(&self.tasks, now)
    }

    /// Fetch the signed-in user's tasks, replacing the collection.
    ///
    /// # Errors
    ///
    /// Returns the store error; the previous collection is kept.
    pub async fn refresh(&mut self) -> Result<&[Task], StoreError> {
        let fetched = logged("fetch", self.store.list_tasks(&self.identity.user_id).await)?;
        self.tasks = fetched;
        Ok(&self.tasks)
    }

    /// # Errors
    ///
    /// `StoreError::Validation` for a blank title, otherwise the store error.
    pub async fn create(&mut self, form: NewTask) -> Result<Task, StoreError> {
        form.validate()?;
        let completed_at = completion_stamp_for_new(form.status, (self.clock)());
        let created = logged(
            "create",
            self.store
                .create_task(&self.identity.user_id, &form, completed_at)
                .await,
        )?;
        self.refetch_after("create").await;
        Ok(created)
    }

    /// Apply a partial update. A status change goes through the
    /// completion-timestamp rule against the task's current state.
    ///
    /// # Errors
    ///
    /// `StoreError::Validation` for an empty update or blank title,
    /// `StoreError::NotFound` for a status change on a task not in the
    /// collection, otherwise the store error.
    pub async fn update(&mut self, id: &str, update: TaskUpdate) -> Result<Task, StoreError> {
        update.validate()?;
        let now = (self.clock)();

        let patch = match update.status {
            Some(status) => {
                let current = self
                    .find(id)
                    .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
                let next = apply_status_change(current, status, now);
                update.merge(TaskUpdate::from_status_change(current, &next))
            }
            None => TaskUpdate {
                updated_at: Some(now),
                ..update
            },
        };

        let updated = logged("update", self.store.update_task(id, &patch).await)?;
        self.refetch_after("update").await;
        Ok(updated)
    }

    /// # Errors
    ///
    /// See [`TaskBoard::update`].
    pub async fn set_status(&mut self, id: &str, status: TaskStatus) -> Result<Task, StoreError> {
        let update = TaskUpdate {
            status: Some(status),
            ..TaskUpdate::default()
        };
        self.update(id, update).await
    }

    /// Completed goes back to Pending; anything else becomes Completed.
    ///
    /// # Errors
    ///
    /// See [`TaskBoard::update`].
    pub async fn toggle_completion(&mut self, id: &str) -> Result<Task, StoreError> {
        let current = self
            .find(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        let target = toggle_completion(current.status);
        self.set_status(id, target).await
    }

    /// # Errors
    ///
    /// Returns the store error; `StoreError::NotFound` if nothing was deleted.
    pub async fn delete(&mut self, id: &str) -> Result<(), StoreError> {
        logged("delete", self.store.delete_task(id).await)?;
        self.refetch_after("delete").await;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns the store error.
    pub async fn profile(&self) -> Result<Option<Profile>, StoreError> {
        logged("profile", self.store.get_profile(&self.identity.user_id).await)
    }

    /// The mutation already landed, so a failed re-fetch only leaves the
    /// collection stale.
    async fn refetch_after(&mut self, action: &str) {
        if let Err(error) = self.refresh().await {
            tracing::warn!(%action, %error, "collection is stale after successful mutation");
        }
    }
}

fn logged<T>(action: &str, result: Result<T, StoreError>) -> Result<T, StoreError> {
    if let Err(error) = &result {
        tracing::warn!(%action, %error, "task action failed");
    }
    result
}
