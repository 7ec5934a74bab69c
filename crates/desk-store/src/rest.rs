//! `TaskStore` over the backend's PostgREST endpoint (`{url}/rest/v1`).

use chrono::{DateTime, Utc};
use desk_core::entities::{NewTask, Profile, Task};
use reqwest::{RequestBuilder, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::StoreError;
use crate::store::TaskStore;
use crate::updates::TaskUpdate;

const TASKS: &str = "tasks";
const PROFILES: &str = "profiles";

/// Row body for an insert. `id` and the timestamps are left to the backend.
#[derive(Serialize)]
struct InsertRow<'a> {
    user_id: &'a str,
    #[serde(flatten)]
    task: &'a NewTask,
    #[serde(skip_serializing_if = "Option::is_none")]
    completed_at: Option<DateTime<Utc>>,
}

/// One user's view of the `tasks` and `profiles` tables.
#[derive(Debug, Clone)]
pub struct RestStore {
    http: reqwest::Client,
    base_url: String,
    anon_key: String,
    access_token: String,
}

impl RestStore {
    /// `project_url` is the backend root; `/rest/v1` is appended.
    #[must_use]
    pub fn new(project_url: &str, anon_key: &str, access_token: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: format!("{}/rest/v1", project_url.trim_end_matches('/')),
            anon_key: anon_key.to_string(),
            access_token: access_token.to_string(),
        }
    }

    fn request(&self, method: reqwest::Method, table: &str) -> RequestBuilder {
        self.http
            .request(method, format!("{}/{table}", self.base_url))
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.access_token)
    }

    fn returning(req: RequestBuilder) -> RequestBuilder {
        req.header("Prefer", "return=representation")
    }

    async fn rows<T: DeserializeOwned>(req: RequestBuilder) -> Result<Vec<T>, StoreError> {
        let resp = req.send().await?;
        let status = resp.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(StoreError::Unauthorized);
        }
        let body = resp.text().await?;
        if !status.is_success() {
            return Err(StoreError::Status {
                status: status.as_u16(),
                body,
            });
        }
        serde_json::from_str(&body).map_err(|e| StoreError::Decode(e.to_string()))
    }

    async fn single<T: DeserializeOwned>(req: RequestBuilder, id: &str) -> Result<T, StoreError> {
        Self::rows(req)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }
}

fn eq(value: &str) -> String {
    format!("eq.{value}")
}

impl TaskStore for RestStore {
    async fn list_tasks(&self, user_id: &str) -> Result<Vec<Task>, StoreError> {
        tracing::debug!(%user_id, "fetching tasks");
        let owner = eq(user_id);
        let req = self.request(reqwest::Method::GET, TASKS).query(&[
            ("select", "*"),
            ("user_id", owner.as_str()),
            ("order", "created_at.desc"),
        ]);
        Self::rows(req).await
    }

    async fn create_task(
        &self,
        user_id: &str,
        task: &NewTask,
        completed_at: Option<DateTime<Utc>>,
    ) -> Result<Task, StoreError> {
        tracing::debug!(title = %task.title, "creating task");
        let row = InsertRow {
            user_id,
            task,
            completed_at,
        };
        let req = Self::returning(self.request(reqwest::Method::POST, TASKS)).json(&row);
        Self::single(req, "(new)").await
    }

    async fn update_task(&self, id: &str, update: &TaskUpdate) -> Result<Task, StoreError> {
        tracing::debug!(%id, "updating task");
        let req = Self::returning(self.request(reqwest::Method::PATCH, TASKS))
            .query(&[("id", eq(id))])
            .json(update);
        Self::single(req, id).await
    }

    async fn delete_task(&self, id: &str) -> Result<(), StoreError> {
        tracing::debug!(%id, "deleting task");
        let req = Self::returning(self.request(reqwest::Method::DELETE, TASKS))
            .query(&[("id", eq(id))]);
        Self::single::<Task>(req, id).await.map(|_| ())
    }

    async fn get_profile(&self, user_id: &str) -> Result<Option<Profile>, StoreError> {
        let id = eq(user_id);
        let req = self
            .request(reqwest::Method::GET, PROFILES)
            .query(&[("select", "*"), ("id", id.as_str())]);
        Ok(Self::rows(req).await?.into_iter().next())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn insert_row_flattens_form_and_owner() {
        let mut form = NewTask::new("Essay");
        form.subject = Some("History".into());
        let row = InsertRow {
            user_id: "u-1",
            task: &form,
            completed_at: None,
        };
        assert_eq!(
            serde_json::to_value(&row).unwrap(),
            json!({
                "user_id": "u-1",
                "title": "Essay",
                "description": null,
                "subject": "History",
                "category": "Assignment",
                "priority": "Medium",
                "status": "Pending",
                "start_date": null,
                "due_date": null
            })
        );
    }

    #[test]
    fn base_url_joins_rest_path() {
        let store = RestStore::new("https://abcd.supabase.co/", "anon", "tok");
        assert_eq!(store.base_url, "https://abcd.supabase.co/rest/v1");
    }
}
