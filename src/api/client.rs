//! HTTP API Client
//!
//! Functions for communicating with the task REST API.

use gloo_net::http::{Request, Response};

use crate::state::global::{NewTask, Task, TaskFilter, TaskPatch};

/// Fallback API base URL when nothing is configured
pub const DEFAULT_API_BASE: &str = "/api";

/// Local storage key for the configured base URL
const STORAGE_KEY: &str = "taskboard_api_url";

/// Trim trailing slashes from a base URL. Idempotent.
pub fn normalize_base_url(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

/// Get the API base URL: local storage first, then the page-provided
/// `API_BASE_URL` global, then the default.
pub fn get_api_base() -> String {
    let url = stored_api_base()
        .or_else(page_api_base)
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
    normalize_base_url(&url)
}

fn stored_api_base() -> Option<String> {
    let window = web_sys::window()?;
    let storage = window.local_storage().ok()??;
    storage.get_item(STORAGE_KEY).ok()?
}

/// A deployment can inject `window.API_BASE_URL` from its index page
fn page_api_base() -> Option<String> {
    let window = web_sys::window()?;
    let value = js_sys::Reflect::get(&window, &"API_BASE_URL".into()).ok()?;
    value.as_string().filter(|url| !url.is_empty())
}

/// Persist the API base URL in local storage, trailing slashes trimmed.
/// Returns the stored value.
pub fn set_api_base(url: &str) -> String {
    let trimmed = normalize_base_url(url);
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(STORAGE_KEY, &trimmed);
        }
    }
    trimmed
}

// ============ Response Types ============

#[derive(Debug, serde::Deserialize)]
pub struct TaskListResponse {
    pub items: Vec<Task>,
    pub count: u64,
}

#[derive(Debug, serde::Deserialize)]
pub struct HealthResponse {
    pub mongo: String,
}

/// Error body shape the backend uses; either field may carry the message
#[derive(Debug, Default, serde::Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    detail: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// Extract a human-readable message from an error response:
/// `detail` first, then `message`, then the HTTP status text.
async fn error_message(response: Response) -> String {
    let status_text = response.status_text();
    match response.json::<ApiErrorBody>().await {
        Ok(body) => body.detail.or(body.message).unwrap_or(status_text),
        Err(_) => status_text,
    }
}

// ============ API Functions ============

/// Check API health
pub async fn check_health() -> Result<HealthResponse, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/health", api_base))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    response.json().await.map_err(|e| format!("Parse error: {}", e))
}

/// Fetch the task list for the given filter
pub async fn fetch_tasks(filter: &TaskFilter) -> Result<TaskListResponse, String> {
    let api_base = get_api_base();
    let params = filter.query_params();

    let response = Request::get(&format!("{}/tasks", api_base))
        .query(params.iter().map(|(key, value)| (*key, value.as_str())))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    response.json().await.map_err(|e| format!("Parse error: {}", e))
}

/// Fetch a single task by id
pub async fn fetch_task(id: &str) -> Result<Task, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/tasks/{}", api_base, id))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    response.json().await.map_err(|e| format!("Parse error: {}", e))
}

/// Create a new task
pub async fn create_task(task: &NewTask) -> Result<Task, String> {
    let api_base = get_api_base();

    let response = Request::post(&format!("{}/tasks", api_base))
        .json(task)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    response.json().await.map_err(|e| format!("Parse error: {}", e))
}

/// Apply a partial update to a task
pub async fn update_task(id: &str, patch: &TaskPatch) -> Result<Task, String> {
    let api_base = get_api_base();

    let response = Request::patch(&format!("{}/tasks/{}", api_base, id))
        .json(patch)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    response.json().await.map_err(|e| format!("Parse error: {}", e))
}

/// Delete a task. The backend answers 204 No Content on success.
pub async fn delete_task(id: &str) -> Result<(), String> {
    let api_base = get_api_base();

    let response = Request::delete(&format!("{}/tasks/{}", api_base, id))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_trims_trailing_slashes() {
        assert_eq!(normalize_base_url("http://localhost:8080/api/"), "http://localhost:8080/api");
        assert_eq!(normalize_base_url("http://localhost:8080/api///"), "http://localhost:8080/api");
        assert_eq!(normalize_base_url("/api"), "/api");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let once = normalize_base_url("http://example.com/api//");
        assert_eq!(normalize_base_url(&once), once);
    }
}
