//! Global Application State
//!
//! Reactive state management using Leptos signals, plus the task model and
//! the builders that turn raw form input into request payloads.

use leptos::*;

/// Minimum title length accepted by the backend, enforced client-side too
pub const MIN_TITLE_LEN: usize = 3;

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Current (filtered) task list from the API
    pub tasks: RwSignal<Vec<Task>>,
    /// Total count the backend reported for the current filter
    pub task_count: RwSignal<u64>,
    /// Most recently fetched-by-id task
    pub selected: RwSignal<Option<Task>>,
    /// Active list filter
    pub filter: RwSignal<TaskFilter>,
    /// Last health-check outcome (None = not checked yet)
    pub api_online: RwSignal<Option<bool>>,
    /// Global loading state
    pub loading: RwSignal<bool>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

/// Task record from the API
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    pub done: bool,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Opaque backend timestamp, parsed only for display
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Task {
    /// Creation date for display. Unparseable values are shown verbatim,
    /// missing values as "-".
    pub fn created_display(&self) -> String {
        match &self.created_at {
            None => "-".to_string(),
            Some(raw) => chrono::DateTime::parse_from_rfc3339(raw)
                .map(|dt| dt.format("%d %b %Y %H:%M").to_string())
                .unwrap_or_else(|_| raw.clone()),
        }
    }
}

/// Completion dimension of the list filter
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DoneFilter {
    #[default]
    All,
    Open,
    Done,
}

impl DoneFilter {
    pub fn from_value(value: &str) -> Self {
        match value {
            "open" => Self::Open,
            "done" => Self::Done,
            _ => Self::All,
        }
    }

    pub fn as_value(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Open => "open",
            Self::Done => "done",
        }
    }

    /// The `done` query parameter this filter implies, if any
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::All => None,
            Self::Open => Some(false),
            Self::Done => Some(true),
        }
    }
}

/// Active filter for the task list
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TaskFilter {
    pub done: DoneFilter,
    pub tag: String,
}

impl TaskFilter {
    /// Query parameters for `GET /tasks`. Inactive dimensions are omitted.
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(done) = self.done.as_bool() {
            params.push(("done", done.to_string()));
        }
        let tag = self.tag.trim();
        if !tag.is_empty() {
            params.push(("tag", tag.to_string()));
        }
        params
    }
}

/// Parse a comma-separated tag input: trim entries, drop empties.
/// Duplicates and ordering are preserved.
pub fn parse_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// Body for `POST /tasks`
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct NewTask {
    pub title: String,
    pub done: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl NewTask {
    /// Build a create request from raw form input. Short titles are rejected
    /// here, before any request is issued.
    pub fn from_form(title: &str, tags_input: &str, done: bool) -> Result<Self, String> {
        let title = title.trim();
        if title.chars().count() < MIN_TITLE_LEN {
            return Err(format!("Title must be at least {} characters.", MIN_TITLE_LEN));
        }
        let tags = parse_tags(tags_input);
        Ok(Self {
            title: title.to_string(),
            done,
            tags: if tags.is_empty() { None } else { Some(tags) },
        })
    }
}

/// Partial body for `PATCH /tasks/{id}`; unset fields are absent on the wire
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct TaskPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub done: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl TaskPatch {
    /// Build a patch from the update form. Clearing tags wins over the tag
    /// input; a blank title means "unchanged".
    pub fn from_form(
        title: &str,
        tags_input: &str,
        clear_tags: bool,
        done: Option<bool>,
    ) -> Self {
        let mut patch = Self::default();

        let title = title.trim();
        if !title.is_empty() {
            patch.title = Some(title.to_string());
        }

        if clear_tags {
            patch.tags = Some(Vec::new());
        } else {
            let tags = parse_tags(tags_input);
            if !tags.is_empty() {
                patch.tags = Some(tags);
            }
        }

        patch.done = done;
        patch
    }

    /// Patch that only flips the done flag
    pub fn toggle_done(current: bool) -> Self {
        Self {
            done: Some(!current),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.done.is_none() && self.tags.is_none()
    }
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        tasks: create_rw_signal(Vec::new()),
        task_count: create_rw_signal(0),
        selected: create_rw_signal(None),
        filter: create_rw_signal(TaskFilter::default()),
        api_online: create_rw_signal(None),
        loading: create_rw_signal(false),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
    };

    provide_context(state);
}

impl GlobalState {
    /// Id of the currently selected task, if any
    pub fn selected_id(&self) -> Option<String> {
        self.selected.get_untracked().map(|task| task.id)
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3200, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tags_trims_and_drops_empties() {
        assert_eq!(parse_tags("a, ,b ,,"), vec!["a", "b"]);
        assert_eq!(parse_tags(""), Vec::<String>::new());
        assert_eq!(parse_tags("  ,  "), Vec::<String>::new());
    }

    #[test]
    fn test_parse_tags_keeps_duplicates_and_order() {
        assert_eq!(parse_tags("b, a, b"), vec!["b", "a", "b"]);
    }

    #[test]
    fn test_new_task_rejects_short_title() {
        assert!(NewTask::from_form("ab", "", false).is_err());
        assert!(NewTask::from_form("  ab  ", "", false).is_err());
        assert!(NewTask::from_form("", "x,y", true).is_err());
    }

    #[test]
    fn test_new_task_from_form() {
        let task = NewTask::from_form("  buy milk  ", "home, errand", true).unwrap();
        assert_eq!(task.title, "buy milk");
        assert!(task.done);
        assert_eq!(task.tags, Some(vec!["home".to_string(), "errand".to_string()]));
    }

    #[test]
    fn test_new_task_omits_empty_tags() {
        let task = NewTask::from_form("buy milk", " , ", false).unwrap();
        assert_eq!(task.tags, None);

        let json = serde_json::to_value(&task).unwrap();
        assert!(json.get("tags").is_none());
    }

    #[test]
    fn test_patch_untouched_form_is_empty() {
        let patch = TaskPatch::from_form("", "", false, None);
        assert!(patch.is_empty());
        assert_eq!(serde_json::to_value(&patch).unwrap(), serde_json::json!({}));
    }

    #[test]
    fn test_patch_clear_tags_serializes_empty_array() {
        let patch = TaskPatch::from_form("", "ignored, tags", true, None);
        assert!(!patch.is_empty());

        let json = serde_json::to_value(&patch).unwrap();
        assert_eq!(json, serde_json::json!({ "tags": [] }));
    }

    #[test]
    fn test_patch_from_form_full() {
        let patch = TaskPatch::from_form(" new title ", "a, b", false, Some(true));
        assert_eq!(patch.title.as_deref(), Some("new title"));
        assert_eq!(patch.done, Some(true));
        assert_eq!(patch.tags, Some(vec!["a".to_string(), "b".to_string()]));
    }

    #[test]
    fn test_patch_toggle_done() {
        let patch = TaskPatch::toggle_done(true);
        assert_eq!(patch.done, Some(false));
        assert_eq!(
            serde_json::to_value(&patch).unwrap(),
            serde_json::json!({ "done": false })
        );

        assert_eq!(TaskPatch::toggle_done(false).done, Some(true));
    }

    #[test]
    fn test_filter_query_params() {
        assert!(TaskFilter::default().query_params().is_empty());

        let filter = TaskFilter {
            done: DoneFilter::Done,
            tag: "  home  ".to_string(),
        };
        assert_eq!(
            filter.query_params(),
            vec![("done", "true".to_string()), ("tag", "home".to_string())]
        );

        let filter = TaskFilter {
            done: DoneFilter::Open,
            tag: String::new(),
        };
        assert_eq!(filter.query_params(), vec![("done", "false".to_string())]);
    }

    #[test]
    fn test_done_filter_values() {
        for value in ["all", "open", "done"] {
            assert_eq!(DoneFilter::from_value(value).as_value(), value);
        }
        assert_eq!(DoneFilter::from_value("bogus"), DoneFilter::All);
    }

    #[test]
    fn test_task_wire_names() {
        let task: Task = serde_json::from_str(
            r#"{"id":"t1","title":"buy milk","done":false,"createdAt":"2024-05-01T10:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(task.id, "t1");
        assert!(task.tags.is_empty());
        assert_eq!(task.created_at.as_deref(), Some("2024-05-01T10:00:00Z"));
    }

    #[test]
    fn test_created_display_fallbacks() {
        let mut task = Task {
            id: "t1".to_string(),
            title: "buy milk".to_string(),
            done: false,
            tags: Vec::new(),
            created_at: None,
        };
        assert_eq!(task.created_display(), "-");

        task.created_at = Some("not-a-date".to_string());
        assert_eq!(task.created_display(), "not-a-date");

        task.created_at = Some("2024-05-01T10:30:00Z".to_string());
        assert_eq!(task.created_display(), "01 May 2024 10:30");
    }
}
