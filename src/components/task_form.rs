//! Task Creation Form
//!
//! Form for creating new tasks, with client-side validation.

use leptos::*;

use crate::api;
use crate::state::global::{GlobalState, NewTask};

/// Create-task form component
#[component]
pub fn CreateTaskForm(
    /// Invoked after a task was created successfully
    #[prop(into)]
    on_created: Callback<()>,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (title, set_title) = create_signal(String::new());
    let (tags, set_tags) = create_signal(String::new());
    let (done, set_done) = create_signal(false);
    let (submitting, set_submitting) = create_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        // Validation happens before any request is issued
        let task = match NewTask::from_form(&title.get(), &tags.get(), done.get()) {
            Ok(task) => task,
            Err(message) => {
                state.show_error(&message);
                return;
            }
        };

        set_submitting.set(true);

        let state_clone = state.clone();
        spawn_local(async move {
            match api::create_task(&task).await {
                Ok(_created) => {
                    set_title.set(String::new());
                    set_tags.set(String::new());
                    set_done.set(false);
                    state_clone.show_success("Task created");
                    on_created.call(());
                }
                Err(e) => {
                    state_clone.show_error(&format!("Create failed: {}", e));
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <form on:submit=on_submit class="space-y-4">
            // Title
            <div>
                <label class="block text-sm text-gray-400 mb-2">"Title"</label>
                <input
                    type="text"
                    placeholder="At least 3 characters"
                    prop:value=move || title.get()
                    on:input=move |ev| set_title.set(event_target_value(&ev))
                    class="w-full bg-gray-700 rounded-lg px-4 py-3
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                />
            </div>

            // Tags
            <div>
                <label class="block text-sm text-gray-400 mb-2">"Tags (comma separated)"</label>
                <input
                    type="text"
                    placeholder="e.g., home, errand"
                    prop:value=move || tags.get()
                    on:input=move |ev| set_tags.set(event_target_value(&ev))
                    class="w-full bg-gray-700 rounded-lg px-4 py-3
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                />
            </div>

            // Done checkbox
            <label class="flex items-center space-x-2 text-sm text-gray-400">
                <input
                    type="checkbox"
                    prop:checked=move || done.get()
                    on:change=move |ev| set_done.set(event_target_checked(&ev))
                    class="rounded bg-gray-700 border-gray-600"
                />
                <span>"Already completed"</span>
            </label>

            // Submit button
            <button
                type="submit"
                disabled=move || submitting.get()
                class="w-full bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                       disabled:cursor-not-allowed rounded-lg py-3 font-semibold
                       transition-colors"
            >
                {move || if submitting.get() { "Creating..." } else { "Create Task" }}
            </button>
        </form>
    }
}
