//! Tasks Page
//!
//! Filterable task list with create, fetch-by-id, update and delete panels.

use leptos::*;

use crate::api;
use crate::components::{CreateTaskForm, ListSkeleton, TaskCard};
use crate::state::global::{DoneFilter, GlobalState, Task, TaskFilter, TaskPatch};

/// Reload the task list using the active filter. The list and count are
/// replaced wholesale; there is no merge across reloads.
pub(crate) async fn reload_tasks(state: GlobalState) {
    state.loading.set(true);

    match api::fetch_tasks(&state.filter.get_untracked()).await {
        Ok(list) => {
            state.task_count.set(list.count);
            state.tasks.set(list.items);
        }
        Err(e) => {
            state.show_error(&format!("Failed to load tasks: {}", e));
        }
    }

    state.loading.set(false);
}

/// Fetch one task into the detail view. The update form follows `selected`.
async fn load_task_by_id(state: GlobalState, id: String) {
    match api::fetch_task(&id).await {
        Ok(task) => {
            state.selected.set(Some(task));
            state.show_success("Task loaded");
        }
        Err(e) => {
            state.show_error(&format!("Fetch failed: {}", e));
        }
    }
}

/// Flip a task's done flag with a single PATCH, then reconcile the list and,
/// if it is the selected task, the detail view.
async fn toggle_task(state: GlobalState, task: Task) {
    match api::update_task(&task.id, &TaskPatch::toggle_done(task.done)).await {
        Ok(_updated) => {
            state.show_success("Status updated");
            reload_tasks(state.clone()).await;
            if state.selected_id().as_deref() == Some(task.id.as_str()) {
                load_task_by_id(state, task.id).await;
            }
        }
        Err(e) => {
            state.show_error(&format!("Toggle failed: {}", e));
        }
    }
}

/// Delete a task, then clear the detail view and reload the list.
async fn delete_task(state: GlobalState, id: String) {
    match api::delete_task(&id).await {
        Ok(()) => {
            state.show_success("Task deleted");
            state.selected.set(None);
            reload_tasks(state).await;
        }
        Err(e) => {
            state.show_error(&format!("Delete failed: {}", e));
        }
    }
}

fn confirm_delete() -> bool {
    web_sys::window()
        .map(|window| window.confirm_with_message("Delete this task?").unwrap_or(false))
        .unwrap_or(false)
}

/// Tasks page component
#[component]
pub fn Tasks() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    // Initial load on mount
    let state_for_effect = state.clone();
    create_effect(move |_| {
        let state = state_for_effect.clone();
        spawn_local(async move {
            reload_tasks(state).await;
        });
    });

    let loading = state.loading;
    let tasks_signal = state.tasks;
    let task_count = state.task_count;

    let state_for_refresh = state.clone();
    let refresh = move |_| {
        let state = state_for_refresh.clone();
        spawn_local(async move {
            reload_tasks(state).await;
        });
    };

    let state_for_list = state.clone();

    view! {
        <div class="space-y-8">
            // Page header
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Tasks"</h1>
                    <p class="text-gray-400 mt-1">
                        {move || format!("{} matching the current filter", task_count.get())}
                    </p>
                </div>

                <button
                    on:click=refresh
                    class="px-4 py-2 bg-gray-700 hover:bg-gray-600 rounded-lg font-medium transition-colors"
                >
                    "Refresh"
                </button>
            </div>

            <FilterBar />

            <div class="grid lg:grid-cols-3 gap-8 items-start">
                // Task list
                <section class="lg:col-span-2 space-y-3">
                    {move || {
                        if loading.get() {
                            return view! { <ListSkeleton count=4 /> }.into_view();
                        }

                        let tasks = tasks_signal.get();
                        if tasks.is_empty() {
                            return view! {
                                <div class="text-center py-12 bg-gray-800 rounded-xl">
                                    <p class="text-gray-400">"No tasks found."</p>
                                </div>
                            }.into_view();
                        }

                        let state = state_for_list.clone();
                        tasks.into_iter().map(|task| {
                            let state_for_view = state.clone();
                            let state_for_toggle = state.clone();
                            let state_for_delete = state.clone();

                            view! {
                                <TaskCard
                                    task=task
                                    on_view=move |id: String| {
                                        let state = state_for_view.clone();
                                        spawn_local(async move {
                                            load_task_by_id(state, id).await;
                                        });
                                    }
                                    on_toggle=move |task: Task| {
                                        let state = state_for_toggle.clone();
                                        spawn_local(async move {
                                            toggle_task(state, task).await;
                                        });
                                    }
                                    on_delete=move |id: String| {
                                        if !confirm_delete() {
                                            return;
                                        }
                                        let state = state_for_delete.clone();
                                        spawn_local(async move {
                                            delete_task(state, id).await;
                                        });
                                    }
                                />
                            }
                        }).collect_view()
                    }}
                </section>

                // Side panels
                <div class="space-y-8">
                    <section class="bg-gray-800 rounded-xl p-6">
                        <h2 class="text-xl font-semibold mb-4">"New Task"</h2>
                        <CreateTaskForm on_created={
                            let state = state.clone();
                            move |_| {
                                let state = state.clone();
                                spawn_local(async move {
                                    reload_tasks(state).await;
                                });
                            }
                        } />
                    </section>

                    <section class="bg-gray-800 rounded-xl p-6">
                        <h2 class="text-xl font-semibold mb-4">"Update Task"</h2>
                        <UpdatePanel />
                    </section>

                    <section class="bg-gray-800 rounded-xl p-6">
                        <h2 class="text-xl font-semibold mb-4">"Details"</h2>
                        <DetailPanel />
                    </section>
                </div>
            </div>
        </div>
    }
}

/// Filter controls for the task list
#[component]
fn FilterBar() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (done_value, set_done_value) = create_signal("all".to_string());
    let (tag, set_tag) = create_signal(String::new());

    let state_for_apply = state.clone();
    let on_apply = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        state_for_apply.filter.set(TaskFilter {
            done: DoneFilter::from_value(&done_value.get()),
            tag: tag.get().trim().to_string(),
        });

        let state = state_for_apply.clone();
        spawn_local(async move {
            reload_tasks(state).await;
        });
    };

    let state_for_clear = state;
    let on_clear = move |_| {
        set_done_value.set("all".to_string());
        set_tag.set(String::new());
        state_for_clear.filter.set(TaskFilter::default());

        let state = state_for_clear.clone();
        spawn_local(async move {
            reload_tasks(state).await;
        });
    };

    view! {
        <form on:submit=on_apply class="bg-gray-800 rounded-xl p-4 flex flex-wrap items-end gap-4">
            <div>
                <label class="block text-sm text-gray-400 mb-2">"Status"</label>
                <select
                    prop:value=move || done_value.get()
                    on:change=move |ev| set_done_value.set(event_target_value(&ev))
                    class="bg-gray-700 rounded-lg px-4 py-2
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                >
                    <option value="all">"All"</option>
                    <option value="open">"Open"</option>
                    <option value="done">"Completed"</option>
                </select>
            </div>

            <div class="flex-1 min-w-[12rem]">
                <label class="block text-sm text-gray-400 mb-2">"Tag"</label>
                <input
                    type="text"
                    placeholder="Filter by tag"
                    prop:value=move || tag.get()
                    on:input=move |ev| set_tag.set(event_target_value(&ev))
                    class="w-full bg-gray-700 rounded-lg px-4 py-2
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                />
            </div>

            <button
                type="submit"
                class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
            >
                "Apply"
            </button>
            <button
                type="button"
                on:click=on_clear
                class="px-4 py-2 bg-gray-700 hover:bg-gray-600 rounded-lg font-medium transition-colors"
            >
                "Clear"
            </button>
        </form>
    }
}

/// Fetch-by-id, update and delete panel. The form fields follow the selected
/// task and clear when the selection is dropped.
#[component]
fn UpdatePanel() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (id, set_id) = create_signal(String::new());
    let (title, set_title) = create_signal(String::new());
    let (tags, set_tags) = create_signal(String::new());
    let (clear_tags, set_clear_tags) = create_signal(false);
    let (done_value, set_done_value) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);

    // Prefill from the selected task, clear when deselected
    let selected = state.selected;
    create_effect(move |_| {
        match selected.get() {
            Some(task) => {
                set_id.set(task.id.clone());
                set_title.set(task.title.clone());
                set_tags.set(task.tags.join(", "));
                set_done_value.set(if task.done { "true" } else { "false" }.to_string());
            }
            None => {
                set_id.set(String::new());
                set_title.set(String::new());
                set_tags.set(String::new());
                set_done_value.set(String::new());
            }
        }
        set_clear_tags.set(false);
    });

    let state_for_fetch = state.clone();
    let on_fetch = move |_| {
        let id_value = id.get().trim().to_string();
        if id_value.is_empty() {
            state_for_fetch.show_error("Enter a task id.");
            return;
        }

        let state = state_for_fetch.clone();
        spawn_local(async move {
            load_task_by_id(state, id_value).await;
        });
    };

    let state_for_submit = state.clone();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let id_value = id.get().trim().to_string();
        if id_value.is_empty() {
            state_for_submit.show_error("Enter a task id.");
            return;
        }

        let done = match done_value.get().as_str() {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        };

        let patch = TaskPatch::from_form(&title.get(), &tags.get(), clear_tags.get(), done);
        if patch.is_empty() {
            state_for_submit.show_error("No fields to update.");
            return;
        }

        set_submitting.set(true);

        let state = state_for_submit.clone();
        spawn_local(async move {
            match api::update_task(&id_value, &patch).await {
                Ok(_updated) => {
                    state.show_success("Task updated");
                    reload_tasks(state.clone()).await;
                    load_task_by_id(state, id_value).await;
                }
                Err(e) => {
                    state.show_error(&format!("Update failed: {}", e));
                }
            }
            set_submitting.set(false);
        });
    };

    let state_for_delete = state;
    let on_delete = move |_| {
        let id_value = id.get().trim().to_string();
        if id_value.is_empty() {
            state_for_delete.show_error("Enter a task id to delete.");
            return;
        }
        if !confirm_delete() {
            return;
        }

        let state = state_for_delete.clone();
        spawn_local(async move {
            delete_task(state, id_value).await;
        });
    };

    view! {
        <form on:submit=on_submit class="space-y-4">
            // Task id
            <div>
                <label class="block text-sm text-gray-400 mb-2">"Task ID"</label>
                <div class="flex space-x-2">
                    <input
                        type="text"
                        placeholder="Paste or pick from the list"
                        prop:value=move || id.get()
                        on:input=move |ev| set_id.set(event_target_value(&ev))
                        class="flex-1 bg-gray-700 rounded-lg px-4 py-2 font-mono text-sm
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                    <button
                        type="button"
                        on:click=on_fetch
                        class="px-4 py-2 bg-gray-700 hover:bg-gray-600 rounded-lg font-medium transition-colors"
                    >
                        "Fetch"
                    </button>
                </div>
            </div>

            // Title
            <div>
                <label class="block text-sm text-gray-400 mb-2">"Title (blank = unchanged)"</label>
                <input
                    type="text"
                    prop:value=move || title.get()
                    on:input=move |ev| set_title.set(event_target_value(&ev))
                    class="w-full bg-gray-700 rounded-lg px-4 py-2
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                />
            </div>

            // Tags
            <div>
                <label class="block text-sm text-gray-400 mb-2">"Tags (comma separated)"</label>
                <input
                    type="text"
                    prop:value=move || tags.get()
                    on:input=move |ev| set_tags.set(event_target_value(&ev))
                    disabled=move || clear_tags.get()
                    class="w-full bg-gray-700 rounded-lg px-4 py-2 disabled:opacity-50
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                />
                <label class="flex items-center space-x-2 text-sm text-gray-400 mt-2">
                    <input
                        type="checkbox"
                        prop:checked=move || clear_tags.get()
                        on:change=move |ev| set_clear_tags.set(event_target_checked(&ev))
                        class="rounded bg-gray-700 border-gray-600"
                    />
                    <span>"Remove all tags"</span>
                </label>
            </div>

            // Done selector
            <div>
                <label class="block text-sm text-gray-400 mb-2">"Status"</label>
                <select
                    prop:value=move || done_value.get()
                    on:change=move |ev| set_done_value.set(event_target_value(&ev))
                    class="w-full bg-gray-700 rounded-lg px-4 py-2
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                >
                    <option value="">"(unchanged)"</option>
                    <option value="false">"Open"</option>
                    <option value="true">"Completed"</option>
                </select>
            </div>

            // Buttons
            <div class="flex space-x-3">
                <button
                    type="submit"
                    disabled=move || submitting.get()
                    class="flex-1 px-4 py-2 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                           rounded-lg font-medium transition-colors"
                >
                    {move || if submitting.get() { "Updating..." } else { "Update" }}
                </button>
                <button
                    type="button"
                    on:click=on_delete
                    class="px-4 py-2 bg-red-600 hover:bg-red-700 rounded-lg font-medium transition-colors"
                >
                    "Delete"
                </button>
            </div>
        </form>
    }
}

/// Read-only view of the selected task
#[component]
fn DetailPanel() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let selected = state.selected;

    view! {
        {move || {
            match selected.get() {
                None => view! {
                    <p class="text-gray-400 text-sm">"No task selected."</p>
                }.into_view(),
                Some(task) => {
                    let status = if task.done { "Completed" } else { "Open" };
                    let tags = if task.tags.is_empty() {
                        "No tags".to_string()
                    } else {
                        task.tags.join(", ")
                    };
                    let created = task.created_display();

                    view! {
                        <div class="space-y-3">
                            <h3 class="font-semibold text-lg">{task.title.clone()}</h3>
                            <DetailRow label="ID" value=task.id.clone() mono=true />
                            <DetailRow label="Status" value=status.to_string() />
                            <DetailRow label="Created" value=created />
                            <DetailRow label="Tags" value=tags />
                        </div>
                    }.into_view()
                }
            }
        }}
    }
}

#[component]
fn DetailRow(
    label: &'static str,
    value: String,
    #[prop(default = false)]
    mono: bool,
) -> impl IntoView {
    view! {
        <div class="flex items-baseline justify-between text-sm">
            <span class="text-gray-400">{label} ":"</span>
            <span class=if mono { "font-mono text-gray-300" } else { "text-gray-300" }>
                {value}
            </span>
        </div>
    }
}
