//! Task Card Component
//!
//! Displays a single task in the list with its actions.

use leptos::*;

use crate::state::global::Task;

/// Single task list item
#[component]
pub fn TaskCard(
    task: Task,
    #[prop(into)]
    on_view: Callback<String>,
    #[prop(into)]
    on_toggle: Callback<Task>,
    #[prop(into)]
    on_delete: Callback<String>,
) -> impl IntoView {
    let id_for_view = task.id.clone();
    let id_for_delete = task.id.clone();
    let task_for_toggle = task.clone();
    let created = task.created_display();

    let card_class = if task.done {
        "bg-gray-800 rounded-xl p-4 border border-gray-700 opacity-60"
    } else {
        "bg-gray-800 rounded-xl p-4 border border-gray-700 hover:border-gray-600 transition-colors"
    };

    let title_class = if task.done {
        "font-semibold line-through text-gray-400"
    } else {
        "font-semibold"
    };

    view! {
        <article class=card_class>
            <div class="flex items-start justify-between">
                <div>
                    <h3 class=title_class>{task.title.clone()}</h3>
                    <p class="text-gray-500 text-sm mt-1 font-mono">"ID: " {task.id.clone()}</p>
                    <p class="text-gray-500 text-sm">"Created: " {created}</p>
                </div>

                <div class="flex items-center space-x-2">
                    <button
                        on:click=move |_| on_view.call(id_for_view.clone())
                        class="px-3 py-1.5 rounded-lg text-sm bg-gray-700 text-gray-300 hover:bg-gray-600 transition-colors"
                    >
                        "Details"
                    </button>
                    <button
                        on:click=move |_| on_toggle.call(task_for_toggle.clone())
                        class="px-3 py-1.5 rounded-lg text-sm bg-primary-600 hover:bg-primary-700 transition-colors"
                    >
                        {if task.done { "Reopen" } else { "Complete" }}
                    </button>
                    <button
                        on:click=move |_| on_delete.call(id_for_delete.clone())
                        class="px-3 py-1.5 rounded-lg text-sm bg-red-600 hover:bg-red-700 transition-colors"
                    >
                        "Delete"
                    </button>
                </div>
            </div>

            // Tag badges
            <div class="flex flex-wrap gap-2 mt-3">
                {if task.tags.is_empty() {
                    view! {
                        <span class="text-xs px-2 py-0.5 rounded-full bg-gray-700 text-gray-500">
                            "no-tags"
                        </span>
                    }.into_view()
                } else {
                    task.tags.iter().map(|tag| view! {
                        <span class="text-xs px-2 py-0.5 rounded-full bg-gray-700 text-gray-300">
                            {tag.clone()}
                        </span>
                    }).collect_view()
                }}
            </div>
        </article>
    }
}
