//! Settings Page
//!
//! API endpoint configuration.

use leptos::*;

use crate::api;
use crate::app::run_health_check;
use crate::pages::tasks::reload_tasks;
use crate::state::global::GlobalState;

/// Settings page component
#[component]
pub fn Settings() -> impl IntoView {
    view! {
        <div class="space-y-8">
            // Header
            <div>
                <h1 class="text-3xl font-bold">"Settings"</h1>
                <p class="text-gray-400 mt-1">"Configure the task API connection"</p>
            </div>

            <ApiSettings />

            <AboutSection />
        </div>
    }
}

/// API connection settings
#[component]
fn ApiSettings() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (api_url, set_api_url) = create_signal(api::get_api_base());
    let (testing, set_testing) = create_signal(false);

    let state_for_test = state.clone();
    let test_connection = move |_| {
        set_testing.set(true);

        let url = api_url.get();
        set_api_url.set(api::set_api_base(&url));

        let state_clone = state_for_test.clone();
        spawn_local(async move {
            match api::check_health().await {
                Ok(health) => {
                    state_clone.api_online.set(Some(true));
                    state_clone.show_success(&format!("API ok • mongo: {}", health.mongo));
                }
                Err(e) => {
                    state_clone.api_online.set(Some(false));
                    state_clone.show_error(&format!("Health check failed: {}", e));
                }
            }
            set_testing.set(false);
        });
    };

    let state_for_save = state.clone();
    let save_url = move |_| {
        let url = api_url.get();
        if url.trim().is_empty() {
            state_for_save.show_error("Enter a valid base URL.");
            return;
        }

        set_api_url.set(api::set_api_base(&url));
        state_for_save.show_success("API URL saved");

        // Re-check the new endpoint and reload against it
        run_health_check(state_for_save.clone());
        let state = state_for_save.clone();
        spawn_local(async move {
            reload_tasks(state).await;
        });
    };

    let api_online = state.api_online;

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"API Connection"</h2>

            <div class="space-y-4">
                // API URL
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Task API base URL"</label>
                    <div class="flex space-x-2">
                        <input
                            type="text"
                            prop:value=move || api_url.get()
                            on:input=move |ev| set_api_url.set(event_target_value(&ev))
                            class="flex-1 bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                        <button
                            on:click=test_connection
                            disabled=move || testing.get()
                            class="px-4 py-3 bg-gray-600 hover:bg-gray-500 disabled:bg-gray-700
                                   rounded-lg font-medium transition-colors"
                        >
                            {move || if testing.get() { "Testing..." } else { "Test" }}
                        </button>
                        <button
                            on:click=save_url
                            class="px-4 py-3 bg-primary-600 hover:bg-primary-700
                                   rounded-lg font-medium transition-colors"
                        >
                            "Save"
                        </button>
                    </div>
                    <p class="text-xs text-gray-500 mt-2">
                        "Trailing slashes are removed. The value is kept in local storage."
                    </p>
                </div>

                // Connection status
                <div class="flex items-center space-x-2">
                    <span class="text-sm text-gray-400">"Status:"</span>
                    {move || {
                        match api_online.get() {
                            Some(true) => view! {
                                <span class="text-green-400">"✓ Online"</span>
                            }.into_view(),
                            Some(false) => view! {
                                <span class="text-red-400">"✕ Offline"</span>
                            }.into_view(),
                            None => view! {
                                <span class="text-gray-400">"Not checked"</span>
                            }.into_view(),
                        }
                    }}
                </div>
            </div>
        </section>
    }
}

/// About section
#[component]
fn AboutSection() -> impl IntoView {
    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"About Taskboard"</h2>

            <div class="space-y-4 text-gray-300">
                <p>
                    "Taskboard is a thin client for a task management REST API. "
                    "Tasks live on the backend; this page only fetches, renders and edits them."
                </p>

                <p class="text-sm text-gray-400">
                    "Version 0.1.0 • Leptos (WASM)"
                </p>
            </div>
        </section>
    }
}
