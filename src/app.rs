//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::components::{Nav, Toast};
use crate::pages::{Settings, Tasks};
use crate::state::global::{provide_global_state, GlobalState};

/// Run a health check against the configured backend, updating the status
/// signal and showing the outcome as a notice.
pub(crate) fn run_health_check(state: GlobalState) {
    spawn_local(async move {
        match api::check_health().await {
            Ok(health) => {
                state.api_online.set(Some(true));
                state.show_success(&format!("API ok • mongo: {}", health.mongo));
            }
            Err(e) => {
                state.api_online.set(Some(false));
                state.show_error(&format!("Health check failed: {}", e));
            }
        }
    });
}

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();

    // Check the backend once on startup
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    run_health_check(state);

    view! {
        <Router>
            <div class="min-h-screen bg-gray-900 text-white flex flex-col">
                // Navigation header
                <Nav />

                // Main content area
                <main class="flex-1 container mx-auto px-4 py-8 pb-24">
                    <Routes>
                        <Route path="/" view=Tasks />
                        <Route path="/settings" view=Settings />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                // Footer with backend status
                <Footer />

                // Toast notifications
                <Toast />
            </div>
        </Router>
    }
}

/// Footer component showing backend status
#[component]
fn Footer() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let api_online = state.api_online;
    let task_count = state.task_count;
    let loading = state.loading;

    view! {
        <footer class="fixed bottom-0 left-0 right-0 bg-gray-800 border-t border-gray-700 py-3 px-4">
            <div class="container mx-auto flex items-center justify-between text-sm">
                // Backend status
                <div class="flex items-center space-x-2">
                    {move || {
                        match api_online.get() {
                            Some(true) => view! {
                                <span class="flex items-center space-x-1 text-green-400">
                                    <span class="w-2 h-2 bg-green-400 rounded-full" />
                                    <span>"Online"</span>
                                </span>
                            }.into_view(),
                            Some(false) => view! {
                                <span class="flex items-center space-x-1 text-red-400">
                                    <span class="w-2 h-2 bg-red-400 rounded-full" />
                                    <span>"Offline"</span>
                                </span>
                            }.into_view(),
                            None => view! {
                                <span class="flex items-center space-x-1 text-gray-400">
                                    <span class="w-2 h-2 bg-gray-500 rounded-full" />
                                    <span>"Unknown"</span>
                                </span>
                            }.into_view(),
                        }
                    }}
                </div>

                // Task count for the current filter
                <div class="text-gray-400">
                    {move || format!("{} tasks", task_count.get())}
                </div>

                // Loading indicator
                {move || {
                    if loading.get() {
                        view! {
                            <div class="flex items-center space-x-2 text-primary-400">
                                <div class="loading-spinner w-4 h-4" />
                                <span>"Loading..."</span>
                            </div>
                        }.into_view()
                    } else {
                        view! {}.into_view()
                    }
                }}
            </div>
        </footer>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🔍"</div>
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-400 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href="/"
                class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
            >
                "Go to Tasks"
            </A>
        </div>
    }
}
