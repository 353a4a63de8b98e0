//! Taskboard
//!
//! Task management frontend built with Leptos (WASM).
//!
//! # Features
//!
//! - Filterable task list (completion state, tag)
//! - Create, update, toggle and delete tasks
//! - Fetch-by-id detail view
//! - Configurable, locally persisted API base URL
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It communicates with an external task REST API via HTTP.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
