//! UI Components
//!
//! Reusable Leptos components for the task client.

pub mod loading;
pub mod nav;
pub mod task_card;
pub mod task_form;
pub mod toast;

pub use loading::ListSkeleton;
pub use nav::Nav;
pub use task_card::TaskCard;
pub use task_form::CreateTaskForm;
pub use toast::Toast;
