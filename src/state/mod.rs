//! State Management
//!
//! Global application state and the task domain model.

pub mod global;

pub use global::{provide_global_state, DoneFilter, GlobalState, Task, TaskFilter};
