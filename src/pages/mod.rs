//! Pages
//!
//! Top-level page components for each route.

pub mod settings;
pub mod tasks;

pub use settings::Settings;
pub use tasks::Tasks;
