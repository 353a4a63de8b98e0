//! API Layer
//!
//! Thin HTTP client over the task REST API.

pub mod client;

pub use client::*;
