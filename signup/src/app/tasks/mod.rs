//! # Async Tasks
//!
//! Work that runs on the Tokio runtime and reports back via [`crate::app::AppEvent`].

pub mod submit;
