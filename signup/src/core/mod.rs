//! # Core Abstractions
//!
//! Error types and the service trait the form submits through.
//!
//! ## Modules
//!
//! - **[`error`]**: Application error types (`AppError`, `Result<T>`)
//! - **[`service`]**: The [`SignupService`] trait and its placeholder implementation
//!
//! ## Dependency Injection
//!
//! The form only knows the trait, so tests swap in their own implementation:
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use signup::core::service::{ConsoleSignupService, SignupService};
//!
//! let service: Arc<dyn SignupService> = Arc::new(ConsoleSignupService::default());
//! ```

pub mod error;
pub mod service;

pub use error::{AppError, Result};
pub use service::{ConsoleSignupService, SignupService};
