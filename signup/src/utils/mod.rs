//! # Utility Functions
//!
//! ## Modules
//!
//! - **[`validation`]**: Single-field input rules (name, email, password, country)
//! - **[`runtime`]**: Process-wide Tokio runtime for the submission hand-off
//!
//! ## Related Modules
//!
//! - [`shared::utils`]: Secret masking for logs
//! - [`crate::app::schema`]: Combines the rules here into a whole-form check

pub mod runtime;
pub mod validation;
