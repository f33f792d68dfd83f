//! # Shared Sign-Up Types Library
//!
//! Plain data shared by the sign-up form component and whatever collaborator
//! eventually receives a submitted record. Everything here is free of UI and
//! runtime concerns so it can be reused by a future backend.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects
//!   - **[`dto::signup`]**: The form record ([`SignupValues`]) and the submission acknowledgment
//!   - **[`dto::country`]**: Country options offered by the country selector
//! - **[`utils`]**: Shared utility functions
//!   - **[`utils::mask_secret`]**: Hide secrets before they reach a log line
//!
//! ## Wire Format
//!
//! DTOs serialize to JSON with `serde`:
//! - Field names are **camelCase** in JSON (`confirmPassword`), snake_case in Rust
//! - Optional fields are omitted from JSON when `None`
//!
//! ## Usage
//!
//! ```rust
//! use shared::dto::signup::SignupValues;
//! use shared::utils::mask_secret;
//!
//! let values = SignupValues {
//!     name: "Al".to_string(),
//!     country: Some("US".to_string()),
//!     email: "a@b.com".to_string(),
//!     password: "secret1".to_string(),
//!     confirm_password: "secret1".to_string(),
//! };
//!
//! assert_eq!(mask_secret(&values.password), "*******");
//! ```

pub mod dto;
pub mod utils;

// Wildcard re-exports: shared is a DTO library where all exports are public API
pub use dto::*;
pub use utils::*;
