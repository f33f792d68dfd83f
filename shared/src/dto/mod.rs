//! # Data Transfer Objects (DTOs)
//!
//! Data structures handed between the form component and its collaborators.
//!
//! ## Module Organization
//!
//! - [`signup`] - The sign-up record and the acknowledgment returned for it
//! - [`country`] - Options for the country selector
//!
//! ## Example JSON
//!
//! A submitted record, as written to the submission log (password fields masked):
//!
//! ```text
//! {
//!   "name": "Al",
//!   "country": "US",
//!   "email": "a@b.com",
//!   "password": "*******",
//!   "confirmPassword": "*******"
//! }
//! ```

pub mod country;
pub mod signup;

pub use country::*;
pub use signup::*;
