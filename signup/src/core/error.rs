//! # Common Error Types
//!
//! Consolidated error handling for the sign-up form.
//!
//! Field validation failures are *not* errors of this type: they are plain data
//! ([`crate::app::FieldErrors`]) rendered inline under each input. [`AppError`]
//! covers everything else that can go wrong around the form.
//!
//! ## Error Categories
//!
//! - **Validation**: Form-level summary of a failed submit attempt
//! - **Submission**: The collaborator receiving the record reported a failure
//! - **State**: A request that is illegal in the current form phase
//! - **Config**: Bad command line or environment value
//!
//! ## Usage Pattern
//!
//! ```rust
//! use signup::core::error::AppError;
//!
//! fn parse_delay(raw: &str) -> Result<u64, AppError> {
//!     raw.parse()
//!         .map_err(|_| AppError::Config(format!("invalid delay: {}", raw)))
//! }
//!
//! assert!(parse_delay("abc").is_err());
//! ```

use thiserror::Error;

/// Error type for everything around the form except per-field validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    /// Form-level validation summary.
    ///
    /// Carries the number of failing fields; the individual messages live in
    /// the form's field errors.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The sign-up collaborator rejected or failed to take the record.
    #[error("Submission error: {0}")]
    Submission(String),

    /// Operation not allowed in the current form phase.
    ///
    /// # Example
    ///
    /// ```rust
    /// use signup::core::error::AppError;
    ///
    /// let err = AppError::State("submission already in flight".to_string());
    /// assert_eq!(err.to_string(), "State error: submission already in flight");
    /// ```
    #[error("State error: {0}")]
    State(String),

    /// Invalid configuration value.
    #[error("Config error: {0}")]
    Config(String),
}

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;
