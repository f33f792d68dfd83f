//! # App Trait
//!
//! The surface screen renderers work against, so rendering never depends on
//! how the form's handlers are wired.

use std::sync::Arc;

use parking_lot::RwLock;
use shared::CountryOption;

use crate::app::handlers::form::SubmitOutcome;
use crate::app::{AppState, SignupField};
use crate::core::error::Result;

/// Trait for application-like types that screen renderers can use.
pub trait AppLike {
    /// Get access to the application state.
    fn state(&self) -> &Arc<RwLock<AppState>>;

    // Binding
    fn handle_field_change(&mut self, field: SignupField, value: String);
    fn handle_country_select(&mut self, option: Option<CountryOption>) -> Result<()>;

    // Submission
    fn handle_submit_click(&mut self) -> Result<SubmitOutcome>;
    fn handle_reset(&mut self) -> Result<()>;
}
