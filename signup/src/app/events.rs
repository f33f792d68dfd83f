//! # Application Events
//!
//! Results sent from background tasks back to the UI thread.

use shared::SignupAck;

/// Async task results sent to main thread
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// The sign-up service answered a submission
    SubmitResult(Result<SignupAck, String>),
}
