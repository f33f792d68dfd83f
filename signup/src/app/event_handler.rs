//! # Event Handler
//!
//! Applies results from background tasks to the form state.

use shared::SignupAck;

use crate::app::state::{FormPhase, NotificationLevel};
use crate::app::{App, AppEvent};
use crate::core::error::AppError;

/// Trait for event handling implementation
pub(crate) trait AppEventHandler {
    fn handle_event_impl(&mut self, event: AppEvent);
}

impl AppEventHandler for App {
    /// Handle async event results
    ///
    /// Acquires the write lock once per event.
    fn handle_event_impl(&mut self, event: AppEvent) {
        match event {
            AppEvent::SubmitResult(result) => {
                self.handle_submit_result(result);
            }
        }
    }
}

impl App {
    fn handle_submit_result(&mut self, result: Result<SignupAck, String>) {
        tracing::info!(event = "SubmitResult", success = result.is_ok(), "Processing submit result");

        let mut state = self.state.write();
        if state.form.phase != FormPhase::Submitting {
            tracing::warn!(phase = ?state.form.phase, "Submit result arrived with no submission in flight");
            return;
        }

        match result {
            Ok(ack) => {
                state.form.phase = FormPhase::Success;
                state.form.form_error = None;
                state.form.submissions_accepted += 1;

                let message = format!("Welcome, {}! {}", ack.name, ack.message);
                state.pending_notifications.push((NotificationLevel::Success, message));

                tracing::info!(
                    ack_id = %ack.id,
                    received_at = %ack.received_at,
                    accepted = state.form.submissions_accepted,
                    "Sign-up acknowledged"
                );
                state.form.last_ack = Some(ack);
            }
            Err(e) => {
                let err = AppError::Submission(e);
                tracing::warn!(error = %err, "Sign-up failed");

                state.form.phase = FormPhase::Error;
                state.form.form_error = Some(err.to_string());
                state
                    .pending_notifications
                    .push((NotificationLevel::Error, err.to_string()));
            }
        }
    }
}
