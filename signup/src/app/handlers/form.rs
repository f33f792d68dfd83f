//! # Form Handlers
//!
//! Field binding, the country select controller, submit and reset.

use std::sync::Arc;

use async_channel::Sender;
use parking_lot::RwLock;
use shared::{find_country, CountryOption};

use crate::app::events::AppEvent;
use crate::app::schema::SignupSchema;
use crate::app::state::{
    AppState, FieldErrors, FormPhase, FormState, NotificationLevel, SignupField,
};
use crate::app::tasks;
use crate::core::error::{AppError, Result};

/// What a submit click led to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The form has no submit behavior (markup-only revision)
    Ignored,
    /// Validation failed; errors are on the form
    Rejected(FieldErrors),
    /// The record was handed to the sign-up service
    Started,
}

/// Store an edited text value.
///
/// A country code goes through the select controller, so the selector's
/// option and the stored code never disagree. Unknown codes clear both.
///
/// Internal handler function - use [`crate::app::App::handle_field_change`] instead.
pub(crate) fn handle_field_change(state: Arc<RwLock<AppState>>, field: SignupField, value: String) {
    if field.is_select() {
        let option = find_country(value.trim());
        if let Err(e) = handle_country_select(state, option) {
            tracing::debug!(field = %field, error = %e, "Ignoring edit of a field this revision does not show");
        }
        return;
    }

    let mut state = state.write();
    let form = &mut state.form;
    if field.value(&form.values) == value {
        return;
    }

    field.set(&mut form.values, value);
    form.errors.remove(&field);
}

/// Select controller: reduce the option object emitted by the country
/// selector to the plain code kept in the record.
///
/// Internal handler function - use [`crate::app::App::handle_country_select`] instead.
pub(crate) fn handle_country_select(
    state: Arc<RwLock<AppState>>,
    option: Option<CountryOption>,
) -> Result<()> {
    let mut state = state.write();
    if !state.revision.has_country() {
        return Err(AppError::State(format!(
            "revision '{}' has no country field",
            state.revision
        )));
    }

    let value = option
        .as_ref()
        .map(|option| option.value.clone())
        .unwrap_or_default();

    tracing::debug!(country = %value, "Country selected");

    let form = &mut state.form;
    form.selected_country = option;
    SignupField::Country.set(&mut form.values, value);
    form.errors.remove(&SignupField::Country);
    Ok(())
}

/// Validate the whole record and, if it passes, start the submission.
///
/// Rejected with [`AppError::State`] while a submission is in flight, so a
/// double click can never produce a second submission.
///
/// Internal handler function - use [`crate::app::App::handle_submit_click`] instead.
pub(crate) fn handle_submit_click(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
) -> Result<SubmitOutcome> {
    let mut state = state.write();

    let Some(schema) = SignupSchema::for_revision(state.revision) else {
        tracing::debug!(revision = %state.revision, "Submit on a form without behavior");
        return Ok(SubmitOutcome::Ignored);
    };

    if !state.form.phase.accepts_submit() {
        tracing::debug!(phase = ?state.form.phase, "Submit rejected, submission already in flight");
        return Err(AppError::State("submission already in flight".to_string()));
    }

    state.form.phase = FormPhase::Validating;
    state.form.form_error = None;

    if let Err(errors) = schema.validate(&state.form.values) {
        let summary = validation_summary(&errors);
        tracing::info!(
            error = %summary,
            invalid_fields = ?errors.keys().map(SignupField::key).collect::<Vec<_>>(),
            "Submit blocked by validation"
        );
        state.form.errors = errors.clone();
        state.form.phase = FormPhase::Error;
        return Ok(SubmitOutcome::Rejected(errors));
    }

    state.form.errors.clear();

    let Some(service) = state.signup_service.clone() else {
        state.form.phase = FormPhase::Error;
        state.form.form_error = Some("Sign-up service not available".to_string());
        return Err(AppError::State("sign-up service not available".to_string()));
    };

    state.form.phase = FormPhase::Submitting;
    let values = state.form.values.clone();
    drop(state);

    tracing::info!("Form valid, submitting");
    tasks::submit::spawn_submission(service, values, event_tx);
    Ok(SubmitOutcome::Started)
}

/// Form-level summary of a rejected submit attempt
fn validation_summary(errors: &FieldErrors) -> AppError {
    AppError::Validation(format!("{} field(s) invalid", errors.len()))
}

/// Start over with an empty record.
///
/// Internal handler function - use [`crate::app::App::handle_reset`] instead.
pub(crate) fn handle_reset(state: Arc<RwLock<AppState>>) -> Result<()> {
    let mut state = state.write();
    if state.form.phase.is_in_flight() {
        return Err(AppError::State("cannot reset while submitting".to_string()));
    }

    let accepted = state.form.submissions_accepted;
    let last_ack = state.form.last_ack.take();
    state.form = FormState {
        submissions_accepted: accepted,
        last_ack,
        ..FormState::new(state.revision)
    };
    state
        .pending_notifications
        .push((NotificationLevel::Info, "Form cleared".to_string()));
    Ok(())
}
