//! # Application Orchestrator
//!
//! [`App`] ties the egui frame loop to the form state and to the background
//! submission task.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Main Thread (egui)                       │
//! │  ┌──────────────────────────────────────────────────────┐   │
//! │  │  App (orchestrator)                                  │   │
//! │  │  - on_tick() - drains task results every frame       │   │
//! │  │  - handle_*() - field binding, submit, reset         │   │
//! │  └────────────┬─────────────────────────────────────────┘   │
//! │               │                                             │
//! │  ┌────────────▼─────────────────────────────────────────┐   │
//! │  │  State: Arc<RwLock<AppState>>                        │   │
//! │  │  - form record, errors, submit phase                 │   │
//! │  └──────────────────────────────────────────────────────┘   │
//! └───────────────────────┬─────────────────────────────────────┘
//!                         │ async_channel (unbounded)
//! ┌───────────────────────▼─────────────────────────────────────┐
//! │              Tokio runtime                                  │
//! │  tasks::submit - hands the record to the SignupService      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Submit Flow
//!
//! ```rust,ignore
//! // UI thread: validate and start
//! app.handle_submit_click()?;        // Idle -> Validating -> Submitting
//!
//! // Tokio: service.submit(values) -> AppEvent::SubmitResult
//!
//! // UI thread, next frames:
//! app.on_tick();                     // Submitting -> Success
//! ```
//!
//! ## Related Modules
//!
//! - [`state`]: State types and the submit phase machine
//! - [`schema`]: Whole-record validation
//! - [`events`]: Results from background tasks
//! - [`handlers`]: User action handlers
//! - [`tasks`]: Background tasks

mod app_trait;
mod event_handler;
mod events;
pub mod handlers;
pub mod schema;
mod state;
mod tasks;

pub use app_trait::AppLike;
pub use events::AppEvent;
pub use handlers::form::SubmitOutcome;
pub use state::*;

use std::sync::Arc;

use async_channel::{unbounded, Receiver, Sender};
use parking_lot::RwLock;
use shared::CountryOption;

use crate::config::FormConfig;
use crate::core::error::Result;
use crate::core::service::{ConsoleSignupService, SignupService};

/// Main application orchestrator for the sign-up window.
///
/// # Example
///
/// ```rust,no_run
/// use signup::app::{App, SignupField};
/// use signup::config::FormConfig;
///
/// let mut app = App::new(&FormConfig::default());
///
/// // In egui update loop:
/// app.on_tick();
/// app.handle_field_change(SignupField::Name, "Al".to_string());
/// let _ = app.handle_submit_click();
/// ```
pub struct App {
    /// Shared form state; hold locks only for the duration of one handler.
    pub state: Arc<RwLock<AppState>>,

    /// Channel receiver for async task results, polled in `on_tick()`.
    pub event_rx: Receiver<AppEvent>,

    /// Cloned into background tasks.
    event_tx: Sender<AppEvent>,
}

impl App {
    /// Create the app with the placeholder sign-up service.
    pub fn new(config: &FormConfig) -> Self {
        let service: Arc<dyn SignupService> =
            Arc::new(ConsoleSignupService::new(config.submit_delay()));
        let app = Self::with_service(config.revision, service);

        app.state.write().debug_overlay_visible = config.show_debug_ui();
        app
    }

    /// Create the app with an injected sign-up service.
    pub fn with_service(revision: Revision, service: Arc<dyn SignupService>) -> Self {
        let state = AppState::new(revision, Some(service));
        let (event_tx, event_rx) = unbounded();

        tracing::info!(revision = %revision, "App state initialized");

        App {
            state: Arc::new(RwLock::new(state)),
            event_rx,
            event_tx,
        }
    }

    /// Called every frame: applies all pending task results.
    ///
    /// Non-blocking; returns the number of events processed.
    pub fn on_tick(&mut self) -> usize {
        let mut processed = 0;
        while let Ok(event) = self.event_rx.try_recv() {
            self.handle_event(event);
            processed += 1;
        }

        if processed > 0 {
            tracing::debug!(events_processed = processed, "on_tick: processed events");
        }
        processed
    }

    /// Apply one task result.
    pub fn handle_event(&mut self, event: AppEvent) {
        use event_handler::AppEventHandler;
        self.handle_event_impl(event);
    }

    /// A submission is in flight (UI keeps repainting while true).
    pub fn is_submitting(&self) -> bool {
        self.state.read().form.phase.is_in_flight()
    }

    /// Take notifications queued for the toast layer.
    pub fn take_notifications(&self) -> Vec<(NotificationLevel, String)> {
        std::mem::take(&mut self.state.write().pending_notifications)
    }

    pub fn toggle_debug_overlay(&self) {
        let mut state = self.state.write();
        state.debug_overlay_visible = !state.debug_overlay_visible;
    }

    pub fn handle_field_change(&mut self, field: SignupField, value: String) {
        handlers::form::handle_field_change(self.state.clone(), field, value);
    }

    pub fn handle_country_select(&mut self, option: Option<CountryOption>) -> Result<()> {
        handlers::form::handle_country_select(self.state.clone(), option)
    }

    pub fn handle_submit_click(&mut self) -> Result<SubmitOutcome> {
        handlers::form::handle_submit_click(self.state.clone(), self.event_tx.clone())
    }

    pub fn handle_reset(&mut self) -> Result<()> {
        handlers::form::handle_reset(self.state.clone())
    }
}

impl AppLike for App {
    fn state(&self) -> &Arc<RwLock<AppState>> {
        &self.state
    }

    fn handle_field_change(&mut self, field: SignupField, value: String) {
        App::handle_field_change(self, field, value)
    }

    fn handle_country_select(&mut self, option: Option<CountryOption>) -> Result<()> {
        App::handle_country_select(self, option)
    }

    fn handle_submit_click(&mut self) -> Result<SubmitOutcome> {
        App::handle_submit_click(self)
    }

    fn handle_reset(&mut self) -> Result<()> {
        App::handle_reset(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::AppError;
    use async_trait::async_trait;
    use shared::{SignupAck, SignupValues};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    /// Counts calls and records what it received
    struct MockSignupService {
        calls: AtomicUsize,
        received: parking_lot::Mutex<Vec<SignupValues>>,
        delay: Duration,
        fail_with: Option<String>,
    }

    impl MockSignupService {
        fn new() -> Self {
            Self {
                calls: AtomicUsize::new(0),
                received: parking_lot::Mutex::new(Vec::new()),
                delay: Duration::ZERO,
                fail_with: None,
            }
        }

        fn slow(delay: Duration) -> Self {
            Self {
                delay,
                ..Self::new()
            }
        }

        fn failing(message: &str) -> Self {
            Self {
                fail_with: Some(message.to_string()),
                ..Self::new()
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl SignupService for MockSignupService {
        async fn submit(&self, values: SignupValues) -> std::result::Result<SignupAck, String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }
            if let Some(message) = &self.fail_with {
                return Err(message.clone());
            }

            let name = values.name.clone();
            self.received.lock().push(values);
            Ok(SignupAck {
                id: "ack-1".to_string(),
                name,
                received_at: chrono::Utc::now(),
                message: "ok".to_string(),
            })
        }
    }

    fn app_with(revision: Revision, service: Arc<MockSignupService>) -> App {
        App::with_service(revision, service)
    }

    fn fill(app: &mut App, name: &str, email: &str, password: &str, confirm: &str) {
        app.handle_field_change(SignupField::Name, name.to_string());
        app.handle_field_change(SignupField::Email, email.to_string());
        app.handle_field_change(SignupField::Password, password.to_string());
        app.handle_field_change(SignupField::ConfirmPassword, confirm.to_string());
    }

    async fn wait_for_result(app: &mut App) {
        let event = tokio::time::timeout(Duration::from_secs(5), app.event_rx.recv())
            .await
            .expect("submission result in time")
            .expect("event channel open");
        app.handle_event(event);
    }

    // ========== Binding Tests ==========

    #[test]
    fn test_field_change_updates_record() {
        let mut app = app_with(Revision::Validated, Arc::new(MockSignupService::new()));
        fill(&mut app, "Al", "a@b.com", "secret1", "secret2");

        let state = app.state.read();
        assert_eq!(state.form.values.name, "Al");
        assert_eq!(state.form.values.email, "a@b.com");
        assert_eq!(state.form.values.password, "secret1");
        assert_eq!(state.form.values.confirm_password, "secret2");
        assert_eq!(state.form.values.country, None);
    }

    #[test]
    fn test_editing_a_field_clears_only_its_error() {
        let mut app = app_with(Revision::Validated, Arc::new(MockSignupService::new()));
        let outcome = app.handle_submit_click().unwrap();
        assert!(matches!(outcome, SubmitOutcome::Rejected(_)));

        app.handle_field_change(SignupField::Name, "Al".to_string());

        let state = app.state.read();
        assert!(state.form.error_for(SignupField::Name).is_none());
        assert!(state.form.error_for(SignupField::Email).is_some());
        assert!(state.form.error_for(SignupField::Password).is_some());
    }

    #[test]
    fn test_country_select_stores_plain_value() {
        let mut app = app_with(Revision::WithCountry, Arc::new(MockSignupService::new()));

        app.handle_country_select(Some(CountryOption::new("DE", "Germany")))
            .unwrap();
        {
            let state = app.state.read();
            assert_eq!(state.form.values.country.as_deref(), Some("DE"));
            assert_eq!(
                state.form.selected_country,
                Some(CountryOption::new("DE", "Germany"))
            );
        }

        app.handle_country_select(None).unwrap();
        let state = app.state.read();
        assert_eq!(state.form.values.country.as_deref(), Some(""));
        assert!(state.form.selected_country.is_none());
    }

    #[test]
    fn test_country_select_without_country_field_is_rejected() {
        let mut app = app_with(Revision::Validated, Arc::new(MockSignupService::new()));
        let result = app.handle_country_select(Some(CountryOption::new("US", "United States")));

        assert!(matches!(result, Err(AppError::State(_))));
        assert_eq!(app.state.read().form.values.country, None);
    }

    #[test]
    fn test_country_text_edit_ignored_without_country_field() {
        let mut app = app_with(Revision::Validated, Arc::new(MockSignupService::new()));
        app.handle_field_change(SignupField::Country, "US".to_string());

        assert_eq!(app.state.read().form.values.country, None);
    }

    #[test]
    fn test_country_text_edit_keeps_selector_in_sync() {
        let mut app = app_with(Revision::WithCountry, Arc::new(MockSignupService::new()));
        app.handle_country_select(Some(CountryOption::new("DE", "Germany")))
            .unwrap();

        app.handle_field_change(SignupField::Country, "US".to_string());
        {
            let state = app.state.read();
            assert_eq!(state.form.values.country.as_deref(), Some("US"));
            assert_eq!(
                state.form.selected_country.as_ref().map(|o| o.value.as_str()),
                Some("US")
            );
        }

        // unknown code clears both sides
        app.handle_field_change(SignupField::Country, "XX".to_string());
        let state = app.state.read();
        assert_eq!(state.form.values.country.as_deref(), Some(""));
        assert!(state.form.selected_country.is_none());
    }

    // ========== Submit Tests ==========

    #[test]
    fn test_submit_without_caller_runtime() {
        let service = Arc::new(MockSignupService::new());
        let mut app = app_with(Revision::Validated, service.clone());
        fill(&mut app, "Al", "a@b.com", "secret1", "secret1");

        assert_eq!(app.handle_submit_click().unwrap(), SubmitOutcome::Started);

        let event = app.event_rx.recv_blocking().expect("event channel open");
        app.handle_event(event);

        assert_eq!(app.state.read().form.phase, FormPhase::Success);
        assert_eq!(service.calls(), 1);
    }

    #[tokio::test]
    async fn test_valid_record_submits_exactly_once() {
        let service = Arc::new(MockSignupService::new());
        let mut app = app_with(Revision::WithCountry, service.clone());
        fill(&mut app, "Al", "a@b.com", "secret1", "secret1");
        app.handle_country_select(Some(CountryOption::new("US", "United States")))
            .unwrap();

        assert_eq!(app.handle_submit_click().unwrap(), SubmitOutcome::Started);
        assert_eq!(app.state.read().form.phase, FormPhase::Submitting);

        wait_for_result(&mut app).await;

        let state = app.state.read();
        assert_eq!(state.form.phase, FormPhase::Success);
        assert_eq!(state.form.submissions_accepted, 1);
        assert!(state.form.errors.is_empty());
        assert_eq!(service.calls(), 1);

        let received = service.received.lock();
        assert_eq!(received[0].country.as_deref(), Some("US"));
        assert_eq!(received[0].name, "Al");
    }

    #[tokio::test]
    async fn test_mismatch_blocks_submission() {
        let service = Arc::new(MockSignupService::new());
        let mut app = app_with(Revision::Validated, service.clone());
        fill(&mut app, "Al", "a@b.com", "secret1", "secret2");

        let outcome = app.handle_submit_click().unwrap();

        let errors = match outcome {
            SubmitOutcome::Rejected(errors) => errors,
            other => panic!("expected rejection, got {:?}", other),
        };
        assert_eq!(errors.len(), 1);
        assert!(errors.contains_key(&SignupField::ConfirmPassword));

        let state = app.state.read();
        assert_eq!(state.form.phase, FormPhase::Error);
        assert!(state.form.error_for(SignupField::Password).is_none());
        assert_eq!(
            state.form.error_for(SignupField::ConfirmPassword),
            Some(schema::PASSWORD_MISMATCH)
        );
        drop(state);

        tokio::task::yield_now().await;
        assert_eq!(service.calls(), 0);
        assert!(app.event_rx.is_empty());
    }

    #[tokio::test]
    async fn test_double_submit_while_pending_is_rejected() {
        let service = Arc::new(MockSignupService::slow(Duration::from_millis(50)));
        let mut app = app_with(Revision::Validated, service.clone());
        fill(&mut app, "Al", "a@b.com", "secret1", "secret1");

        assert_eq!(app.handle_submit_click().unwrap(), SubmitOutcome::Started);
        assert!(!app.state.read().can_submit());
        assert!(matches!(app.handle_submit_click(), Err(AppError::State(_))));

        wait_for_result(&mut app).await;

        // nothing else queued
        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(app.on_tick(), 0);

        assert_eq!(service.calls(), 1);
        let state = app.state.read();
        assert_eq!(state.form.submissions_accepted, 1);
        assert_eq!(state.form.phase, FormPhase::Success);
        assert!(state.can_submit());
    }

    #[tokio::test]
    async fn test_retry_after_fixing_errors() {
        let service = Arc::new(MockSignupService::new());
        let mut app = app_with(Revision::Validated, service.clone());
        fill(&mut app, "A", "a@b.com", "secret1", "secret1");

        assert!(matches!(
            app.handle_submit_click().unwrap(),
            SubmitOutcome::Rejected(_)
        ));

        app.handle_field_change(SignupField::Name, "Al".to_string());
        assert_eq!(app.handle_submit_click().unwrap(), SubmitOutcome::Started);
        wait_for_result(&mut app).await;

        assert_eq!(service.calls(), 1);
        assert_eq!(app.state.read().form.phase, FormPhase::Success);
    }

    #[tokio::test]
    async fn test_service_failure_is_recoverable() {
        let service = Arc::new(MockSignupService::failing("backend offline"));
        let mut app = app_with(Revision::Validated, service.clone());
        fill(&mut app, "Al", "a@b.com", "secret1", "secret1");

        app.handle_submit_click().unwrap();
        wait_for_result(&mut app).await;

        {
            let state = app.state.read();
            assert_eq!(state.form.phase, FormPhase::Error);
            assert_eq!(
                state.form.form_error.as_deref(),
                Some("Submission error: backend offline")
            );
            assert_eq!(state.form.submissions_accepted, 0);
            assert!(state.form.errors.is_empty());
        }

        let notifications = app.take_notifications();
        assert_eq!(notifications.len(), 1);
        assert_eq!(notifications[0].0, NotificationLevel::Error);

        // the user may try again
        assert_eq!(app.handle_submit_click().unwrap(), SubmitOutcome::Started);
    }

    #[tokio::test]
    async fn test_success_queues_one_notification() {
        let service = Arc::new(MockSignupService::new());
        let mut app = app_with(Revision::Validated, service);
        fill(&mut app, "Al", "a@b.com", "secret1", "secret1");

        app.handle_submit_click().unwrap();
        wait_for_result(&mut app).await;

        let notifications = app.take_notifications();
        assert_eq!(notifications.len(), 1);
        assert_eq!(notifications[0].0, NotificationLevel::Success);
        assert!(notifications[0].1.contains("Al"));
        assert!(app.take_notifications().is_empty());
    }

    #[test]
    fn test_static_form_submit_does_nothing() {
        let service = Arc::new(MockSignupService::new());
        let mut app = app_with(Revision::Static, service.clone());
        fill(&mut app, "A", "nope", "1", "2");

        assert_eq!(app.handle_submit_click().unwrap(), SubmitOutcome::Ignored);

        let state = app.state.read();
        assert_eq!(state.form.phase, FormPhase::Idle);
        assert!(state.form.errors.is_empty());
        assert_eq!(service.calls(), 0);
    }

    #[test]
    fn test_missing_country_reported_on_country() {
        let mut app = app_with(Revision::WithCountry, Arc::new(MockSignupService::new()));
        fill(&mut app, "Al", "a@b.com", "secret1", "secret1");

        let SubmitOutcome::Rejected(errors) = app.handle_submit_click().unwrap() else {
            panic!("expected rejection");
        };
        assert_eq!(errors.keys().copied().collect::<Vec<_>>(), vec![SignupField::Country]);
    }

    #[test]
    fn test_stray_result_without_submission_is_ignored() {
        let mut app = app_with(Revision::Validated, Arc::new(MockSignupService::new()));
        app.handle_event(AppEvent::SubmitResult(Err("late".to_string())));

        let state = app.state.read();
        assert_eq!(state.form.phase, FormPhase::Idle);
        assert!(state.form.form_error.is_none());
        assert!(state.pending_notifications.is_empty());
    }

    // ========== Reset Tests ==========

    #[tokio::test]
    async fn test_reset_clears_record_but_keeps_history() {
        let mut app = app_with(Revision::WithCountry, Arc::new(MockSignupService::new()));
        fill(&mut app, "Al", "a@b.com", "secret1", "secret1");
        app.handle_country_select(Some(CountryOption::new("US", "United States")))
            .unwrap();
        app.handle_submit_click().unwrap();
        wait_for_result(&mut app).await;

        app.handle_reset().unwrap();

        let state = app.state.read();
        assert_eq!(state.form.values, SignupValues::empty(true));
        assert_eq!(state.form.phase, FormPhase::Idle);
        assert!(state.form.selected_country.is_none());
        assert_eq!(state.form.submissions_accepted, 1);
        assert!(state.form.last_ack.is_some());
    }

    #[tokio::test]
    async fn test_reset_rejected_while_submitting() {
        let mut app = app_with(
            Revision::Validated,
            Arc::new(MockSignupService::slow(Duration::from_millis(50))),
        );
        fill(&mut app, "Al", "a@b.com", "secret1", "secret1");
        app.handle_submit_click().unwrap();

        assert!(matches!(app.handle_reset(), Err(AppError::State(_))));
        assert_eq!(app.state.read().form.values.name, "Al");

        wait_for_result(&mut app).await;
    }

    #[test]
    fn test_reset_queues_info_notification() {
        let mut app = app_with(Revision::Validated, Arc::new(MockSignupService::new()));
        fill(&mut app, "Al", "a@b.com", "secret1", "secret2");

        app.handle_reset().unwrap();

        let notifications = app.take_notifications();
        assert_eq!(
            notifications,
            vec![(NotificationLevel::Info, "Form cleared".to_string())]
        );
    }

    // ========== Construction Tests ==========

    #[test]
    fn test_new_uses_config() {
        let config = FormConfig {
            revision: Revision::Validated,
            debug_ui: true,
            ..FormConfig::default()
        };
        let app = App::new(&config);
        let state = app.state.read();

        assert_eq!(state.revision, Revision::Validated);
        assert!(state.debug_overlay_visible);
        assert!(state.signup_service.is_some());
        assert_eq!(state.form.phase, FormPhase::Idle);
    }

    #[test]
    fn test_toggle_debug_overlay() {
        let app = App::new(&FormConfig::default());
        let before = app.state.read().debug_overlay_visible;
        app.toggle_debug_overlay();
        assert_eq!(app.state.read().debug_overlay_visible, !before);
    }
}
