//! # Application State Types
//!
//! Everything the sign-up window renders from: which revision of the form is
//! shown, the form record, the errors of the last submit attempt and the phase
//! of the submit state machine.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use shared::{CountryOption, SignupAck, SignupValues};

use crate::core::error::AppError;
use crate::core::service::SignupService;

/// The three incremental variants of the sign-up form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Revision {
    /// Markup only: inputs and a submit button, no behavior
    Static,
    /// Schema validation with inline errors
    Validated,
    /// Validation plus the country selector
    WithCountry,
}

impl Revision {
    pub fn all() -> &'static [Revision] {
        &[Revision::Static, Revision::Validated, Revision::WithCountry]
    }

    /// Name used on the command line and in the environment
    pub fn key(&self) -> &'static str {
        match self {
            Revision::Static => "static",
            Revision::Validated => "validated",
            Revision::WithCountry => "country",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Revision::Static => "Static form",
            Revision::Validated => "Validated form",
            Revision::WithCountry => "Validated form with country",
        }
    }

    /// Whether submit attempts are validated and handed on at all
    pub fn has_behavior(&self) -> bool {
        !matches!(self, Revision::Static)
    }

    pub fn has_country(&self) -> bool {
        matches!(self, Revision::WithCountry)
    }

    /// Fields rendered by this revision, top to bottom
    pub fn fields(&self) -> &'static [SignupField] {
        if self.has_country() {
            SignupField::all()
        } else {
            &[
                SignupField::Name,
                SignupField::Email,
                SignupField::Password,
                SignupField::ConfirmPassword,
            ]
        }
    }
}

impl fmt::Display for Revision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Revision {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Revision::all()
            .iter()
            .copied()
            .find(|revision| revision.key() == wanted)
            .ok_or_else(|| {
                AppError::Config(format!(
                    "unknown revision '{}', expected one of: static, validated, country",
                    s
                ))
            })
    }
}

/// One input of the sign-up form
///
/// Ordering follows the on-screen order, so [`FieldErrors`] iterates top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SignupField {
    Name,
    Country,
    Email,
    Password,
    ConfirmPassword,
}

impl SignupField {
    pub fn all() -> &'static [SignupField] {
        &[
            SignupField::Name,
            SignupField::Country,
            SignupField::Email,
            SignupField::Password,
            SignupField::ConfirmPassword,
        ]
    }

    /// Attribute name in the serialized record
    pub fn key(&self) -> &'static str {
        match self {
            SignupField::Name => "name",
            SignupField::Country => "country",
            SignupField::Email => "email",
            SignupField::Password => "password",
            SignupField::ConfirmPassword => "confirmPassword",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SignupField::Name => "Name",
            SignupField::Country => "Country",
            SignupField::Email => "Email",
            SignupField::Password => "Password",
            SignupField::ConfirmPassword => "Confirm Password",
        }
    }

    pub fn hint(&self) -> &'static str {
        match self {
            SignupField::Name => "Your name",
            SignupField::Country => "Select...",
            SignupField::Email => "you@example.com",
            SignupField::Password => "At least 6 characters",
            SignupField::ConfirmPassword => "Repeat password",
        }
    }

    /// Rendered masked
    pub fn is_secret(&self) -> bool {
        matches!(self, SignupField::Password | SignupField::ConfirmPassword)
    }

    /// Bound through the select controller instead of a text input
    pub fn is_select(&self) -> bool {
        matches!(self, SignupField::Country)
    }

    /// Current value of this field in `values`
    pub fn value<'a>(&self, values: &'a SignupValues) -> &'a str {
        match self {
            SignupField::Name => &values.name,
            SignupField::Country => values.country.as_deref().unwrap_or(""),
            SignupField::Email => &values.email,
            SignupField::Password => &values.password,
            SignupField::ConfirmPassword => &values.confirm_password,
        }
    }

    /// Write `value` into the attribute bound to this field
    pub fn set(&self, values: &mut SignupValues, value: String) {
        match self {
            SignupField::Name => values.name = value,
            SignupField::Country => values.country = Some(value),
            SignupField::Email => values.email = value,
            SignupField::Password => values.password = value,
            SignupField::ConfirmPassword => values.confirm_password = value,
        }
    }
}

impl fmt::Display for SignupField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Field to message, one message per failing field
pub type FieldErrors = BTreeMap<SignupField, String>;

/// Phase of the submit state machine
///
/// ```text
/// Idle ──submit──▶ Validating ──rules fail──▶ Error ──submit──▶ Validating
///                      │
///                      └──rules pass──▶ Submitting ──ack──▶ Success
///                                          └──service error──▶ Error
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Idle,
    Validating,
    Submitting,
    Error,
    Success,
}

impl FormPhase {
    pub fn title(&self) -> &'static str {
        match self {
            FormPhase::Idle => "Idle",
            FormPhase::Validating => "Validating",
            FormPhase::Submitting => "Submitting",
            FormPhase::Error => "Error",
            FormPhase::Success => "Success",
        }
    }

    /// A new submit attempt may start from this phase
    pub fn accepts_submit(&self) -> bool {
        !matches!(self, FormPhase::Validating | FormPhase::Submitting)
    }

    pub fn is_in_flight(&self) -> bool {
        matches!(self, FormPhase::Submitting)
    }
}

/// State of the single form instance
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    /// The record bound to the inputs
    pub values: SignupValues,
    /// Errors of the last submit attempt, cleared per field on edit
    pub errors: FieldErrors,
    /// Form-level message (service failure), shown above the submit button
    pub form_error: Option<String>,
    pub phase: FormPhase,
    /// Option object held by the country selector
    pub selected_country: Option<CountryOption>,
    /// Submissions acknowledged by the service
    pub submissions_accepted: u32,
    pub last_ack: Option<SignupAck>,
}

impl FormState {
    pub fn new(revision: Revision) -> Self {
        Self {
            values: SignupValues::empty(revision.has_country()),
            errors: FieldErrors::new(),
            form_error: None,
            phase: FormPhase::Idle,
            selected_country: None,
            submissions_accepted: 0,
            last_ack: None,
        }
    }

    pub fn error_for(&self, field: SignupField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }
}

/// Toast severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Error,
    Info,
}

/// Main application state
#[derive(Clone)]
pub struct AppState {
    /// Which variant of the form is shown
    pub revision: Revision,
    pub form: FormState,
    /// Collaborator receiving validated records
    pub signup_service: Option<Arc<dyn SignupService>>,
    /// Pending notifications to display (level, message)
    pub pending_notifications: Vec<(NotificationLevel, String)>,
    /// Debug overlay visibility (toggled with Ctrl+D)
    pub debug_overlay_visible: bool,
}

impl AppState {
    pub fn new(revision: Revision, signup_service: Option<Arc<dyn SignupService>>) -> Self {
        Self {
            revision,
            form: FormState::new(revision),
            signup_service,
            pending_notifications: Vec::new(),
            debug_overlay_visible: false,
        }
    }

    /// Submit control is enabled
    pub fn can_submit(&self) -> bool {
        !self.form.phase.is_in_flight()
    }
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("revision", &self.revision)
            .field("form", &self.form)
            .field("has_signup_service", &self.signup_service.is_some())
            .field("pending_notifications", &self.pending_notifications)
            .field("debug_overlay_visible", &self.debug_overlay_visible)
            .finish()
    }
}
