//! # Sign-Up Schema
//!
//! Whole-record validation: the independent per-field rules from
//! [`crate::utils::validation`] plus the one cross-field rule (password
//! confirmation). Pure and synchronous.

use shared::SignupValues;

use crate::app::state::{FieldErrors, Revision, SignupField};
use crate::utils::validation::{
    validate_country, validate_email, validate_name, validate_password, ValidationResult,
};

pub const PASSWORD_MISMATCH: &str = "Passwords do not match";

/// Validation rules for one revision of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignupSchema {
    require_country: bool,
}

impl SignupSchema {
    /// Schema used by `revision`, `None` for the markup-only form.
    pub fn for_revision(revision: Revision) -> Option<Self> {
        revision.has_behavior().then(|| Self {
            require_country: revision.has_country(),
        })
    }

    /// Check the whole record.
    ///
    /// Every failing field gets exactly one message. The confirmation rule runs
    /// even when other fields failed and only ever reports on
    /// [`SignupField::ConfirmPassword`].
    pub fn validate(&self, values: &SignupValues) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();

        let mut check = |field: SignupField, result: ValidationResult| {
            if let Some(message) = result.error {
                errors.insert(field, message);
            }
        };

        check(SignupField::Name, validate_name(&values.name));
        if self.require_country {
            check(SignupField::Country, validate_country(values.country.as_deref()));
        }
        check(SignupField::Email, validate_email(&values.email));
        check(SignupField::Password, validate_password(&values.password));

        if values.password != values.confirm_password {
            errors.insert(SignupField::ConfirmPassword, PASSWORD_MISMATCH.to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
