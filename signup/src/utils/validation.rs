//! Per-field validation rules for sign-up input
//!
//! Each rule looks at one value only. Rules that need several fields (the
//! password confirmation) live in [`crate::app::schema`].

use once_cell::sync::Lazy;
use regex::Regex;

pub const NAME_MIN_CHARS: usize = 2;
pub const NAME_MAX_CHARS: usize = 255;
pub const PASSWORD_MIN_CHARS: usize = 6;
pub const PASSWORD_MAX_CHARS: usize = 50;

// Lookarounds are not available, so leading dots and ".." are checked separately.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
        .expect("email pattern is valid")
});

pub struct ValidationResult {
    pub is_valid: bool,
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(message.into()),
        }
    }
}

/// Lengths are measured in UTF-16 code units, so an astral character such as
/// an emoji counts as two.
fn validate_length(label: &str, value: &str, min: usize, max: usize) -> ValidationResult {
    let len = value.encode_utf16().count();

    if len < min {
        return ValidationResult::err(format!("{} must contain at least {} characters", label, min));
    }

    if len > max {
        return ValidationResult::err(format!("{} must contain at most {} characters", label, max));
    }

    ValidationResult::ok()
}

/// Validate display name length
pub fn validate_name(name: &str) -> ValidationResult {
    validate_length("Name", name, NAME_MIN_CHARS, NAME_MAX_CHARS)
}

/// Validate email format
pub fn validate_email(email: &str) -> ValidationResult {
    if email.starts_with('.') || email.contains("..") || !EMAIL_RE.is_match(email) {
        return ValidationResult::err("Invalid email address");
    }

    ValidationResult::ok()
}

/// Validate password length
pub fn validate_password(password: &str) -> ValidationResult {
    validate_length("Password", password, PASSWORD_MIN_CHARS, PASSWORD_MAX_CHARS)
}

/// Validate that a country has been picked
pub fn validate_country(country: Option<&str>) -> ValidationResult {
    match country {
        Some(code) if !code.trim().is_empty() => ValidationResult::ok(),
        _ => ValidationResult::err("Please select a country"),
    }
}
