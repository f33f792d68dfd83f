use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::mask_secret;

/// The in-memory record of every input on one sign-up form.
///
/// `country` only exists on forms that show the country selector; it stays
/// `None` on the other revisions and is left out of the JSON.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SignupValues {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignupValues {
    /// Fresh, empty record. `with_country` decides whether the country slot exists.
    pub fn empty(with_country: bool) -> Self {
        Self {
            country: with_country.then(String::new),
            ..Self::default()
        }
    }

    /// Copy of the record that is safe to log: both password fields masked.
    pub fn redacted(&self) -> Self {
        Self {
            password: mask_secret(&self.password),
            confirm_password: mask_secret(&self.confirm_password),
            ..self.clone()
        }
    }
}

/// Acknowledgment for an accepted sign-up record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SignupAck {
    /// Identifier assigned to the accepted submission
    pub id: String,
    /// Echo of the submitted name, used for the confirmation toast
    pub name: String,
    pub received_at: DateTime<Utc>,
    pub message: String,
}
