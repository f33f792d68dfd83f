//! # Service Traits
//!
//! The seam between the form and whatever receives a valid record.
//!
//! No real account-creation endpoint exists. [`ConsoleSignupService`] logs the
//! record and acknowledges it; tests inject their own implementation.

use std::time::Duration;

use async_trait::async_trait;
use shared::{format_secret_hint, SignupAck, SignupValues};

/// Receives validated sign-up records.
///
/// Errors cross this seam as `String`, like the rest of the async task layer;
/// they are turned into [`crate::core::AppError::Submission`] at the form.
#[async_trait]
pub trait SignupService: Send + Sync {
    /// Hand over one validated record.
    async fn submit(&self, values: SignupValues) -> Result<SignupAck, String>;
}

/// Placeholder collaborator: writes the record to the log and acknowledges it.
#[derive(Debug, Clone)]
pub struct ConsoleSignupService {
    /// Simulated time a submission stays in flight
    delay: Duration,
}

impl ConsoleSignupService {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for ConsoleSignupService {
    fn default() -> Self {
        Self::new(Duration::from_millis(300))
    }
}

#[async_trait]
impl SignupService for ConsoleSignupService {
    async fn submit(&self, values: SignupValues) -> Result<SignupAck, String> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let redacted = values.redacted();
        let payload = serde_json::to_string(&redacted).map_err(|e| e.to_string())?;

        tracing::info!(
            email = %format_secret_hint(&values.email, 2, 4),
            country = ?values.country,
            payload = %payload,
            "Sign-up record received"
        );

        Ok(SignupAck {
            id: uuid::Uuid::new_v4().to_string(),
            name: values.name,
            received_at: chrono::Utc::now(),
            message: "Sign-up received".to_string(),
        })
    }
}
