//! Submission hand-off task

use std::sync::Arc;

use async_channel::Sender;
use shared::SignupValues;

use crate::app::events::AppEvent;
use crate::core::service::SignupService;
use crate::utils::runtime::TOKIO_RT;

/// Hand a validated record to the sign-up service on the Tokio runtime.
///
/// Runs on [`TOKIO_RT`], so callers need no runtime context of their own. The
/// outcome comes back as [`AppEvent::SubmitResult`].
pub(crate) fn spawn_submission(
    service: Arc<dyn SignupService>,
    values: SignupValues,
    event_tx: Sender<AppEvent>,
) {
    TOKIO_RT.spawn(async move {
        let started = std::time::Instant::now();
        tracing::debug!("Submission task started");

        let result = service.submit(values).await;

        tracing::debug!(
            success = result.is_ok(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Submission task finished"
        );

        if let Err(e) = event_tx.send(AppEvent::SubmitResult(result)).await {
            tracing::warn!(error = %e, "Submission result dropped, event channel closed");
        }
    });
}
