use once_cell::sync::Lazy;
use tokio::runtime::Runtime;

/// Global Tokio runtime for submissions
///
/// egui owns the main thread, so the submission hand-off is spawned onto this
/// runtime and reports back through the app's event channel, which the UI
/// drains every frame in `App::on_tick`. Built on first use.
pub static TOKIO_RT: Lazy<Runtime> = Lazy::new(|| {
    Runtime::new().expect("Failed to create Tokio runtime for form submissions")
});
