use clap::Parser;

use signup::config::FormConfig;
use signup::debug;
use signup::ui::window::{self, SignupWindow};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = FormConfig::parse();
    config.validate()?;

    // Flushes the log file on drop
    let _log_guard = debug::init_logger(&config)?;

    tracing::info!(revision = %config.revision, "Starting sign-up window");

    eframe::run_native(
        window::WINDOW_TITLE,
        window::native_options(),
        Box::new(move |cc| Ok(Box::new(SignupWindow::new(cc, &config)))),
    )?;

    tracing::info!("Sign-up window closed");
    Ok(())
}
