//! # Debugging and Tracing Infrastructure
//!
//! - **Logging**: structured `tracing` output to stderr and to a daily-rotated
//!   `<log_dir>/signup.log`
//! - **In-UI overlay**: form phase and submission count (toggle with Ctrl+D),
//!   rendered by [`crate::ui::debug_overlay`]
//!
//! ## Configuration
//!
//! - `RUST_LOG`: Log level filter (e.g., `signup=debug,info`)
//! - `SIGNUP_LOG_LEVEL` / `--log-level`: filter used when `RUST_LOG` is unset
//! - `SIGNUP_LOG_DIR` / `--log-dir`: log directory (default: `logs`)
//! - `SIGNUP_DEBUG_UI` / `--debug-ui`: show the overlay at startup

pub mod logger;

pub use logger::init as init_logger;
