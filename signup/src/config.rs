//! # Configuration
//!
//! Command line flags, each with an environment variable fallback.
//!
//! | Flag | Env | Default |
//! |------|-----|---------|
//! | `--revision` | `SIGNUP_REVISION` | `country` |
//! | `--submit-delay-ms` | `SIGNUP_SUBMIT_DELAY_MS` | `300` |
//! | `--log-dir` | `SIGNUP_LOG_DIR` | `logs` |
//! | `--log-level` | `SIGNUP_LOG_LEVEL` | `signup=info,warn` |
//! | `--debug-ui` | `SIGNUP_DEBUG_UI` | off |
//!
//! `RUST_LOG`, when set, takes precedence over `--log-level`.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::app::Revision;
use crate::core::error::{AppError, Result};

const MAX_SUBMIT_DELAY_MS: u64 = 60_000;

/// Sign-up form configuration
#[derive(Debug, Clone, Parser)]
#[command(name = "signup", version, about = "Sign-up form with schema validation")]
pub struct FormConfig {
    /// Form variant to show: static, validated or country
    #[arg(long, env = "SIGNUP_REVISION", default_value = "country")]
    pub revision: Revision,

    /// Simulated in-flight time of a submission, in milliseconds
    #[arg(long, env = "SIGNUP_SUBMIT_DELAY_MS", default_value_t = 300)]
    pub submit_delay_ms: u64,

    /// Directory for the rolling log file
    #[arg(long, env = "SIGNUP_LOG_DIR", default_value = "logs")]
    pub log_dir: PathBuf,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, env = "SIGNUP_LOG_LEVEL", default_value = "signup=info,warn")]
    pub log_level: String,

    /// Show the state overlay (toggle at runtime with Ctrl+D)
    #[arg(
        long,
        env = "SIGNUP_DEBUG_UI",
        action = clap::ArgAction::SetTrue,
        value_parser = clap::builder::BoolishValueParser::new()
    )]
    pub debug_ui: bool,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            revision: Revision::WithCountry,
            submit_delay_ms: 300,
            log_dir: PathBuf::from("logs"),
            log_level: "signup=info,warn".to_string(),
            debug_ui: cfg!(feature = "debug-mode"),
        }
    }
}

impl FormConfig {
    /// Reject values that parse but make no sense
    pub fn validate(&self) -> Result<()> {
        if self.submit_delay_ms > MAX_SUBMIT_DELAY_MS {
            return Err(AppError::Config(format!(
                "submit delay {}ms exceeds {}ms",
                self.submit_delay_ms, MAX_SUBMIT_DELAY_MS
            )));
        }

        if self.log_level.trim().is_empty() {
            return Err(AppError::Config("log level must not be empty".to_string()));
        }

        Ok(())
    }

    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }

    pub fn show_debug_ui(&self) -> bool {
        self.debug_ui || cfg!(feature = "debug-mode")
    }
}
