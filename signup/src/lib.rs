//! # Sign-Up Form - Library Root
//!
//! A **native desktop** sign-up form built on egui. This library crate
//! contains all modules used by the binary crate (`main.rs`).
//!
//! ## Revisions
//!
//! The same form ships in three incremental variants, selected at startup:
//!
//! - `static`: markup only (inputs and a submit button without behavior)
//! - `validated`: whole-record validation with inline field errors
//! - `country`: validation plus a country select
//!
//! ## Technology Stack
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              signup (this crate)                       │
//! ├────────────────────────────────────────────────────────┤
//! │  egui / eframe  - Immediate-mode GUI, native window    │
//! │  egui-notify    - Toasts                               │
//! │  Tokio          - Async runtime for the submission     │
//! │  clap           - Flags with env fallbacks             │
//! │  tracing        - Structured logging                   │
//! └────────────────────────────────────────────────────────┘
//!          │
//!          │ SignupService::submit
//!          ▼
//! ┌─────────────────────────┐
//! │  ConsoleSignupService   │
//! │  (logs, acknowledges)   │
//! └─────────────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - **app**: Form state, submit state machine, handlers and background tasks
//! - **config**: Command line / environment configuration
//! - **core**: Error type and the sign-up service seam
//! - **debug**: Logging setup
//! - **ui**: Theme, widgets, the sign-up screen and the eframe window
//! - **utils**: Field rules and the Tokio runtime
//!
//! ```text
//! main.rs
//!   │
//!   ├── config (FormConfig)
//!   ├── debug::logger
//!   └── ui::window (eframe::App)
//!       ├── app (state, handlers, tasks)
//!       │   └── core::service (SignupService)
//!       └── ui::screens::signup
//! ```

pub mod app;
pub mod config;
pub mod core;
pub mod debug;
pub mod ui;
pub mod utils;

pub use app::{App, AppLike, FormPhase, Revision, SignupField, SubmitOutcome};
pub use config::FormConfig;
pub use core::{AppError, Result};
