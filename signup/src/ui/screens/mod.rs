//! # Screen Modules
//!
//! ## Rendering Pattern
//!
//! ```rust,ignore
//! pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut impl AppLike) {
//!     // - Read from the state snapshot
//!     // - Call app.handle_* methods for actions
//! }
//! ```
//!
//! Screens receive a **cloned state snapshot**: no lock is held while widgets
//! are drawn, and handlers acquire the write lock internally.

pub mod signup;
