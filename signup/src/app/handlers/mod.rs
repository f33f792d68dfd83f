//! # Event Handlers
//!
//! User action handlers, called from the UI thread.

pub mod form;
