//! # Reusable UI Widgets

pub mod forms;
pub mod notifications;
pub mod select;
