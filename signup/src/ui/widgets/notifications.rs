//! # Notifications Widget
//!
//! Toast notifications using egui-notify for submission outcomes.

use std::time::Duration;

use egui_notify::Toasts;

use crate::app::NotificationLevel;

const TOAST_DURATION: Duration = Duration::from_secs(4);

/// Notification manager for the application
pub struct NotificationManager {
    /// Toast notification system
    pub toasts: Toasts,
}

impl Default for NotificationManager {
    fn default() -> Self {
        Self {
            toasts: Toasts::default(),
        }
    }
}

impl NotificationManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn success(&mut self, message: String) {
        self.toasts.success(message).duration(Some(TOAST_DURATION));
    }

    pub fn error(&mut self, message: String) {
        self.toasts.error(message).duration(Some(TOAST_DURATION));
    }

    pub fn info(&mut self, message: String) {
        self.toasts.info(message).duration(Some(TOAST_DURATION));
    }

    /// Turn notifications queued by the event handler into toasts
    pub fn push_all(&mut self, pending: Vec<(NotificationLevel, String)>) {
        for (level, message) in pending {
            match level {
                NotificationLevel::Success => self.success(message),
                NotificationLevel::Error => self.error(message),
                NotificationLevel::Info => self.info(message),
            }
        }
    }

    /// Render notifications in the UI context
    pub fn show(&mut self, ctx: &egui::Context) {
        self.toasts.show(ctx);
    }
}
