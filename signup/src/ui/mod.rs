//! # GUI Rendering Framework
//!
//! Per-frame rendering of the sign-up window: the form, toasts and the
//! optional debug overlay.

pub mod debug_overlay;
pub mod screens;
pub mod theme;
pub mod widgets;
pub mod window;

use egui;

use crate::app::App;
use crate::ui::widgets::notifications::NotificationManager;

/// Main render function - called every frame by egui
pub fn render(ctx: &egui::Context, app: &mut App, notifications: &mut NotificationManager) {
    let state = {
        match app.state.try_read() {
            Some(state_guard) => state_guard.clone(),
            None => {
                // Lock is held by another task, skip this frame
                return;
            }
        }
    }; // Lock released here - rendering happens without holding lock

    if ctx.input(|i| i.key_pressed(egui::Key::D) && i.modifiers.ctrl) {
        app.toggle_debug_overlay();
    }

    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::vertical().show(ui, |ui| {
            screens::signup::render(ui, &state, app);
        });
    });

    notifications.push_all(app.take_notifications());
    notifications.show(ctx);

    if debug_overlay::should_show_overlay(&state) {
        debug_overlay::render_debug_overlay(ctx, &state);
    }
}
