//! In-UI debug overlay (toggle with Ctrl+D)

use egui;

use crate::app::{AppState, FormPhase};

pub fn should_show_overlay(state: &AppState) -> bool {
    state.debug_overlay_visible
}

/// Render debug overlay as an egui window
pub fn render_debug_overlay(ctx: &egui::Context, state: &AppState) {
    egui::Window::new("Debug Monitor")
        .collapsible(true)
        .resizable(false)
        .default_pos([12.0, 12.0])
        .show(ctx, |ui| {
            ui.label(format!("Revision: {}", state.revision));

            let phase = state.form.phase;
            let color = match phase {
                FormPhase::Error => egui::Color32::from_rgb(220, 38, 38),
                FormPhase::Success => egui::Color32::from_rgb(22, 163, 74),
                FormPhase::Submitting | FormPhase::Validating => {
                    egui::Color32::from_rgb(234, 179, 8)
                }
                FormPhase::Idle => ui.visuals().text_color(),
            };
            ui.colored_label(color, format!("Phase: {}", phase.title()));
            ui.label(format!("Submissions: {}", state.form.submissions_accepted));

            ui.separator();

            if state.form.errors.is_empty() {
                ui.label("No field errors");
            } else {
                for (field, message) in &state.form.errors {
                    ui.label(format!("{}: {}", field.key(), message));
                }
            }

            if let Some(ack) = &state.form.last_ack {
                ui.separator();
                ui.label(format!("Last ack: {}", ack.id));
                ui.label(format!("At: {}", ack.received_at.format("%H:%M:%S")));
            }
        });
}
