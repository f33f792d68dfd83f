//! # Form Components
//!
//! Reusable form elements: labeled inputs, inline errors, the submit button.

use egui;

use crate::ui::theme::Theme;

/// Width of inputs and the submit button
pub const FIELD_WIDTH: f32 = 320.0;
const FIELD_HEIGHT: f32 = 32.0;

/// Render a labeled single-line text input
///
/// `secret` masks the typed characters.
pub fn render_text_input(
    ui: &mut egui::Ui,
    label: &str,
    value: &mut String,
    hint: &str,
    secret: bool,
    theme: &Theme,
) -> egui::Response {
    ui.label(egui::RichText::new(label).size(14.0).color(theme.normal));
    ui.add_sized(
        [FIELD_WIDTH, FIELD_HEIGHT],
        egui::TextEdit::singleline(value)
            .password(secret)
            .hint_text(hint),
    )
}

/// Render a styled, optionally disabled, full-width button
pub fn render_button(ui: &mut egui::Ui, text: &str, enabled: bool, theme: &Theme) -> egui::Response {
    let (fill, text_color) = if enabled {
        (theme.selected, egui::Color32::WHITE)
    } else {
        (theme.colors.gray_disabled, theme.dim)
    };

    let button = egui::Button::new(egui::RichText::new(text).size(16.0).color(text_color))
        .fill(fill)
        .min_size(egui::vec2(FIELD_WIDTH, 36.0));

    ui.add_enabled(enabled, button)
}

/// Render a form heading
pub fn render_form_heading(ui: &mut egui::Ui, text: &str, theme: &Theme) {
    let heading = egui::RichText::new(text)
        .size(24.0)
        .strong()
        .color(theme.normal);
    ui.label(heading);
    ui.add_space(16.0);
}

/// Render the small red message below a field, or nothing
pub fn render_error(ui: &mut egui::Ui, error: Option<&str>, theme: &Theme) {
    if let Some(error) = error {
        ui.label(egui::RichText::new(error).size(12.0).color(theme.error));
    }
    ui.add_space(8.0);
}

/// Render a help/hint text
pub fn render_hint(ui: &mut egui::Ui, hint: &str, theme: &Theme) {
    ui.label(egui::RichText::new(hint).size(12.0).color(theme.dim));
}
