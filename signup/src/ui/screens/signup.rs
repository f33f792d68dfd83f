//! # Sign-Up Screen
//!
//! The single form of the application, laid out for the active revision.

use egui;
use once_cell::sync::Lazy;
use shared::{country_options, CountryOption};

use crate::app::{AppLike, AppState, FormPhase, SignupField, SubmitOutcome};
use crate::core::error::AppError;
use crate::ui::theme::Theme;
use crate::ui::widgets::{forms, select};

static COUNTRIES: Lazy<Vec<CountryOption>> = Lazy::new(country_options);

/// Render the sign-up form
///
/// `state` is a snapshot taken before the frame; edits go through `app`.
pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut impl AppLike) {
    let theme = Theme::default();
    let form = &state.form;
    let fields = state.revision.fields();
    let last_text_field = fields.iter().rev().find(|field| !field.is_select()).copied();
    let mut submit = false;

    ui.vertical_centered(|ui| {
        ui.set_max_width(forms::FIELD_WIDTH);
        ui.add_space(32.0);
        forms::render_form_heading(ui, "Sign Up", &theme);

        ui.with_layout(egui::Layout::top_down(egui::Align::Min), |ui| {
            for &field in fields {
                if field.is_select() {
                    render_country(ui, state, app, &theme);
                    continue;
                }

                let mut input = field.value(&form.values).to_string();
                let response = forms::render_text_input(
                    ui,
                    field.label(),
                    &mut input,
                    field.hint(),
                    field.is_secret(),
                    &theme,
                );

                if response.changed() {
                    app.handle_field_change(field, input);
                }

                // Enter in the last input submits
                if Some(field) == last_text_field
                    && response.lost_focus()
                    && ui.input(|i| i.key_pressed(egui::Key::Enter))
                {
                    submit = true;
                }

                forms::render_error(ui, form.error_for(field), &theme);
            }

            if let Some(err) = &form.form_error {
                ui.colored_label(theme.error, err);
                ui.add_space(8.0);
            }

            let button_text = if form.phase == FormPhase::Submitting {
                "Submitting..."
            } else {
                "Submit"
            };
            if forms::render_button(ui, button_text, state.can_submit(), &theme).clicked() {
                submit = true;
            }

            ui.add_space(8.0);
            render_footer(ui, state, app, &theme);
        });
    });

    if submit {
        submit_form(app);
    }
}

fn render_country(ui: &mut egui::Ui, state: &AppState, app: &mut impl AppLike, theme: &Theme) {
    let field = SignupField::Country;

    let changed = select::render_select(
        ui,
        "country_select",
        field.label(),
        field.hint(),
        state.form.selected_country.as_ref(),
        &COUNTRIES,
        theme,
    );

    if let Some(selection) = changed {
        if let Err(e) = app.handle_country_select(selection) {
            tracing::debug!(error = %e, "Country selection rejected");
        }
    }

    forms::render_error(ui, state.form.error_for(field), theme);
}

fn render_footer(ui: &mut egui::Ui, state: &AppState, app: &mut impl AppLike, theme: &Theme) {
    match state.form.phase {
        FormPhase::Success => {
            ui.colored_label(theme.success, "Thanks for signing up!");
        }
        FormPhase::Error if !state.form.errors.is_empty() => {
            forms::render_hint(ui, "Fix the highlighted fields and submit again", theme);
        }
        _ => {}
    }

    let can_reset = !state.form.phase.is_in_flight();
    if ui
        .add_enabled(can_reset, egui::Button::new("Reset").frame(false))
        .clicked()
    {
        if let Err(e) = app.handle_reset() {
            tracing::debug!(error = %e, "Reset rejected");
        }
    }
}

fn submit_form(app: &mut impl AppLike) {
    match app.handle_submit_click() {
        Ok(SubmitOutcome::Started) => tracing::debug!("Submit started"),
        Ok(SubmitOutcome::Rejected(errors)) => {
            tracing::debug!(error_count = errors.len(), "Submit rejected by validation");
        }
        Ok(SubmitOutcome::Ignored) => {}
        Err(e @ AppError::State(_)) => tracing::debug!(error = %e, "Submit ignored"),
        Err(e) => tracing::warn!(error = %e, "Submit failed"),
    }
}
