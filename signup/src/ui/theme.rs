//! # GUI Theme
//!
//! Light form theme: white panels, gray borders, blue accent, red errors.

use egui::Theme as EguiTheme;
use egui::{Color32, Context, Stroke, Visuals};

/// Form color palette
#[derive(Debug, Clone)]
pub struct FormColors {
    /// Panel background
    pub background: Color32,
    /// Primary text
    pub text: Color32,
    /// Submit button and focus ring
    pub blue_primary: Color32,
    /// Hovered submit button
    pub blue_dark: Color32,
    /// Input borders
    pub gray_border: Color32,
    /// Labels and hints
    pub gray_secondary: Color32,
    /// Disabled controls
    pub gray_disabled: Color32,
    /// Field error messages
    pub red_error: Color32,
    /// Accepted submission
    pub green_success: Color32,
}

impl Default for FormColors {
    fn default() -> Self {
        FormColors {
            background: Color32::from_rgb(255, 255, 255),     // #FFFFFF
            text: Color32::from_rgb(17, 24, 39),              // #111827
            blue_primary: Color32::from_rgb(59, 130, 246),    // #3B82F6
            blue_dark: Color32::from_rgb(37, 99, 235),        // #2563EB
            gray_border: Color32::from_rgb(209, 213, 219),    // #D1D5DB
            gray_secondary: Color32::from_rgb(107, 114, 128), // #6B7280
            gray_disabled: Color32::from_rgb(229, 231, 235),  // #E5E7EB
            red_error: Color32::from_rgb(220, 38, 38),        // #DC2626
            green_success: Color32::from_rgb(22, 163, 74),    // #16A34A
        }
    }
}

/// Application theme
#[derive(Debug, Clone)]
pub struct Theme {
    pub colors: FormColors,
    pub normal: Color32,
    /// Accent for headings and the submit button
    pub selected: Color32,
    pub border: Color32,
    pub dim: Color32,
    pub success: Color32,
    pub error: Color32,
    pub background: Color32,
}

impl Default for Theme {
    fn default() -> Self {
        let colors = FormColors::default();
        Theme {
            colors: colors.clone(),
            normal: colors.text,
            selected: colors.blue_primary,
            border: colors.gray_border,
            dim: colors.gray_secondary,
            success: colors.green_success,
            error: colors.red_error,
            background: colors.background,
        }
    }
}

impl Theme {
    /// egui visuals for the form palette
    pub fn form_visuals(colors: &FormColors) -> Visuals {
        let mut visuals = Visuals::light();

        visuals.override_text_color = Some(colors.text);
        visuals.panel_fill = colors.background;
        visuals.window_fill = colors.background;
        visuals.extreme_bg_color = colors.background; // text edit background
        visuals.window_stroke = Stroke::new(1.0, colors.gray_border);

        visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, colors.gray_border);
        visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, colors.blue_primary);
        visuals.widgets.active.bg_stroke = Stroke::new(2.0, colors.blue_primary);
        visuals.widgets.open.bg_stroke = Stroke::new(1.0, colors.blue_primary);

        visuals.selection.bg_fill = Color32::from_rgba_unmultiplied(59, 130, 246, 64);
        visuals.selection.stroke = Stroke::new(2.0, colors.blue_primary);
        visuals.hyperlink_color = colors.blue_dark;

        visuals
    }

    /// Apply the form theme to an egui context
    ///
    /// Uses `style_mut_of` for both egui themes so a system theme switch keeps
    /// the form palette.
    pub fn apply(ctx: &Context) {
        let visuals = Self::form_visuals(&FormColors::default());

        for egui_theme in [EguiTheme::Light, EguiTheme::Dark] {
            ctx.style_mut_of(egui_theme, |style| {
                style.visuals = visuals.clone();
                style.spacing.item_spacing = egui::Vec2::new(8.0, 6.0);
                style.spacing.button_padding = egui::Vec2::new(12.0, 8.0);
                style.spacing.interact_size = egui::Vec2::new(32.0, 32.0);
            });
        }
        ctx.set_theme(EguiTheme::Light);

        tracing::debug!("Applied form theme");
    }
}
