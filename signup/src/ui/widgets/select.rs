//! # Select Widget
//!
//! Drop-down over [`CountryOption`]s with type-to-filter. The control holds
//! the option object; callers receive it only when the selection changes.

use egui;
use shared::CountryOption;

use crate::ui::theme::Theme;
use crate::ui::widgets::forms::FIELD_WIDTH;

/// Options whose label (or code) contains `query`, case-insensitively
pub fn filter_options<'a>(options: &'a [CountryOption], query: &str) -> Vec<&'a CountryOption> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return options.iter().collect();
    }

    options
        .iter()
        .filter(|option| {
            option.label.to_lowercase().contains(&query)
                || option.value.to_lowercase() == query
        })
        .collect()
}

/// Render a labeled select.
///
/// Returns `Some(new_selection)` on the frame the user picks or clears an
/// option, `None` otherwise.
pub fn render_select(
    ui: &mut egui::Ui,
    id_salt: &str,
    label: &str,
    placeholder: &str,
    selected: Option<&CountryOption>,
    options: &[CountryOption],
    theme: &Theme,
) -> Option<Option<CountryOption>> {
    ui.label(egui::RichText::new(label).size(14.0).color(theme.normal));

    let filter_id = ui.make_persistent_id((id_salt, "filter"));
    let mut filter: String = ui.data_mut(|d| d.get_temp(filter_id).unwrap_or_default());
    let mut changed = None;

    let selected_text = match selected {
        Some(option) => egui::RichText::new(&option.label).color(theme.normal),
        None => egui::RichText::new(placeholder).color(theme.dim),
    };

    egui::ComboBox::from_id_salt(id_salt)
        .width(FIELD_WIDTH)
        .height(240.0)
        .selected_text(selected_text)
        .show_ui(ui, |ui| {
            let filter_response = ui.add(
                egui::TextEdit::singleline(&mut filter)
                    .hint_text("Type to filter")
                    .desired_width(f32::INFINITY),
            );
            filter_response.request_focus();
            ui.separator();

            if selected.is_some() && ui.selectable_label(false, "Clear selection").clicked() {
                changed = Some(None);
            }

            let matches = filter_options(options, &filter);
            if matches.is_empty() {
                ui.colored_label(theme.dim, "No matches");
            }

            for option in matches {
                let is_selected = selected.is_some_and(|s| s.value == option.value);
                if ui.selectable_label(is_selected, &option.label).clicked() && !is_selected {
                    changed = Some(Some(option.clone()));
                }
            }
        });

    if changed.is_some() {
        filter.clear();
    }
    ui.data_mut(|d| d.insert_temp(filter_id, filter));

    changed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> Vec<CountryOption> {
        vec![
            CountryOption::new("US", "United States"),
            CountryOption::new("GB", "United Kingdom"),
            CountryOption::new("DE", "Germany"),
        ]
    }

    #[test]
    fn test_empty_filter_keeps_all() {
        let options = options();
        assert_eq!(filter_options(&options, "  ").len(), 3);
    }

    #[test]
    fn test_filter_matches_label_substring() {
        let options = options();
        let matches = filter_options(&options, "united");
        let codes: Vec<_> = matches.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(codes, vec!["US", "GB"]);
    }

    #[test]
    fn test_filter_matches_exact_code() {
        let options = options();
        let matches = filter_options(&options, "de");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].value, "DE");
    }

    #[test]
    fn test_filter_without_match() {
        let options = options();
        assert!(filter_options(&options, "atlantis").is_empty());
    }
}
