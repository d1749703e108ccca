use crate::grid::{GridEvent, Toolbar, ALL_FILTER};
use eframe::egui;

/// Search box, one combo box per filterable column, and the export/refresh buttons.
pub struct GridToolbar;

impl GridToolbar {
    pub fn new() -> Self {
        Self
    }

    pub fn show(&mut self, ui: &mut egui::Ui, toolbar: &Toolbar) -> Option<GridEvent> {
        let mut event = None;

        ui.horizontal(|ui| {
            let mut search = toolbar.search.clone();
            let response = ui.add(
                egui::TextEdit::singleline(&mut search)
                    .hint_text(toolbar.search_placeholder.as_str())
                    .desired_width(260.0)
            );
            if response.changed() {
                event = Some(GridEvent::SearchChanged(search));
            }

            for filter in &toolbar.filters {
                let selected_label = filter
                    .selected
                    .as_deref()
                    .and_then(|value| filter.options.iter().find(|o| o.value == value))
                    .map(|o| o.label.clone())
                    .unwrap_or_else(|| format!("All {}", filter.header));

                egui::ComboBox::from_id_source(format!("filter_{}", filter.key))
                    .selected_text(selected_label)
                    .width(150.0)
                    .show_ui(ui, |ui| {
                        if ui.selectable_label(filter.selected.is_none(), format!("All {}", filter.header)).clicked() {
                            event = Some(GridEvent::FilterSelected {
                                key: filter.key.clone(),
                                value: ALL_FILTER.to_string(),
                            });
                        }
                        for option in &filter.options {
                            let is_selected = filter.selected.as_deref() == Some(option.value.as_str());
                            if ui.selectable_label(is_selected, option.label.as_str()).clicked() {
                                event = Some(GridEvent::FilterSelected {
                                    key: filter.key.clone(),
                                    value: option.value.clone(),
                                });
                            }
                        }
                    });
            }

            if toolbar.active_filters > 0 || !toolbar.search.is_empty() {
                if ui.small_button("✖ Clear").on_hover_text("Clear search and filters").clicked() {
                    event = Some(GridEvent::FiltersCleared);
                }
                ui.label(egui::RichText::new(format!("{} filter(s)", toolbar.active_filters))
                    .size(10.0)
                    .color(egui::Color32::GRAY));
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if toolbar.refreshable && ui.button("🔄 Refresh").clicked() {
                    event = Some(GridEvent::RefreshClicked);
                }
                if toolbar.exportable && ui.button("⬇ Export CSV").clicked() {
                    event = Some(GridEvent::ExportClicked);
                }
            });
        });

        ui.separator();

        event
    }
}
