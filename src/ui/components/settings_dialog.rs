use crate::config::{Config, PAGE_SIZES};
use crate::grid::SortCycle;
use eframe::egui;
use std::path::PathBuf;

#[derive(Debug)]
pub enum SettingsDialogEvent {
    Changed,
    Close,
}

/// Edits a working copy of the settings; the app saves it on `Changed`.
pub struct SettingsDialog {
    export_dir_input: Option<String>,
}

impl SettingsDialog {
    pub fn new() -> Self {
        Self {
            export_dir_input: None,
        }
    }

    pub fn show(&mut self, ctx: &egui::Context, config: &mut Config) -> Option<SettingsDialogEvent> {
        let mut event = None;
        let export_dir_input = self.export_dir_input.get_or_insert_with(|| {
            config
                .export_dir
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default()
        });

        egui::Window::new("Settings")
            .default_width(420.0)
            .collapsible(false)
            .show(ctx, |ui| {
                ui.heading("Grid");
                ui.separator();

                ui.horizontal(|ui| {
                    ui.label("Rows per page:");
                    for size in PAGE_SIZES {
                        if ui.selectable_value(&mut config.page_size, size, format!("{}", size)).clicked() {
                            event = Some(SettingsDialogEvent::Changed);
                        }
                    }
                });

                ui.horizontal(|ui| {
                    ui.label("Repeated header clicks:");
                    egui::ComboBox::from_id_source("sort_cycle")
                        .selected_text(config.sort_cycle.as_str())
                        .width(220.0)
                        .show_ui(ui, |ui| {
                            for cycle in [SortCycle::Toggle, SortCycle::TriState] {
                                if ui.selectable_value(&mut config.sort_cycle, cycle, cycle.as_str()).clicked() {
                                    event = Some(SettingsDialogEvent::Changed);
                                }
                            }
                        });
                });

                ui.add_space(8.0);
                ui.heading("Export");
                ui.separator();

                if ui.checkbox(&mut config.export_rendered, "Export formatted values instead of raw values").changed() {
                    event = Some(SettingsDialogEvent::Changed);
                }

                ui.horizontal(|ui| {
                    ui.label("Directory:");
                    let response = ui.add(
                        egui::TextEdit::singleline(export_dir_input)
                            .hint_text("Downloads folder")
                            .desired_width(260.0)
                    );
                    if response.lost_focus() {
                        let trimmed = export_dir_input.trim();
                        let dir = (!trimmed.is_empty()).then(|| PathBuf::from(trimmed));
                        if dir != config.export_dir {
                            config.export_dir = dir;
                            event = Some(SettingsDialogEvent::Changed);
                        }
                    }
                });

                ui.add_space(8.0);
                ui.heading("Notifications");
                ui.separator();

                ui.horizontal(|ui| {
                    ui.label("Toast duration (seconds):");
                    if ui.add(egui::DragValue::new(&mut config.toast_seconds).clamp_range(1..=30)).changed() {
                        event = Some(SettingsDialogEvent::Changed);
                    }
                });

                ui.separator();

                if ui.button("Close").clicked() {
                    event = Some(SettingsDialogEvent::Close);
                }
            });

        if matches!(event, Some(SettingsDialogEvent::Close)) {
            self.export_dir_input = None;
        }

        event
    }
}
