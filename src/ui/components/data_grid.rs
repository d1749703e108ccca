use crate::grid::{CellFallback, CellStyle, GridEvent, RenderModel};
use crate::ui::variant_colors;
use eframe::egui;
use std::cell::Cell;
use std::collections::HashSet;

/// Paints the header and body of a grid and reports clicks as grid events.
pub struct DataGrid {
    reported: HashSet<CellFallback>,
}

impl DataGrid {
    pub fn new() -> Self {
        Self {
            reported: HashSet::new(),
        }
    }

    /// Forget logged fallbacks, e.g. after mounting another page.
    pub fn reset(&mut self) {
        self.reported.clear();
    }

    fn log_fallbacks(&mut self, fallbacks: &[CellFallback]) {
        // The model is rebuilt every frame, only log each failure once
        for fallback in fallbacks {
            if self.reported.insert(fallback.clone()) {
                tracing::warn!(
                    column = %fallback.column,
                    row = fallback.row,
                    reason = %fallback.reason,
                    "cell render failed, showing raw value"
                );
            }
        }
    }

    pub fn show(&mut self, ui: &mut egui::Ui, model: &RenderModel) -> Option<GridEvent> {
        self.log_fallbacks(&model.fallbacks);

        if let Some(empty) = model.empty {
            ui.centered_and_justified(|ui| {
                ui.label(egui::RichText::new(empty.message()).color(egui::Color32::GRAY));
            });
            return None;
        }

        let clicked = Cell::new(None);
        let has_actions = model.body.first().is_some_and(|row| !row.actions.is_empty());
        let first_row_number = model.page.as_ref().map(|p| p.start).unwrap_or(0);

        let available_height = ui.available_height();
        egui::ScrollArea::horizontal()
            .id_source("data_grid")
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                use egui_extras::{Column as TableColumn, TableBuilder};

                let mut table = TableBuilder::new(ui)
                    .striped(true)
                    .resizable(true)
                    .vscroll(true)
                    .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
                    .column(TableColumn::initial(40.0).at_least(30.0).resizable(false)) // Line number column
                    .columns(TableColumn::initial(130.0).at_least(70.0).resizable(true).clip(true), model.headers.len())
                    .min_scrolled_height(available_height)
                    .max_scroll_height(available_height);

                if has_actions {
                    table = table.column(TableColumn::remainder().at_least(200.0));
                }

                table
                    .header(24.0, |mut header| {
                        header.col(|ui| {
                            ui.strong("#");
                        });

                        for cell in &model.headers {
                            header.col(|ui| {
                                if cell.sortable {
                                    let button = egui::Button::new(egui::RichText::new(cell.text()).strong()).frame(false);
                                    if ui.add(button).on_hover_text("Click to sort").clicked() {
                                        clicked.set(Some(GridEvent::HeaderClicked(cell.key.clone())));
                                    }
                                } else {
                                    ui.strong(cell.label.as_str());
                                }
                            });
                        }

                        if has_actions {
                            header.col(|ui| {
                                ui.strong("Actions");
                            });
                        }
                    })
                    .body(|mut body| {
                        for (offset, row) in model.body.iter().enumerate() {
                            body.row(22.0, |mut row_ui| {
                                row_ui.col(|ui| {
                                    ui.label(egui::RichText::new(format!("{}", first_row_number + offset + 1))
                                        .color(egui::Color32::from_rgb(150, 150, 150)));
                                });

                                for cell in &row.cells {
                                    row_ui.col(|ui| {
                                        ui.style_mut().wrap = Some(false);
                                        let response = paint_cell(ui, &cell.text, cell.style);

                                        // Right click context menu to copy cell value
                                        response.context_menu(|ui| {
                                            if ui.button("Copy Cell Value").clicked() {
                                                ui.output_mut(|o| o.copied_text = cell.text.clone());
                                                ui.close_menu();
                                            }
                                        });
                                    });
                                }

                                if has_actions {
                                    row_ui.col(|ui| {
                                        for action in &row.actions {
                                            let (text_color, fill) = variant_colors(action.variant);
                                            let button = egui::Button::new(egui::RichText::new(action.text()).color(text_color))
                                                .fill(fill)
                                                .small();
                                            if ui.add(button).clicked() {
                                                clicked.set(Some(GridEvent::ActionClicked {
                                                    action: action.index,
                                                    row: row.source,
                                                }));
                                            }
                                        }
                                    });
                                }
                            });
                        }
                    });
            });

        clicked.into_inner()
    }
}

fn paint_cell(ui: &mut egui::Ui, text: &str, style: CellStyle) -> egui::Response {
    match style {
        CellStyle::Text => ui.add(egui::Label::new(text).truncate(true).selectable(true)),
        CellStyle::Numeric => ui.add(egui::Label::new(egui::RichText::new(text).monospace()).truncate(true)),
        CellStyle::Link => ui.add(
            egui::Label::new(egui::RichText::new(text).underline().color(egui::Color32::from_rgb(37, 99, 235)))
                .truncate(true),
        ),
        CellStyle::Badge(variant) => {
            let (text_color, background) = variant_colors(variant);
            ui.label(
                egui::RichText::new(format!(" {} ", text))
                    .small()
                    .color(text_color)
                    .background_color(background),
            )
        }
    }
}
