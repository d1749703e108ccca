use crate::config::PAGE_SIZES;
use crate::grid::{GridEvent, PageWindow};
use eframe::egui;

pub struct PaginationControls;

impl PaginationControls {
    pub fn new() -> Self {
        Self
    }

    pub fn show(&mut self, ui: &mut egui::Ui, page: &PageWindow, visible_rows: usize) -> Option<GridEvent> {
        let mut event = None;

        ui.horizontal(|ui| {
            ui.label("Rows per page:");

            for size in PAGE_SIZES {
                let is_selected = page.size == size;
                if ui.selectable_label(is_selected, format!("{}", size)).clicked() && !is_selected {
                    event = Some(GridEvent::PageSizeChanged(size));
                }
            }

            ui.separator();

            if ui.button("◀ Previous").clicked() && page.index > 0 {
                event = Some(GridEvent::PageChanged(page.index - 1));
            }

            let first = if visible_rows == 0 { 0 } else { page.start + 1 };
            ui.label(format!(
                "Page {} of {} ({}-{} of {} rows)",
                page.index + 1,
                page.total_pages,
                first,
                page.end,
                visible_rows
            ));

            if ui.button("Next ▶").clicked() && page.index + 1 < page.total_pages {
                event = Some(GridEvent::PageChanged(page.index + 1));
            }
        });

        event
    }
}
