use crate::models::PageKind;
use eframe::egui;

#[derive(Debug)]
pub enum PageNavEvent {
    PageSelected(PageKind),
}

pub struct PageNav;

impl PageNav {
    pub fn new() -> Self {
        Self
    }

    pub fn show(&mut self, ui: &mut egui::Ui, active: PageKind, row_counts: &[(PageKind, usize)]) -> Option<PageNavEvent> {
        let mut event = None;

        egui::ScrollArea::vertical()
            .id_source("pages_sidebar")
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                for &(kind, count) in row_counts {
                    ui.horizontal(|ui| {
                        let label = format!("{} {}", kind.icon(), kind.title());
                        if ui.selectable_label(kind == active, label).clicked() && kind != active {
                            event = Some(PageNavEvent::PageSelected(kind));
                        }
                        ui.label(egui::RichText::new(format!("({})", count)).color(egui::Color32::GRAY));
                    });
                }
            });

        event
    }
}
