use eframe::egui;

#[derive(Debug)]
pub enum ConfirmDialogEvent {
    Confirm,
    Cancel,
}

/// Modal yes/no prompt used before destructive row actions.
pub struct ConfirmDialog;

impl ConfirmDialog {
    pub fn new() -> Self {
        Self
    }

    pub fn show(&mut self, ctx: &egui::Context, title: &str, message: &str) -> Option<ConfirmDialogEvent> {
        let mut event = None;

        egui::Window::new(title)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(message);
                ui.separator();

                ui.horizontal(|ui| {
                    let delete = egui::Button::new(egui::RichText::new("Delete").color(egui::Color32::WHITE))
                        .fill(egui::Color32::from_rgb(220, 38, 38));
                    if ui.add(delete).clicked() {
                        event = Some(ConfirmDialogEvent::Confirm);
                    }
                    if ui.button("Cancel").clicked() {
                        event = Some(ConfirmDialogEvent::Cancel);
                    }
                });
            });

        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            event = Some(ConfirmDialogEvent::Cancel);
        }

        event
    }
}
