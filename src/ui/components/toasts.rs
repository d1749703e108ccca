use crate::models::Toast;
use crate::ui::toast_color;
use eframe::egui;

/// Stacks active toasts in the bottom right corner.
pub struct ToastStack;

impl ToastStack {
    pub fn new() -> Self {
        Self
    }

    pub fn show(&mut self, ctx: &egui::Context, toasts: &[Toast]) {
        if toasts.is_empty() {
            return;
        }

        egui::Area::new(egui::Id::new("toasts"))
            .anchor(egui::Align2::RIGHT_BOTTOM, [-16.0, -36.0])
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                for toast in toasts {
                    egui::Frame::popup(ui.style())
                        .stroke(egui::Stroke::new(1.0, toast_color(toast.level)))
                        .show(ui, |ui| {
                            ui.set_max_width(320.0);
                            ui.label(egui::RichText::new(&toast.text).color(toast_color(toast.level)));
                        });
                    ui.add_space(4.0);
                }
            });
    }
}
