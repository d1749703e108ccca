use crate::grid::Variant;
use crate::models::ToastLevel;
use eframe::egui;

/// Compact text sizes for dense grid pages
pub fn setup_styles(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    style.text_styles.insert(
        egui::TextStyle::Body,
        egui::FontId::new(12.0, egui::FontFamily::Proportional)
    );
    style.text_styles.insert(
        egui::TextStyle::Button,
        egui::FontId::new(12.0, egui::FontFamily::Proportional)
    );
    style.text_styles.insert(
        egui::TextStyle::Heading,
        egui::FontId::new(16.0, egui::FontFamily::Proportional)
    );
    style.text_styles.insert(
        egui::TextStyle::Small,
        egui::FontId::new(9.0, egui::FontFamily::Proportional)
    );
    style.text_styles.insert(
        egui::TextStyle::Monospace,
        egui::FontId::new(12.0, egui::FontFamily::Monospace)
    );

    ctx.set_style(style);
}

/// (text, background) colors for a badge or button of the given variant.
pub fn variant_colors(variant: Variant) -> (egui::Color32, egui::Color32) {
    match variant {
        Variant::Default => (egui::Color32::from_rgb(30, 30, 30), egui::Color32::from_rgb(225, 225, 225)),
        Variant::Primary => (egui::Color32::WHITE, egui::Color32::from_rgb(37, 99, 235)),
        Variant::Secondary => (egui::Color32::from_rgb(30, 30, 30), egui::Color32::from_rgb(241, 245, 249)),
        Variant::Success => (egui::Color32::from_rgb(22, 101, 52), egui::Color32::from_rgb(220, 252, 231)),
        Variant::Warning => (egui::Color32::from_rgb(133, 77, 14), egui::Color32::from_rgb(254, 249, 195)),
        Variant::Destructive => (egui::Color32::WHITE, egui::Color32::from_rgb(220, 38, 38)),
        Variant::Outline => (egui::Color32::from_rgb(71, 85, 105), egui::Color32::TRANSPARENT),
    }
}

pub fn toast_color(level: ToastLevel) -> egui::Color32 {
    match level {
        ToastLevel::Info => egui::Color32::from_rgb(37, 99, 235),
        ToastLevel::Success => egui::Color32::from_rgb(22, 163, 74),
        ToastLevel::Error => egui::Color32::from_rgb(220, 38, 38),
    }
}
