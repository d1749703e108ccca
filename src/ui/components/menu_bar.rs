use eframe::egui;

#[derive(Debug)]
pub enum MenuBarEvent {
    ShowSettings,
    Export,
    Quit,
    ToggleNavigation,
}

pub struct MenuBar;

impl MenuBar {
    pub fn new() -> Self {
        Self
    }

    pub fn show(&mut self, ui: &mut egui::Ui, page_title: &str) -> Option<MenuBarEvent> {
        let mut event = None;

        egui::menu::bar(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Export current view...").clicked() {
                    event = Some(MenuBarEvent::Export);
                    ui.close_menu();
                }
                if ui.button("Settings...").clicked() {
                    event = Some(MenuBarEvent::ShowSettings);
                    ui.close_menu();
                }
                if ui.button("Quit").clicked() {
                    event = Some(MenuBarEvent::Quit);
                }
            });

            ui.menu_button("View", |ui| {
                if ui.button("Toggle Navigation").clicked() {
                    event = Some(MenuBarEvent::ToggleNavigation);
                    ui.close_menu();
                }
            });

            ui.separator();
            ui.label(egui::RichText::new(page_title).strong());
        });

        event
    }
}
