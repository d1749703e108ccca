use crate::config::Config;
use crate::grid::{CsvExport, GridEvent, GridOutcome, RenderModel};
use crate::models::{Page, PageKind, PageMessage, ToastLevel, Toasts};
use crate::ui::components::*;
use crate::ui::setup_styles;
use anyhow::{Context, Result};
use eframe::egui;
use std::fs;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// A delete waiting for the user's confirmation.
struct PendingDelete {
    id: String,
    label: String,
}

pub struct ErpApp {
    pub config: Config,
    pub page: Page,

    // UI state
    pub show_navigation: bool,
    pub show_settings: bool,
    pending_delete: Option<PendingDelete>,
    pub status_message: String,
    toasts: Toasts,
    sample_counts: Vec<(PageKind, usize)>,

    // UI Components
    menu_bar: MenuBar,
    status_bar: StatusBar,
    page_nav: PageNav,
    settings_dialog: SettingsDialog,
    confirm_dialog: ConfirmDialog,
    toolbar: GridToolbar,
    pagination: PaginationControls,
    data_grid: DataGrid,
    toast_stack: ToastStack,
}

impl ErpApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: Config) -> Self {
        setup_styles(&cc.egui_ctx);

        let mut page = Page::mount(PageKind::PurchaseOrders, config.sort_cycle, config.page_size);
        page.controller.set_export_mode(config.export_mode());
        let toasts = Toasts::new(Duration::from_secs(config.toast_seconds));

        Self {
            config,
            page,
            show_navigation: true,
            show_settings: false,
            pending_delete: None,
            status_message: "Ready".to_string(),
            toasts,
            sample_counts: PageKind::all().into_iter().map(|k| (k, k.sample_rows().len())).collect(),
            menu_bar: MenuBar::new(),
            status_bar: StatusBar::new(),
            page_nav: PageNav::new(),
            settings_dialog: SettingsDialog::new(),
            confirm_dialog: ConfirmDialog::new(),
            toolbar: GridToolbar::new(),
            pagination: PaginationControls::new(),
            data_grid: DataGrid::new(),
            toast_stack: ToastStack::new(),
        }
    }

    fn notify(&mut self, level: ToastLevel, text: impl Into<String>) {
        let text = text.into();
        self.status_message = text.clone();
        self.toasts.push(level, text, Instant::now());
    }

    pub fn open_page(&mut self, kind: PageKind) {
        let mut page = Page::mount(kind, self.config.sort_cycle, self.config.page_size);
        page.controller.set_export_mode(self.config.export_mode());
        self.page = page;
        self.pending_delete = None;
        self.data_grid.reset();
        self.status_message = format!("{} loaded", kind.title());
    }

    fn handle_grid_event(&mut self, event: GridEvent) {
        let outcome = self.page.controller.handle(event, &self.page.grid, &self.page.rows);
        match outcome {
            GridOutcome::Updated | GridOutcome::Ignored => {}
            GridOutcome::Export(export) => self.save_export(export),
            GridOutcome::Message(message) => self.apply_message(message),
        }
    }

    /// Carries out what a row action or the refresh button asked for.
    fn apply_message(&mut self, message: PageMessage) {
        match message {
            PageMessage::Notify { level, text } => self.notify(level, text),
            PageMessage::ConfirmDelete { id, label } => {
                self.pending_delete = Some(PendingDelete { id, label });
            }
            PageMessage::Duplicate { id } => match self.page.duplicate(&id) {
                Some(new_id) => self.notify(ToastLevel::Success, format!("Duplicated {} as {}", id, new_id)),
                None => self.notify(ToastLevel::Error, format!("{} no longer exists", id)),
            },
            PageMessage::Refresh => {
                self.page.restore_sample_rows();
                self.notify(
                    ToastLevel::Info,
                    format!("{} refreshed ({} records)", self.page.kind.title(), self.page.rows.len()),
                );
            }
        }
    }

    fn confirm_delete(&mut self) {
        if let Some(pending) = self.pending_delete.take() {
            if self.page.remove(&pending.id) {
                tracing::info!(id = %pending.id, page = self.page.kind.title(), "deleted row");
                self.notify(ToastLevel::Success, format!("Deleted {}", pending.label));
            } else {
                self.notify(ToastLevel::Error, format!("{} no longer exists", pending.label));
            }
        }
    }

    fn save_export(&mut self, export: CsvExport) {
        match self.write_export(&export) {
            Ok(path) => {
                tracing::info!(path = %path.display(), rows = export.row_count, "saved export");
                self.notify(
                    ToastLevel::Success,
                    format!("Exported {} rows to {}", export.row_count, path.display()),
                );
            }
            Err(e) => {
                tracing::error!(error = %e, "export failed");
                self.notify(ToastLevel::Error, format!("Export failed: {:#}", e));
            }
        }
    }

    fn write_export(&self, export: &CsvExport) -> Result<PathBuf> {
        let dir = self.config.export_directory()?;
        fs::create_dir_all(&dir).with_context(|| format!("creating {}", dir.display()))?;

        let path = dir.join(export_file_name(self.page.kind.export_name(), chrono::Local::now().naive_local()));
        fs::write(&path, &export.content).with_context(|| format!("writing {}", path.display()))?;
        Ok(path)
    }

    fn apply_settings(&mut self) {
        self.page.controller.set_sort_cycle(self.config.sort_cycle);
        self.page.controller.set_export_mode(self.config.export_mode());
        self.toasts.set_lifetime(Duration::from_secs(self.config.toast_seconds));

        let current = self.page.controller.view().page.map(|p| p.size);
        if current != Some(self.config.page_size) {
            self.handle_grid_event(GridEvent::PageSizeChanged(self.config.page_size));
        }

        if let Err(e) = self.config.save() {
            tracing::error!(error = %e, "could not save settings");
            self.notify(ToastLevel::Error, format!("Could not save settings: {:#}", e));
        }
    }
}

/// `<stem>-<YYYYMMDD-HHMMSS>.csv`
pub fn export_file_name(stem: &str, at: chrono::NaiveDateTime) -> String {
    format!("{}-{}.csv", stem, at.format("%Y%m%d-%H%M%S"))
}

/// Row counts for the side navigation. Only the mounted page can differ from its sample data.
fn nav_counts(sample_counts: &[(PageKind, usize)], current: &Page) -> Vec<(PageKind, usize)> {
    sample_counts
        .iter()
        .map(|&(kind, count)| if kind == current.kind { (kind, current.rows.len()) } else { (kind, count) })
        .collect()
}

impl eframe::App for ErpApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Top menu bar
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            if let Some(event) = self.menu_bar.show(ui, self.page.kind.title()) {
                match event {
                    MenuBarEvent::ShowSettings => self.show_settings = true,
                    MenuBarEvent::Export => self.handle_grid_event(GridEvent::ExportClicked),
                    MenuBarEvent::Quit => ctx.send_viewport_cmd(egui::ViewportCommand::Close),
                    MenuBarEvent::ToggleNavigation => self.show_navigation = !self.show_navigation,
                }
            }
        });

        let model: RenderModel = self.page.controller.render(&self.page.grid, &self.page.rows);

        // Status bar
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            self.status_bar.show(ui, &self.status_message, model.visible_rows, model.total_rows);
        });

        // Settings dialog
        if self.show_settings {
            if let Some(event) = self.settings_dialog.show(ctx, &mut self.config) {
                match event {
                    SettingsDialogEvent::Changed => self.apply_settings(),
                    SettingsDialogEvent::Close => self.show_settings = false,
                }
            }
        }

        // Delete confirmation
        if let Some(pending) = &self.pending_delete {
            let message = format!("Delete {}? This cannot be undone.", pending.label);
            if let Some(event) = self.confirm_dialog.show(ctx, "Confirm Delete", &message) {
                match event {
                    ConfirmDialogEvent::Confirm => self.confirm_delete(),
                    ConfirmDialogEvent::Cancel => self.pending_delete = None,
                }
            }
        }

        // Left sidebar - page navigation
        if self.show_navigation {
            let counts = nav_counts(&self.sample_counts, &self.page);

            egui::SidePanel::left("navigation_panel")
                .resizable(true)
                .default_width(220.0)
                .min_width(160.0)
                .max_width(400.0)
                .show(ctx, |ui| {
                    ui.heading("ERP Dashboard");
                    ui.separator();

                    if let Some(PageNavEvent::PageSelected(kind)) = self.page_nav.show(ui, self.page.kind, &counts) {
                        self.open_page(kind);
                    }
                });
        }

        // Main content area - toolbar, grid and pagination
        let mut grid_event = None;
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(self.page.kind.title());
            ui.add_space(4.0);

            if let Some(event) = self.toolbar.show(ui, &model.toolbar) {
                grid_event = Some(event);
            }

            if let Some(page) = &model.page {
                if let Some(event) = self.pagination.show(ui, page, model.visible_rows) {
                    grid_event = Some(event);
                }
                ui.separator();
            }

            if let Some(event) = self.data_grid.show(ui, &model) {
                grid_event = Some(event);
            }
        });

        if let Some(event) = grid_event {
            self.handle_grid_event(event);
            ctx.request_repaint();
        }

        let now = Instant::now();
        self.toast_stack.show(ctx, self.toasts.active(now));

        // Keep repainting while toasts need to expire
        if !self.toasts.is_empty() {
            ctx.request_repaint_after(Duration::from_millis(250));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::SortCycle;
    use chrono::NaiveDate;

    #[test]
    fn test_export_file_name() {
        let at = NaiveDate::from_ymd_opt(2024, 3, 5)
            .and_then(|d| d.and_hms_opt(14, 7, 9))
            .unwrap();
        assert_eq!(export_file_name("purchase-orders", at), "purchase-orders-20240305-140709.csv");
    }

    #[test]
    fn test_nav_counts_track_the_mounted_page() {
        let samples = vec![(PageKind::PurchaseOrders, 12), (PageKind::Suppliers, 8)];
        let mut page = Page::mount(PageKind::Suppliers, SortCycle::Toggle, 10);
        let first = page.rows[0]["id"].as_str().unwrap().to_string();
        assert!(page.remove(&first));

        let counts = nav_counts(&samples, &page);
        assert_eq!(counts[0], (PageKind::PurchaseOrders, 12));
        assert_eq!(counts[1], (PageKind::Suppliers, page.rows.len()));
    }
}
