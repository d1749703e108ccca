mod app;
mod config;
mod grid;
mod models;
mod ui;

use app::ErpApp;
use config::Config;
use eframe::egui;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> Result<(), eframe::Error> {
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: could not load settings, using defaults: {:#}", e);
            Config::default()
        }
    };

    // RUST_LOG wins over the configured filter
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))
        .unwrap_or_else(|_| EnvFilter::new("erp_grid=info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(page_size = config.page_size, sort_cycle = ?config.sort_cycle, "starting");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_title("ERP Dashboard"),
        ..Default::default()
    };

    eframe::run_native(
        "ERP Dashboard",
        options,
        Box::new(|cc| Box::new(ErpApp::new(cc, config))),
    )
}
