#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eframe::egui;

mod app;
mod handlers;
mod logger;
mod state;
mod ui_components;
mod views;
mod worker;

const MAX_LOG_ENTRIES: usize = 500;

fn main() -> eframe::Result<()> {
    let logger = logger::AppLogger::new(MAX_LOG_ENTRIES);
    if let Err(e) = logger.clone().init() {
        eprintln!("Failed to install logger: {e}");
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .expect("Failed to start async runtime");
    let handle = runtime.handle().clone();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1024.0, 768.0])
            .with_drag_and_drop(true)
            .with_title("Snap to PDF"),
        ..Default::default()
    };

    eframe::run_native(
        "Snap to PDF",
        options,
        Box::new(move |cc| Ok(Box::new(app::SnapApp::new(cc, handle, logger)))),
    )
}
