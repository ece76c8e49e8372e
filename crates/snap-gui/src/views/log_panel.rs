use eframe::egui;
use log::Level;

use crate::logger::AppLogger;

fn level_color(level: Level, visuals: &egui::Visuals) -> egui::Color32 {
    match level {
        Level::Error => visuals.error_fg_color,
        Level::Warn => visuals.warn_fg_color,
        _ => visuals.text_color(),
    }
}

pub fn show(ui: &mut egui::Ui, logger: &AppLogger) {
    ui.horizontal(|ui| {
        ui.strong("Log");
        if ui.small_button("Clear").clicked() {
            logger.clear();
        }
    });

    egui::ScrollArea::vertical()
        .max_height(150.0)
        .stick_to_bottom(true)
        .auto_shrink([false, true])
        .show(ui, |ui| {
            for entry in logger.get_entries() {
                let color = level_color(entry.level, ui.visuals());
                ui.label(
                    egui::RichText::new(format!(
                        "{} {:<5} {}",
                        entry.timestamp.format("%H:%M:%S"),
                        entry.level,
                        entry.message
                    ))
                    .monospace()
                    .color(color),
                );
            }
        });
}
