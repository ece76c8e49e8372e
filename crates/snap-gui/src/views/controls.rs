use eframe::egui;
use snap_async_runtime::SnapCommand;
use snap_pdf::{MAX_QUALITY, MIN_QUALITY, Orientation, PaperSize, QUALITY_STEP};
use tokio::sync::mpsc;

use crate::state::SnapState;
use crate::ui_components::{SliderBuilder, labeled_text};

const IMAGE_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "gif", "webp", "bmp", "tif", "tiff", "ico", "tga", "pnm", "qoi",
];

const PAPER_SIZES: &[PaperSize] = &[
    PaperSize::A3,
    PaperSize::A4,
    PaperSize::A5,
    PaperSize::Letter,
    PaperSize::Legal,
    PaperSize::Tabloid,
];

pub fn show(
    ui: &mut egui::Ui,
    state: &mut SnapState,
    command_tx: &mpsc::UnboundedSender<SnapCommand>,
) {
    ui.heading("Snap to PDF");
    ui.separator();

    show_images_section(ui, state, command_tx);
    ui.add_space(10.0);
    ui.separator();
    ui.add_space(10.0);

    show_output_section(ui, state);
    ui.add_space(10.0);
    ui.separator();
    ui.add_space(10.0);

    show_quality_section(ui, state);
    ui.add_space(10.0);
    ui.separator();
    ui.add_space(10.0);

    show_actions(ui, state, command_tx);
}

fn show_images_section(
    ui: &mut egui::Ui,
    state: &mut SnapState,
    command_tx: &mpsc::UnboundedSender<SnapCommand>,
) {
    egui::CollapsingHeader::new("📷 Images")
        .default_open(true)
        .show(ui, |ui| {
            if ui.button("➕ Browse files").clicked() {
                if let Some(paths) = rfd::FileDialog::new()
                    .add_filter("Images", IMAGE_EXTENSIONS)
                    .add_filter("All files", &["*"])
                    .pick_files()
                {
                    let _ = command_tx.send(SnapCommand::IngestFiles { paths });
                }
            }

            ui.add_space(5.0);
            ui.horizontal(|ui| {
                ui.label(format!("{} image(s)", state.collection.len()));
                if ui
                    .add_enabled(!state.collection.is_empty(), egui::Button::new("🗑 Clear"))
                    .clicked()
                {
                    state.cancel_drag();
                    state.collection.clear();
                    log::info!("Cleared all images");
                }
            });
            ui.label(
                egui::RichText::new("Drag thumbnails to reorder")
                    .small()
                    .weak(),
            );
        });
}

fn show_output_section(ui: &mut egui::Ui, state: &mut SnapState) {
    egui::CollapsingHeader::new("📄 Output")
        .default_open(true)
        .show(ui, |ui| {
            labeled_text(ui, "File name:", &mut state.options.output_name);
            ui.label(
                egui::RichText::new(format!("Saves as {}", state.options.file_name()))
                    .small()
                    .weak(),
            );

            ui.add_space(5.0);
            ui.horizontal(|ui| {
                ui.label("Folder:");
                if ui.button("📂 Choose...").clicked() {
                    if let Some(dir) = rfd::FileDialog::new()
                        .set_directory(&state.output_dir)
                        .pick_folder()
                    {
                        state.output_dir = dir;
                    }
                }
            });
            ui.label(state.output_dir.display().to_string());

            ui.add_space(5.0);
            egui::ComboBox::from_label("Paper")
                .selected_text(state.options.paper_size.name())
                .show_ui(ui, |ui| {
                    for &paper in PAPER_SIZES {
                        ui.selectable_value(&mut state.options.paper_size, paper, paper.name());
                    }
                });

            ui.horizontal(|ui| {
                ui.radio_value(
                    &mut state.options.orientation,
                    Orientation::Portrait,
                    "Portrait",
                );
                ui.radio_value(
                    &mut state.options.orientation,
                    Orientation::Landscape,
                    "Landscape",
                );
            });
        });
}

fn show_quality_section(ui: &mut egui::Ui, state: &mut SnapState) {
    egui::CollapsingHeader::new("🎚 Quality")
        .default_open(true)
        .show(ui, |ui| {
            let mut value = state.quality_slider;
            let changed = SliderBuilder::new(&mut value, MIN_QUALITY..=MAX_QUALITY)
                .step(QUALITY_STEP as f64)
                .formatter(|v| format!("{:.0}%", v * 100.0))
                .show(ui);
            if changed {
                state.set_quality(value);
            }

            let estimate = snap_pdf::estimate_size(
                state.collection.iter().map(|thumb| &thumb.item),
                state.options.quality,
            );
            ui.label(format!("Estimated size: {:.2} MB", estimate.megabytes));
        });
}

fn show_actions(
    ui: &mut egui::Ui,
    state: &mut SnapState,
    command_tx: &mpsc::UnboundedSender<SnapCommand>,
) {
    let blocker = state.generate_blocker();
    let can_generate = !state.generating && blocker.is_none();
    let label = if state.generating {
        "⏳ Generating..."
    } else {
        "📄 Generate PDF"
    };

    let clicked = ui
        .horizontal(|ui| {
            let clicked = ui
                .add_enabled(can_generate, egui::Button::new(label))
                .clicked();
            if state.generating {
                ui.spinner();
            }
            clicked
        })
        .inner;

    if let Some(reason) = &blocker {
        let color = if state.collection.is_empty() {
            ui.visuals().weak_text_color()
        } else {
            ui.visuals().warn_fg_color
        };
        ui.label(egui::RichText::new(reason).small().color(color));
    }

    if clicked {
        state.generating = true;
        let _ = command_tx.send(SnapCommand::Generate {
            images: state.images(),
            options: state.options.clone(),
            output_dir: state.output_dir.clone(),
        });
    }

    ui.add_space(10.0);
    ui.horizontal(|ui| {
        if ui.button("💾 Save settings").clicked() {
            if let Some(path) = rfd::FileDialog::new()
                .add_filter("JSON", &["json"])
                .set_file_name("snap_settings.json")
                .save_file()
            {
                let _ = command_tx.send(SnapCommand::SaveConfig {
                    options: state.options.clone(),
                    path,
                });
            }
        }

        if ui.button("📂 Load settings").clicked() {
            if let Some(path) = rfd::FileDialog::new()
                .add_filter("JSON", &["json"])
                .pick_file()
            {
                let _ = command_tx.send(SnapCommand::LoadConfig { path });
            }
        }
    });

    ui.add_space(5.0);
    ui.checkbox(&mut state.show_log, "Show log");
}
