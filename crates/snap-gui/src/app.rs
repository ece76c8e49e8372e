use eframe::egui;
use snap_async_runtime::{SnapCommand, SnapUpdate};
use tokio::sync::mpsc;

use crate::logger::AppLogger;
use crate::state::SnapState;
use crate::views;

#[derive(Clone)]
struct ProgressState {
    operation: String,
    current: usize,
    total: usize,
}

pub struct SnapApp {
    state: SnapState,
    status: String,
    logger: AppLogger,

    // Async infrastructure
    command_tx: mpsc::UnboundedSender<SnapCommand>,
    update_rx: mpsc::UnboundedReceiver<SnapUpdate>,

    // Progress tracking
    progress: Option<ProgressState>,

    _tokio_handle: tokio::runtime::Handle,
}

impl SnapApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        tokio_handle: tokio::runtime::Handle,
        logger: AppLogger,
    ) -> Self {
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (update_tx, update_rx) = mpsc::unbounded_channel();

        // Spawn worker task
        tokio_handle.spawn(crate::worker::worker_task(command_rx, update_tx));

        Self {
            state: SnapState::default(),
            status: String::new(),
            logger,
            command_tx,
            update_rx,
            progress: None,
            _tokio_handle: tokio_handle,
        }
    }

    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let paths: Vec<_> = ctx.input(|i| {
            i.raw
                .dropped_files
                .iter()
                .filter_map(|file| file.path.clone())
                .collect()
        });

        if !paths.is_empty() {
            self.status = format!("Reading {} file(s)...", paths.len());
            let _ = self.command_tx.send(SnapCommand::IngestFiles { paths });
        }
    }

    fn process_updates(&mut self, ctx: &egui::Context) {
        while let Ok(update) = self.update_rx.try_recv() {
            match update {
                SnapUpdate::Progress {
                    operation,
                    current,
                    total,
                } => {
                    self.progress = Some(ProgressState {
                        operation,
                        current,
                        total,
                    });
                    ctx.request_repaint();
                }
                SnapUpdate::ImagesIngested { images } => {
                    self.status = format!("Added {} image(s)", images.len());
                    self.state.add_images(ctx, images);
                    self.progress = None;
                }
                SnapUpdate::NoImages => {
                    self.status = "No images found in the selected files".to_string();
                    self.progress = None;
                }
                SnapUpdate::GenerateComplete { path, page_count } => {
                    log::info!("Generated {} page(s) → {}", page_count, path.display());
                    self.status = format!("Saved {}", path.display());
                    self.state.generating = false;
                    self.progress = None;
                }
                SnapUpdate::GenerateFailed { detail } => {
                    log::error!("Generation failed: {}", detail);
                    self.status = "Failed to generate PDF".to_string();
                    self.state.generating = false;
                    self.progress = None;
                }
                SnapUpdate::ConfigSaved { path } => {
                    log::info!("Settings saved to {}", path.display());
                    self.status = "Settings saved".to_string();
                }
                SnapUpdate::ConfigLoaded { options } => {
                    self.state.apply_options(options);
                    self.status = "Settings loaded".to_string();
                }
                SnapUpdate::Error { message } => {
                    log::error!("{}", message);
                    self.status = format!("Error: {message}");
                    self.progress = None;
                }
            }
        }
    }
}

impl eframe::App for SnapApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_dropped_files(ctx);

        // Process all pending updates from worker
        self.process_updates(ctx);

        egui::SidePanel::left("snap_controls")
            .min_width(260.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    views::controls::show(ui, &mut self.state, &self.command_tx);

                    // Show progress bar
                    if let Some(ref progress) = self.progress {
                        ui.separator();
                        ui.label(&progress.operation);
                        ui.add(
                            egui::ProgressBar::new(
                                progress.current as f32 / progress.total.max(1) as f32,
                            )
                            .show_percentage(),
                        );
                        ctx.request_repaint(); // Keep updating during operations
                    }

                    if !self.status.is_empty() {
                        ui.separator();
                        ui.label(&self.status);
                    }
                });
            });

        if self.state.show_log {
            egui::TopBottomPanel::bottom("snap_log")
                .resizable(true)
                .show(ctx, |ui| {
                    views::log_panel::show(ui, &self.logger);
                });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            views::gallery::show(ui, &mut self.state);
        });
    }
}
