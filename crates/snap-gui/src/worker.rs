use snap_async_runtime::{SnapCommand, SnapUpdate};
use tokio::sync::mpsc;

use crate::handlers;

/// Async worker task that processes commands and sends updates
pub async fn worker_task(
    mut command_rx: mpsc::UnboundedReceiver<SnapCommand>,
    update_tx: mpsc::UnboundedSender<SnapUpdate>,
) {
    while let Some(cmd) = command_rx.recv().await {
        process_command(cmd, &update_tx).await;
    }
    log::debug!("Command channel closed, worker exiting");
}

async fn process_command(cmd: SnapCommand, update_tx: &mpsc::UnboundedSender<SnapUpdate>) {
    match cmd {
        SnapCommand::IngestFiles { paths } => {
            handlers::ingest::handle_ingest(paths, update_tx).await;
        }
        SnapCommand::Generate {
            images,
            options,
            output_dir,
        } => {
            handlers::generate::handle_generate(images, options, output_dir, update_tx).await;
        }
        SnapCommand::SaveConfig { options, path } => {
            handlers::config::handle_save_config(options, path, update_tx).await;
        }
        SnapCommand::LoadConfig { path } => {
            handlers::config::handle_load_config(path, update_tx).await;
        }
    }
}
