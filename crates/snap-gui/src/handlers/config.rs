use snap_async_runtime::SnapUpdate;
use snap_pdf::GenerateOptions;
use std::path::PathBuf;
use tokio::sync::mpsc;

pub async fn handle_save_config(
    options: GenerateOptions,
    path: PathBuf,
    update_tx: &mpsc::UnboundedSender<SnapUpdate>,
) {
    match options.save(&path).await {
        Ok(()) => {
            let _ = update_tx.send(SnapUpdate::ConfigSaved { path });
        }
        Err(e) => {
            let _ = update_tx.send(SnapUpdate::Error {
                message: format!("Failed to save settings: {e}"),
            });
        }
    }
}

pub async fn handle_load_config(path: PathBuf, update_tx: &mpsc::UnboundedSender<SnapUpdate>) {
    match GenerateOptions::load(&path).await {
        Ok(options) => {
            let _ = update_tx.send(SnapUpdate::ConfigLoaded { options });
        }
        Err(e) => {
            let _ = update_tx.send(SnapUpdate::Error {
                message: format!("Failed to load settings: {e}"),
            });
        }
    }
}
