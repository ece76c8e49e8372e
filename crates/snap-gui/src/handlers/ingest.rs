use snap_async_runtime::{IngestedImage, SnapUpdate};
use snap_pdf::{DEFAULT_THUMBNAIL_SIDE, SnapError};
use std::path::PathBuf;
use tokio::sync::mpsc;

pub async fn handle_ingest(paths: Vec<PathBuf>, update_tx: &mpsc::UnboundedSender<SnapUpdate>) {
    let images = match snap_pdf::ingest_paths(&paths).await {
        Ok(images) => images,
        Err(SnapError::NoImages) => {
            let _ = update_tx.send(SnapUpdate::NoImages);
            return;
        }
        Err(e) => {
            let _ = update_tx.send(SnapUpdate::Error {
                message: format!("Failed to read files: {e}"),
            });
            return;
        }
    };

    let total = images.len();
    let progress_tx = update_tx.clone();

    // Thumbnail decoding is CPU-bound, spawn blocking
    let result = tokio::task::spawn_blocking(move || {
        images
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                let thumbnail = match snap_pdf::decode_thumbnail(&item, DEFAULT_THUMBNAIL_SIDE) {
                    Ok(pixels) => Some(pixels),
                    Err(e) => {
                        log::warn!("No preview for {}: {}", item.name, e);
                        None
                    }
                };
                let _ = progress_tx.send(SnapUpdate::Progress {
                    operation: "Loading images".to_string(),
                    current: index + 1,
                    total,
                });
                IngestedImage { item, thumbnail }
            })
            .collect::<Vec<_>>()
    })
    .await;

    match result {
        Ok(images) => {
            log::info!("Added {} image(s)", images.len());
            let _ = update_tx.send(SnapUpdate::ImagesIngested { images });
        }
        Err(e) => {
            let _ = update_tx.send(SnapUpdate::Error {
                message: format!("Failed to load images: {e}"),
            });
        }
    }
}
