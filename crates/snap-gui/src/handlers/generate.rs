use snap_async_runtime::SnapUpdate;
use snap_pdf::{GenerateOptions, ImageItem};
use std::path::PathBuf;
use tokio::sync::mpsc;

pub async fn handle_generate(
    images: Vec<ImageItem>,
    options: GenerateOptions,
    output_dir: PathBuf,
    update_tx: &mpsc::UnboundedSender<SnapUpdate>,
) {
    let page_count = images.len();
    let progress_tx = update_tx.clone();

    let result = snap_pdf::generate_pdf_with_progress(
        &images,
        &options,
        &output_dir,
        move |current, total| {
            let _ = progress_tx.send(SnapUpdate::Progress {
                operation: "Generating PDF".to_string(),
                current,
                total,
            });
        },
    )
    .await;

    match result {
        Ok(path) => {
            let _ = update_tx.send(SnapUpdate::GenerateComplete { path, page_count });
        }
        Err(e) => {
            let _ = update_tx.send(SnapUpdate::GenerateFailed {
                detail: e.to_string(),
            });
        }
    }
}
