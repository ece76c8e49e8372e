//! Document generation
//!
//! Turns an ordered list of images into one PDF:
//! 1. Decode each image upright and read its pixel size
//! 2. Re-encode it as JPEG at the configured quality
//! 3. Fit it to the page and center it
//! 4. Append one page per image, then save
//!
//! Any failure aborts the whole document. Nothing is written to disk until
//! every page has been produced.

use std::path::{Path, PathBuf};

use crate::decode::decode_upright;
use crate::options::GenerateOptions;
use crate::render::{DocumentBackend, LopdfBackend, encode_jpeg, fit_to_page};
use crate::types::*;

/// Render `items` through `backend` and return the saved document bytes.
///
/// `progress` is called with `(pages_done, total)` after each page.
pub fn render_document<B>(
    backend: &mut B,
    items: &[ImageItem],
    options: &GenerateOptions,
    mut progress: impl FnMut(usize, usize),
) -> Result<Vec<u8>>
where
    B: DocumentBackend + ?Sized,
{
    if items.is_empty() {
        return Err(SnapError::EmptyCollection);
    }
    options.validate()?;

    let page_size = options.page_size();
    backend.begin_document(page_size)?;

    let total = items.len();
    for (index, item) in items.iter().enumerate() {
        let decoded = decode_upright(item)?;
        if decoded.width() == 0 || decoded.height() == 0 {
            return Err(SnapError::InvalidImage {
                name: item.name.clone(),
            });
        }

        let encoded = encode_jpeg(&item.name, &decoded, options.quality)?;
        let placement = fit_to_page(
            encoded.width_px as f32,
            encoded.height_px as f32,
            page_size.width_pt,
            page_size.height_pt,
        );
        log::debug!(
            "Page {}: {} ({}x{} px) at scale {:.3}",
            index + 1,
            item.name,
            encoded.width_px,
            encoded.height_px,
            placement.scale
        );

        backend.add_page(&encoded, &placement)?;
        progress(index + 1, total);
    }

    backend.save(&options.file_name())
}

/// Generate `output_dir/{output_name}.pdf` from `items`.
///
/// The items are copied at call time; later changes to the caller's
/// collection do not affect the document being generated.
pub async fn generate_pdf(
    items: &[ImageItem],
    options: &GenerateOptions,
    output_dir: impl AsRef<Path>,
) -> Result<PathBuf> {
    generate_pdf_with_progress(items, options, output_dir, |_, _| {}).await
}

pub async fn generate_pdf_with_progress(
    items: &[ImageItem],
    options: &GenerateOptions,
    output_dir: impl AsRef<Path>,
    progress: impl FnMut(usize, usize) + Send + 'static,
) -> Result<PathBuf> {
    if items.is_empty() {
        return Err(SnapError::EmptyCollection);
    }
    options.validate()?;

    let items = items.to_vec();
    let options = options.clone();
    let output_path = output_dir.as_ref().join(options.file_name());

    log::info!(
        "Generating {} with {} page(s) at {}% quality",
        output_path.display(),
        items.len(),
        options.quality.percent()
    );

    // Decoding and encoding are CPU-bound, spawn blocking
    let bytes = tokio::task::spawn_blocking(move || {
        let mut backend = LopdfBackend::new();
        render_document(&mut backend, &items, &options, progress)
    })
    .await??;

    // Write beside the target, then move into place
    let mut partial = output_path.clone().into_os_string();
    partial.push(".part");
    let partial = PathBuf::from(partial);

    if let Err(e) = write_then_rename(&partial, &output_path, bytes).await {
        let _ = tokio::fs::remove_file(&partial).await;
        return Err(e.into());
    }

    log::info!("Saved {}", output_path.display());
    Ok(output_path)
}

async fn write_then_rename(partial: &Path, target: &Path, bytes: Vec<u8>) -> std::io::Result<()> {
    tokio::fs::write(partial, bytes).await?;
    tokio::fs::rename(partial, target).await
}
