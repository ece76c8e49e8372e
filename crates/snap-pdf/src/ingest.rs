//! Ingestion boundary
//!
//! Files arrive with a declared media type; only `image/*` entries make it
//! into the collection.

use image::ImageFormat;
use std::path::Path;
use std::sync::Arc;

use crate::types::{ImageItem, Result, SnapError};

const UNKNOWN_MEDIA_TYPE: &str = "application/octet-stream";

/// A file handed to the application, before filtering
#[derive(Clone)]
pub struct IncomingFile {
    pub name: String,
    pub media_type: String,
    pub bytes: Arc<[u8]>,
}

impl std::fmt::Debug for IncomingFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IncomingFile")
            .field("name", &self.name)
            .field("media_type", &self.media_type)
            .field("byte_size", &self.bytes.len())
            .finish()
    }
}

impl IncomingFile {
    pub fn is_image(&self) -> bool {
        is_image_media_type(&self.media_type)
    }
}

fn is_image_media_type(media_type: &str) -> bool {
    media_type.starts_with("image/")
}

/// Media type declared by a path's extension
pub fn media_type_for_path(path: impl AsRef<Path>) -> String {
    ImageFormat::from_path(path)
        .map(|format| format.to_mime_type().to_string())
        .unwrap_or_else(|_| UNKNOWN_MEDIA_TYPE.to_string())
}

/// Keep the image entries. An empty result is an error so callers can
/// tell the user nothing was added.
pub fn accept_images(files: impl IntoIterator<Item = IncomingFile>) -> Result<Vec<ImageItem>> {
    let mut images = Vec::new();
    for file in files {
        if file.is_image() {
            images.push(ImageItem {
                name: file.name,
                media_type: file.media_type,
                bytes: file.bytes,
            });
        } else {
            log::info!("Skipping {} ({})", file.name, file.media_type);
        }
    }

    if images.is_empty() {
        return Err(SnapError::NoImages);
    }
    Ok(images)
}

/// Read files from disk, declaring media types from their extensions
pub async fn read_files(paths: &[impl AsRef<Path>]) -> Result<Vec<IncomingFile>> {
    let mut files = Vec::new();
    for path in paths {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        files.push(IncomingFile {
            name,
            media_type: media_type_for_path(path),
            bytes: bytes.into(),
        });
    }
    Ok(files)
}

/// Filter by declared media type, then read only the images.
///
/// Non-image entries (including directories) are never opened, so they
/// cannot fail the batch.
pub async fn ingest_paths(paths: &[impl AsRef<Path>]) -> Result<Vec<ImageItem>> {
    let mut image_paths = Vec::new();
    for path in paths {
        let path = path.as_ref();
        let media_type = media_type_for_path(path);
        if is_image_media_type(&media_type) {
            image_paths.push(path);
        } else {
            log::info!("Skipping {} ({})", path.display(), media_type);
        }
    }

    let files = read_files(&image_paths).await?;
    let images = accept_images(files)?;
    log::debug!("Ingested {} image(s)", images.len());
    Ok(images)
}
