use std::path::PathBuf;

// Re-export types from the library crate
pub use snap_pdf::{GenerateOptions, ImageItem, ThumbnailPixels};

/// Commands sent from UI to worker
#[derive(Debug)]
pub enum SnapCommand {
    /// Read files, keep the images and build their thumbnails
    IngestFiles { paths: Vec<PathBuf> },
    /// Generate a document from a frozen copy of the collection
    Generate {
        images: Vec<ImageItem>,
        options: GenerateOptions,
        output_dir: PathBuf,
    },
    SaveConfig {
        options: GenerateOptions,
        path: PathBuf,
    },
    LoadConfig { path: PathBuf },
}

/// Updates sent from worker to UI
#[derive(Debug, Clone)]
pub enum SnapUpdate {
    Progress {
        operation: String,
        current: usize,
        total: usize,
    },
    ImagesIngested {
        images: Vec<IngestedImage>,
    },
    /// Files were read but none of them was an image
    NoImages,
    GenerateComplete {
        path: PathBuf,
        page_count: usize,
    },
    /// Generation failed; `detail` is for the log, not the user
    GenerateFailed {
        detail: String,
    },
    ConfigSaved {
        path: PathBuf,
    },
    ConfigLoaded {
        options: GenerateOptions,
    },
    Error {
        message: String,
    },
}

/// An accepted image plus its thumbnail, if one could be decoded
#[derive(Debug, Clone)]
pub struct IngestedImage {
    pub item: ImageItem,
    pub thumbnail: Option<ThumbnailPixels>,
}
