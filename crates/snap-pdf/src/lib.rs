pub mod collection;
mod constants;
mod decode;
mod estimate;
pub mod generate;
pub mod ingest;
mod options;
mod preview;
pub mod render;
pub mod reorder;
mod types;

pub use collection::Collection;
pub use constants::*;
pub use estimate::{SizeEstimate, estimate_size};
pub use generate::{generate_pdf, generate_pdf_with_progress, render_document};
pub use ingest::{IncomingFile, accept_images, ingest_paths, read_files};
pub use options::*;
pub use preview::{ThumbnailPixels, decode_thumbnail};
pub use render::{DocumentBackend, EncodedImage, LopdfBackend, Placement, fit_to_page};
pub use reorder::{DragSignal, HitTest, Point, PointerDrag, TouchDrag};
pub use types::*;
