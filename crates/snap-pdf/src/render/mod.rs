//! Page rendering
//!
//! This module contains:
//! - The narrow backend interface the generator writes pages through
//! - Fit-to-page placement geometry
//! - JPEG re-encoding at the configured quality
//! - The lopdf implementation of the backend

mod backend;
mod encode;
mod placement;

pub use backend::LopdfBackend;
pub use encode::encode_jpeg;
pub use placement::{Placement, fit_to_page};

use crate::types::{PageSize, Result};

/// A JPEG stream ready to embed, with its pixel dimensions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    pub jpeg: Vec<u8>,
    pub width_px: u32,
    pub height_px: u32,
}

/// Where generated pages go.
///
/// The generator only ever calls these three methods, in order:
/// `begin_document` once, `add_page` once per image, `save` once.
pub trait DocumentBackend {
    fn begin_document(&mut self, page_size: PageSize) -> Result<()>;

    /// Append a page and draw `image` into `placement` (PDF points,
    /// bottom-left origin).
    fn add_page(&mut self, image: &EncodedImage, placement: &Placement) -> Result<()>;

    /// Finish the document titled `file_name` and return its bytes.
    fn save(&mut self, file_name: &str) -> Result<Vec<u8>>;
}
