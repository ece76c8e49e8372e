use crate::decode::decode_upright;
use crate::types::{ImageItem, Result};

/// RGBA pixels small enough to upload as a thumbnail texture
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThumbnailPixels {
    pub width: usize,
    pub height: usize,
    pub rgba: Vec<u8>,
}

/// Decode `item` and shrink it so its longest side is at most `max_side`.
pub fn decode_thumbnail(item: &ImageItem, max_side: u32) -> Result<ThumbnailPixels> {
    let image = decode_upright(item)?;

    let rgba = image.thumbnail(max_side, max_side).to_rgba8();
    Ok(ThumbnailPixels {
        width: rgba.width() as usize,
        height: rgba.height() as usize,
        rgba: rgba.into_raw(),
    })
}
