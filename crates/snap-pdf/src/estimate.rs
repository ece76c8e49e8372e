use crate::constants::{BYTES_PER_MB, DOCUMENT_OVERHEAD_FACTOR};
use crate::types::{ImageItem, Quality};

/// Advisory output size, shown next to the quality control.
///
/// Scales raw input size by quality; it never re-encodes anything and is
/// never used to decide how a document is generated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeEstimate {
    pub image_count: usize,
    /// Sum of raw input sizes
    pub source_bytes: u64,
    /// Estimated document size, rounded to two decimals
    pub megabytes: f64,
}

pub fn estimate_size<'a>(
    items: impl IntoIterator<Item = &'a ImageItem>,
    quality: Quality,
) -> SizeEstimate {
    let mut image_count = 0;
    let mut source_bytes = 0u64;
    for item in items {
        image_count += 1;
        source_bytes += item.byte_size();
    }

    let compressed = source_bytes as f64 * quality.value() as f64;
    let megabytes = compressed / BYTES_PER_MB * DOCUMENT_OVERHEAD_FACTOR;

    SizeEstimate {
        image_count,
        source_bytes,
        megabytes: (megabytes * 100.0).round() / 100.0,
    }
}
