//! Shared constants for image-to-PDF conversion
//!
//! This module centralizes magic numbers and defaults used by the
//! collection, estimator and document generator.

// =============================================================================
// Unit Conversion
// =============================================================================

/// Points per millimeter (1 inch = 72 points, 1 inch = 25.4mm)
pub const POINTS_PER_MM: f32 = 72.0 / 25.4; // ≈ 2.83465

/// Convert millimeters to points
#[inline]
pub fn mm_to_pt(mm: f32) -> f32 {
    mm * POINTS_PER_MM
}

// =============================================================================
// Output
// =============================================================================

/// Default output document name (without extension)
pub const DEFAULT_OUTPUT_NAME: &str = "snapToPDF";

/// Extension appended to the output name
pub const PDF_EXTENSION: &str = "pdf";

/// Resource name of the single image XObject on every page
pub const IMAGE_XOBJECT_NAME: &str = "Im0";

/// Producer string written to the document info dictionary
pub const PRODUCER: &str = concat!("snap-pdf ", env!("CARGO_PKG_VERSION"));

// =============================================================================
// Quality
// =============================================================================

/// Initial quality before the user touches the control
pub const DEFAULT_QUALITY: f32 = 0.75;

/// Lowest selectable quality
pub const MIN_QUALITY: f32 = 0.1;

/// Highest selectable quality
pub const MAX_QUALITY: f32 = 1.0;

/// Quality control step
pub const QUALITY_STEP: f32 = 0.1;

// =============================================================================
// Size Estimation
// =============================================================================

/// Multiplier accounting for PDF structure on top of image data
pub const DOCUMENT_OVERHEAD_FACTOR: f64 = 1.1;

/// Bytes per megabyte (binary)
pub const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

// =============================================================================
// Thumbnails
// =============================================================================

/// Longest side of generated thumbnails in pixels
pub const DEFAULT_THUMBNAIL_SIDE: u32 = 256;
