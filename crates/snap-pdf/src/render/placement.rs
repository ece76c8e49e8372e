//! Fit-to-page placement
//!
//! Every image is scaled uniformly so it fits inside the page without
//! cropping, then centered on both axes.

/// Final position of an image on its page, in points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Points per source pixel
    pub scale: f32,
}

impl Placement {
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn top(&self) -> f32 {
        self.y + self.height
    }
}

/// Scale `image_width` x `image_height` to fit a `page_width` x
/// `page_height` page, preserving aspect ratio, and center it.
///
/// Image dimensions must be non-zero.
pub fn fit_to_page(
    image_width: f32,
    image_height: f32,
    page_width: f32,
    page_height: f32,
) -> Placement {
    debug_assert!(image_width > 0.0 && image_height > 0.0);

    let scale = (page_width / image_width).min(page_height / image_height);
    let width = image_width * scale;
    let height = image_height * scale;

    Placement {
        x: (page_width - width) / 2.0,
        y: (page_height - height) / 2.0,
        width,
        height,
        scale,
    }
}
