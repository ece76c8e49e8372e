use image::DynamicImage;
use image::codecs::jpeg::JpegEncoder;
use std::io::Cursor;

use super::EncodedImage;
use crate::types::{Quality, Result, SnapError};

/// Re-encode decoded pixels as JPEG at `quality`.
///
/// JPEG has no alpha channel, so pixels are flattened to RGB first.
pub fn encode_jpeg(name: &str, image: &DynamicImage, quality: Quality) -> Result<EncodedImage> {
    let rgb = image.to_rgb8();
    let mut buf = Cursor::new(Vec::new());

    let encoder = JpegEncoder::new_with_quality(&mut buf, quality.jpeg_quality());
    rgb.write_with_encoder(encoder)
        .map_err(|source| SnapError::Encode {
            name: name.to_string(),
            source,
        })?;

    Ok(EncodedImage {
        jpeg: buf.into_inner(),
        width_px: rgb.width(),
        height_px: rgb.height(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_produces_jpeg() {
        let img = DynamicImage::new_rgba8(12, 7);
        let encoded = encode_jpeg("test", &img, Quality::default()).unwrap();

        assert_eq!(&encoded.jpeg[0..2], &[0xFF, 0xD8]);
        assert_eq!((encoded.width_px, encoded.height_px), (12, 7));
    }

    #[test]
    fn test_lower_quality_is_not_larger() {
        // Noisy content so quality actually matters
        let img = DynamicImage::ImageRgb8(image::RgbImage::from_fn(64, 64, |x, y| {
            image::Rgb([(x * 7 % 256) as u8, (y * 13 % 256) as u8, ((x ^ y) * 5 % 256) as u8])
        }));

        let low = encode_jpeg("noise", &img, Quality::new(0.1)).unwrap();
        let high = encode_jpeg("noise", &img, Quality::new(1.0)).unwrap();

        assert!(low.jpeg.len() < high.jpeg.len());
    }
}
