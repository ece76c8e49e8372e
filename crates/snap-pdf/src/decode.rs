use image::metadata::Orientation as ExifOrientation;
use image::{DynamicImage, ImageDecoder, ImageError, ImageReader};
use std::io::Cursor;

use crate::types::{ImageItem, Result, SnapError};

/// Decode `item` and turn it upright according to its EXIF orientation.
///
/// Dimensions of the returned image are the displayed ones, so a portrait
/// phone photo stored sideways comes back taller than wide.
pub(crate) fn decode_upright(item: &ImageItem) -> Result<DynamicImage> {
    let decode_error = |source: ImageError| SnapError::Decode {
        name: item.name.clone(),
        source,
    };

    let reader = ImageReader::new(Cursor::new(&item.bytes[..]))
        .with_guessed_format()
        .map_err(|e| decode_error(ImageError::IoError(e)))?;
    let mut decoder = reader.into_decoder().map_err(decode_error)?;

    // Broken EXIF is not worth rejecting the photo over
    let orientation = decoder.orientation().unwrap_or_else(|e| {
        log::debug!("Ignoring orientation of {}: {}", item.name, e);
        ExifOrientation::NoTransforms
    });

    let mut image = DynamicImage::from_decoder(decoder).map_err(decode_error)?;
    image.apply_orientation(orientation);
    Ok(image)
}
