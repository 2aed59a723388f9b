use std::path::Path;

use image::{DynamicImage, ImageReader, RgbImage};
use tracing::debug;

use crate::error::{PaintError, Result};
use crate::pipeline::config::ResizeFilter;

/// Decode an image file of any format the `image` crate understands.
///
/// The file handle is dropped before returning, whether decoding succeeded
/// or not.
pub fn load_image(path: &Path) -> Result<DynamicImage> {
    let img = ImageReader::open(path)?.with_guessed_format()?.decode()?;
    debug!(
        path = %path.display(),
        width = img.width(),
        height = img.height(),
        "Decoded source image"
    );
    Ok(img)
}

/// Decode an in-memory encoded image.
pub fn decode_image(bytes: &[u8]) -> Result<DynamicImage> {
    Ok(image::load_from_memory(bytes)?)
}

/// Height of a `target_width`-wide resize that keeps the source aspect ratio.
pub fn scaled_height(src_width: u32, src_height: u32, target_width: u32) -> Result<u32> {
    if src_width == 0 || src_height == 0 {
        return Err(PaintError::EmptyImage);
    }
    if target_width < 1 {
        return Err(PaintError::InvalidInput(
            "target width must be at least 1".into(),
        ));
    }
    let height = (target_width as f64 * src_height as f64 / src_width as f64).round();
    Ok((height as u32).max(1))
}

/// Resize to `target_width` columns, deriving the row count from the
/// source aspect ratio. Alpha is discarded.
pub fn resize_to_grid(img: &DynamicImage, target_width: u32, filter: ResizeFilter) -> Result<RgbImage> {
    let height = scaled_height(img.width(), img.height(), target_width)?;
    let rgb = img.to_rgb8();
    let resized = image::imageops::resize(&rgb, target_width, height, filter.filter_type());
    debug!(
        width = target_width,
        height,
        filter = %filter,
        "Resized source to grid"
    );
    Ok(resized)
}
