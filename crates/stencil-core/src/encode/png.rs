//! PNG encoding for export.
//!
//! Lossless and deterministic; alpha is preserved when the source raster
//! carries it.

use std::io::Cursor;

use image::codecs::png::PngEncoder;
use image::ExtendedColorType;
use image::ImageEncoder;

use super::{validate_buffer, EncodeError};
use crate::raster::{ColorMode, Raster};

/// Encode a raster to PNG bytes.
///
/// The color type follows the raster's mode directly (grayscale, RGB or
/// RGBA), so a decode of the output yields pixel-identical data.
///
/// # Errors
///
/// Returns [`EncodeError::InvalidDimensions`] or
/// [`EncodeError::InvalidPixelData`] if the raster is malformed, and
/// [`EncodeError::EncodingFailed`] if the underlying encoder fails.
pub fn encode_png(image: &Raster) -> Result<Vec<u8>, EncodeError> {
    validate_buffer(image)?;

    let color = match image.mode {
        ColorMode::Gray => ExtendedColorType::L8,
        ColorMode::Rgb => ExtendedColorType::Rgb8,
        ColorMode::Rgba => ExtendedColorType::Rgba8,
    };

    let mut buffer = Cursor::new(Vec::new());
    let encoder = PngEncoder::new(&mut buffer);

    encoder
        .write_image(&image.pixels, image.width, image.height, color)
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    Ok(buffer.into_inner())
}
