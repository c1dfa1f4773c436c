//! Image decoding for the upload boundary.
//!
//! Accepts JPEG, PNG and BMP bytes and produces a [`Raster`] for the
//! pipeline. The container format is guessed from the file content, not
//! from the filename, so a mislabeled upload still decodes.

use std::io::Cursor;

use image::ImageReader;
use thiserror::Error;

use crate::raster::Raster;

/// Error types for image decoding operations.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The file format is not recognized or supported.
    #[error("Invalid or unsupported image format")]
    InvalidFormat,

    /// The image file is corrupted or incomplete.
    #[error("Corrupted or incomplete image file: {0}")]
    CorruptedFile(String),
}

/// Decode an uploaded image from raw bytes.
///
/// # Errors
///
/// Returns [`DecodeError::InvalidFormat`] if the bytes are not a recognized
/// image container, and [`DecodeError::CorruptedFile`] if the container is
/// recognized but cannot be decoded.
pub fn decode_image(bytes: &[u8]) -> Result<Raster, DecodeError> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    if reader.format().is_none() {
        return Err(DecodeError::InvalidFormat);
    }

    let img = reader
        .decode()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    Ok(Raster::from_dynamic(img))
}
