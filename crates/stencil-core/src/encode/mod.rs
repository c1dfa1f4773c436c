//! Output encoding for the download boundary.
//!
//! Two targets are supported:
//!
//! - **PNG**: lossless, alpha preserved, for further editing or direct use
//! - **PBM**: 1-bit portable bitmap, for vectorization tools
//!
//! The PBM path flattens transparency onto white and then re-binarizes at
//! its own fixed cut point, independently of any user threshold applied
//! earlier in the pipeline. When the image already went through
//! `binarize` that second pass is a no-op, but it is always performed so
//! images reaching the encoder directly still come out strictly bilevel.

mod pbm;
mod png;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use pbm::{encode_pbm, BILEVEL_CUTOFF};
pub use png::encode_png;

use crate::raster::Raster;

/// Requested download format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Lossless PNG with alpha.
    Png,
    /// 1-bit portable bitmap (P4).
    Pbm,
}

impl OutputFormat {
    /// Parse a format tag as supplied by the UI layer.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError::UnsupportedFormat`] for anything other than
    /// `"png"` or `"pbm"` (case-insensitive). An unknown tag is a caller
    /// bug, not user input, so this fails fast.
    pub fn parse(tag: &str) -> Result<Self, EncodeError> {
        match tag.to_ascii_lowercase().as_str() {
            "png" => Ok(OutputFormat::Png),
            "pbm" => Ok(OutputFormat::Pbm),
            _ => Err(EncodeError::UnsupportedFormat(tag.to_string())),
        }
    }

    /// File extension for this format, including the dot.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Png => ".png",
            OutputFormat::Pbm => ".pbm",
        }
    }

    /// MIME type for the download response.
    pub fn mime_type(self) -> &'static str {
        match self {
            OutputFormat::Png => "image/png",
            OutputFormat::Pbm => "image/x-portable-bitmap",
        }
    }
}

/// An encoded byte buffer together with its download metadata.
#[derive(Debug, Clone)]
pub struct EncodedOutput {
    /// Encoded file contents.
    pub bytes: Vec<u8>,
    /// File extension, including the dot.
    pub extension: &'static str,
    /// MIME type for the download.
    pub mime_type: &'static str,
}

/// Errors that can occur during encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// The requested format tag is not recognized.
    #[error("Unsupported output format: {0}")]
    UnsupportedFormat(String),

    /// Width or height is zero.
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// Pixel data length doesn't match the dimensions and mode.
    #[error("Invalid pixel data: expected {expected} bytes, got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// The underlying encoder failed.
    #[error("Encoding failed: {0}")]
    EncodingFailed(String),
}

/// Encode an image in the requested format.
///
/// The PNG path is a direct lossless encode. The PBM path flattens onto
/// white and re-binarizes at [`BILEVEL_CUTOFF`] before bit packing.
pub fn encode(image: &Raster, format: OutputFormat) -> Result<EncodedOutput, EncodeError> {
    let bytes = match format {
        OutputFormat::Png => encode_png(image)?,
        OutputFormat::Pbm => encode_pbm(image, BILEVEL_CUTOFF)?,
    };

    Ok(EncodedOutput {
        bytes,
        extension: format.extension(),
        mime_type: format.mime_type(),
    })
}

/// Build the download filename from the uploaded file's name.
///
/// The original extension is stripped and replaced with a `_processed`
/// suffix plus the new extension, e.g. `scan.jpg` -> `scan_processed.pbm`.
pub fn export_filename(original: &str, format: OutputFormat) -> String {
    let base = match original.rsplit_once('.') {
        Some((base, _)) => base,
        None => original,
    };
    format!("{}_processed{}", base, format.extension())
}

pub(crate) fn validate_buffer(image: &Raster) -> Result<(), EncodeError> {
    if image.width == 0 || image.height == 0 {
        return Err(EncodeError::InvalidDimensions {
            width: image.width,
            height: image.height,
        });
    }

    let expected = image.pixel_count() * image.mode.channels();
    if image.pixels.len() != expected {
        return Err(EncodeError::InvalidPixelData {
            expected,
            actual: image.pixels.len(),
        });
    }

    Ok(())
}
