//! Rectangular cropping.
//!
//! The crop rectangle comes straight from user input, so the bounds are
//! validated rather than clamped: an out-of-order or out-of-bounds
//! rectangle is rejected with an error and the caller keeps whatever image
//! it had before.
//!
//! # Coordinate System
//!
//! Pixel coordinates with the origin at the top-left corner. `(x1, y1)` is
//! the inclusive top-left corner of the region, `(x2, y2)` the exclusive
//! bottom-right corner, so the output is `(x2 - x1) x (y2 - y1)` pixels.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::raster::Raster;

/// A crop region in pixel coordinates.
///
/// Valid when `x1 < x2 <= width` and `y1 < y2 <= height` for the image it
/// is applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropRect {
    /// Left edge, inclusive.
    pub x1: u32,
    /// Top edge, inclusive.
    pub y1: u32,
    /// Right edge, exclusive.
    pub x2: u32,
    /// Bottom edge, exclusive.
    pub y2: u32,
}

impl CropRect {
    pub fn new(x1: u32, y1: u32, x2: u32, y2: u32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Width of the region, assuming the rectangle is valid.
    pub fn width(&self) -> u32 {
        self.x2.saturating_sub(self.x1)
    }

    /// Height of the region, assuming the rectangle is valid.
    pub fn height(&self) -> u32 {
        self.y2.saturating_sub(self.y1)
    }

    /// Check the ordering and bounds invariant against an image size.
    pub fn validate(&self, width: u32, height: u32) -> Result<(), CropError> {
        if self.x1 < self.x2 && self.x2 <= width && self.y1 < self.y2 && self.y2 <= height {
            Ok(())
        } else {
            Err(CropError::InvalidRectangle {
                rect: *self,
                width,
                height,
            })
        }
    }
}

impl std::fmt::Display for CropRect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})-({}, {})", self.x1, self.y1, self.x2, self.y2)
    }
}

/// Error types for crop operations.
#[derive(Debug, Error)]
pub enum CropError {
    /// The rectangle violates the ordering/bounds invariant.
    #[error("Invalid crop rectangle {rect} for {width}x{height} image")]
    InvalidRectangle {
        rect: CropRect,
        width: u32,
        height: u32,
    },
}

/// Extract the sub-raster bounded by `rect`.
///
/// The source image is never modified; on error the caller simply keeps it.
///
/// # Errors
///
/// Returns [`CropError::InvalidRectangle`] when the rectangle is out of
/// order or extends past the image bounds. Invalid input is a user error
/// and is surfaced, not silently corrected.
pub fn apply_crop(image: &Raster, rect: &CropRect) -> Result<Raster, CropError> {
    rect.validate(image.width, image.height)?;

    let ch = image.mode.channels();
    let out_width = rect.width();
    let out_height = rect.height();

    let src_stride = image.width as usize * ch;
    let row_bytes = out_width as usize * ch;

    let mut pixels = Vec::with_capacity(out_height as usize * row_bytes);

    // Copy row by row
    for y in rect.y1..rect.y2 {
        let row_start = y as usize * src_stride + rect.x1 as usize * ch;
        pixels.extend_from_slice(&image.pixels[row_start..row_start + row_bytes]);
    }

    Ok(Raster::new(out_width, out_height, image.mode, pixels))
}


// ============================================================================
// Property-Based Tests
// ============================================================================
