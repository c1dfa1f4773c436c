//! In-memory raster image type and color mode conversions.
//!
//! Every transform in the pipeline takes a [`Raster`] and returns a new one;
//! images are plain values with no identity beyond their pixel buffer.
//!
//! # Color Modes
//!
//! - `Gray`: one intensity channel per pixel (0-255)
//! - `Rgb`: three channels per pixel
//! - `Rgba`: four channels per pixel, alpha 0 = fully transparent
//!
//! Bilevel (1-bit) images exist only as an output encoding target, never as
//! an in-memory mode.

use image::DynamicImage;
use serde::{Deserialize, Serialize};

/// ITU-R BT.601 luma weight for the red channel (per mille).
pub const LUMA_R: u32 = 299;

/// ITU-R BT.601 luma weight for the green channel (per mille).
pub const LUMA_G: u32 = 587;

/// ITU-R BT.601 luma weight for the blue channel (per mille).
pub const LUMA_B: u32 = 114;

/// Compute the luma of an RGB triple using BT.601 integer weights.
///
/// The weights sum to 1000, so gray inputs (r = g = b) map to themselves
/// exactly. Rounds to nearest.
#[inline]
pub fn luma_u8(r: u8, g: u8, b: u8) -> u8 {
    ((LUMA_R * r as u32 + LUMA_G * g as u32 + LUMA_B * b as u32 + 500) / 1000) as u8
}

/// Pixel layout of a [`Raster`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Single intensity channel.
    Gray,
    /// Three color channels.
    Rgb,
    /// Three color channels plus alpha.
    Rgba,
}

impl ColorMode {
    /// Number of bytes per pixel in this mode.
    #[inline]
    pub fn channels(self) -> usize {
        match self {
            ColorMode::Gray => 1,
            ColorMode::Rgb => 3,
            ColorMode::Rgba => 4,
        }
    }
}

/// A decoded image with 8-bit-per-channel pixel data in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Pixel layout of the buffer.
    pub mode: ColorMode,
    /// Pixel data, `width * height * mode.channels()` bytes.
    pub pixels: Vec<u8>,
}

impl Raster {
    /// Create a new raster from dimensions, mode and pixel data.
    pub fn new(width: u32, height: u32, mode: ColorMode, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(
            pixels.len(),
            width as usize * height as usize * mode.channels(),
            "pixel buffer length must match dimensions"
        );
        Self {
            width,
            height,
            mode,
            pixels,
        }
    }

    /// Total number of pixels.
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Size of the pixel buffer in bytes.
    pub fn byte_size(&self) -> usize {
        self.pixels.len()
    }

    /// Check if this is an empty/invalid image.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0 || self.pixels.is_empty()
    }

    /// Convert to single-channel grayscale using BT.601 luma.
    ///
    /// Alpha is ignored, matching the behavior of a plain mode conversion
    /// (no compositing; use [`crate::flatten::flatten_to_white`] first if
    /// transparency must become white).
    pub fn to_gray(&self) -> Raster {
        match self.mode {
            ColorMode::Gray => self.clone(),
            ColorMode::Rgb | ColorMode::Rgba => {
                let ch = self.mode.channels();
                let pixels = self
                    .pixels
                    .chunks_exact(ch)
                    .map(|px| luma_u8(px[0], px[1], px[2]))
                    .collect();
                Raster::new(self.width, self.height, ColorMode::Gray, pixels)
            }
        }
    }

    /// Convert to three-channel RGB, dropping alpha if present.
    pub fn to_rgb(&self) -> Raster {
        match self.mode {
            ColorMode::Rgb => self.clone(),
            ColorMode::Gray => {
                let mut pixels = Vec::with_capacity(self.pixel_count() * 3);
                for &v in &self.pixels {
                    pixels.extend_from_slice(&[v, v, v]);
                }
                Raster::new(self.width, self.height, ColorMode::Rgb, pixels)
            }
            ColorMode::Rgba => {
                let pixels = self
                    .pixels
                    .chunks_exact(4)
                    .flat_map(|px| [px[0], px[1], px[2]])
                    .collect();
                Raster::new(self.width, self.height, ColorMode::Rgb, pixels)
            }
        }
    }

    /// Convert to four-channel RGBA, filling alpha with 255 (opaque).
    pub fn to_rgba(&self) -> Raster {
        match self.mode {
            ColorMode::Rgba => self.clone(),
            ColorMode::Gray => {
                let pixels = self
                    .pixels
                    .iter()
                    .flat_map(|&v| [v, v, v, 255])
                    .collect();
                Raster::new(self.width, self.height, ColorMode::Rgba, pixels)
            }
            ColorMode::Rgb => {
                let pixels = self
                    .pixels
                    .chunks_exact(3)
                    .flat_map(|px| [px[0], px[1], px[2], 255])
                    .collect();
                Raster::new(self.width, self.height, ColorMode::Rgba, pixels)
            }
        }
    }

    /// Build a raster from a decoded [`DynamicImage`].
    ///
    /// Grayscale sources stay `Gray` and sources with an alpha channel
    /// become `Rgba`; everything else is converted to `Rgb`.
    pub fn from_dynamic(img: DynamicImage) -> Raster {
        let color = img.color();
        if color.has_alpha() {
            let buf = img.into_rgba8();
            let (w, h) = buf.dimensions();
            Raster::new(w, h, ColorMode::Rgba, buf.into_raw())
        } else if color.channel_count() == 1 {
            let buf = img.into_luma8();
            let (w, h) = buf.dimensions();
            Raster::new(w, h, ColorMode::Gray, buf.into_raw())
        } else {
            let buf = img.into_rgb8();
            let (w, h) = buf.dimensions();
            Raster::new(w, h, ColorMode::Rgb, buf.into_raw())
        }
    }
}
