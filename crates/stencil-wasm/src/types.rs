//! WASM-compatible wrapper types for image data.
//!
//! This module provides JavaScript-friendly types that wrap the core Stencil
//! types, handling the conversion between Rust and JavaScript data
//! representations.

use stencil_core::{ColorMode, Raster};
use wasm_bindgen::prelude::*;

/// A raster image wrapper for JavaScript.
///
/// Wraps the core `Raster` type with a JavaScript-friendly interface. The
/// channel count identifies the pixel layout: 1 = grayscale, 3 = RGB,
/// 4 = RGBA.
///
/// # Memory Management
///
/// The pixel data lives in WASM memory. `pixels()` copies it out to a
/// `Uint8Array`; keep the image in WASM memory and extract pixels only when
/// needed (e.g. to paint a preview canvas). `free()` releases the memory
/// explicitly, though wasm-bindgen's finalizer also handles cleanup.
#[wasm_bindgen]
pub struct JsRaster {
    width: u32,
    height: u32,
    channels: u8,
    pixels: Vec<u8>,
}

#[wasm_bindgen]
impl JsRaster {
    /// Create a new JsRaster from dimensions, channel count and pixel data.
    ///
    /// # Arguments
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    /// * `channels` - Bytes per pixel: 1 (gray), 3 (RGB) or 4 (RGBA)
    /// * `pixels` - Pixel data, row-major order
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, channels: u8, pixels: Vec<u8>) -> JsRaster {
        JsRaster {
            width,
            height,
            channels,
            pixels,
        }
    }

    /// Get the image width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the image height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the number of channels per pixel (1, 3 or 4)
    #[wasm_bindgen(getter)]
    pub fn channels(&self) -> u8 {
        self.channels
    }

    /// Get the number of bytes in the pixel buffer
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.pixels.len()
    }

    /// Returns pixel data as Uint8Array.
    ///
    /// Note: This creates a copy of the pixel data for safe memory
    /// management across the WASM boundary.
    pub fn pixels(&self) -> Vec<u8> {
        self.pixels.clone()
    }

    /// Explicitly free WASM memory.
    ///
    /// Optional - wasm-bindgen's finalizer will handle cleanup automatically.
    pub fn free(self) {
        // Dropping self releases the memory
    }
}

impl JsRaster {
    /// Create a JsRaster from a core Raster.
    pub(crate) fn from_raster(img: Raster) -> Self {
        Self {
            width: img.width,
            height: img.height,
            channels: img.mode.channels() as u8,
            pixels: img.pixels,
        }
    }

    /// Convert back to a core Raster.
    ///
    /// Note: This clones the pixel data. Fails on a channel count the core
    /// has no mode for, which can only happen with a hand-constructed
    /// wrapper.
    pub(crate) fn to_raster(&self) -> Result<Raster, JsValue> {
        let mode = match self.channels {
            1 => ColorMode::Gray,
            3 => ColorMode::Rgb,
            4 => ColorMode::Rgba,
            other => {
                return Err(JsValue::from_str(&format!(
                    "Unsupported channel count: {}",
                    other
                )))
            }
        };

        let expected = self.width as usize * self.height as usize * mode.channels();
        if self.pixels.len() != expected {
            return Err(JsValue::from_str(&format!(
                "Pixel buffer length {} does not match {}x{}x{}",
                self.pixels.len(),
                self.width,
                self.height,
                self.channels
            )));
        }

        Ok(Raster::new(self.width, self.height, mode, self.pixels.clone()))
    }
}


/// Error-path tests construct `JsValue`s, which only works on wasm32.
/// Run with `wasm-pack test`.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_to_raster_rejects_bad_channel_count() {
        let js = JsRaster::new(2, 2, 2, vec![0u8; 8]);
        assert!(js.to_raster().is_err());
    }

    #[wasm_bindgen_test]
    fn test_to_raster_rejects_short_buffer() {
        let js = JsRaster::new(10, 10, 3, vec![0u8; 7]);
        assert!(js.to_raster().is_err());
    }
}
