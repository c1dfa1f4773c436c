//! Crop WASM bindings.

use crate::types::JsRaster;
use stencil_core::{apply_crop as core_crop, CropRect};
use wasm_bindgen::prelude::*;

/// Crop a rectangle out of an image using pixel coordinates.
///
/// `(x1, y1)` is the inclusive top-left corner, `(x2, y2)` the exclusive
/// bottom-right corner; the invariant is `x1 < x2 <= width` and
/// `y1 < y2 <= height`.
///
/// # Errors
///
/// An out-of-order or out-of-bounds rectangle returns an error with a
/// human-readable message. The source image is never modified, so the UI
/// shows the message and keeps displaying the previous result.
///
/// # Example (TypeScript)
///
/// ```typescript
/// try {
///   cropped = apply_crop(processed, x1, y1, x2, y2);
/// } catch (e) {
///   showValidationError(e); // keep `processed` on screen
/// }
/// ```
#[wasm_bindgen]
pub fn apply_crop(
    image: &JsRaster,
    x1: u32,
    y1: u32,
    x2: u32,
    y2: u32,
) -> Result<JsRaster, JsValue> {
    let src = image.to_raster()?;
    let rect = CropRect::new(x1, y1, x2, y2);

    let result = core_crop(&src, &rect).map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(JsRaster::from_raster(result))
}

#[cfg(test)]
mod tests {
    use stencil_core::{ColorMode, CropRect, Raster};

    // The binding returns Result<_, JsValue>; natively we pin the core
    // semantics it forwards to.

    #[test]
    fn test_core_crop_full_frame_identity() {
        let img = Raster::new(10, 10, ColorMode::Rgb, vec![3u8; 10 * 10 * 3]);
        let result = stencil_core::apply_crop(&img, &CropRect::new(0, 0, 10, 10)).unwrap();
        assert_eq!(result, img);
    }

    #[test]
    fn test_core_crop_rejects_reversed_rect() {
        let img = Raster::new(10, 10, ColorMode::Rgb, vec![3u8; 10 * 10 * 3]);
        assert!(stencil_core::apply_crop(&img, &CropRect::new(8, 0, 2, 10)).is_err());
    }
}
