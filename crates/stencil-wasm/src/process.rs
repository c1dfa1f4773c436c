//! Cleanup pipeline WASM bindings.
//!
//! JavaScript bindings for the per-pixel transforms: binarization,
//! white-to-transparent keying, white-background flattening, and the
//! combined `process` step the UI's main button triggers.

use crate::types::JsRaster;
use stencil_core::{
    binarize as core_binarize, flatten_to_white as core_flatten,
    key_out_white as core_key_out_white, process as core_process, ProcessOptions,
    NEAR_WHITE_CUTOFF,
};
use wasm_bindgen::prelude::*;

/// Reduce an image to pure black and white.
///
/// Pixels with intensity above `threshold` become white (255), the rest
/// black (0). The result is single-channel grayscale.
///
/// # Arguments
///
/// * `image` - Source image
/// * `threshold` - Binarization threshold (0-255, UI default 128)
#[wasm_bindgen]
pub fn binarize(image: &JsRaster, threshold: u8) -> Result<JsRaster, JsValue> {
    let src = image.to_raster()?;
    Ok(JsRaster::from_raster(core_binarize(&src, threshold)))
}

/// Make near-white pixels fully transparent.
///
/// A pixel is keyed out when all three color channels exceed `cutoff`
/// (default 250 when omitted). The result is always RGBA.
///
/// # Example (TypeScript)
///
/// ```typescript
/// // Default near-white cutoff
/// const keyed = key_out_white(image);
///
/// // Looser matching, also catches light gray
/// const loose = key_out_white(image, 230);
/// ```
#[wasm_bindgen]
pub fn key_out_white(image: &JsRaster, cutoff: Option<u8>) -> Result<JsRaster, JsValue> {
    let src = image.to_raster()?;
    let cutoff = cutoff.unwrap_or(NEAR_WHITE_CUTOFF);
    Ok(JsRaster::from_raster(core_key_out_white(&src, cutoff)))
}

/// Composite transparency onto an opaque white background.
///
/// Needed before bilevel export; PNG export keeps transparency and does not
/// call this.
#[wasm_bindgen]
pub fn flatten_to_white(image: &JsRaster) -> Result<JsRaster, JsValue> {
    let src = image.to_raster()?;
    Ok(JsRaster::from_raster(core_flatten(&src)))
}

/// Run the full cleanup: binarize, then key out white.
///
/// # Arguments
///
/// * `image` - Source image
/// * `options` - A `{ threshold?, near_white_cutoff? }` object; missing
///   fields fall back to the documented defaults
///
/// # Example (TypeScript)
///
/// ```typescript
/// const cleaned = process(image, { threshold: 160 });
/// ```
#[wasm_bindgen]
pub fn process(image: &JsRaster, options: JsValue) -> Result<JsRaster, JsValue> {
    let src = image.to_raster()?;
    let options: ProcessOptions = if options.is_undefined() || options.is_null() {
        ProcessOptions::new()
    } else {
        serde_wasm_bindgen::from_value(options).map_err(|e| JsValue::from_str(&e.to_string()))?
    };

    Ok(JsRaster::from_raster(core_process(&src, &options)))
}


/// WASM-specific tests that require JsValue. Run with `wasm-pack test`.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn checker(width: u32, height: u32) -> JsRaster {
        let pixels = (0..width * height)
            .map(|i| if i % 2 == 0 { 255 } else { 0 })
            .collect();
        JsRaster::new(width, height, 1, pixels)
    }

    #[wasm_bindgen_test]
    fn test_binarize_binding() {
        let img = checker(4, 4);
        let result = binarize(&img, 128).unwrap();
        assert_eq!(result.channels(), 1);
        assert!(result.pixels().iter().all(|&v| v == 0 || v == 255));
    }

    #[wasm_bindgen_test]
    fn test_key_out_white_default_cutoff() {
        let img = JsRaster::new(1, 1, 3, vec![255, 255, 255]);
        let result = key_out_white(&img, None).unwrap();
        assert_eq!(result.pixels(), vec![255, 255, 255, 0]);
    }

    #[wasm_bindgen_test]
    fn test_process_with_undefined_options() {
        let img = checker(4, 4);
        let result = process(&img, JsValue::UNDEFINED).unwrap();
        assert_eq!(result.channels(), 4);
    }

    #[wasm_bindgen_test]
    fn test_process_with_options_object() {
        let img = JsRaster::new(1, 1, 1, vec![100]);
        let options =
            serde_wasm_bindgen::to_value(&stencil_core::ProcessOptions {
                threshold: 90,
                near_white_cutoff: 250,
            })
            .unwrap();

        let result = process(&img, options).unwrap();
        // 100 > 90: white, then keyed transparent
        assert_eq!(result.pixels(), vec![255, 255, 255, 0]);
    }

    #[wasm_bindgen_test]
    fn test_process_rejects_malformed_options() {
        let img = checker(2, 2);
        let bad = serde_wasm_bindgen::to_value(&"not options").unwrap();
        assert!(process(&img, bad).is_err());
    }
}
