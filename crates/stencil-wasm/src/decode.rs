//! Image decoding WASM bindings.
//!
//! Exposes the upload boundary to JavaScript: raw JPEG/PNG/BMP bytes in, a
//! [`JsRaster`] out.

use crate::types::JsRaster;
use stencil_core::decode as core_decode;
use wasm_bindgen::prelude::*;

/// Decode an uploaded image from raw bytes.
///
/// The format is detected from the file content, so a `.jpg` that is really
/// a PNG still decodes. Grayscale sources stay single-channel and sources
/// with transparency come back as RGBA.
///
/// # Arguments
///
/// * `bytes` - Raw file bytes (JPEG, PNG or BMP) as a `Uint8Array`
///
/// # Errors
///
/// Returns an error for unrecognized or corrupted files; the UI surfaces it
/// as an upload rejection.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const bytes = new Uint8Array(await file.arrayBuffer());
/// const image = decode_image(bytes);
/// console.log(`Decoded ${image.width}x${image.height}`);
/// ```
#[wasm_bindgen]
pub fn decode_image(bytes: &[u8]) -> Result<JsRaster, JsValue> {
    let raster =
        core_decode::decode_image(bytes).map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(JsRaster::from_raster(raster))
}
