//! Image encoding WASM bindings.
//!
//! Exposes the download boundary: encode a processed image as PNG or PBM
//! and hand the bytes, filename and MIME type back to the page.
//!
//! # Example
//!
//! ```typescript
//! import { export_image } from '@stencil/wasm';
//!
//! const result = export_image(processed, 'png', file.name);
//! const blob = new Blob([result.bytes], { type: result.mime_type });
//! downloadBlob(blob, result.filename);
//! ```

use crate::types::JsRaster;
use serde::Serialize;
use stencil_core::{encode as core_encode, export_filename, OutputFormat};
use wasm_bindgen::prelude::*;

/// Encode an image in the requested format.
///
/// # Arguments
///
/// * `image` - The processed image to encode
/// * `format` - Format tag: `"png"` or `"pbm"` (case-insensitive)
///
/// # Errors
///
/// Returns an error for an unknown format tag (a caller bug, not user
/// input) or a malformed image buffer.
#[wasm_bindgen]
pub fn encode_image(image: &JsRaster, format: &str) -> Result<Vec<u8>, JsValue> {
    let src = image.to_raster()?;
    let format = OutputFormat::parse(format).map_err(|e| JsValue::from_str(&e.to_string()))?;

    let out = core_encode(&src, format).map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(out.bytes)
}

/// A download-ready export: encoded bytes plus filename and MIME type.
#[wasm_bindgen]
pub struct JsExportResult {
    bytes: Vec<u8>,
    filename: String,
    mime_type: &'static str,
}

#[wasm_bindgen]
impl JsExportResult {
    /// Encoded file contents.
    ///
    /// Returned as a `Uint8Array` view constructed from WASM memory; the
    /// data is copied into the JS heap by the view constructor.
    #[wasm_bindgen(getter)]
    pub fn bytes(&self) -> js_sys::Uint8Array {
        js_sys::Uint8Array::from(&self.bytes[..])
    }

    /// Suggested download filename, e.g. `scan_processed.png`.
    #[wasm_bindgen(getter)]
    pub fn filename(&self) -> String {
        self.filename.clone()
    }

    /// MIME type for the download blob.
    #[wasm_bindgen(getter)]
    pub fn mime_type(&self) -> String {
        self.mime_type.to_string()
    }
}

/// Encode an image and build its download metadata in one call.
///
/// # Arguments
///
/// * `image` - The processed image to encode
/// * `format` - Format tag: `"png"` or `"pbm"` (case-insensitive)
/// * `original_name` - The uploaded file's name; its extension is replaced
///   by a `_processed` suffix and the new extension
#[wasm_bindgen]
pub fn export_image(
    image: &JsRaster,
    format: &str,
    original_name: &str,
) -> Result<JsExportResult, JsValue> {
    let src = image.to_raster()?;
    let format = OutputFormat::parse(format).map_err(|e| JsValue::from_str(&e.to_string()))?;

    let out = core_encode(&src, format).map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(JsExportResult {
        bytes: out.bytes,
        filename: export_filename(original_name, format),
        mime_type: out.mime_type,
    })
}

/// Descriptor for one selectable output format.
#[derive(Serialize)]
struct FormatInfo {
    tag: &'static str,
    extension: &'static str,
    mime_type: &'static str,
}

/// List the supported output formats for the UI's format selector.
///
/// Returns an array of `{ tag, extension, mime_type }` objects.
#[wasm_bindgen]
pub fn supported_output_formats() -> Result<JsValue, JsValue> {
    let formats = [
        FormatInfo {
            tag: "png",
            extension: OutputFormat::Png.extension(),
            mime_type: OutputFormat::Png.mime_type(),
        },
        FormatInfo {
            tag: "pbm",
            extension: OutputFormat::Pbm.extension(),
            mime_type: OutputFormat::Pbm.mime_type(),
        },
    ];

    serde_wasm_bindgen::to_value(&formats).map_err(|e| JsValue::from_str(&e.to_string()))
}

#[cfg(test)]
mod tests {
    use stencil_core::{encode, export_filename, ColorMode, OutputFormat, Raster};

    // Bindings returning Result<_, JsValue> are exercised in wasm_tests;
    // natively we pin the core encode they delegate to.

    #[test]
    fn test_core_encode_both_formats() {
        let img = Raster::new(4, 4, ColorMode::Gray, vec![0u8; 16]);

        let png = encode(&img, OutputFormat::Png).unwrap();
        assert_eq!(&png.bytes[..4], &[0x89, b'P', b'N', b'G']);

        let pbm = encode(&img, OutputFormat::Pbm).unwrap();
        assert!(pbm.bytes.starts_with(b"P4\n4 4\n"));
    }

    #[test]
    fn test_filename_convention() {
        assert_eq!(
            export_filename("photo.bmp", OutputFormat::Pbm),
            "photo_processed.pbm"
        );
    }
}
