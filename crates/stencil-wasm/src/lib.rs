//! Stencil WASM - WebAssembly bindings for Stencil
//!
//! This crate exposes the stencil-core image cleanup pipeline to
//! JavaScript/TypeScript applications.
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible wrapper types for image data
//! - `decode` - Upload boundary (JPEG/PNG/BMP bytes to raster)
//! - `process` - Binarize, white keying, flattening, combined cleanup
//! - `transform` - Pixel-rectangle cropping
//! - `encode` - Download boundary (PNG/PBM bytes, filename, MIME type)
//!
//! # Usage
//!
//! ```typescript
//! import init, { decode_image, process, export_image } from '@stencil/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const image = decode_image(bytes);
//! const cleaned = process(image, { threshold: 128 });
//! const download = export_image(cleaned, 'png', file.name);
//! ```

use wasm_bindgen::prelude::*;

mod decode;
mod encode;
mod process;
mod transform;
mod types;

// Re-export public types
pub use decode::decode_image;
pub use encode::{encode_image, export_image, supported_output_formats, JsExportResult};
pub use process::{binarize, flatten_to_white, key_out_white, process};
pub use transform::apply_crop;
pub use types::JsRaster;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    web_sys::console::log_1(&format!("stencil-wasm {} ready", env!("CARGO_PKG_VERSION")).into());
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }
}
