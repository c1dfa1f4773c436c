//! Stencil Core - Image cleanup library
//!
//! This crate provides the image transforms behind Stencil: binarization,
//! white-to-transparent keying, white-background flattening, cropping, and
//! PNG/PBM export. Every operation is a pure function from a raster image
//! (plus parameters) to a new raster or byte buffer; there is no shared
//! state and no I/O inside the pipeline.
//!
//! The typical flow, mirroring the browser UI:
//!
//! 1. [`decode::decode_image`] turns uploaded JPEG/PNG/BMP bytes into a
//!    [`Raster`]
//! 2. [`pipeline::process`] binarizes and keys out the white background
//! 3. [`transform::apply_crop`] optionally cuts out a rectangle
//! 4. [`encode::encode`] produces PNG or PBM bytes for download

pub mod alpha_key;
pub mod binarize;
pub mod decode;
pub mod encode;
pub mod flatten;
pub mod pipeline;
pub mod raster;
pub mod transform;

pub use alpha_key::{key_out_white, NEAR_WHITE_CUTOFF};
pub use binarize::{binarize, DEFAULT_THRESHOLD};
pub use decode::{decode_image, DecodeError};
pub use encode::{
    encode, encode_pbm, encode_png, export_filename, EncodeError, EncodedOutput, OutputFormat,
    BILEVEL_CUTOFF,
};
pub use flatten::flatten_to_white;
pub use pipeline::{process, ProcessOptions};
pub use raster::{ColorMode, Raster};
pub use transform::{apply_crop, CropError, CropRect};
