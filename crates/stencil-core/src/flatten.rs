//! Composite transparency onto an opaque white background.
//!
//! The bilevel export format cannot represent transparency, so transparent
//! regions must become white before the bit-depth reduction. This is the
//! only compositing step in the pipeline.

use crate::raster::{ColorMode, Raster};

/// Composite an RGBA image over an opaque white background.
///
/// Standard "over" blending with the image's own alpha as the blend weight,
/// background fixed at white. The output is RGB with identical dimensions.
/// Inputs without an alpha channel are returned unchanged.
pub fn flatten_to_white(image: &Raster) -> Raster {
    if image.mode != ColorMode::Rgba {
        return image.clone();
    }

    let mut pixels = Vec::with_capacity(image.pixel_count() * 3);
    for px in image.pixels.chunks_exact(4) {
        let a = px[3] as u32;
        for &c in &px[..3] {
            // out = c * a + 255 * (1 - a), in 8-bit fixed point
            let blended = (c as u32 * a + 255 * (255 - a) + 127) / 255;
            pixels.push(blended as u8);
        }
    }

    Raster::new(image.width, image.height, ColorMode::Rgb, pixels)
}
