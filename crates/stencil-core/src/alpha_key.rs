//! Turn near-white pixels transparent.

use crate::raster::Raster;

/// Default near-white cutoff: a pixel is keyed out when all three color
/// channels are strictly greater than this value.
pub const NEAR_WHITE_CUTOFF: u8 = 250;

/// Replace near-white pixels with fully transparent white.
///
/// The input is converted to opaque RGBA if it is not RGBA already. A pixel
/// is keyed out when `r > cutoff && g > cutoff && b > cutoff`; its color is
/// set to pure white and its alpha to 0. Every other pixel keeps its
/// original color and alpha (no compositing is performed on pixels that are
/// already partially transparent).
///
/// Idempotent: keyed-out pixels are pure white and match the condition
/// again on a second pass, producing the same output.
pub fn key_out_white(image: &Raster, cutoff: u8) -> Raster {
    let mut out = image.to_rgba();

    for px in out.pixels.chunks_exact_mut(4) {
        if px[0] > cutoff && px[1] > cutoff && px[2] > cutoff {
            px.copy_from_slice(&[255, 255, 255, 0]);
        }
    }

    out
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::raster::ColorMode;
    use proptest::prelude::*;

    fn rgba_image_strategy() -> impl Strategy<Value = Raster> {
        (2u32..=24, 2u32..=24).prop_flat_map(|(w, h)| {
            proptest::collection::vec(any::<u8>(), (w * h * 4) as usize)
                .prop_map(move |pixels| Raster::new(w, h, ColorMode::Rgba, pixels))
        })
    }

    proptest! {
        /// Property: keying is idempotent.
        #[test]
        fn prop_idempotent(img in rgba_image_strategy(), cutoff: u8) {
            let once = key_out_white(&img, cutoff);
            let twice = key_out_white(&once, cutoff);
            prop_assert_eq!(once, twice);
        }

        /// Property: dimensions and mode are fixed by the contract.
        #[test]
        fn prop_output_shape(img in rgba_image_strategy()) {
            let result = key_out_white(&img, NEAR_WHITE_CUTOFF);
            prop_assert_eq!(result.width, img.width);
            prop_assert_eq!(result.height, img.height);
            prop_assert_eq!(result.mode, ColorMode::Rgba);
        }

        /// Property: pixels that are not near-white are bit-identical to the input.
        #[test]
        fn prop_non_matching_pixels_untouched(img in rgba_image_strategy(), cutoff: u8) {
            let result = key_out_white(&img, cutoff);
            for (src, out) in img.pixels.chunks_exact(4).zip(result.pixels.chunks_exact(4)) {
                if !(src[0] > cutoff && src[1] > cutoff && src[2] > cutoff) {
                    prop_assert_eq!(src, out);
                }
            }
        }
    }
}
