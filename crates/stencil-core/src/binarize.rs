//! Reduce an image to pure black and white via a threshold.

use crate::raster::{ColorMode, Raster};

/// Default binarization threshold, the midpoint of the 8-bit range.
pub const DEFAULT_THRESHOLD: u8 = 128;

/// Reduce an image to two colors.
///
/// The input is converted to grayscale intensity first (BT.601 luma for
/// color sources), then every pixel with intensity strictly greater than
/// `threshold` becomes 255 and every other pixel becomes 0.
///
/// The output is always `Gray` mode and contains only the values 0 and 255.
/// Total and deterministic for any input raster and threshold.
pub fn binarize(image: &Raster, threshold: u8) -> Raster {
    let gray = image.to_gray();
    let pixels = gray
        .pixels
        .iter()
        .map(|&v| if v > threshold { 255 } else { 0 })
        .collect();

    Raster::new(image.width, image.height, ColorMode::Gray, pixels)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn gray_image_strategy() -> impl Strategy<Value = Raster> {
        (2u32..=32, 2u32..=32).prop_flat_map(|(w, h)| {
            proptest::collection::vec(any::<u8>(), (w * h) as usize)
                .prop_map(move |pixels| Raster::new(w, h, ColorMode::Gray, pixels))
        })
    }

    proptest! {
        /// Property: output contains only 0 and 255 for any input/threshold.
        #[test]
        fn prop_output_two_valued(img in gray_image_strategy(), threshold: u8) {
            let result = binarize(&img, threshold);
            prop_assert!(result.pixels.iter().all(|&v| v == 0 || v == 255));
        }

        /// Property: a lower threshold never produces fewer white pixels.
        #[test]
        fn prop_threshold_monotonic(img in gray_image_strategy(), t1: u8, t2: u8) {
            let (low, high) = (t1.min(t2), t1.max(t2));

            let whites_low = binarize(&img, low).pixels.iter().filter(|&&v| v == 255).count();
            let whites_high = binarize(&img, high).pixels.iter().filter(|&&v| v == 255).count();

            prop_assert!(whites_low >= whites_high);
        }

        /// Property: binarize is idempotent once the image is two-valued.
        #[test]
        fn prop_stable_on_own_output(img in gray_image_strategy(), threshold in 1u8..=254) {
            let once = binarize(&img, threshold);
            let twice = binarize(&once, threshold);
            prop_assert_eq!(once, twice);
        }
    }
}
