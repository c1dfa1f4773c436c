//! The standard cleanup pipeline: binarize, then key out white.
//!
//! Cropping and encoding stay separate because they are driven by distinct
//! UI interactions; this module covers the single "process" action.

use serde::{Deserialize, Serialize};

use crate::alpha_key::{key_out_white, NEAR_WHITE_CUTOFF};
use crate::binarize::{binarize, DEFAULT_THRESHOLD};
use crate::raster::Raster;

/// Parameters for the cleanup pipeline.
///
/// Both cut points are explicit here rather than buried in the transforms,
/// so a caller can see (and tune) every threshold the pipeline applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessOptions {
    /// Binarization threshold (0-255); intensity above it becomes white.
    pub threshold: u8,
    /// Near-white cutoff for the transparency keying step.
    pub near_white_cutoff: u8,
}

impl Default for ProcessOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            near_white_cutoff: NEAR_WHITE_CUTOFF,
        }
    }
}

impl ProcessOptions {
    /// Create options with the documented defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if all values are at their defaults.
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

/// Run the full cleanup: reduce to two colors, then make white transparent.
///
/// The result is an RGBA raster whose pixels are either opaque black or
/// fully transparent white. Pure and stateless; callers that want to offer
/// repeated downloads cache the returned image themselves.
pub fn process(image: &Raster, options: &ProcessOptions) -> Raster {
    let binary = binarize(image, options.threshold);
    key_out_white(&binary, options.near_white_cutoff)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::ColorMode;

    #[test]
    fn test_options_defaults() {
        let options = ProcessOptions::new();
        assert!(options.is_default());
        assert_eq!(options.threshold, 128);
        assert_eq!(options.near_white_cutoff, 250);
    }

    #[test]
    fn test_options_not_default() {
        let mut options = ProcessOptions::new();
        options.threshold = 180;
        assert!(!options.is_default());
    }

    #[test]
    fn test_options_serde_round_trip() {
        let options = ProcessOptions {
            threshold: 160,
            near_white_cutoff: 240,
        };
        let json = serde_json::to_string(&options).unwrap();
        let back: ProcessOptions = serde_json::from_str(&json).unwrap();
        assert_eq!(back, options);
    }

    #[test]
    fn test_options_missing_fields_use_defaults() {
        let options: ProcessOptions = serde_json::from_str("{}").unwrap();
        assert!(options.is_default());
    }

    #[test]
    fn test_process_output_is_binary_with_keyed_alpha() {
        let pixels: Vec<u8> = (0..10 * 10).map(|i| (i * 2 % 256) as u8).collect();
        let img = Raster::new(10, 10, ColorMode::Gray, pixels);

        let result = process(&img, &ProcessOptions::new());
        assert_eq!(result.mode, ColorMode::Rgba);

        for px in result.pixels.chunks_exact(4) {
            // Either opaque black or transparent white, nothing in between
            assert!(px == [0, 0, 0, 255] || px == [255, 255, 255, 0]);
        }
    }

    #[test]
    fn test_process_half_black_half_white() {
        // 100x100 opaque RGB, left half black, right half white
        let mut pixels = Vec::with_capacity(100 * 100 * 3);
        for _y in 0..100 {
            for x in 0..100 {
                let v = if x < 50 { 0 } else { 255 };
                pixels.extend_from_slice(&[v, v, v]);
            }
        }
        let img = Raster::new(100, 100, ColorMode::Rgb, pixels);

        let result = process(&img, &ProcessOptions::new());

        for y in 0..100usize {
            for x in 0..100usize {
                let px = &result.pixels[(y * 100 + x) * 4..][..4];
                if x < 50 {
                    assert_eq!(px, [0, 0, 0, 255], "left half stays opaque black");
                } else {
                    assert_eq!(px, [255, 255, 255, 0], "right half is keyed out");
                }
            }
        }
    }

    #[test]
    fn test_process_threshold_shifts_the_split() {
        let img = Raster::new(1, 1, ColorMode::Gray, vec![100]);

        let default = process(&img, &ProcessOptions::new());
        assert_eq!(default.pixels[3], 255, "100 <= 128 stays black");

        let low = process(
            &img,
            &ProcessOptions {
                threshold: 90,
                ..ProcessOptions::new()
            },
        );
        assert_eq!(low.pixels[3], 0, "100 > 90 becomes white then transparent");
    }
}
