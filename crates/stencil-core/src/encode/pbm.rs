//! Raw (P4) portable bitmap encoding.
//!
//! PBM cannot represent transparency or gray levels, so the encoder first
//! flattens the image onto white, reduces it to luma, and thresholds at a
//! fixed internal cut point. That cut is independent of the user-facing
//! binarization threshold; see the module docs in [`super`] for why both
//! passes are kept.
//!
//! Format: `P4\n<width> <height>\n` followed by rows of MSB-first packed
//! bits, each row padded to a whole byte. Bit 1 is black, bit 0 is white.

use super::{validate_buffer, EncodeError};
use crate::flatten::flatten_to_white;
use crate::raster::Raster;

/// The bilevel encoder's internal cut point: luma strictly greater than
/// this becomes white. 127 makes mid-gray (128) map to white, matching the
/// usual non-dithered 1-bit conversion rule.
pub const BILEVEL_CUTOFF: u8 = 127;

/// Encode a raster as a raw (P4) portable bitmap.
///
/// Transparency is flattened onto white and the result is re-binarized at
/// `cutoff` regardless of any earlier thresholding.
///
/// # Errors
///
/// Returns [`EncodeError::InvalidDimensions`] or
/// [`EncodeError::InvalidPixelData`] if the raster is malformed.
pub fn encode_pbm(image: &Raster, cutoff: u8) -> Result<Vec<u8>, EncodeError> {
    validate_buffer(image)?;

    let gray = flatten_to_white(image).to_gray();

    let width = gray.width as usize;
    let height = gray.height as usize;
    let row_bytes = width.div_ceil(8);

    let header = format!("P4\n{} {}\n", gray.width, gray.height);
    let mut out = Vec::with_capacity(header.len() + row_bytes * height);
    out.extend_from_slice(header.as_bytes());

    for row in gray.pixels.chunks_exact(width) {
        let mut byte = 0u8;
        for (x, &luma) in row.iter().enumerate() {
            if luma <= cutoff {
                // 1 = black, packed MSB first
                byte |= 0x80 >> (x % 8);
            }
            if x % 8 == 7 {
                out.push(byte);
                byte = 0;
            }
        }
        if width % 8 != 0 {
            out.push(byte);
        }
    }

    Ok(out)
}
