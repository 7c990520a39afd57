//! Half-image mirroring.
//!
//! The first half of the image along the chosen axis is kept as-is and the
//! second half is filled with a reflection of it.
//!
//! # Index Mapping
//!
//! For a `Vertical` mirror of width `w`:
//! ```text
//! dst[x, y] = src[x, y]        for x <  w / 2
//! dst[x, y] = src[w - x, y]    for x >= w / 2
//! ```
//! The reflection uses `w - x` rather than `w - 1 - x`, so the mirrored half is
//! shifted by one pixel relative to an exact reflection. `Horizontal` applies
//! the same mapping to rows with `h - y`.
//!
//! The only index that can leave the image is `w - x` when `w == 1`; it is
//! clamped to the last column.

use super::MirrorDirection;
use crate::raster::{RasterImage, TransformError};

/// Mirror an image about its vertical or horizontal center line.
///
/// # Arguments
///
/// * `image` - Source image
/// * `direction` - `Vertical` reflects columns, `Horizontal` reflects rows
///
/// # Returns
///
/// New `RasterImage` with the same dimensions as the source.
pub fn mirror(
    image: &RasterImage,
    direction: MirrorDirection,
) -> Result<RasterImage, TransformError> {
    image.validate()?;

    let (width, height) = image.dimensions();
    let mut output = vec![0u8; image.pixels.len()];
    let row_bytes = width as usize * 3;

    match direction {
        MirrorDirection::Vertical => {
            for y in 0..height as usize {
                let src_row = &image.pixels[y * row_bytes..(y + 1) * row_bytes];
                let dst_row = &mut output[y * row_bytes..(y + 1) * row_bytes];
                for x in 0..width {
                    let src_x = reflect(x, width) as usize;
                    let dst_x = x as usize;
                    dst_row[dst_x * 3..dst_x * 3 + 3]
                        .copy_from_slice(&src_row[src_x * 3..src_x * 3 + 3]);
                }
            }
        }
        MirrorDirection::Horizontal => {
            // Whole rows move together
            for y in 0..height {
                let src_y = reflect(y, height) as usize;
                let dst_y = y as usize;
                output[dst_y * row_bytes..(dst_y + 1) * row_bytes]
                    .copy_from_slice(&image.pixels[src_y * row_bytes..(src_y + 1) * row_bytes]);
            }
        }
    }

    log::debug!("mirror {direction}: {width}x{height}");

    Ok(RasterImage {
        width,
        height,
        pixels: output,
    })
}

/// Source index along an axis of length `len` for destination index `i`.
#[inline]
fn reflect(i: u32, len: u32) -> u32 {
    if i < len / 2 {
        i
    } else {
        (len - i).min(len - 1)
    }
}
