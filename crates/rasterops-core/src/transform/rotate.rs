//! Quarter-turn rotation of square images.
//!
//! The output keeps the input's width and height. For a quarter turn that is
//! only meaningful when the image is square, so non-square input is rejected
//! with [`TransformError::OutOfBoundsSource`] instead of reading outside the
//! source buffer.
//!
//! # Algorithm
//!
//! Inverse mapping, for each output pixel (x, y) with side length `n`:
//! ```text
//! Clockwise:         dst[x, y] = src[y, n - 1 - x]
//! CounterClockwise:  dst[x, y] = src[n - 1 - y, x]
//! ```

use super::RotateDirection;
use crate::raster::{RasterImage, TransformError};

/// Rotate a square image by a quarter turn.
///
/// # Errors
///
/// - `InvalidDimension` for an empty image
/// - `OutOfBoundsSource` when `width != height`
pub fn rotate(
    image: &RasterImage,
    direction: RotateDirection,
) -> Result<RasterImage, TransformError> {
    image.validate()?;

    let (width, height) = image.dimensions();
    if width != height {
        log::warn!("rotate {direction}: non-square {width}x{height} image");
        return Err(TransformError::OutOfBoundsSource { width, height });
    }

    let n = width;
    let mut output = vec![0u8; image.pixels.len()];

    for dst_y in 0..n {
        for dst_x in 0..n {
            let (src_x, src_y) = match direction {
                RotateDirection::Clockwise => (dst_y, n - 1 - dst_x),
                RotateDirection::CounterClockwise => (n - 1 - dst_y, dst_x),
            };

            let dst_idx = ((dst_y as usize * n as usize) + dst_x as usize) * 3;
            output[dst_idx..dst_idx + 3].copy_from_slice(&image.pixel(src_x, src_y));
        }
    }

    log::debug!("rotate {direction}: {width}x{height}");

    Ok(RasterImage {
        width,
        height,
        pixels: output,
    })
}
