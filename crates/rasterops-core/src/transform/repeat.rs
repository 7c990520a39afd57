//! Tiling an image along one axis.

use super::RepeatDirection;
use crate::raster::{rgb_buffer_len, try_with_capacity, RasterImage, TransformError};

/// Repeat an image `count` times side by side.
///
/// # Arguments
///
/// * `image` - Source image (the tile)
/// * `count` - Number of copies, at least 1
/// * `direction` - `Horizontal` tiles left to right, `Vertical` top to bottom
///
/// # Returns
///
/// New `RasterImage` of `(width * count) x height` or `width x (height * count)`.
/// Each tile is byte-for-byte identical to the source.
///
/// # Errors
///
/// - `InvalidParameter` if `count` is 0, the output size overflows, or the
///   output buffer cannot be allocated
pub fn repeat(
    image: &RasterImage,
    count: u32,
    direction: RepeatDirection,
) -> Result<RasterImage, TransformError> {
    image.validate()?;

    let (out_width, out_height) = repeated_dimensions(image.width, image.height, count, direction)?;

    // Size already checked by repeated_dimensions
    let mut pixels: Vec<u8> = try_with_capacity(image.pixels.len() * count as usize)?;
    match direction {
        RepeatDirection::Horizontal => {
            let row_bytes = image.width as usize * 3;
            for row in image.pixels.chunks_exact(row_bytes) {
                for _ in 0..count {
                    pixels.extend_from_slice(row);
                }
            }
        }
        // Stacking whole images is a plain buffer repeat
        RepeatDirection::Vertical => {
            for _ in 0..count {
                pixels.extend_from_slice(&image.pixels);
            }
        }
    }

    log::debug!(
        "repeat {direction} x{count}: {}x{} -> {out_width}x{out_height}",
        image.width,
        image.height
    );

    Ok(RasterImage {
        width: out_width,
        height: out_height,
        pixels,
    })
}

/// Compute the output dimensions of [`repeat`] without touching pixels.
pub(crate) fn repeated_dimensions(
    width: u32,
    height: u32,
    count: u32,
    direction: RepeatDirection,
) -> Result<(u32, u32), TransformError> {
    if count == 0 {
        log::warn!("repeat {direction}: count must be positive");
        return Err(TransformError::InvalidParameter(
            "repeat count must be at least 1".to_string(),
        ));
    }

    let scaled = match direction {
        RepeatDirection::Horizontal => width.checked_mul(count).map(|w| (w, height)),
        RepeatDirection::Vertical => height.checked_mul(count).map(|h| (width, h)),
    };

    match scaled {
        Some((w, h)) if rgb_buffer_len(w, h).is_some() => Ok((w, h)),
        _ => {
            log::warn!("repeat {direction}: count {count} overflows {width}x{height}");
            Err(TransformError::InvalidParameter(format!(
                "repeat count {count} overflows a {width}x{height} image"
            )))
        }
    }
}
