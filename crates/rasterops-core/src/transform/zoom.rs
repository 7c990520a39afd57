//! Uniform scaling with bilinear interpolation.
//!
//! # Algorithm
//!
//! Inverse mapping with pixel centers aligned between source and destination:
//! ```text
//! src_x = (dst_x + 0.5) * (src_w / dst_w) - 0.5
//! src_y = (dst_y + 0.5) * (src_h / dst_h) - 0.5
//! ```
//! The four nearest source pixels are blended by their fractional distance.
//! Coordinates past the border are clamped to the edge pixels, so a factor of
//! 1.0 reproduces the input exactly.

use crate::raster::{rgb_buffer_len, try_with_capacity, RasterImage, TransformError};

/// Scale an image by `factor` in both directions.
///
/// # Arguments
///
/// * `image` - Source image
/// * `factor` - Scale factor; `> 1.0` enlarges, `< 1.0` shrinks
///
/// # Returns
///
/// New `RasterImage` of `trunc(width * factor) x trunc(height * factor)`.
///
/// # Errors
///
/// - `InvalidParameter` if `factor` is not finite, `<= 0`, or produces an
///   empty or oversized output, or if the output cannot be allocated
pub fn zoom(image: &RasterImage, factor: f64) -> Result<RasterImage, TransformError> {
    image.validate()?;

    let (dst_w, dst_h) = zoomed_dimensions(image.width, image.height, factor)?;

    let columns = axis_samples(image.width, dst_w)?;
    let rows = axis_samples(image.height, dst_h)?;
    // Size already checked by zoomed_dimensions
    let len = dst_w as usize * dst_h as usize * 3;
    let mut output: Vec<u8> = try_with_capacity(len)?;
    output.resize(len, 0u8);

    for (dst_y, row) in rows.iter().enumerate() {
        for (dst_x, col) in columns.iter().enumerate() {
            let pixel = sample_bilinear(image, col, row);
            let dst_idx = (dst_y * dst_w as usize + dst_x) * 3;
            output[dst_idx..dst_idx + 3].copy_from_slice(&pixel);
        }
    }

    log::debug!(
        "zoom x{factor}: {}x{} -> {dst_w}x{dst_h}",
        image.width,
        image.height
    );

    Ok(RasterImage {
        width: dst_w,
        height: dst_h,
        pixels: output,
    })
}

/// Compute the output dimensions of [`zoom`] without touching pixels.
///
/// Each dimension is `width * factor` truncated toward zero.
pub fn zoomed_dimensions(
    width: u32,
    height: u32,
    factor: f64,
) -> Result<(u32, u32), TransformError> {
    if !factor.is_finite() || factor <= 0.0 {
        log::warn!("zoom: rejecting factor {factor}");
        return Err(TransformError::InvalidParameter(format!(
            "zoom factor must be a positive finite number, got {factor}"
        )));
    }

    let scaled_w = (width as f64 * factor).trunc();
    let scaled_h = (height as f64 * factor).trunc();

    if scaled_w > u32::MAX as f64 || scaled_h > u32::MAX as f64 {
        return Err(TransformError::InvalidParameter(format!(
            "zoom factor {factor} overflows a {width}x{height} image"
        )));
    }

    let (dst_w, dst_h) = (scaled_w as u32, scaled_h as u32);
    if dst_w == 0 || dst_h == 0 {
        log::warn!("zoom: factor {factor} collapses {width}x{height} to {dst_w}x{dst_h}");
        return Err(TransformError::InvalidParameter(format!(
            "zoom factor {factor} produces an empty {dst_w}x{dst_h} image"
        )));
    }

    if rgb_buffer_len(dst_w, dst_h).is_none() {
        log::warn!("zoom: factor {factor} makes {width}x{height} too large");
        return Err(TransformError::InvalidParameter(format!(
            "zoom factor {factor} produces an oversized {dst_w}x{dst_h} image"
        )));
    }

    Ok((dst_w, dst_h))
}

/// Neighbor indices and blend weight along one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
struct AxisSample {
    lo: u32,
    hi: u32,
    /// Weight of `hi`; `lo` gets `1.0 - frac`.
    frac: f64,
}

/// Precompute the source sample for every destination index on one axis.
fn axis_samples(src_len: u32, dst_len: u32) -> Result<Vec<AxisSample>, TransformError> {
    let scale = src_len as f64 / dst_len as f64;
    let max = (src_len - 1) as f64;

    let mut samples = try_with_capacity(dst_len as usize)?;
    samples.extend((0..dst_len).map(|d| {
        let pos = ((d as f64 + 0.5) * scale - 0.5).clamp(0.0, max);
        let lo = pos.floor() as u32;
        let hi = (lo + 1).min(src_len - 1);
        AxisSample {
            lo,
            hi,
            frac: pos - lo as f64,
        }
    }));
    Ok(samples)
}

/// Get a pixel as [f64; 3] from an image at the given coordinates.
#[inline]
fn get_pixel_f64(image: &RasterImage, x: u32, y: u32) -> [f64; 3] {
    let [r, g, b] = image.pixel(x, y);
    [r as f64, g as f64, b as f64]
}

/// Blend the 4 source pixels around (col, row).
fn sample_bilinear(image: &RasterImage, col: &AxisSample, row: &AxisSample) -> [u8; 3] {
    let (fx, fy) = (col.frac, row.frac);

    let p00 = get_pixel_f64(image, col.lo, row.lo);
    let p10 = get_pixel_f64(image, col.hi, row.lo);
    let p01 = get_pixel_f64(image, col.lo, row.hi);
    let p11 = get_pixel_f64(image, col.hi, row.hi);

    let mut result = [0u8; 3];
    for i in 0..3 {
        let v = p00[i] * (1.0 - fx) * (1.0 - fy)
            + p10[i] * fx * (1.0 - fy)
            + p01[i] * (1.0 - fx) * fy
            + p11[i] * fx * fy;
        result[i] = v.clamp(0.0, 255.0).round() as u8;
    }

    result
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: Output dimensions are the truncated scaled input.
        #[test]
        fn prop_output_dimensions(
            width in 2u32..=40,
            height in 2u32..=40,
            factor in 0.5f64..=3.0,
        ) {
            let img = RasterImage::filled(width, height, [1, 2, 3]).unwrap();
            let result = zoom(&img, factor).unwrap();

            prop_assert_eq!(result.width, (width as f64 * factor) as u32);
            prop_assert_eq!(result.height, (height as f64 * factor) as u32);
            prop_assert_eq!(result.byte_size(), (result.width * result.height * 3) as usize);
        }

        /// Property: Interpolated values stay within the source channel range.
        #[test]
        fn prop_values_within_source_range(
            lo in 0u8..=127,
            hi in 128u8..=255,
            factor in 0.5f64..=4.0,
        ) {
            let img = RasterImage::new(2, 2, vec![lo, lo, lo, hi, hi, hi, hi, hi, hi, lo, lo, lo]).unwrap();
            let result = zoom(&img, factor).unwrap();
            prop_assert!(result.pixels.iter().all(|&v| v >= lo && v <= hi));
        }
    }
}
