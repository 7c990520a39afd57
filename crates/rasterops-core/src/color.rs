//! Per-pixel color operations.
//!
//! Each function maps every pixel independently and returns a new image of the
//! same dimensions. The input is never modified.
//!
//! ## Operations
//! 1. Zero red - drop the red channel
//! 2. Grayscale - truncated channel mean
//! 3. Invert - `255 - c` per channel

use crate::raster::{RasterImage, TransformError};

/// Set every pixel's red channel to 0, keeping green and blue.
pub fn zero_red(image: &RasterImage) -> Result<RasterImage, TransformError> {
    map_pixels(image, "zero_red", |[_, g, b]| [0, g, b])
}

/// Convert to grayscale by averaging the three channels.
///
/// The gray level is the truncated mean `(r + g + b) / 3`, not a
/// luminance-weighted sum. All three output channels carry that level.
///
/// # Example
/// ```ignore
/// use rasterops_core::{color::grayscale, RasterImage};
///
/// let img = RasterImage::new(1, 1, vec![255, 0, 0]).unwrap();
/// assert_eq!(grayscale(&img).unwrap().pixels, vec![85, 85, 85]);
/// ```
pub fn grayscale(image: &RasterImage) -> Result<RasterImage, TransformError> {
    map_pixels(image, "grayscale", |[r, g, b]| {
        let avg = gray_level(r, g, b);
        [avg, avg, avg]
    })
}

/// Invert every channel: `c' = 255 - c`.
///
/// Applying `invert` twice yields the original image.
pub fn invert(image: &RasterImage) -> Result<RasterImage, TransformError> {
    map_pixels(image, "invert", |[r, g, b]| [255 - r, 255 - g, 255 - b])
}

/// Truncated mean of the three channels.
#[inline]
fn gray_level(r: u8, g: u8, b: u8) -> u8 {
    // Sum fits in u16 (max 765) and the quotient in u8 (max 255)
    ((r as u16 + g as u16 + b as u16) / 3) as u8
}

fn map_pixels<F>(image: &RasterImage, name: &str, f: F) -> Result<RasterImage, TransformError>
where
    F: Fn([u8; 3]) -> [u8; 3],
{
    image.validate()?;

    let mut output = vec![0u8; image.pixels.len()];
    for (src, dst) in image
        .pixels
        .chunks_exact(3)
        .zip(output.chunks_exact_mut(3))
    {
        dst.copy_from_slice(&f([src[0], src[1], src[2]]));
    }

    log::debug!("{name}: {}x{}", image.width, image.height);

    Ok(RasterImage {
        width: image.width,
        height: image.height,
        pixels: output,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The 2x2 red/green/blue/white fixture.
    fn primaries() -> RasterImage {
        RasterImage::new(
            2,
            2,
            vec![
                255, 0, 0, 0, 255, 0, //
                0, 0, 255, 255, 255, 255,
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_zero_red() {
        let img = RasterImage::new(2, 1, vec![200, 100, 50, 1, 2, 3]).unwrap();
        let result = zero_red(&img).unwrap();

        assert_eq!(result.dimensions(), (2, 1));
        assert_eq!(result.pixels, vec![0, 100, 50, 0, 2, 3]);
    }

    #[test]
    fn test_zero_red_leaves_input_untouched() {
        let img = primaries();
        let before = img.clone();
        let _ = zero_red(&img).unwrap();
        assert_eq!(img, before);
    }

    #[test]
    fn test_grayscale_primaries() {
        let result = grayscale(&primaries()).unwrap();
        assert_eq!(
            result.pixels,
            vec![
                85, 85, 85, 85, 85, 85, //
                85, 85, 85, 255, 255, 255,
            ]
        );
    }

    #[test]
    fn test_grayscale_truncates() {
        // (1 + 1 + 0) / 3 = 0.67 -> 0, (100 + 100 + 101) / 3 = 100.33 -> 100
        let img = RasterImage::new(2, 1, vec![1, 1, 0, 100, 100, 101]).unwrap();
        let result = grayscale(&img).unwrap();
        assert_eq!(result.pixels, vec![0, 0, 0, 100, 100, 100]);
    }

    #[test]
    fn test_grayscale_is_unweighted_mean() {
        // A luminance-weighted formula would make green much brighter than blue
        let green = RasterImage::filled(1, 1, [0, 255, 0]).unwrap();
        let blue = RasterImage::filled(1, 1, [0, 0, 255]).unwrap();
        assert_eq!(
            grayscale(&green).unwrap().pixels,
            grayscale(&blue).unwrap().pixels
        );
    }

    #[test]
    fn test_invert_primaries() {
        let result = invert(&primaries()).unwrap();
        assert_eq!(
            result.pixels,
            vec![
                0, 255, 255, 255, 0, 255, //
                255, 255, 0, 0, 0, 0,
            ]
        );
    }

    #[test]
    fn test_invalid_input_rejected() {
        let empty = RasterImage {
            width: 0,
            height: 0,
            pixels: vec![],
        };
        assert!(matches!(
            zero_red(&empty),
            Err(TransformError::InvalidDimension { .. })
        ));
        assert!(grayscale(&empty).is_err());
        assert!(invert(&empty).is_err());
    }

    #[test]
    fn test_gray_level_extremes() {
        assert_eq!(gray_level(0, 0, 0), 0);
        assert_eq!(gray_level(255, 255, 255), 255);
        assert_eq!(gray_level(255, 255, 254), 254);
    }
}
