//! WASM bindings for geometric transforms.
//!
//! Directions are passed as strings:
//! - mirror / repeat: `"horizontal"` or `"vertical"`
//! - rotate: `"clockwise"` (`"cw"`) or `"counter_clockwise"` (`"ccw"`)
//!
//! # Example (TypeScript)
//!
//! ```typescript
//! const strip = repeat(tile, 3, "horizontal");
//! const turned = rotate(square, "cw");
//! const preview = zoom(image, 1.1);
//! ```

use crate::types::{to_js_error, JsRasterImage};
use rasterops_core::transform::{self, MirrorDirection, RepeatDirection, RotateDirection};
use rasterops_core::TransformError;
use wasm_bindgen::prelude::*;

/// Mirror an image about its vertical or horizontal center line.
#[wasm_bindgen]
pub fn mirror(image: &JsRasterImage, direction: &str) -> Result<JsRasterImage, JsValue> {
    apply_mirror(image, direction).map_err(to_js_error)
}

/// Rotate a square image by a quarter turn.
///
/// Throws for non-square images.
#[wasm_bindgen]
pub fn rotate(image: &JsRasterImage, direction: &str) -> Result<JsRasterImage, JsValue> {
    apply_rotate(image, direction).map_err(to_js_error)
}

/// Tile an image `count` times along one axis.
#[wasm_bindgen]
pub fn repeat(image: &JsRasterImage, count: u32, direction: &str) -> Result<JsRasterImage, JsValue> {
    apply_repeat(image, count, direction).map_err(to_js_error)
}

/// Scale an image by `factor` with bilinear interpolation.
#[wasm_bindgen]
pub fn zoom(image: &JsRasterImage, factor: f64) -> Result<JsRasterImage, JsValue> {
    image
        .run(|src| transform::zoom(src, factor))
        .map_err(to_js_error)
}

fn apply_mirror(image: &JsRasterImage, direction: &str) -> Result<JsRasterImage, TransformError> {
    let direction: MirrorDirection = direction.parse()?;
    image.run(|src| transform::mirror(src, direction))
}

fn apply_rotate(image: &JsRasterImage, direction: &str) -> Result<JsRasterImage, TransformError> {
    let direction: RotateDirection = direction.parse()?;
    image.run(|src| transform::rotate(src, direction))
}

fn apply_repeat(
    image: &JsRasterImage,
    count: u32,
    direction: &str,
) -> Result<JsRasterImage, TransformError> {
    let direction: RepeatDirection = direction.parse()?;
    image.run(|src| transform::repeat(src, count, direction))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Create a simple test image.
    fn test_image(width: u32, height: u32) -> JsRasterImage {
        let pixels: Vec<u8> = (0..(width * height * 3) as usize)
            .map(|i| (i % 256) as u8)
            .collect();
        JsRasterImage::new(width, height, pixels)
    }

    #[test]
    fn test_mirror_keeps_dimensions() {
        let img = test_image(10, 6);
        for dir in ["horizontal", "vertical"] {
            let result = apply_mirror(&img, dir).unwrap();
            assert_eq!(result.width(), 10);
            assert_eq!(result.height(), 6);
        }
    }

    #[test]
    fn test_unknown_direction() {
        let img = test_image(4, 4);
        assert!(matches!(
            apply_mirror(&img, "diagonal"),
            Err(TransformError::InvalidParameter(_))
        ));
        assert!(apply_rotate(&img, "sideways").is_err());
        assert!(apply_repeat(&img, 2, "up").is_err());
    }

    #[test]
    fn test_rotate_square() {
        let img = test_image(8, 8);
        let cw = apply_rotate(&img, "cw").unwrap();
        let back = apply_rotate(&cw, "counter_clockwise").unwrap();
        assert_eq!(back.pixels(), img.pixels());
    }

    #[test]
    fn test_rotate_non_square() {
        let img = test_image(8, 4);
        assert!(matches!(
            apply_rotate(&img, "clockwise"),
            Err(TransformError::OutOfBoundsSource { .. })
        ));
    }

    #[test]
    fn test_repeat() {
        let img = test_image(3, 2);
        let result = apply_repeat(&img, 4, "vertical").unwrap();
        assert_eq!(result.width(), 3);
        assert_eq!(result.height(), 8);

        assert!(apply_repeat(&img, 0, "horizontal").is_err());
    }

    #[test]
    fn test_zoom() {
        let img = test_image(20, 10);
        let result = img.run(|src| transform::zoom(src, 1.5)).unwrap();
        assert_eq!(result.width(), 30);
        assert_eq!(result.height(), 15);
    }
}
