//! WASM bindings for per-pixel color operations.
//!
//! # Example (TypeScript)
//!
//! ```typescript
//! const image = JsRasterImage.from_rgba(data.width, data.height, data.data);
//! const gray = grayscale(image);
//! ctx.putImageData(new ImageData(new Uint8ClampedArray(gray.to_rgba()), gray.width), 0, 0);
//! ```

use crate::types::{to_js_error, JsRasterImage};
use rasterops_core::color;
use wasm_bindgen::prelude::*;

/// Set every pixel's red channel to 0.
#[wasm_bindgen]
pub fn zero_red(image: &JsRasterImage) -> Result<JsRasterImage, JsValue> {
    image.run(color::zero_red).map_err(to_js_error)
}

/// Convert to grayscale using the truncated mean of the three channels.
#[wasm_bindgen]
pub fn grayscale(image: &JsRasterImage) -> Result<JsRasterImage, JsValue> {
    image.run(color::grayscale).map_err(to_js_error)
}

/// Invert every channel (`255 - c`).
#[wasm_bindgen]
pub fn invert(image: &JsRasterImage) -> Result<JsRasterImage, JsValue> {
    image.run(color::invert).map_err(to_js_error)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_image() -> JsRasterImage {
        JsRasterImage::new(2, 1, vec![255, 0, 0, 10, 20, 30])
    }

    #[test]
    fn test_zero_red() {
        let result = test_image().run(color::zero_red).unwrap();
        assert_eq!(result.pixels(), vec![0, 0, 0, 0, 20, 30]);
    }

    #[test]
    fn test_grayscale() {
        let result = test_image().run(color::grayscale).unwrap();
        assert_eq!(result.pixels(), vec![85, 85, 85, 20, 20, 20]);
    }

    #[test]
    fn test_invert() {
        let result = test_image().run(color::invert).unwrap();
        assert_eq!(result.pixels(), vec![0, 255, 255, 245, 235, 225]);
        assert_eq!(result.width(), 2);
        assert_eq!(result.height(), 1);
    }
}
