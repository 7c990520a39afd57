//! WASM-compatible wrapper types for raster data.
//!
//! This module provides JavaScript-friendly types that wrap the core rasterops
//! types, handling the conversion between Rust and JavaScript representations.

use rasterops_core::{RasterImage, TransformError};
use wasm_bindgen::prelude::*;

/// A raster image wrapper for JavaScript.
///
/// # Memory Management
///
/// The pixel data is stored in WASM memory. When you call `pixels()`, a copy is made
/// to JavaScript memory as a `Uint8Array`.
///
/// The `free()` method can be called to explicitly release WASM memory, but this is
/// optional as wasm-bindgen's finalizer will handle cleanup automatically.
#[wasm_bindgen]
pub struct JsRasterImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

#[wasm_bindgen]
impl JsRasterImage {
    /// Create a new JsRasterImage from dimensions and pixel data.
    ///
    /// The buffer is checked when the image is first passed to a transform.
    ///
    /// # Arguments
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    /// * `pixels` - RGB pixel data (3 bytes per pixel, row-major order)
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> JsRasterImage {
        JsRasterImage {
            width,
            height,
            pixels,
        }
    }

    /// Build an image from RGBA canvas data (`ImageData.data`), dropping alpha.
    pub fn from_rgba(width: u32, height: u32, rgba: &[u8]) -> Result<JsRasterImage, JsValue> {
        rgba_to_rgb(width, height, rgba)
            .map(JsRasterImage::from_raster)
            .map_err(to_js_error)
    }

    /// Get the image width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the image height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the number of bytes in the pixel buffer (width * height * 3 for RGB)
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.pixels.len()
    }

    /// Returns RGB pixel data as Uint8Array.
    ///
    /// Note: This creates a copy of the pixel data.
    pub fn pixels(&self) -> Vec<u8> {
        self.pixels.clone()
    }

    /// Returns opaque RGBA pixel data, ready for `new ImageData(...)`.
    pub fn to_rgba(&self) -> Vec<u8> {
        let mut rgba = Vec::with_capacity(self.pixels.len() / 3 * 4);
        for px in self.pixels.chunks_exact(3) {
            rgba.extend_from_slice(&[px[0], px[1], px[2], 255]);
        }
        rgba
    }

    /// Explicitly free WASM memory.
    ///
    /// This is optional - wasm-bindgen's finalizer will handle cleanup automatically.
    pub fn free(self) {
        // Dropping self releases the memory
    }
}

impl JsRasterImage {
    /// Wrap a core RasterImage without copying its pixels.
    pub(crate) fn from_raster(img: RasterImage) -> Self {
        Self {
            width: img.width,
            height: img.height,
            pixels: img.pixels,
        }
    }

    /// Convert to a validated core RasterImage.
    ///
    /// Note: This clones the pixel data.
    pub(crate) fn to_raster(&self) -> Result<RasterImage, TransformError> {
        RasterImage::new(self.width, self.height, self.pixels.clone())
    }

    /// Run a core transform on this image.
    pub(crate) fn run<F>(&self, transform: F) -> Result<JsRasterImage, TransformError>
    where
        F: FnOnce(&RasterImage) -> Result<RasterImage, TransformError>,
    {
        let src = self.to_raster()?;
        transform(&src).map(JsRasterImage::from_raster)
    }
}

/// Convert a core error into the string form thrown to JavaScript.
pub(crate) fn to_js_error(err: TransformError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn rgba_to_rgb(width: u32, height: u32, rgba: &[u8]) -> Result<RasterImage, TransformError> {
    let expected = (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(4))
        .ok_or(TransformError::InvalidDimension { width, height })?;
    if rgba.len() != expected {
        return Err(TransformError::BufferSizeMismatch {
            expected,
            actual: rgba.len(),
        });
    }

    let mut pixels = Vec::with_capacity(rgba.len() / 4 * 3);
    for px in rgba.chunks_exact(4) {
        pixels.extend_from_slice(&px[..3]);
    }
    RasterImage::new(width, height, pixels)
}
