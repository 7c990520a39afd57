//! Rasterops WASM - WebAssembly bindings for rasterops
//!
//! This crate exposes the rasterops-core transforms to JavaScript/TypeScript.
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible wrapper for raster images
//! - `color` - Zero red, grayscale, invert
//! - `transform` - Mirror, rotate, repeat, zoom
//! - `ops` - Serialized transform sequences
//! - `logger` - Console output for core log records
//!
//! # Usage
//!
//! ```typescript
//! import init, { JsRasterImage, invert } from '@rasterops/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const image = JsRasterImage.from_rgba(data.width, data.height, data.data);
//! const inverted = invert(image);
//! console.log(`Inverted ${inverted.width}x${inverted.height}`);
//! ```

use wasm_bindgen::prelude::*;

mod color;
mod logger;
mod ops;
mod transform;
mod types;

// Re-export public types
pub use color::{grayscale, invert, zero_red};
pub use logger::set_log_level;
pub use ops::{apply_ops, predict_dimensions};
pub use transform::{mirror, repeat, rotate, zoom};
pub use types::JsRasterImage;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    logger::install(log::LevelFilter::Warn);
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }
}
