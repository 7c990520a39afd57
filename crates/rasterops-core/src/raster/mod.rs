//! Raster image model shared by every transform.
//!
//! A [`RasterImage`] is a packed RGB buffer: 3 bytes per pixel, row-major,
//! origin at the top-left corner. Alpha is never stored.
//!
//! # Ownership
//!
//! Transforms borrow their input and return a freshly allocated image. No
//! operation in this crate aliases or mutates the image it was given.

mod pixel;
mod types;

pub use pixel::{blue, green, pack_rgb, red};
pub use types::{RasterImage, TransformError};
pub(crate) use types::{rgb_buffer_len, try_with_capacity};
