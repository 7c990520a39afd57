//! Core raster types and the error returned by every transform.

use thiserror::Error;

use super::pixel::{blue, green, pack_rgb, red};

/// Error types for raster transform operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    /// The image has a zero width or height.
    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// The pixel buffer length does not match `width * height * 3`.
    #[error("Pixel buffer size mismatch: expected {expected} bytes, got {actual}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    /// A count, factor or other operation parameter is out of range.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// A source coordinate would fall outside the image.
    ///
    /// Quarter-turn rotation keeps the input dimensions and therefore only
    /// reads inside the image when it is square.
    #[error("Source pixel out of bounds: rotation requires a square image, got {width}x{height}")]
    OutOfBoundsSource { width: u32, height: u32 },
}

/// An RGB raster image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// RGB pixel data in row-major order (3 bytes per pixel).
    /// Length must be width * height * 3.
    pub pixels: Vec<u8>,
}

impl RasterImage {
    /// Create a new RasterImage with the given dimensions and pixel data.
    ///
    /// # Errors
    ///
    /// - `InvalidDimension` if either dimension is zero
    /// - `BufferSizeMismatch` if `pixels` is not `width * height * 3` bytes
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, TransformError> {
        let image = Self {
            width,
            height,
            pixels,
        };
        image.validate()?;
        Ok(image)
    }

    /// Create an image where every pixel has the same color.
    pub fn filled(width: u32, height: u32, rgb: [u8; 3]) -> Result<Self, TransformError> {
        let len = checked_buffer_len(width, height)?;
        let mut pixels: Vec<u8> = try_with_capacity(len)?;
        for _ in 0..len / 3 {
            pixels.extend_from_slice(&rgb);
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Build an image from packed `0xAARRGGBB` pixels. Alpha is discarded.
    pub fn from_packed(width: u32, height: u32, packed: &[u32]) -> Result<Self, TransformError> {
        let len = checked_buffer_len(width, height)?;
        let expected = len / 3;
        if packed.len() != expected {
            return Err(TransformError::BufferSizeMismatch {
                expected,
                actual: packed.len(),
            });
        }

        let mut pixels: Vec<u8> = try_with_capacity(len)?;
        for &argb in packed {
            pixels.extend_from_slice(&[red(argb), green(argb), blue(argb)]);
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Convert to packed opaque `0xFFRRGGBB` pixels.
    pub fn to_packed(&self) -> Vec<u32> {
        self.pixels
            .chunks_exact(3)
            .map(|p| pack_rgb(p[0], p[1], p[2]))
            .collect()
    }

    /// Create a RasterImage from an image::RgbImage.
    pub fn from_rgb_image(img: image::RgbImage) -> Result<Self, TransformError> {
        let (width, height) = img.dimensions();
        Self::new(width, height, img.into_raw())
    }

    /// Create a RasterImage from any decoded image, dropping alpha.
    pub fn from_dynamic_image(img: &image::DynamicImage) -> Result<Self, TransformError> {
        Self::from_rgb_image(img.to_rgb8())
    }

    /// Convert to an image::RgbImage for encoding or display.
    pub fn to_rgb_image(&self) -> Option<image::RgbImage> {
        image::RgbImage::from_raw(self.width, self.height, self.pixels.clone())
    }

    /// Check the dimension and buffer-size invariants.
    ///
    /// Images built with a struct literal bypass [`RasterImage::new`], so every
    /// transform calls this before touching pixels.
    pub fn validate(&self) -> Result<(), TransformError> {
        let expected = checked_buffer_len(self.width, self.height)?;
        if self.pixels.len() != expected {
            return Err(TransformError::BufferSizeMismatch {
                expected,
                actual: self.pixels.len(),
            });
        }
        Ok(())
    }

    /// Get the (width, height) pair.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Get the total number of pixels.
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Get the size of the pixel buffer in bytes.
    pub fn byte_size(&self) -> usize {
        self.pixels.len()
    }

    /// Whether width equals height.
    pub fn is_square(&self) -> bool {
        self.width == self.height
    }

    /// Read the pixel at (x, y).
    ///
    /// Panics if the coordinates are outside the image.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        let idx = self.index(x, y);
        [self.pixels[idx], self.pixels[idx + 1], self.pixels[idx + 2]]
    }

    /// Write the pixel at (x, y).
    ///
    /// Panics if the coordinates are outside the image.
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, rgb: [u8; 3]) {
        let idx = self.index(x, y);
        self.pixels[idx..idx + 3].copy_from_slice(&rgb);
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) outside {}x{} image",
            self.width,
            self.height
        );
        (y as usize * self.width as usize + x as usize) * 3
    }
}

/// Byte length of a `width x height` RGB buffer, or `None` if it does not
/// fit in `usize`.
pub(crate) fn rgb_buffer_len(width: u32, height: u32) -> Option<usize> {
    (width as usize)
        .checked_mul(height as usize)?
        .checked_mul(3)
}

/// Allocate an empty buffer for `len` elements.
///
/// Allocation failure is reported as `InvalidParameter` instead of aborting.
pub(crate) fn try_with_capacity<T>(len: usize) -> Result<Vec<T>, TransformError> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(len).map_err(|e| {
        log::warn!("cannot allocate {len} elements: {e}");
        TransformError::InvalidParameter(format!("output too large: {e}"))
    })?;
    Ok(buf)
}

/// Reject empty images and images whose buffer size overflows `usize`.
fn checked_buffer_len(width: u32, height: u32) -> Result<usize, TransformError> {
    match rgb_buffer_len(width, height) {
        Some(len) if len > 0 => Ok(len),
        _ => {
            log::warn!("rejecting {width}x{height} image");
            Err(TransformError::InvalidDimension { width, height })
        }
    }
}
