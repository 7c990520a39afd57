//! Rasterops Core - pixel-level image transforms
//!
//! This crate provides the raster transforms used by the editor: channel
//! removal, grayscale, color inversion, mirroring, rotation, tiling and zoom.
//!
//! Every operation takes a borrowed [`RasterImage`] and returns a newly
//! allocated one. Nothing is shared between calls and the input is never
//! modified. Invalid input is reported as a [`TransformError`].
//!
//! # Example
//!
//! ```ignore
//! use rasterops_core::{repeat, RasterImage, RepeatDirection};
//!
//! let tile = RasterImage::filled(1, 1, [0, 0, 0])?;
//! let strip = repeat(&tile, 3, RepeatDirection::Horizontal)?;
//! assert_eq!(strip.dimensions(), (3, 1));
//! ```

pub mod color;
pub mod ops;
pub mod raster;
pub mod transform;

pub use color::{grayscale, invert, zero_red};
pub use ops::{apply_all, TransformOp};
pub use raster::{RasterImage, TransformError};
pub use transform::{
    mirror, repeat, rotate, zoom, zoomed_dimensions, MirrorDirection, RepeatDirection,
    RotateDirection,
};

#[cfg(test)]
mod tests {
    use super::*;

    /// Red, green / blue, white.
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
    fn test_same_size_transforms_keep_dimensions() {
        let img = primaries();
        let results = [
            zero_red(&img).unwrap(),
            grayscale(&img).unwrap(),
            invert(&img).unwrap(),
            mirror(&img, MirrorDirection::Vertical).unwrap(),
            mirror(&img, MirrorDirection::Horizontal).unwrap(),
            rotate(&img, RotateDirection::Clockwise).unwrap(),
            rotate(&img, RotateDirection::CounterClockwise).unwrap(),
        ];
        for result in &results {
            assert_eq!(result.dimensions(), (2, 2));
            assert_eq!(result.byte_size(), 12);
        }
    }

    #[test]
    fn test_primaries_invert_and_grayscale() {
        let img = primaries();

        let inverted = invert(&img).unwrap();
        assert_eq!(inverted.pixel(0, 0), [0, 255, 255]);
        assert_eq!(inverted.pixel(1, 0), [255, 0, 255]);
        assert_eq!(inverted.pixel(0, 1), [255, 255, 0]);
        assert_eq!(inverted.pixel(1, 1), [0, 0, 0]);

        let gray = grayscale(&img).unwrap();
        assert_eq!(gray.pixel(0, 0), [85, 85, 85]);
        assert_eq!(gray.pixel(1, 0), [85, 85, 85]);
        assert_eq!(gray.pixel(0, 1), [85, 85, 85]);
        assert_eq!(gray.pixel(1, 1), [255, 255, 255]);
    }

    #[test]
    fn test_scaling_transforms_dimensions() {
        let img = primaries();
        assert_eq!(
            repeat(&img, 3, RepeatDirection::Horizontal)
                .unwrap()
                .dimensions(),
            (6, 2)
        );
        assert_eq!(
            repeat(&img, 3, RepeatDirection::Vertical)
                .unwrap()
                .dimensions(),
            (2, 6)
        );
        assert_eq!(zoom(&img, 2.5).unwrap().dimensions(), (5, 5));
    }

    #[test]
    fn test_input_never_modified() {
        let img = primaries();
        let before = img.clone();
        let ops = [
            TransformOp::ZeroRed,
            TransformOp::Grayscale,
            TransformOp::Invert,
            TransformOp::Mirror {
                direction: MirrorDirection::Vertical,
            },
            TransformOp::Rotate {
                direction: RotateDirection::Clockwise,
            },
            TransformOp::Repeat {
                count: 2,
                direction: RepeatDirection::Vertical,
            },
            TransformOp::Zoom { factor: 3.0 },
        ];
        for op in &ops {
            let _ = op.apply(&img).unwrap();
            assert_eq!(img, before, "{} modified its input", op.name());
        }
    }
}
