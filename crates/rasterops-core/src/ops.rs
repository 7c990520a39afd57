//! Serializable transform descriptors.
//!
//! A [`TransformOp`] names one operation together with its parameters, so an
//! editor can store what was applied (undo history, presets) and replay it
//! later with [`apply_all`].
//!
//! # JSON Shape
//!
//! ```text
//! {"op": "grayscale"}
//! {"op": "mirror", "direction": "vertical"}
//! {"op": "repeat", "count": 3, "direction": "horizontal"}
//! {"op": "zoom", "factor": 1.1}
//! ```

use serde::{Deserialize, Serialize};

use crate::color::{grayscale, invert, zero_red};
use crate::raster::{RasterImage, TransformError};
use crate::transform::{
    mirror, repeat, repeated_dimensions, rotate, zoom, zoomed_dimensions, MirrorDirection,
    RepeatDirection, RotateDirection,
};

/// One transform and its parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum TransformOp {
    ZeroRed,
    Grayscale,
    Invert,
    Mirror { direction: MirrorDirection },
    Rotate { direction: RotateDirection },
    Repeat { count: u32, direction: RepeatDirection },
    Zoom { factor: f64 },
}

impl TransformOp {
    /// Short operation name, matching the serialized `op` tag.
    pub fn name(&self) -> &'static str {
        match self {
            TransformOp::ZeroRed => "zero_red",
            TransformOp::Grayscale => "grayscale",
            TransformOp::Invert => "invert",
            TransformOp::Mirror { .. } => "mirror",
            TransformOp::Rotate { .. } => "rotate",
            TransformOp::Repeat { .. } => "repeat",
            TransformOp::Zoom { .. } => "zoom",
        }
    }

    /// Run this operation on `image`.
    pub fn apply(&self, image: &RasterImage) -> Result<RasterImage, TransformError> {
        match *self {
            TransformOp::ZeroRed => zero_red(image),
            TransformOp::Grayscale => grayscale(image),
            TransformOp::Invert => invert(image),
            TransformOp::Mirror { direction } => mirror(image, direction),
            TransformOp::Rotate { direction } => rotate(image, direction),
            TransformOp::Repeat { count, direction } => repeat(image, count, direction),
            TransformOp::Zoom { factor } => zoom(image, factor),
        }
    }

    /// Predict the output size for a `width x height` input.
    ///
    /// Applies the same parameter checks as [`TransformOp::apply`], so an `Ok`
    /// here means `apply` will succeed on any valid image of that size.
    pub fn output_dimensions(&self, width: u32, height: u32) -> Result<(u32, u32), TransformError> {
        if width == 0 || height == 0 {
            return Err(TransformError::InvalidDimension { width, height });
        }

        match *self {
            TransformOp::ZeroRed
            | TransformOp::Grayscale
            | TransformOp::Invert
            | TransformOp::Mirror { .. } => Ok((width, height)),
            TransformOp::Rotate { .. } => {
                if width == height {
                    Ok((width, height))
                } else {
                    Err(TransformError::OutOfBoundsSource { width, height })
                }
            }
            TransformOp::Repeat { count, direction } => {
                repeated_dimensions(width, height, count, direction)
            }
            TransformOp::Zoom { factor } => zoomed_dimensions(width, height, factor),
        }
    }
}

/// Apply a sequence of operations left to right.
///
/// Each step reads the previous step's output. An empty sequence returns a
/// copy of `image`. Processing stops at the first failing step.
pub fn apply_all(image: &RasterImage, ops: &[TransformOp]) -> Result<RasterImage, TransformError> {
    image.validate()?;

    let mut current = image.clone();
    for (step, op) in ops.iter().enumerate() {
        current = op.apply(&current).map_err(|e| {
            log::warn!("step {step} ({}) failed: {e}", op.name());
            e
        })?;
    }

    log::debug!(
        "applied {} ops: {}x{} -> {}x{}",
        ops.len(),
        image.width,
        image.height,
        current.width,
        current.height
    );

    Ok(current)
}
