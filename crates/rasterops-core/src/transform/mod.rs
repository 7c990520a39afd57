//! Geometric transforms: mirror, quarter-turn rotation, tiling and zoom.
//!
//! Every transform borrows its input and allocates a new output image.
//!
//! # Coordinate System
//!
//! - Origin is top-left corner
//! - `x` runs along a row (columns), `y` down the image (rows)
//! - Pixel (x, y) lives at byte offset `(y * width + x) * 3`

mod direction;
mod mirror;
mod repeat;
mod rotate;
mod zoom;

pub use direction::{MirrorDirection, RepeatDirection, RotateDirection};
pub use mirror::mirror;
pub use repeat::repeat;
pub(crate) use repeat::repeated_dimensions;
pub use rotate::rotate;
pub use zoom::{zoom, zoomed_dimensions};
