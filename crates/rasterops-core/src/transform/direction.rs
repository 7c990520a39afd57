//! Direction selectors for the geometric transforms.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::raster::TransformError;

/// Axis selector for [`mirror`](super::mirror).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MirrorDirection {
    /// Reflect the top half onto the bottom half (row mapping).
    Horizontal,
    /// Reflect the left half onto the right half (column mapping).
    Vertical,
}

/// Turn selector for [`rotate`](super::rotate).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RotateDirection {
    /// Quarter turn clockwise.
    Clockwise,
    /// Quarter turn counter-clockwise.
    CounterClockwise,
}

/// Tiling axis for [`repeat`](super::repeat).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RepeatDirection {
    /// Copies placed left to right.
    Horizontal,
    /// Copies placed top to bottom.
    Vertical,
}

impl MirrorDirection {
    /// Lowercase name, as accepted by `FromStr` and used by serde.
    pub fn as_str(self) -> &'static str {
        match self {
            MirrorDirection::Horizontal => "horizontal",
            MirrorDirection::Vertical => "vertical",
        }
    }
}

impl RotateDirection {
    /// Canonical snake_case name, as used by serde.
    pub fn as_str(self) -> &'static str {
        match self {
            RotateDirection::Clockwise => "clockwise",
            RotateDirection::CounterClockwise => "counter_clockwise",
        }
    }
}

impl RepeatDirection {
    /// Lowercase name, as accepted by `FromStr` and used by serde.
    pub fn as_str(self) -> &'static str {
        match self {
            RepeatDirection::Horizontal => "horizontal",
            RepeatDirection::Vertical => "vertical",
        }
    }
}

impl FromStr for MirrorDirection {
    type Err = TransformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "horizontal" => Ok(MirrorDirection::Horizontal),
            "vertical" => Ok(MirrorDirection::Vertical),
            _ => Err(unknown("mirror direction", s)),
        }
    }
}

impl FromStr for RotateDirection {
    type Err = TransformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "clockwise" | "cw" => Ok(RotateDirection::Clockwise),
            "counter_clockwise" | "counterclockwise" | "ccw" => {
                Ok(RotateDirection::CounterClockwise)
            }
            _ => Err(unknown("rotate direction", s)),
        }
    }
}

impl FromStr for RepeatDirection {
    type Err = TransformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "horizontal" => Ok(RepeatDirection::Horizontal),
            "vertical" => Ok(RepeatDirection::Vertical),
            _ => Err(unknown("repeat direction", s)),
        }
    }
}

impl fmt::Display for MirrorDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for RotateDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for RepeatDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn unknown(kind: &str, value: &str) -> TransformError {
    TransformError::InvalidParameter(format!("unknown {kind}: {value:?}"))
}
