//! WASM bindings for serialized transform sequences.
//!
//! Operations are plain JS objects matching the core `TransformOp` shape:
//!
//! ```typescript
//! const ops = [
//!   { op: "grayscale" },
//!   { op: "repeat", count: 2, direction: "horizontal" },
//!   { op: "zoom", factor: 0.5 },
//! ];
//! const result = apply_ops(image, ops);
//! const { width, height } = predict_dimensions(ops, image.width, image.height);
//! ```

use crate::types::{to_js_error, JsRasterImage};
use rasterops_core::{apply_all, TransformError, TransformOp};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Output size reported back to JavaScript.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
struct Dimensions {
    width: u32,
    height: u32,
}

/// Apply a list of operations to an image, left to right.
#[wasm_bindgen]
pub fn apply_ops(image: &JsRasterImage, ops: JsValue) -> Result<JsRasterImage, JsValue> {
    let ops = parse_ops(ops)?;
    run_ops(image, &ops).map_err(to_js_error)
}

/// Predict `{ width, height }` after applying `ops` to a `width x height` image.
#[wasm_bindgen]
pub fn predict_dimensions(ops: JsValue, width: u32, height: u32) -> Result<JsValue, JsValue> {
    let ops = parse_ops(ops)?;
    let dims = fold_dimensions(&ops, width, height).map_err(to_js_error)?;
    serde_wasm_bindgen::to_value(&dims).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn parse_ops(ops: JsValue) -> Result<Vec<TransformOp>, JsValue> {
    serde_wasm_bindgen::from_value(ops).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn run_ops(image: &JsRasterImage, ops: &[TransformOp]) -> Result<JsRasterImage, TransformError> {
    image.run(|src| apply_all(src, ops))
}

fn fold_dimensions(
    ops: &[TransformOp],
    width: u32,
    height: u32,
) -> Result<Dimensions, TransformError> {
    let (width, height) = ops.iter().try_fold((width, height), |(w, h), op| {
        op.output_dimensions(w, h)
    })?;
    Ok(Dimensions { width, height })
}
