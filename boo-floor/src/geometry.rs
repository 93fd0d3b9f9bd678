//! Canvas geometry
//!
//! Clamping is total: every pointer-derived point maps to a valid
//! position for the given shape. Dragging has no failure path.

use shared::models::{Position, TableShape, CANVAS_SIZE};

/// Inclusive placement maximum per axis for a shape.
///
/// A table may sit anywhere in `[0, CANVAS_SIZE - footprint]` on each
/// axis, so its whole footprint stays inside the canvas.
pub fn placement_max(shape: TableShape) -> (i32, i32) {
    let (w, h) = shape.footprint();
    (CANVAS_SIZE - w, CANVAS_SIZE - h)
}

/// Clamp a raw, possibly fractional point to a valid position for `shape`.
///
/// Rounds to whole pixels, then clamps each axis into the shape's
/// placement bounds. The footprint must come from the dragged table's own
/// shape, not a canvas default.
pub fn clamp_point(shape: TableShape, x: f64, y: f64) -> Position {
    let (max_x, max_y) = placement_max(shape);
    Position {
        x: (x.round() as i32).clamp(0, max_x),
        y: (y.round() as i32).clamp(0, max_y),
    }
}
