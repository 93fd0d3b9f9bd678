//! Position and canvas constants

use serde::{Deserialize, Serialize};

/// Canvas edge length in pixels. The canvas is a fixed square.
pub const CANVAS_SIZE: i32 = 620;

/// Base footprint unit in pixels: the width of square and circle tables,
/// and the fixed height of every table.
pub const TABLE_UNIT: i32 = 60;

/// Table position in canvas pixel space. Always whole pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
