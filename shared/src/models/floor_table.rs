//! Floor Table Model

use serde::{Deserialize, Serialize};

use super::position::{Position, TABLE_UNIT};

/// 桌台形状
///
/// Determines the footprint used when clamping a table to the canvas.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableShape {
    #[default]
    Square,
    Circle,
    Rectangle,
}

impl TableShape {
    /// Footprint `(width, height)` in canvas pixels.
    ///
    /// Rectangles are two units wide; every shape is one unit tall.
    pub fn footprint(&self) -> (i32, i32) {
        match self {
            TableShape::Rectangle => (2 * TABLE_UNIT, TABLE_UNIT),
            TableShape::Square | TableShape::Circle => (TABLE_UNIT, TABLE_UNIT),
        }
    }

    pub fn width(&self) -> i32 {
        self.footprint().0
    }

    pub fn height(&self) -> i32 {
        self.footprint().1
    }
}

/// 自动预订级别
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReservationLevel {
    /// 不接受线上预订
    Off,
    /// 人工确认预订
    #[default]
    Manual,
    /// 自动确认预订
    Auto,
}

/// Dining table entity (桌台)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloorTable {
    pub id: String,
    pub number: i32,
    pub capacity: i32,
    pub shape: TableShape,
    pub position: Position,
    pub zone_id: String,
    pub automatic_reservation_level: ReservationLevel,
    pub active: bool,
}

/// Create table payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FloorTableCreate {
    pub number: i32,
    pub capacity: i32,
    pub shape: TableShape,
    pub position: Position,
    pub zone_id: String,
    pub automatic_reservation_level: ReservationLevel,
    pub company_id: String,
}
