//! PositionEditor - 拖拽会话
//!
//! Translates a continuous stream of pointer/touch coordinates into valid
//! clamped table positions. One unified `begin/move/end` session covers
//! mouse and touch; the editor is input-device agnostic.
//!
//! The drag lock is the only mutual-exclusion primitive in the core:
//! exactly one table may be in an active drag at any instant, driven by
//! exactly one input source.

use shared::models::{Position, TableShape};

use crate::geometry::clamp_point;
use crate::tracker::ChangeTracker;

/// Which input source drives a drag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Mouse,
    Touch,
}

/// Raw pointer coordinates, possibly fractional (touch events)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerPoint {
    pub x: f64,
    pub y: f64,
}

impl PointerPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug)]
struct DragSession {
    table_id: String,
    kind: PointerKind,
    shape: TableShape,
    /// pointer - table position at `begin`; keeps the grab point stable.
    offset_x: f64,
    offset_y: f64,
    last: Position,
}

/// Exclusive drag session over the tracked tables
#[derive(Debug, Default)]
pub struct PositionEditor {
    drag: Option<DragSession>,
}

impl PositionEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a drag for `table_id` at the given pointer location.
    ///
    /// Returns `false` without touching any state when a drag is already
    /// in progress (also when a second input source tries to start one
    /// mid-drag) or when the table is not tracked.
    pub fn begin(
        &mut self,
        tracker: &ChangeTracker,
        table_id: &str,
        pointer: PointerPoint,
        kind: PointerKind,
    ) -> bool {
        if let Some(active) = &self.drag {
            tracing::warn!(
                table_id = %table_id,
                active = %active.table_id,
                "begin: drag already in progress, ignoring"
            );
            return false;
        }
        let Some(table) = tracker.table(table_id) else {
            tracing::warn!(table_id = %table_id, "begin: untracked table, ignoring");
            return false;
        };

        self.drag = Some(DragSession {
            table_id: table_id.to_string(),
            kind,
            shape: table.shape,
            offset_x: pointer.x - f64::from(table.position.x),
            offset_y: pointer.y - f64::from(table.position.y),
            last: table.position,
        });
        true
    }

    /// Feed a pointer movement into the active drag.
    ///
    /// Clamps against the dragged table's own shape and writes the result
    /// into the tracker as a provisional update. No-op without a drag.
    pub fn move_to(&mut self, tracker: &mut ChangeTracker, pointer: PointerPoint) {
        let Some(drag) = &mut self.drag else {
            return;
        };
        let position = clamp_point(
            drag.shape,
            pointer.x - drag.offset_x,
            pointer.y - drag.offset_y,
        );
        drag.last = position;
        tracker.set_position(&drag.table_id, position);
    }

    /// Finalize the drag and release the exclusive lock.
    ///
    /// The caller must route pointer/touch release events here from a
    /// wider scope than the canvas itself, so every `begin` gets a
    /// matching `end` even when the pointer is let go off-canvas.
    /// Idempotent: returns `None` when no drag is active.
    pub fn end(&mut self) -> Option<(String, Position)> {
        self.drag.take().map(|d| (d.table_id, d.last))
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Id of the table currently being dragged.
    pub fn dragging_table(&self) -> Option<&str> {
        self.drag.as_ref().map(|d| d.table_id.as_str())
    }

    /// Input source that owns the current drag.
    pub fn pointer_kind(&self) -> Option<PointerKind> {
        self.drag.as_ref().map(|d| d.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{FloorTable, ReservationLevel};

    fn table(id: &str, shape: TableShape, x: i32, y: i32) -> FloorTable {
        FloorTable {
            id: id.into(),
            number: 1,
            capacity: 4,
            shape,
            position: Position::new(x, y),
            zone_id: "z1".into(),
            automatic_reservation_level: ReservationLevel::Manual,
            active: true,
        }
    }

    fn tracker_with(tables: &[FloorTable]) -> ChangeTracker {
        let mut tracker = ChangeTracker::new();
        tracker.initialize(tables);
        tracker
    }

    #[test]
    fn test_drag_square_offscreen_clamps_to_560() {
        let mut tracker = tracker_with(&[table("t1", TableShape::Square, 50, 50)]);
        let mut editor = PositionEditor::new();

        // grab the table at its own origin so pointer == position
        assert!(editor.begin(&tracker, "t1", PointerPoint::new(50.0, 50.0), PointerKind::Mouse));
        editor.move_to(&mut tracker, PointerPoint::new(700.0, 700.0));
        let (id, end) = editor.end().unwrap();

        assert_eq!(id, "t1");
        assert_eq!(end, Position::new(560, 560));
        assert_eq!(tracker.position_of("t1"), Some(Position::new(560, 560)));
    }

    #[test]
    fn test_rectangle_uses_its_own_footprint() {
        let mut tracker = tracker_with(&[table("t1", TableShape::Rectangle, 100, 100)]);
        let mut editor = PositionEditor::new();

        editor.begin(&tracker, "t1", PointerPoint::new(100.0, 100.0), PointerKind::Mouse);
        editor.move_to(&mut tracker, PointerPoint::new(650.0, 100.0));
        editor.end();

        assert_eq!(tracker.position_of("t1"), Some(Position::new(500, 100)));
    }

    #[test]
    fn test_offset_keeps_grab_point_stable() {
        let mut tracker = tracker_with(&[table("t1", TableShape::Square, 100, 100)]);
        let mut editor = PositionEditor::new();

        // grab 10px into the table, move the pointer by (50, 0)
        editor.begin(&tracker, "t1", PointerPoint::new(110.0, 110.0), PointerKind::Mouse);
        editor.move_to(&mut tracker, PointerPoint::new(160.0, 110.0));

        assert_eq!(tracker.position_of("t1"), Some(Position::new(150, 100)));
    }

    #[test]
    fn test_second_drag_rejected_while_locked() {
        let tables = [
            table("t1", TableShape::Square, 0, 0),
            table("t2", TableShape::Square, 100, 100),
        ];
        let mut tracker = tracker_with(&tables);
        let mut editor = PositionEditor::new();

        assert!(editor.begin(&tracker, "t1", PointerPoint::new(0.0, 0.0), PointerKind::Mouse));
        // a touch starting mid-drag must not steal the session
        assert!(!editor.begin(&tracker, "t2", PointerPoint::new(100.0, 100.0), PointerKind::Touch));
        assert_eq!(editor.dragging_table(), Some("t1"));
        assert_eq!(editor.pointer_kind(), Some(PointerKind::Mouse));

        editor.end();
        assert!(editor.begin(&tracker, "t2", PointerPoint::new(100.0, 100.0), PointerKind::Touch));
    }

    #[test]
    fn test_move_and_end_without_begin_are_noops() {
        let mut tracker = tracker_with(&[table("t1", TableShape::Square, 10, 10)]);
        let mut editor = PositionEditor::new();

        editor.move_to(&mut tracker, PointerPoint::new(500.0, 500.0));
        assert_eq!(tracker.position_of("t1"), Some(Position::new(10, 10)));
        assert_eq!(editor.end(), None);
        assert_eq!(editor.end(), None);
    }

    #[test]
    fn test_begin_on_untracked_table_rejected() {
        let tracker = tracker_with(&[table("t1", TableShape::Square, 0, 0)]);
        let mut editor = PositionEditor::new();
        assert!(!editor.begin(&tracker, "ghost", PointerPoint::new(0.0, 0.0), PointerKind::Mouse));
        assert!(!editor.is_dragging());
    }

    #[test]
    fn test_drag_starts_from_override_position() {
        let mut tracker = tracker_with(&[table("t1", TableShape::Square, 0, 0)]);
        tracker.set_position("t1", Position::new(200, 200));
        let mut editor = PositionEditor::new();

        // second drag of an already-moved table grabs the override, not
        // the stale baseline
        editor.begin(&tracker, "t1", PointerPoint::new(200.0, 200.0), PointerKind::Mouse);
        editor.move_to(&mut tracker, PointerPoint::new(210.0, 200.0));
        assert_eq!(tracker.position_of("t1"), Some(Position::new(210, 200)));
    }
}
