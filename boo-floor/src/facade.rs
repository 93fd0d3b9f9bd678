//! FloorEditor - 编辑器统一入口
//!
//! Wires the store, tracker, drag editor, guard and coordinator behind a
//! single object, the way a UI host consumes the core. Data flow:
//! pointer input -> editor (geometry) -> tracker (dirtiness) ->
//! [on navigation] guard (decision) -> coordinator (commit) ->
//! store (canonical update) -> tracker (new baseline).

use shared::models::{FloorTable, Position, Zone};
use shared::persist::FloorPersistence;
use shared::{AppError, AppResult, ErrorCode};

use crate::coordinator::PersistenceCoordinator;
use crate::editor::{PointerKind, PointerPoint, PositionEditor};
use crate::guard::{GuardOutcome, GuardState, SelectionTarget, TransitionGuard};
use crate::store::LayoutStore;
use crate::tracker::ChangeTracker;

/// The floor-plan editor core behind one entry point
#[derive(Debug)]
pub struct FloorEditor<P> {
    store: LayoutStore,
    tracker: ChangeTracker,
    editor: PositionEditor,
    guard: TransitionGuard,
    coordinator: PersistenceCoordinator<P>,
}

impl<P: FloorPersistence> FloorEditor<P> {
    pub fn new(backend: P) -> Self {
        Self {
            store: LayoutStore::new(),
            tracker: ChangeTracker::new(),
            editor: PositionEditor::new(),
            guard: TransitionGuard::new(),
            coordinator: PersistenceCoordinator::new(backend),
        }
    }

    // ==================== Loading and creation ====================

    /// Replace the zone set, e.g. after the initial fetch.
    ///
    /// Re-captures the baseline for the selected zone when it survived
    /// the refresh; otherwise the tracker is emptied.
    pub fn load_zones(&mut self, zones: Vec<Zone>) {
        self.store.set_zones(zones);
        match self.store.selected_zone().map(str::to_owned) {
            Some(zone_id) => self.capture_baseline(&zone_id),
            None => self.tracker.initialize(&[]),
        }
    }

    /// Creation forms push a freshly created zone here.
    pub fn add_zone(&mut self, zone: Zone) {
        self.store.add_zone(zone);
    }

    /// Creation forms push a freshly created table here. A table landing
    /// in the zone being edited joins the baseline at its server position.
    pub fn add_table(&mut self, table: FloorTable) {
        let in_edited_zone = self.store.selected_zone() == Some(table.zone_id.as_str());
        self.store.add_table(table.clone());
        if in_edited_zone && self.store.table_by_id(&table.id).is_some() {
            self.tracker.track(&table);
        }
    }

    // ==================== Guarded selection ====================

    /// Request switching the edited zone. Dirty edits turn this into a
    /// blocking confirmation instead of an immediate switch.
    pub fn select_zone(&mut self, zone_id: &str) -> GuardOutcome {
        let target = SelectionTarget::Zone(zone_id.to_string());
        let outcome = self.guard.request_transition(target, self.tracker.is_dirty());
        self.apply_if_ready(&outcome);
        outcome
    }

    /// Request selecting (or clearing) a table.
    pub fn select_table(&mut self, table_id: Option<&str>) -> GuardOutcome {
        let target = SelectionTarget::Table(table_id.map(str::to_owned));
        let outcome = self.guard.request_transition(target, self.tracker.is_dirty());
        self.apply_if_ready(&outcome);
        outcome
    }

    /// User chose Cancel in the confirmation.
    pub fn cancel_transition(&mut self) -> GuardOutcome {
        self.guard.cancel()
    }

    /// User chose Discard: revert every unsaved edit, then complete the
    /// parked selection change.
    pub fn discard_transition(&mut self) -> GuardOutcome {
        let outcome = self.guard.discard();
        if let GuardOutcome::Apply(target) = &outcome {
            self.tracker.discard();
            self.apply_target(target.clone());
        }
        outcome
    }

    /// User chose Save: drive the batch save, then complete or re-open
    /// the confirmation depending on the result.
    ///
    /// On failure the edits stay dirty, the parked target is preserved,
    /// and the error carries the user-facing message.
    pub async fn save_transition(&mut self) -> AppResult<GuardOutcome> {
        match self.guard.begin_save() {
            GuardOutcome::Saving => {}
            other => return Ok(other),
        }
        match self.coordinator.save_all(&mut self.store, &mut self.tracker).await {
            Ok(_) => {
                let outcome = self.guard.save_succeeded();
                self.apply_if_ready(&outcome);
                Ok(outcome)
            }
            Err(err) => {
                tracing::warn!(error = %err, "batch save failed, keeping edits");
                self.guard.save_failed();
                Err(err)
            }
        }
    }

    // ==================== Unguarded saves ====================

    /// Explicit "save" action outside any navigation attempt.
    pub async fn save_now(&mut self) -> AppResult<Vec<FloorTable>> {
        if self.guard.state() != &GuardState::Idle {
            return Err(AppError::with_message(
                ErrorCode::InvalidRequest,
                "a pending transition owns the save flow",
            ));
        }
        self.coordinator.save_all(&mut self.store, &mut self.tracker).await
    }

    /// Direct single-table position update (flows outside the drag
    /// editor, e.g. a numeric position form). Not guard-mediated.
    pub async fn save_table_position(
        &mut self,
        table_id: &str,
        position: Position,
    ) -> AppResult<FloorTable> {
        self.coordinator
            .save_one(&mut self.store, &mut self.tracker, table_id, position)
            .await
    }

    // ==================== Dragging ====================

    pub fn begin_drag(&mut self, table_id: &str, pointer: PointerPoint, kind: PointerKind) -> bool {
        self.editor.begin(&self.tracker, table_id, pointer, kind)
    }

    pub fn drag_to(&mut self, pointer: PointerPoint) {
        self.editor.move_to(&mut self.tracker, pointer);
    }

    pub fn end_drag(&mut self) -> Option<(String, Position)> {
        self.editor.end()
    }

    // ==================== Views ====================

    pub fn store(&self) -> &LayoutStore {
        &self.store
    }

    pub fn tracker(&self) -> &ChangeTracker {
        &self.tracker
    }

    pub fn is_dirty(&self) -> bool {
        self.tracker.is_dirty()
    }

    /// Target parked behind the confirmation dialog, if one is open.
    pub fn pending_prompt(&self) -> Option<&SelectionTarget> {
        self.guard.pending_target()
    }

    /// True while a save is in flight; the confirmation's cancel/discard
    /// controls must be disabled.
    pub fn is_saving(&self) -> bool {
        self.guard.is_saving()
    }

    // ==================== Internals ====================

    fn apply_if_ready(&mut self, outcome: &GuardOutcome) {
        if let GuardOutcome::Apply(target) = outcome {
            self.apply_target(target.clone());
        }
    }

    fn apply_target(&mut self, target: SelectionTarget) {
        // a zone switch mid-drag would leave a dangling lock
        if self.editor.is_dragging() {
            self.editor.end();
        }
        match target {
            SelectionTarget::Zone(zone_id) => {
                self.store.set_selected_zone(Some(&zone_id));
                self.store.set_selected_table(None);
                if self.store.selected_zone() == Some(zone_id.as_str()) {
                    self.capture_baseline(&zone_id);
                }
            }
            SelectionTarget::Table(table_id) => {
                self.store.set_selected_table(table_id.as_deref());
            }
        }
    }

    fn capture_baseline(&mut self, zone_id: &str) {
        let tables = self.store.tables_for_zone(zone_id).to_vec();
        self.tracker.initialize(&tables);
    }
}
