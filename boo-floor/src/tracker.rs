//! ChangeTracker - 基线快照与未保存的本地修改
//!
//! Isolates "what the user has provisionally changed" from "what the
//! server has confirmed". The baseline is replaced only after a confirmed
//! successful save or an explicit discard.

use std::collections::HashMap;

use shared::models::{FloorTable, Position};

/// Baseline snapshot vs ephemeral local overrides for one zone's tables
#[derive(Debug, Default)]
pub struct ChangeTracker {
    /// Insertion order of table ids, for stable diffs.
    order: Vec<String>,
    /// Last server-confirmed records.
    baseline: HashMap<String, FloorTable>,
    /// Working copies carrying in-progress position edits.
    overrides: HashMap<String, FloorTable>,
}

impl ChangeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Capture a fresh baseline from `tables` and reset the overrides to
    /// mirror it. Clears dirtiness.
    pub fn initialize(&mut self, tables: &[FloorTable]) {
        self.order = tables.iter().map(|t| t.id.clone()).collect();
        self.baseline = tables.iter().map(|t| (t.id.clone(), t.clone())).collect();
        self.overrides = self.baseline.clone();
    }

    /// Start tracking one more table at its confirmed position (e.g. a
    /// table created while the zone is open).
    pub fn track(&mut self, table: &FloorTable) {
        if self.baseline.contains_key(&table.id) {
            return;
        }
        self.order.push(table.id.clone());
        self.baseline.insert(table.id.clone(), table.clone());
        self.overrides.insert(table.id.clone(), table.clone());
    }

    /// Record a provisional position for a tracked table.
    pub fn set_position(&mut self, table_id: &str, position: Position) {
        let Some(table) = self.overrides.get_mut(table_id) else {
            tracing::warn!(table_id = %table_id, "set_position: untracked table, ignoring");
            return;
        };
        table.position = position;
    }

    /// Current (override) record for a table.
    pub fn table(&self, table_id: &str) -> Option<&FloorTable> {
        self.overrides.get(table_id)
    }

    /// Current (override) position for a table.
    pub fn position_of(&self, table_id: &str) -> Option<Position> {
        self.overrides.get(table_id).map(|t| t.position)
    }

    pub fn is_tracked(&self, table_id: &str) -> bool {
        self.baseline.contains_key(table_id)
    }

    /// True iff at least one table's position differs from its baseline.
    ///
    /// Value comparison, never reference identity.
    pub fn is_dirty(&self) -> bool {
        self.order.iter().any(|id| {
            match (self.overrides.get(id), self.baseline.get(id)) {
                (Some(cur), Some(base)) => cur.position != base.position,
                _ => false,
            }
        })
    }

    /// Tables whose position diverges from the baseline, as full records
    /// (persistence needs complete rows, not deltas). Stable order.
    pub fn diff(&self) -> Vec<FloorTable> {
        self.order
            .iter()
            .filter_map(|id| {
                let cur = self.overrides.get(id)?;
                let base = self.baseline.get(id)?;
                (cur.position != base.position).then(|| cur.clone())
            })
            .collect()
    }

    /// Baseline <- overrides. Only call after persistence confirmed success.
    pub fn commit(&mut self) {
        self.baseline = self.overrides.clone();
    }

    /// Overrides <- baseline. Drops every unsaved edit.
    pub fn discard(&mut self) {
        self.overrides = self.baseline.clone();
    }

    /// Fold a server-canonical record back into both maps.
    ///
    /// Used after a confirmed save, where the server may have normalized
    /// fields. Untracked tables (other zones) are ignored.
    pub fn refresh(&mut self, table: &FloorTable) {
        if !self.baseline.contains_key(&table.id) {
            return;
        }
        self.baseline.insert(table.id.clone(), table.clone());
        self.overrides.insert(table.id.clone(), table.clone());
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
