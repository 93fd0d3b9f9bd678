//! PersistenceCoordinator - 批量保存与本地状态对账
//!
//! Submits position changes through a [`FloorPersistence`] backend and,
//! only on confirmed success, reconciles the store and the tracker with
//! the server's canonical records. A failure mutates nothing: the batch
//! is all-or-nothing from the caller's perspective.

use shared::models::{FloorTable, Position};
use shared::persist::FloorPersistence;
use shared::AppResult;

use crate::store::LayoutStore;
use crate::tracker::ChangeTracker;

/// Drives saves against the backend and reconciles local state
#[derive(Debug)]
pub struct PersistenceCoordinator<P> {
    backend: P,
}

impl<P: FloorPersistence> PersistenceCoordinator<P> {
    pub fn new(backend: P) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &P {
        &self.backend
    }

    /// Submit every changed table in one batch.
    ///
    /// On success the canonical records are pushed into the store, the
    /// tracker baseline is committed, and server normalizations are
    /// folded back in. On failure everything is left untouched and the
    /// error is returned for the guard/UI to surface.
    pub async fn save_all(
        &self,
        store: &mut LayoutStore,
        tracker: &mut ChangeTracker,
    ) -> AppResult<Vec<FloorTable>> {
        let changed = tracker.diff();
        if changed.is_empty() {
            tracing::debug!("save_all: nothing to persist");
            return Ok(Vec::new());
        }

        tracing::info!(tables = changed.len(), "persisting position batch");
        let canonical = self.backend.save_all(changed).await?;

        for table in &canonical {
            store.update_table(table.clone());
        }
        tracker.commit();
        for table in &canonical {
            tracker.refresh(table);
        }
        Ok(canonical)
    }

    /// Persist a single table's position outside the drag editor flow.
    ///
    /// On success the store is updated; if the table belongs to the
    /// currently tracked zone its baseline entry is refreshed too, so the
    /// editor does not report phantom dirtiness afterwards.
    pub async fn save_one(
        &self,
        store: &mut LayoutStore,
        tracker: &mut ChangeTracker,
        table_id: &str,
        position: Position,
    ) -> AppResult<FloorTable> {
        let canonical = self.backend.save_one(table_id, position).await?;
        store.update_table(canonical.clone());
        tracker.refresh(&canonical);
        Ok(canonical)
    }
}
