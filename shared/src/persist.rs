//! Persistence seam for the floor editor
//!
//! The editor core commits position changes through this trait without
//! knowing how they travel. `boo-client` provides the HTTP-backed
//! implementation; tests provide in-memory mocks.

use async_trait::async_trait;

use crate::error::AppResult;
use crate::models::{FloorTable, Position};

/// Backend capable of persisting table positions
#[async_trait]
pub trait FloorPersistence: Send + Sync {
    /// Submit complete records for every changed table in one request.
    ///
    /// All-or-nothing: on failure the caller must treat the whole batch
    /// as unsaved. On success, returns the server's canonical versions
    /// (which may normalize fields).
    async fn save_all(&self, tables: Vec<FloorTable>) -> AppResult<Vec<FloorTable>>;

    /// Update a single table's position outside the drag editor flow.
    async fn save_one(&self, table_id: &str, position: Position) -> AppResult<FloorTable>;
}
