//! Zone Model

use serde::{Deserialize, Serialize};

use super::floor_table::FloorTable;

/// Zone entity (区域：大厅、露台、包厢等)
///
/// A zone owns its tables exclusively; a table belongs to exactly one
/// zone at a time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub tables: Vec<FloorTable>,
}

/// Create zone payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZoneCreate {
    pub name: String,
    pub company_id: String,
}
