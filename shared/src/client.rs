//! Client-related types shared between server and client
//!
//! Wire DTOs for the floor-plan API. The server names fields in its own
//! convention (`boo_zone_id`, `is_active`); this module owns the mapping
//! between that wire naming and the in-memory models, so nothing outside
//! the transport boundary ever sees a `boo_` field.

use serde::{Deserialize, Serialize};

use crate::models::{FloorTable, FloorTableCreate, Position, ReservationLevel, TableShape, Zone, ZoneCreate};

// =============================================================================
// Table wire payloads
// =============================================================================

/// Wire representation of a table (server field naming)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TablePayload {
    pub id: String,
    pub number: i32,
    pub capacity: i32,
    pub shape: TableShape,
    pub position: Position,
    #[serde(rename = "boo_zone_id")]
    pub zone_id: String,
    pub automatic_reservation_level: ReservationLevel,
    #[serde(rename = "is_active")]
    pub active: bool,
}

impl From<FloorTable> for TablePayload {
    fn from(t: FloorTable) -> Self {
        Self {
            id: t.id,
            number: t.number,
            capacity: t.capacity,
            shape: t.shape,
            position: t.position,
            zone_id: t.zone_id,
            automatic_reservation_level: t.automatic_reservation_level,
            active: t.active,
        }
    }
}

impl From<TablePayload> for FloorTable {
    fn from(p: TablePayload) -> Self {
        Self {
            id: p.id,
            number: p.number,
            capacity: p.capacity,
            shape: p.shape,
            position: p.position,
            zone_id: p.zone_id,
            automatic_reservation_level: p.automatic_reservation_level,
            active: p.active,
        }
    }
}

/// Create table request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableCreateRequest {
    pub number: i32,
    pub capacity: i32,
    pub shape: TableShape,
    pub position: Position,
    #[serde(rename = "boo_zone_id")]
    pub zone_id: String,
    pub automatic_reservation_level: ReservationLevel,
    #[serde(rename = "boo_company_id")]
    pub company_id: String,
}

impl From<FloorTableCreate> for TableCreateRequest {
    fn from(c: FloorTableCreate) -> Self {
        Self {
            number: c.number,
            capacity: c.capacity,
            shape: c.shape,
            position: c.position,
            zone_id: c.zone_id,
            automatic_reservation_level: c.automatic_reservation_level,
            company_id: c.company_id,
        }
    }
}

/// Single-table position update request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TablePositionUpdate {
    pub id: String,
    pub position: Position,
}

/// Batch position update request
///
/// Complete records, not deltas; the server treats the batch as
/// all-or-nothing and returns the canonical versions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchPositionUpdate {
    pub tables: Vec<TablePayload>,
}

// =============================================================================
// Zone wire payloads
// =============================================================================

/// Wire representation of a zone with its nested tables
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZonePayload {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub tables: Vec<TablePayload>,
}

impl From<ZonePayload> for Zone {
    fn from(p: ZonePayload) -> Self {
        Self {
            id: p.id,
            name: p.name,
            tables: p.tables.into_iter().map(FloorTable::from).collect(),
        }
    }
}

/// Create zone request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZoneCreateRequest {
    pub name: String,
    #[serde(rename = "boo_company_id")]
    pub company_id: String,
}

impl From<ZoneCreate> for ZoneCreateRequest {
    fn from(c: ZoneCreate) -> Self {
        Self {
            name: c.name,
            company_id: c.company_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_payload_uses_wire_field_names() {
        let payload = TablePayload {
            id: "t-1".into(),
            number: 4,
            capacity: 2,
            shape: TableShape::Square,
            position: Position::new(50, 50),
            zone_id: "z-1".into(),
            automatic_reservation_level: ReservationLevel::Manual,
            active: true,
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["boo_zone_id"], "z-1");
        assert_eq!(json["is_active"], true);
        assert_eq!(json["automatic_reservation_level"], "MANUAL");
        assert!(json.get("zone_id").is_none());
    }

    #[test]
    fn test_zone_payload_converts_nested_tables() {
        let json = serde_json::json!({
            "id": "z-9",
            "name": "Terraza",
            "tables": [{
                "id": "t-9",
                "number": 9,
                "capacity": 6,
                "shape": "rectangle",
                "position": {"x": 100, "y": 200},
                "boo_zone_id": "z-9",
                "automatic_reservation_level": "AUTO",
                "is_active": false
            }]
        });
        let zone: Zone = serde_json::from_value::<ZonePayload>(json).unwrap().into();
        assert_eq!(zone.tables.len(), 1);
        assert_eq!(zone.tables[0].zone_id, "z-9");
        assert_eq!(zone.tables[0].shape, TableShape::Rectangle);
        assert!(!zone.tables[0].active);
    }
}
