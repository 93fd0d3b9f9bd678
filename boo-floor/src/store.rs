//! LayoutStore - 平面图画布的权威内存状态
//!
//! Single source of truth for server-confirmed zones/tables plus the
//! current selection. The [`crate::tracker::ChangeTracker`] overlay holds
//! in-progress edits; nothing here is provisional.

use shared::models::{FloorTable, Zone};

/// Canonical in-memory representation of zones, tables and selection
#[derive(Debug, Default)]
pub struct LayoutStore {
    zones: Vec<Zone>,
    selected_zone: Option<String>,
    selected_table: Option<String>,
}

impl LayoutStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Full replace, used after the initial fetch or a refresh.
    ///
    /// Selection entries that no longer resolve are cleared.
    pub fn set_zones(&mut self, zones: Vec<Zone>) {
        self.zones = zones;
        if let Some(id) = self.selected_zone.clone()
            && self.zone_by_id(&id).is_none()
        {
            tracing::warn!(zone_id = %id, "selected zone vanished on refresh");
            self.selected_zone = None;
        }
        if let Some(id) = self.selected_table.clone()
            && self.table_by_id(&id).is_none()
        {
            self.selected_table = None;
        }
    }

    /// 新增区域（创建表单成功后调用）
    pub fn add_zone(&mut self, zone: Zone) {
        if self.zone_by_id(&zone.id).is_some() {
            tracing::warn!(zone_id = %zone.id, "add_zone: duplicate id, ignoring");
            return;
        }
        self.zones.push(zone);
    }

    /// 新增桌台，插入到其所属区域
    pub fn add_table(&mut self, table: FloorTable) {
        let Some(zone) = self.zones.iter_mut().find(|z| z.id == table.zone_id) else {
            tracing::warn!(
                table_id = %table.id,
                zone_id = %table.zone_id,
                "add_table: owning zone not found, ignoring"
            );
            return;
        };
        zone.tables.push(table);
    }

    /// Locate the table by id across all zones and replace it in place.
    pub fn update_table(&mut self, table: FloorTable) {
        for zone in &mut self.zones {
            if let Some(slot) = zone.tables.iter_mut().find(|t| t.id == table.id) {
                *slot = table;
                return;
            }
        }
        tracing::warn!(table_id = %table.id, "update_table: unknown table, ignoring");
    }

    // ==================== Selection ====================

    pub fn set_selected_zone(&mut self, zone_id: Option<&str>) {
        match zone_id {
            Some(id) if self.zone_by_id(id).is_none() => {
                tracing::warn!(zone_id = %id, "set_selected_zone: unknown zone, ignoring");
            }
            _ => self.selected_zone = zone_id.map(str::to_owned),
        }
    }

    pub fn set_selected_table(&mut self, table_id: Option<&str>) {
        match table_id {
            Some(id) if self.table_by_id(id).is_none() => {
                tracing::warn!(table_id = %id, "set_selected_table: unknown table, ignoring");
            }
            _ => self.selected_table = table_id.map(str::to_owned),
        }
    }

    pub fn selected_zone(&self) -> Option<&str> {
        self.selected_zone.as_deref()
    }

    pub fn selected_table(&self) -> Option<&str> {
        self.selected_table.as_deref()
    }

    // ==================== Lookups ====================

    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    pub fn zone_by_id(&self, zone_id: &str) -> Option<&Zone> {
        self.zones.iter().find(|z| z.id == zone_id)
    }

    pub fn table_by_id(&self, table_id: &str) -> Option<&FloorTable> {
        self.zones
            .iter()
            .flat_map(|z| z.tables.iter())
            .find(|t| t.id == table_id)
    }

    /// Tables of one zone; empty when the zone is unknown.
    pub fn tables_for_zone(&self, zone_id: &str) -> &[FloorTable] {
        match self.zone_by_id(zone_id) {
            Some(zone) => &zone.tables,
            None => &[],
        }
    }

    pub fn zone_count(&self) -> usize {
        self.zones.len()
    }

    pub fn table_count(&self) -> usize {
        self.zones.iter().map(|z| z.tables.len()).sum()
    }
}
