//! Floor-plan API surface
//!
//! Typed wrappers over the floor endpoints. Wire DTO translation happens
//! here; callers only ever see the in-memory models.

use async_trait::async_trait;

use shared::client::{
    BatchPositionUpdate, TableCreateRequest, TablePayload, TablePositionUpdate, ZoneCreateRequest,
    ZonePayload,
};
use shared::models::{FloorTable, FloorTableCreate, Position, Zone, ZoneCreate};
use shared::persist::FloorPersistence;
use shared::{AppError, AppResult};

use crate::client::HttpClient;
use crate::ClientResult;

/// Typed client for the floor-plan endpoints
#[derive(Debug, Clone)]
pub struct FloorApi<C> {
    http: C,
}

impl<C: HttpClient> FloorApi<C> {
    pub fn new(http: C) -> Self {
        Self { http }
    }

    /// GET /api/floor/zones - 获取公司的所有区域（含桌台）
    pub async fn fetch_zones(&self, company_id: &str) -> ClientResult<Vec<Zone>> {
        let path = format!("api/floor/zones?boo_company_id={}", company_id);
        let payloads: Vec<ZonePayload> = self.http.get(&path).await?;
        Ok(payloads.into_iter().map(Zone::from).collect())
    }

    /// POST /api/floor/zones - 创建区域
    pub async fn create_zone(&self, zone: ZoneCreate) -> ClientResult<Zone> {
        let request = ZoneCreateRequest::from(zone);
        let payload: ZonePayload = self.http.post("api/floor/zones", &request).await?;
        Ok(payload.into())
    }

    /// POST /api/floor/tables - 创建桌台
    pub async fn create_table(&self, table: FloorTableCreate) -> ClientResult<FloorTable> {
        let request = TableCreateRequest::from(table);
        let payload: TablePayload = self.http.post("api/floor/tables", &request).await?;
        Ok(payload.into())
    }

    /// PUT /api/floor/tables/{id}/position - 更新单个桌台位置
    pub async fn save_position(&self, table_id: &str, position: Position) -> ClientResult<FloorTable> {
        let request = TablePositionUpdate {
            id: table_id.to_string(),
            position,
        };
        let path = format!("api/floor/tables/{}/position", table_id);
        let payload: TablePayload = self.http.put(&path, &request).await?;
        Ok(payload.into())
    }

    /// PUT /api/floor/tables/positions - 批量更新桌台位置
    ///
    /// Complete records, all-or-nothing. Returns the canonical versions.
    pub async fn save_positions(&self, tables: Vec<FloorTable>) -> ClientResult<Vec<FloorTable>> {
        let request = BatchPositionUpdate {
            tables: tables.into_iter().map(TablePayload::from).collect(),
        };
        tracing::debug!(tables = request.tables.len(), "submitting position batch");
        let payloads: Vec<TablePayload> =
            self.http.put("api/floor/tables/positions", &request).await?;
        Ok(payloads.into_iter().map(FloorTable::from).collect())
    }
}

#[async_trait]
impl<C: HttpClient> FloorPersistence for FloorApi<C> {
    async fn save_all(&self, tables: Vec<FloorTable>) -> AppResult<Vec<FloorTable>> {
        self.save_positions(tables).await.map_err(AppError::from)
    }

    async fn save_one(&self, table_id: &str, position: Position) -> AppResult<FloorTable> {
        self.save_position(table_id, position)
            .await
            .map_err(AppError::from)
    }
}
