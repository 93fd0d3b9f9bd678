//! FloorApi integration tests over an in-process stand-in server.

use std::collections::HashMap;

use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post, put};
use axum::{Json, Router};

use boo_client::{FloorApi, HttpClient, OneshotHttpClient};
use shared::client::{BatchPositionUpdate, TableCreateRequest, TablePayload, TablePositionUpdate, ZoneCreateRequest, ZonePayload};
use shared::models::{FloorTableCreate, Position, ReservationLevel, TableShape, ZoneCreate};
use shared::persist::FloorPersistence;
use shared::ErrorCode;

fn table_payload(id: &str, zone_id: &str, x: i32, y: i32) -> TablePayload {
    TablePayload {
        id: id.into(),
        number: 7,
        capacity: 4,
        shape: TableShape::Square,
        position: Position::new(x, y),
        zone_id: zone_id.into(),
        automatic_reservation_level: ReservationLevel::Manual,
        active: true,
    }
}

async fn list_zones(Query(params): Query<HashMap<String, String>>) -> impl IntoResponse {
    // the client must ask with the wire parameter name
    if params.get("boo_company_id").map(String::as_str) != Some("c-1") {
        return (StatusCode::BAD_REQUEST, "missing boo_company_id").into_response();
    }
    Json(vec![ZonePayload {
        id: "z-1".into(),
        name: "Sala".into(),
        tables: vec![table_payload("t-1", "z-1", 50, 50)],
    }])
    .into_response()
}

async fn create_zone(Json(req): Json<ZoneCreateRequest>) -> Json<ZonePayload> {
    Json(ZonePayload {
        id: format!("z-{}", req.name.len()),
        name: req.name,
        tables: vec![],
    })
}

async fn create_table(Json(req): Json<TableCreateRequest>) -> Json<TablePayload> {
    Json(TablePayload {
        id: "t-new".into(),
        number: req.number,
        capacity: req.capacity,
        shape: req.shape,
        position: req.position,
        zone_id: req.zone_id,
        automatic_reservation_level: req.automatic_reservation_level,
        active: true,
    })
}

async fn update_position(
    Path(id): Path<String>,
    Json(req): Json<TablePositionUpdate>,
) -> Json<TablePayload> {
    Json(table_payload(&id, "z-1", req.position.x, req.position.y))
}

async fn batch_positions(Json(req): Json<BatchPositionUpdate>) -> impl IntoResponse {
    if req.tables.iter().any(|t| t.id == "t-bad") {
        let body = serde_json::json!({
            "code": 4002,
            "message": "batch update rejected",
            "details": {"reason": "stale zone"},
        });
        return (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response();
    }
    // the "server" normalizes capacities on write
    let canonical: Vec<TablePayload> = req
        .tables
        .into_iter()
        .map(|mut t| {
            t.capacity = t.capacity.max(2);
            t
        })
        .collect();
    Json(canonical).into_response()
}

async fn forbidden() -> impl IntoResponse {
    (StatusCode::UNAUTHORIZED, "token expired")
}

fn stand_in_server() -> Router {
    Router::new()
        .route("/api/floor/zones", get(list_zones).post(create_zone))
        .route("/api/floor/tables", post(create_table))
        .route("/api/floor/tables/positions", put(batch_positions))
        .route("/api/floor/tables/{id}/position", put(update_position))
        .route("/api/private", get(forbidden))
}

fn api() -> FloorApi<OneshotHttpClient> {
    FloorApi::new(OneshotHttpClient::new(stand_in_server()))
}

#[tokio::test]
async fn test_fetch_zones_translates_wire_payloads() {
    let zones = api().fetch_zones("c-1").await.unwrap();
    assert_eq!(zones.len(), 1);
    assert_eq!(zones[0].id, "z-1");
    // nested table came through the boo_zone_id / is_active mapping
    assert_eq!(zones[0].tables[0].zone_id, "z-1");
    assert!(zones[0].tables[0].active);
}

#[tokio::test]
async fn test_create_zone_roundtrip() {
    let zone = api()
        .create_zone(ZoneCreate {
            name: "Terraza".into(),
            company_id: "c-1".into(),
        })
        .await
        .unwrap();
    assert_eq!(zone.name, "Terraza");
    assert!(zone.tables.is_empty());
}

#[tokio::test]
async fn test_create_table_roundtrip() {
    let created = api()
        .create_table(FloorTableCreate {
            number: 12,
            capacity: 6,
            shape: TableShape::Rectangle,
            position: Position::new(100, 200),
            zone_id: "z-1".into(),
            automatic_reservation_level: ReservationLevel::Auto,
            company_id: "c-1".into(),
        })
        .await
        .unwrap();
    assert_eq!(created.id, "t-new");
    assert_eq!(created.number, 12);
    assert_eq!(created.shape, TableShape::Rectangle);
    assert_eq!(created.zone_id, "z-1");
}

#[tokio::test]
async fn test_save_position_returns_canonical_record() {
    let table = api()
        .save_position("t-1", Position::new(560, 560))
        .await
        .unwrap();
    assert_eq!(table.id, "t-1");
    assert_eq!(table.position, Position::new(560, 560));
}

#[tokio::test]
async fn test_save_positions_batch_success() {
    let mut t = shared::models::FloorTable::from(table_payload("t-1", "z-1", 10, 10));
    t.capacity = 0;
    let canonical = api().save_positions(vec![t]).await.unwrap();
    assert_eq!(canonical.len(), 1);
    // server-side normalization is visible to the caller
    assert_eq!(canonical[0].capacity, 2);
}

#[tokio::test]
async fn test_save_positions_batch_rejection_maps_to_app_error() {
    let bad = shared::models::FloorTable::from(table_payload("t-bad", "z-1", 10, 10));

    // raw client error carries the server's structured code
    let err = api().save_positions(vec![bad.clone()]).await.unwrap_err();
    match err {
        boo_client::ClientError::Api { code, ref message, .. } => {
            assert_eq!(code, 4002);
            assert_eq!(message, "batch update rejected");
        }
        other => panic!("unexpected error: {other}"),
    }

    // through the persistence seam it becomes the domain error code
    let err = FloorPersistence::save_all(&api(), vec![bad]).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::BatchRejected);
    assert_eq!(err.message, "batch update rejected");
}

#[tokio::test]
async fn test_status_fallback_without_structured_body() {
    let client = OneshotHttpClient::new(stand_in_server());
    let err = client
        .get::<serde_json::Value>("api/private")
        .await
        .unwrap_err();
    assert!(matches!(err, boo_client::ClientError::Unauthorized(_)));
}

#[tokio::test]
async fn test_bearer_token_is_attached() {
    use axum::http::HeaderMap;

    async fn echo_auth(headers: HeaderMap) -> Json<Option<String>> {
        Json(
            headers
                .get("Authorization")
                .and_then(|v| v.to_str().ok())
                .map(str::to_owned),
        )
    }

    let router = Router::new().route("/api/floor/whoami", get(echo_auth));
    let client = OneshotHttpClient::new(router);
    client.set_token(Some("abc123".into()));

    let auth: Option<String> = client.get("api/floor/whoami").await.unwrap();
    assert_eq!(auth.as_deref(), Some("Bearer abc123"));
}
