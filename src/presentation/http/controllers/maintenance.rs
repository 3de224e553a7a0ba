// src/presentation/http/controllers/maintenance.rs
use crate::application::{
    commands::maintenance::{CloseMaintenanceCommand, OpenMaintenanceCommand},
    dto::MaintenanceDto,
    queries::maintenance::AssetMaintenanceQuery,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::response::ApiResponse;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct OpenMaintenanceRequest {
    pub asset_id: i64,
    pub issue_description: String,
    pub vendor: Option<String>,
    pub cost: Option<f64>,
    pub maintenance_date: Option<DateTime<Utc>>,
    pub next_maintenance_date: Option<DateTime<Utc>>,
}

#[utoipa::path(
    post,
    path = "/api/maintenance",
    request_body = OpenMaintenanceRequest,
    responses(
        (status = 201, description = "Maintenance record opened; asset moved to Under Maintenance.", body = MaintenanceDto),
        (status = 404, description = "No such asset.")
    ),
    security(("bearer" = [])),
    tag = "Maintenance"
)]
pub async fn open(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<OpenMaintenanceRequest>,
) -> HttpResult<(StatusCode, Json<ApiResponse<MaintenanceDto>>)> {
    let command = OpenMaintenanceCommand {
        asset_id: payload.asset_id,
        issue_description: payload.issue_description,
        vendor: payload.vendor,
        cost: payload.cost,
        maintenance_date: payload.maintenance_date,
        next_maintenance_date: payload.next_maintenance_date,
    };

    let record = state
        .services
        .maintenance_commands
        .open(&user, command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(ApiResponse::new(record))))
}

#[utoipa::path(
    put,
    path = "/api/maintenance/{id}/close",
    params(("id" = i64, Path, description = "Maintenance record id")),
    responses(
        (status = 200, description = "Record closed; asset reset to Available.", body = MaintenanceDto),
        (status = 404, description = "No such record.")
    ),
    security(("bearer" = [])),
    tag = "Maintenance"
)]
pub async fn close(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<ApiResponse<MaintenanceDto>>> {
    state
        .services
        .maintenance_commands
        .close(&user, CloseMaintenanceCommand { id })
        .await
        .into_http()
        .map(|record| Json(ApiResponse::new(record)))
}

#[utoipa::path(
    get,
    path = "/api/maintenance",
    responses((status = 200, description = "All maintenance records.", body = [MaintenanceDto])),
    security(("bearer" = [])),
    tag = "Maintenance"
)]
pub async fn list(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<ApiResponse<Vec<MaintenanceDto>>>> {
    state
        .services
        .maintenance_queries
        .list_records(&user)
        .await
        .into_http()
        .map(|records| Json(ApiResponse::with_count(records)))
}

#[utoipa::path(
    get,
    path = "/api/maintenance/asset/{asset_id}",
    params(("asset_id" = i64, Path, description = "Asset id")),
    responses((status = 200, description = "Maintenance records for one asset.", body = [MaintenanceDto])),
    security(("bearer" = [])),
    tag = "Maintenance"
)]
pub async fn for_asset(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(asset_id): Path<i64>,
) -> HttpResult<Json<ApiResponse<Vec<MaintenanceDto>>>> {
    state
        .services
        .maintenance_queries
        .records_for_asset(&user, AssetMaintenanceQuery { asset_id })
        .await
        .into_http()
        .map(|records| Json(ApiResponse::with_count(records)))
}
