// src/presentation/http/controllers/reports.rs
use crate::application::dto::{AssetDto, InventoryReportDto, MaintenanceDto};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::response::ApiResponse;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};

#[utoipa::path(
    get,
    path = "/api/reports/inventory",
    responses((status = 200, description = "Asset counts grouped by status, type and department.", body = InventoryReportDto)),
    security(("bearer" = [])),
    tag = "Reports"
)]
pub async fn inventory(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<ApiResponse<InventoryReportDto>>> {
    state
        .services
        .report_queries
        .inventory(&user)
        .await
        .into_http()
        .map(|report| Json(ApiResponse::new(report)))
}

#[utoipa::path(
    get,
    path = "/api/reports/warranty",
    responses((status = 200, description = "Assets whose warranty expires within 30 days.", body = [AssetDto])),
    security(("bearer" = [])),
    tag = "Reports"
)]
pub async fn warranty(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<ApiResponse<Vec<AssetDto>>>> {
    state
        .services
        .report_queries
        .warranty_expiry(&user)
        .await
        .into_http()
        .map(|assets| Json(ApiResponse::with_count(assets)))
}

#[utoipa::path(
    get,
    path = "/api/reports/maintenance",
    responses((status = 200, description = "Open maintenance records.", body = [MaintenanceDto])),
    security(("bearer" = [])),
    tag = "Reports"
)]
pub async fn maintenance_due(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<ApiResponse<Vec<MaintenanceDto>>>> {
    state
        .services
        .report_queries
        .open_maintenance(&user)
        .await
        .into_http()
        .map(|records| Json(ApiResponse::with_count(records)))
}
