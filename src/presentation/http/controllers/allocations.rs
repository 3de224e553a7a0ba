// src/presentation/http/controllers/allocations.rs
use crate::application::{
    commands::allocations::{AssignAssetCommand, ReturnAssetCommand, TransferAssetCommand},
    dto::{AllocationDto, AssetHistoryEntryDto, MyHistoryEntryDto},
    queries::allocations::AssetHistoryQuery,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::response::ApiResponse;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::{Value, json};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct AssignRequest {
    pub asset_id: i64,
    pub assigned_to: i64,
    pub remarks: Option<String>,
    pub assigned_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct TransferRequest {
    pub asset_id: i64,
    pub from_user: i64,
    pub to_user: i64,
    pub remarks: Option<String>,
    pub transfer_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ReturnRequest {
    pub asset_id: i64,
    pub return_date: Option<DateTime<Utc>>,
    pub remarks: Option<String>,
}

#[utoipa::path(
    post,
    path = "/api/allocations/assign",
    request_body = AssignRequest,
    responses(
        (status = 201, description = "Allocation opened.", body = AllocationDto),
        (status = 400, description = "Asset is not available."),
        (status = 404, description = "No such asset.")
    ),
    security(("bearer" = [])),
    tag = "Allocations"
)]
pub async fn assign(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<AssignRequest>,
) -> HttpResult<(StatusCode, Json<ApiResponse<AllocationDto>>)> {
    let command = AssignAssetCommand {
        asset_id: payload.asset_id,
        assigned_to: payload.assigned_to,
        remarks: payload.remarks,
        assigned_date: payload.assigned_date,
    };

    let allocation = state
        .services
        .allocation_commands
        .assign(&user, command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(ApiResponse::new(allocation))))
}

#[utoipa::path(
    post,
    path = "/api/allocations/transfer",
    request_body = TransferRequest,
    responses(
        (status = 200, description = "Custody moved; the new allocation is returned.", body = AllocationDto),
        (status = 404, description = "No such asset.")
    ),
    security(("bearer" = [])),
    tag = "Allocations"
)]
pub async fn transfer(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<TransferRequest>,
) -> HttpResult<Json<ApiResponse<AllocationDto>>> {
    let command = TransferAssetCommand {
        asset_id: payload.asset_id,
        from_user: payload.from_user,
        to_user: payload.to_user,
        remarks: payload.remarks,
        transfer_date: payload.transfer_date,
    };

    state
        .services
        .allocation_commands
        .transfer(&user, command)
        .await
        .into_http()
        .map(|allocation| Json(ApiResponse::new(allocation)))
}

#[utoipa::path(
    post,
    path = "/api/allocations/return",
    request_body = ReturnRequest,
    responses(
        (status = 200, description = "Asset back in the pool; the closed allocation, or an empty object when none was active."),
        (status = 404, description = "No such asset.")
    ),
    security(("bearer" = [])),
    tag = "Allocations"
)]
pub async fn return_asset(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<ReturnRequest>,
) -> HttpResult<Json<ApiResponse<Value>>> {
    let command = ReturnAssetCommand {
        asset_id: payload.asset_id,
        return_date: payload.return_date,
        remarks: payload.remarks,
    };

    let closed = state
        .services
        .allocation_commands
        .return_asset(&user, command)
        .await
        .into_http()?;

    let data = match closed {
        Some(allocation) => serde_json::to_value(allocation).unwrap_or_else(|_| json!({})),
        None => json!({}),
    };
    Ok(Json(ApiResponse::new(data)))
}

#[utoipa::path(
    get,
    path = "/api/allocations/history/{asset_id}",
    params(("asset_id" = i64, Path, description = "Asset id")),
    responses((status = 200, description = "Custody history, newest first.", body = [AssetHistoryEntryDto])),
    security(("bearer" = [])),
    tag = "Allocations"
)]
pub async fn history(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(asset_id): Path<i64>,
) -> HttpResult<Json<ApiResponse<Vec<AssetHistoryEntryDto>>>> {
    state
        .services
        .allocation_queries
        .history_for_asset(&user, AssetHistoryQuery { asset_id })
        .await
        .into_http()
        .map(|entries| Json(ApiResponse::with_count(entries)))
}

#[utoipa::path(
    get,
    path = "/api/allocations/my-history",
    responses((status = 200, description = "Caller's allocation history, newest first.", body = [MyHistoryEntryDto])),
    security(("bearer" = [])),
    tag = "Allocations"
)]
pub async fn my_history(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<ApiResponse<Vec<MyHistoryEntryDto>>>> {
    state
        .services
        .allocation_queries
        .my_history(&user)
        .await
        .into_http()
        .map(|entries| Json(ApiResponse::with_count(entries)))
}
