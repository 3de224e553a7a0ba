// src/presentation/http/controllers/assets.rs
use crate::application::{
    commands::assets::{CreateAssetCommand, DeleteAssetCommand, UpdateAssetCommand},
    dto::{AssetDto, Page},
    queries::assets::{GetAssetQuery, ListAssetsQuery},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::response::ApiResponse;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::{Value, json};
use utoipa::ToSchema;

fn default_page() -> u32 {
    1
}

fn default_limit() -> u32 {
    10
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AssetListParams {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub asset_type: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateAssetRequest {
    pub asset_tag: String,
    pub asset_type: String,
    pub brand: String,
    pub model: String,
    pub serial_number: String,
    pub purchase_date: DateTime<Utc>,
    pub warranty_expiry_date: DateTime<Utc>,
    pub vendor: String,
    pub cost: f64,
    pub department: String,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateAssetRequest {
    pub asset_type: Option<String>,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub serial_number: Option<String>,
    pub purchase_date: Option<DateTime<Utc>>,
    pub warranty_expiry_date: Option<DateTime<Utc>>,
    pub vendor: Option<String>,
    pub cost: Option<f64>,
    pub department: Option<String>,
    pub status: Option<String>,
    pub notes: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/assets",
    responses((status = 200, description = "Filtered asset page.", body = Page<AssetDto>)),
    security(("bearer" = [])),
    tag = "Assets"
)]
pub async fn list_assets(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Query(params): Query<AssetListParams>,
) -> HttpResult<Json<ApiResponse<Page<AssetDto>>>> {
    let query = ListAssetsQuery {
        status: params.status,
        asset_type: params.asset_type,
        department: params.department,
        page: params.page,
        limit: params.limit,
    };

    let page = state
        .services
        .asset_queries
        .list_assets(&user, query)
        .await
        .into_http()?;

    let count = page.items.len();
    Ok(Json(ApiResponse {
        success: true,
        data: page,
        count: Some(count),
    }))
}

#[utoipa::path(
    get,
    path = "/api/assets/my-assets",
    responses((status = 200, description = "Assets held by the caller.", body = [AssetDto])),
    security(("bearer" = [])),
    tag = "Assets"
)]
pub async fn my_assets(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<ApiResponse<Vec<AssetDto>>>> {
    state
        .services
        .asset_queries
        .my_assets(&user)
        .await
        .into_http()
        .map(|assets| Json(ApiResponse::with_count(assets)))
}

#[utoipa::path(
    get,
    path = "/api/assets/{id}",
    params(("id" = i64, Path, description = "Asset id")),
    responses(
        (status = 200, description = "Single asset.", body = AssetDto),
        (status = 404, description = "No such asset.")
    ),
    security(("bearer" = [])),
    tag = "Assets"
)]
pub async fn get_asset(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<ApiResponse<AssetDto>>> {
    state
        .services
        .asset_queries
        .get_asset(&user, GetAssetQuery { id })
        .await
        .into_http()
        .map(|asset| Json(ApiResponse::new(asset)))
}

#[utoipa::path(
    post,
    path = "/api/assets",
    request_body = CreateAssetRequest,
    responses((status = 201, description = "Asset registered.", body = AssetDto)),
    security(("bearer" = [])),
    tag = "Assets"
)]
pub async fn create_asset(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<CreateAssetRequest>,
) -> HttpResult<(StatusCode, Json<ApiResponse<AssetDto>>)> {
    let command = CreateAssetCommand {
        asset_tag: payload.asset_tag,
        asset_type: payload.asset_type,
        brand: payload.brand,
        model: payload.model,
        serial_number: payload.serial_number,
        purchase_date: payload.purchase_date,
        warranty_expiry_date: payload.warranty_expiry_date,
        vendor: payload.vendor,
        cost: payload.cost,
        department: payload.department,
        notes: payload.notes,
    };

    let created = state
        .services
        .asset_commands
        .create_asset(&user, command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(ApiResponse::new(created))))
}

#[utoipa::path(
    put,
    path = "/api/assets/{id}",
    params(("id" = i64, Path, description = "Asset id")),
    request_body = UpdateAssetRequest,
    responses((status = 200, description = "Updated asset.", body = AssetDto)),
    security(("bearer" = [])),
    tag = "Assets"
)]
pub async fn update_asset(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateAssetRequest>,
) -> HttpResult<Json<ApiResponse<AssetDto>>> {
    let command = UpdateAssetCommand {
        id,
        asset_type: payload.asset_type,
        brand: payload.brand,
        model: payload.model,
        serial_number: payload.serial_number,
        purchase_date: payload.purchase_date,
        warranty_expiry_date: payload.warranty_expiry_date,
        vendor: payload.vendor,
        cost: payload.cost,
        department: payload.department,
        status: payload.status,
        notes: payload.notes,
    };

    state
        .services
        .asset_commands
        .update_asset(&user, command)
        .await
        .into_http()
        .map(|updated| Json(ApiResponse::new(updated)))
}

#[utoipa::path(
    delete,
    path = "/api/assets/{id}",
    params(("id" = i64, Path, description = "Asset id")),
    responses((status = 200, description = "Asset removed.")),
    security(("bearer" = [])),
    tag = "Assets"
)]
pub async fn delete_asset(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<ApiResponse<Value>>> {
    state
        .services
        .asset_commands
        .delete_asset(&user, DeleteAssetCommand { id })
        .await
        .into_http()?;

    Ok(Json(ApiResponse::new(json!({}))))
}
