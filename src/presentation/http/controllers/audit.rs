// src/presentation/http/controllers/audit.rs
use crate::application::{
    dto::{AuditLogDto, CursorPage},
    queries::audit::ListAuditLogsQuery,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::response::ApiResponse;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Query};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct AuditListParams {
    #[serde(default)]
    pub limit: Option<u32>,
    #[serde(default)]
    pub cursor: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/auditlogs",
    responses((status = 200, description = "Audit trail, newest first.", body = CursorPage<AuditLogDto>)),
    security(("bearer" = [])),
    tag = "Audit"
)]
pub async fn list_audit_logs(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Query(params): Query<AuditListParams>,
) -> HttpResult<Json<ApiResponse<CursorPage<AuditLogDto>>>> {
    let page = state
        .services
        .audit_queries
        .list_audit_logs(
            &user,
            ListAuditLogsQuery {
                limit: params.limit,
                cursor: params.cursor,
            },
        )
        .await
        .into_http()?;

    let count = page.items.len();
    Ok(Json(ApiResponse {
        success: true,
        data: page,
        count: Some(count),
    }))
}
