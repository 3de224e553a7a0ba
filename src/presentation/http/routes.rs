// src/presentation/http/routes.rs
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{allocations, assets, audit, auth, maintenance, reports, users},
    middleware::rate_limit::rate_limit_layer,
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    http::Method,
    routing::{get, post, put},
};
use std::time::Duration;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

pub fn build_router(state: HttpState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(tower_http::cors::Any)
        .max_age(Duration::from_secs(3600));

    let api = Router::new()
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/me", get(auth::me))
        .route(
            "/api/users",
            get(users::list_users).post(users::create_user),
        )
        .route(
            "/api/users/{id}",
            put(users::update_user).delete(users::delete_user),
        )
        .route("/api/assets/my-assets", get(assets::my_assets))
        .route(
            "/api/assets",
            get(assets::list_assets).post(assets::create_asset),
        )
        .route(
            "/api/assets/{id}",
            get(assets::get_asset)
                .put(assets::update_asset)
                .delete(assets::delete_asset),
        )
        .route("/api/allocations/assign", post(allocations::assign))
        .route("/api/allocations/transfer", post(allocations::transfer))
        .route("/api/allocations/return", post(allocations::return_asset))
        .route(
            "/api/allocations/history/{asset_id}",
            get(allocations::history),
        )
        .route("/api/allocations/my-history", get(allocations::my_history))
        .route(
            "/api/maintenance",
            post(maintenance::open).get(maintenance::list),
        )
        .route("/api/maintenance/{id}/close", put(maintenance::close))
        .route(
            "/api/maintenance/asset/{asset_id}",
            get(maintenance::for_asset),
        )
        .route("/api/reports/inventory", get(reports::inventory))
        .route("/api/reports/warranty", get(reports::warranty))
        .route("/api/reports/maintenance", get(reports::maintenance_due))
        .route("/api/auditlogs", get(audit::list_audit_logs))
        .layer(rate_limit_layer());

    Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .merge(api)
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(Extension(state))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
