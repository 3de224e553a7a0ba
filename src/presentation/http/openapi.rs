// src/presentation/http/openapi.rs
use axum::Router;
use serde::{Deserialize, Serialize};
use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::routes::health,
        crate::presentation::http::controllers::auth::register,
        crate::presentation::http::controllers::auth::login,
        crate::presentation::http::controllers::auth::me,
        crate::presentation::http::controllers::users::list_users,
        crate::presentation::http::controllers::users::create_user,
        crate::presentation::http::controllers::users::update_user,
        crate::presentation::http::controllers::users::delete_user,
        crate::presentation::http::controllers::assets::list_assets,
        crate::presentation::http::controllers::assets::my_assets,
        crate::presentation::http::controllers::assets::get_asset,
        crate::presentation::http::controllers::assets::create_asset,
        crate::presentation::http::controllers::assets::update_asset,
        crate::presentation::http::controllers::assets::delete_asset,
        crate::presentation::http::controllers::allocations::assign,
        crate::presentation::http::controllers::allocations::transfer,
        crate::presentation::http::controllers::allocations::return_asset,
        crate::presentation::http::controllers::allocations::history,
        crate::presentation::http::controllers::allocations::my_history,
        crate::presentation::http::controllers::maintenance::open,
        crate::presentation::http::controllers::maintenance::close,
        crate::presentation::http::controllers::maintenance::list,
        crate::presentation::http::controllers::maintenance::for_asset,
        crate::presentation::http::controllers::reports::inventory,
        crate::presentation::http::controllers::reports::warranty,
        crate::presentation::http::controllers::reports::maintenance_due,
        crate::presentation::http::controllers::audit::list_audit_logs,
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::auth::RegisterRequest,
            crate::presentation::http::controllers::auth::LoginRequest,
            crate::presentation::http::controllers::auth::LoginResponse,
            crate::presentation::http::controllers::users::CreateUserRequest,
            crate::presentation::http::controllers::users::UpdateUserRequest,
            crate::presentation::http::controllers::assets::AssetListParams,
            crate::presentation::http::controllers::assets::CreateAssetRequest,
            crate::presentation::http::controllers::assets::UpdateAssetRequest,
            crate::presentation::http::controllers::allocations::AssignRequest,
            crate::presentation::http::controllers::allocations::TransferRequest,
            crate::presentation::http::controllers::allocations::ReturnRequest,
            crate::presentation::http::controllers::maintenance::OpenMaintenanceRequest,
            crate::presentation::http::controllers::audit::AuditListParams,
            crate::application::dto::UserDto,
            crate::application::dto::UserProfileDto,
            crate::application::dto::CapabilityView,
            crate::application::dto::AuthTokenDto,
            crate::application::dto::AssetDto,
            crate::application::dto::AllocationDto,
            crate::application::dto::AssetHistoryEntryDto,
            crate::application::dto::MyHistoryEntryDto,
            crate::application::dto::AssetSummaryDto,
            crate::application::dto::PartyDto,
            crate::application::dto::MaintenanceDto,
            crate::application::dto::AuditLogDto,
            crate::application::dto::GroupCountDto,
            crate::application::dto::InventoryReportDto,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "System", description = "Liveness"),
        (name = "Auth", description = "Registration, login, caller profile"),
        (name = "Users", description = "Account administration"),
        (name = "Assets", description = "Inventory CRUD"),
        (name = "Allocations", description = "Assign, transfer and return assets"),
        (name = "Maintenance", description = "Service episodes"),
        (name = "Reports", description = "Aggregate views"),
        (name = "Audit", description = "Immutable action trail"),
    ),
    info(
        title = "quartermaster",
        description = "IT asset tracking service: inventory, allocation lifecycle, maintenance and audit trail."
    )
)]
pub struct ApiDoc;

pub fn docs_router() -> Router {
    Router::new().merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
