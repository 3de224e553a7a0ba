// src/presentation/http/controllers/auth.rs
use crate::application::{
    commands::users::{LoginUserCommand, RegisterUserCommand},
    dto::{AuthTokenDto, UserDto, UserProfileDto},
};
use crate::domain::user::Role;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, MaybeAuthenticated};
use crate::presentation::http::response::ApiResponse;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterRequest {
    pub employee_id: Option<String>,
    pub name: String,
    pub email: String,
    pub password: String,
    pub department: String,
    pub role: Option<Role>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub token: AuthTokenDto,
    pub user: UserDto,
}

#[utoipa::path(
    post,
    path = "/api/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Account created.", body = UserDto),
        (status = 403, description = "Registration is admin-only once bootstrapped.")
    ),
    tag = "Auth"
)]
pub async fn register(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    Json(payload): Json<RegisterRequest>,
) -> HttpResult<(StatusCode, Json<ApiResponse<UserDto>>)> {
    let command = RegisterUserCommand {
        employee_id: payload.employee_id,
        name: payload.name,
        email: payload.email,
        password: payload.password,
        department: payload.department,
        role: payload.role,
    };

    let user = state
        .services
        .user_commands
        .register(actor.0.as_ref(), command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(ApiResponse::new(user))))
}

#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Token issued.", body = LoginResponse),
        (status = 401, description = "Invalid credentials.")
    ),
    tag = "Auth"
)]
pub async fn login(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<LoginRequest>,
) -> HttpResult<Json<ApiResponse<LoginResponse>>> {
    let command = LoginUserCommand {
        email: payload.email,
        password: payload.password,
    };

    let result = state
        .services
        .user_commands
        .login(command)
        .await
        .into_http()?;

    Ok(Json(ApiResponse::new(LoginResponse {
        token: result.token,
        user: result.user,
    })))
}

#[utoipa::path(
    get,
    path = "/api/auth/me",
    responses((status = 200, description = "Caller profile.", body = UserProfileDto)),
    security(("bearer" = [])),
    tag = "Auth"
)]
pub async fn me(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<ApiResponse<UserProfileDto>>> {
    state
        .services
        .user_queries
        .get_profile(&user)
        .await
        .into_http()
        .map(|profile| Json(ApiResponse::new(profile)))
}
