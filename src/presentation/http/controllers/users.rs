// src/presentation/http/controllers/users.rs
use crate::application::{
    commands::users::{CreateUserCommand, DeleteUserCommand, UpdateUserCommand},
    dto::UserDto,
};
use crate::domain::user::Role;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::response::ApiResponse;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};
use serde::Deserialize;
use serde_json::{Value, json};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub department: String,
    pub role: Option<Role>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub department: Option<String>,
    pub role: Option<Role>,
}

#[utoipa::path(
    get,
    path = "/api/users",
    responses((status = 200, description = "All accounts.", body = [UserDto])),
    security(("bearer" = [])),
    tag = "Users"
)]
pub async fn list_users(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<ApiResponse<Vec<UserDto>>>> {
    state
        .services
        .user_queries
        .list_users(&user)
        .await
        .into_http()
        .map(|users| Json(ApiResponse::with_count(users)))
}

#[utoipa::path(
    post,
    path = "/api/users",
    request_body = CreateUserRequest,
    responses((status = 201, description = "Account created with a generated employee id.", body = UserDto)),
    security(("bearer" = [])),
    tag = "Users"
)]
pub async fn create_user(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<CreateUserRequest>,
) -> HttpResult<(StatusCode, Json<ApiResponse<UserDto>>)> {
    let command = CreateUserCommand {
        name: payload.name,
        email: payload.email,
        password: payload.password,
        department: payload.department,
        role: payload.role,
    };

    let created = state
        .services
        .user_commands
        .create_user(&user, command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(ApiResponse::new(created))))
}

#[utoipa::path(
    put,
    path = "/api/users/{id}",
    params(("id" = i64, Path, description = "User id")),
    request_body = UpdateUserRequest,
    responses((status = 200, description = "Updated account.", body = UserDto)),
    security(("bearer" = [])),
    tag = "Users"
)]
pub async fn update_user(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateUserRequest>,
) -> HttpResult<Json<ApiResponse<UserDto>>> {
    let command = UpdateUserCommand {
        user_id: id,
        name: payload.name,
        email: payload.email,
        department: payload.department,
        role: payload.role,
    };

    state
        .services
        .user_commands
        .update_user(&user, command)
        .await
        .into_http()
        .map(|updated| Json(ApiResponse::new(updated)))
}

#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    params(("id" = i64, Path, description = "User id")),
    responses((status = 200, description = "Account removed.")),
    security(("bearer" = [])),
    tag = "Users"
)]
pub async fn delete_user(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<ApiResponse<Value>>> {
    state
        .services
        .user_commands
        .delete_user(&user, DeleteUserCommand { user_id: id })
        .await
        .into_http()?;

    Ok(Json(ApiResponse::new(json!({}))))
}
