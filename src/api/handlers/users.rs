use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;

use crate::api::errors::ApiError;
use crate::api::middleware::AdminAuth;
use crate::api::state::AppState;
use crate::dto::{CreateUpdateUserRequest, UserListResponse, UserResponse};

fn not_found(id: &str) -> ApiError {
    ApiError::not_found(format!("User '{}' not found", id))
}

/// GET /api/users
pub async fn list_users(
    State(state): State<AppState>,
    AdminAuth(_claims): AdminAuth,
) -> Result<Json<UserListResponse>, ApiError> {
    let users = state.users.get_all().await?;
    Ok(Json(state.users.to_list_response(&users)))
}

/// GET /api/users/:id
pub async fn get_user(
    State(state): State<AppState>,
    AdminAuth(_claims): AdminAuth,
    Path(id): Path<String>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = state
        .users
        .get_by_id(&id)
        .await?
        .ok_or_else(|| not_found(&id))?;
    Ok(Json(state.users.to_response(&user)))
}

/// POST /api/users
pub async fn create_user(
    State(state): State<AppState>,
    AdminAuth(claims): AdminAuth,
    Json(req): Json<CreateUpdateUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    let user = state.users.create_user(&req).await?;
    info!(admin = %claims.username, user_id = %user.id, "Admin created user");
    Ok((StatusCode::CREATED, Json(state.users.to_response(&user))))
}

/// PUT /api/users/:id
pub async fn update_user(
    State(state): State<AppState>,
    AdminAuth(_claims): AdminAuth,
    Path(id): Path<String>,
    Json(req): Json<CreateUpdateUserRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = state
        .users
        .update_user(&id, &req)
        .await?
        .ok_or_else(|| not_found(&id))?;
    Ok(Json(state.users.to_response(&user)))
}

/// DELETE /api/users/:id
pub async fn delete_user(
    State(state): State<AppState>,
    AdminAuth(_claims): AdminAuth,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    if state.users.delete(&id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(&id))
    }
}
