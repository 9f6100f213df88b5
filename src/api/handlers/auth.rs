use axum::{extract::State, Json};
use serde::Serialize;
use serde_json::{json, Value};
use tracing::warn;
use uuid::Uuid;

use crate::api::errors::ApiError;
use crate::api::state::AppState;
use crate::auth::jwt::create_token;
use crate::domain::identity::parse_id;
use crate::dto::{AuthRequest, UserResponse};

/// Response from successful login
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserResponse,
}

/// Login with username and password
///
/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<AuthRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let user = state
        .users
        .authenticate(&req)
        .await?
        .ok_or_else(|| ApiError::unauthorized("Invalid credentials"))?;

    let user_id: Uuid = parse_id(&user.id).ok_or_else(|| {
        warn!(user_id = %user.id, "Stored user has an unusable id");
        ApiError::internal_server_error("Failed to generate token")
    })?;

    let token = create_token(
        user_id,
        &user.username,
        user.role,
        &state.jwt.secret,
        state.jwt.lifetime_hours,
    )
    .map_err(|e| ApiError::internal_server_error(format!("Failed to generate token: {}", e)))?;

    Ok(Json(LoginResponse {
        token,
        user: state.users.to_response(&user),
    }))
}

/// Health check endpoint
///
/// GET /health
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "portfolio-api"
    }))
}
