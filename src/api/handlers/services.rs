use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::api::errors::ApiError;
use crate::api::middleware::EditorAuth;
use crate::api::state::AppState;
use crate::dto::{CreateUpdateServiceRequest, ServiceListResponse, ServiceResponse};

fn not_found(id: &str) -> ApiError {
    ApiError::not_found(format!("Service '{}' not found", id))
}

/// GET /api/services, ascending display order
pub async fn list_services(
    State(state): State<AppState>,
) -> Result<Json<ServiceListResponse>, ApiError> {
    let services = state.services.get_all().await?;
    Ok(Json(state.services.to_list_response(&services)))
}

/// GET /api/services/featured
pub async fn featured_services(
    State(state): State<AppState>,
) -> Result<Json<ServiceListResponse>, ApiError> {
    let services = state.services.get_featured().await?;
    Ok(Json(state.services.to_list_response(&services)))
}

/// GET /api/services/:id
pub async fn get_service(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ServiceResponse>, ApiError> {
    let service = state
        .services
        .get_by_id(&id)
        .await?
        .ok_or_else(|| not_found(&id))?;
    Ok(Json(state.services.to_response(&service)))
}

/// POST /api/services
pub async fn create_service(
    State(state): State<AppState>,
    EditorAuth(_claims): EditorAuth,
    Json(req): Json<CreateUpdateServiceRequest>,
) -> Result<(StatusCode, Json<ServiceResponse>), ApiError> {
    let service = state.services.create(&req).await?;
    Ok((StatusCode::CREATED, Json(state.services.to_response(&service))))
}

/// PUT /api/services/:id
pub async fn update_service(
    State(state): State<AppState>,
    EditorAuth(_claims): EditorAuth,
    Path(id): Path<String>,
    Json(req): Json<CreateUpdateServiceRequest>,
) -> Result<Json<ServiceResponse>, ApiError> {
    let service = state
        .services
        .update(&id, &req)
        .await?
        .ok_or_else(|| not_found(&id))?;
    Ok(Json(state.services.to_response(&service)))
}

/// POST /api/services/:id/toggle-featured
pub async fn toggle_featured(
    State(state): State<AppState>,
    EditorAuth(_claims): EditorAuth,
    Path(id): Path<String>,
) -> Result<Json<ServiceResponse>, ApiError> {
    let service = state
        .services
        .toggle_featured(&id)
        .await?
        .ok_or_else(|| not_found(&id))?;
    Ok(Json(state.services.to_response(&service)))
}

/// DELETE /api/services/:id
///
/// Always 204, whether or not the service existed.
pub async fn delete_service(
    State(state): State<AppState>,
    EditorAuth(_claims): EditorAuth,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.services.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
