use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use super::PageParams;
use crate::api::errors::ApiError;
use crate::api::middleware::EditorAuth;
use crate::api::state::AppState;
use crate::dto::{CreateUpdateProjectRequest, ProjectListResponse, ProjectResponse};

fn not_found(id: &str) -> ApiError {
    ApiError::not_found(format!("Project '{}' not found", id))
}

/// GET /api/projects
pub async fn list_projects(
    State(state): State<AppState>,
) -> Result<Json<ProjectListResponse>, ApiError> {
    let projects = state.projects.get_all().await?;
    Ok(Json(state.projects.to_list_response(&projects)))
}

/// GET /api/projects/featured
pub async fn featured_projects(
    State(state): State<AppState>,
) -> Result<Json<ProjectListResponse>, ApiError> {
    let projects = state.projects.get_featured().await?;
    Ok(Json(state.projects.to_list_response(&projects)))
}

/// GET /api/projects/page?page=&size=
pub async fn projects_page(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> Result<Json<ProjectListResponse>, ApiError> {
    let projects = state
        .projects
        .get_by_page(params.page(), params.size())
        .await?;
    Ok(Json(state.projects.to_list_response(&projects)))
}

/// GET /api/projects/technology/:technology
pub async fn projects_by_technology(
    State(state): State<AppState>,
    Path(technology): Path<String>,
) -> Result<Json<ProjectListResponse>, ApiError> {
    let projects = state.projects.get_by_technology(&technology).await?;
    Ok(Json(state.projects.to_list_response(&projects)))
}

/// GET /api/projects/:id
pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ProjectResponse>, ApiError> {
    let project = state
        .projects
        .get_by_id(&id)
        .await?
        .ok_or_else(|| not_found(&id))?;
    Ok(Json(state.projects.to_response(&project)))
}

/// POST /api/projects
pub async fn create_project(
    State(state): State<AppState>,
    EditorAuth(_claims): EditorAuth,
    Json(req): Json<CreateUpdateProjectRequest>,
) -> Result<(StatusCode, Json<ProjectResponse>), ApiError> {
    let project = state.projects.create(&req).await?;
    Ok((StatusCode::CREATED, Json(state.projects.to_response(&project))))
}

/// PUT /api/projects/:id
pub async fn update_project(
    State(state): State<AppState>,
    EditorAuth(_claims): EditorAuth,
    Path(id): Path<String>,
    Json(req): Json<CreateUpdateProjectRequest>,
) -> Result<Json<ProjectResponse>, ApiError> {
    let project = state
        .projects
        .update(&id, &req)
        .await?
        .ok_or_else(|| not_found(&id))?;
    Ok(Json(state.projects.to_response(&project)))
}

/// POST /api/projects/:id/toggle-featured
pub async fn toggle_featured(
    State(state): State<AppState>,
    EditorAuth(_claims): EditorAuth,
    Path(id): Path<String>,
) -> Result<Json<ProjectResponse>, ApiError> {
    let project = state
        .projects
        .toggle_featured(&id)
        .await?
        .ok_or_else(|| not_found(&id))?;
    Ok(Json(state.projects.to_response(&project)))
}

/// DELETE /api/projects/:id
pub async fn delete_project(
    State(state): State<AppState>,
    EditorAuth(_claims): EditorAuth,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    if state.projects.delete(&id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(&id))
    }
}
