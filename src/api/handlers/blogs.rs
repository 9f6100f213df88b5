use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use super::PageParams;
use crate::api::errors::ApiError;
use crate::api::middleware::EditorAuth;
use crate::api::state::AppState;
use crate::dto::{BlogListResponse, BlogResponse, CreateUpdateBlogRequest};

fn not_found(key: &str) -> ApiError {
    ApiError::not_found(format!("Blog post '{}' not found", key))
}

/// GET /api/blogs?page=&size=, published only
pub async fn list_published(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> Result<Json<BlogListResponse>, ApiError> {
    let posts = state
        .blogs
        .get_published(params.page(), params.size())
        .await?;
    Ok(Json(state.blogs.to_list_response(&posts)))
}

/// GET /api/blogs/all, drafts included
pub async fn list_all(
    State(state): State<AppState>,
    EditorAuth(_claims): EditorAuth,
) -> Result<Json<BlogListResponse>, ApiError> {
    let posts = state.blogs.get_all().await?;
    Ok(Json(state.blogs.to_list_response(&posts)))
}

/// GET /api/blogs/slug/:slug
pub async fn get_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<BlogResponse>, ApiError> {
    let post = state
        .blogs
        .get_by_slug(&slug)
        .await?
        .ok_or_else(|| not_found(&slug))?;
    Ok(Json(state.blogs.to_response(&post)))
}

/// GET /api/blogs/tag/:tag?page=&size=
pub async fn list_by_tag(
    State(state): State<AppState>,
    Path(tag): Path<String>,
    Query(params): Query<PageParams>,
) -> Result<Json<BlogListResponse>, ApiError> {
    let posts = state
        .blogs
        .get_by_tag(&tag, params.page(), params.size())
        .await?;
    Ok(Json(state.blogs.to_list_response(&posts)))
}

/// GET /api/blogs/:id
///
/// Drafts are only visible to editors.
pub async fn get_blog(
    State(state): State<AppState>,
    editor: Option<EditorAuth>,
    Path(id): Path<String>,
) -> Result<Json<BlogResponse>, ApiError> {
    let post = state
        .blogs
        .get_by_id(&id)
        .await?
        .filter(|post| post.published || editor.is_some())
        .ok_or_else(|| not_found(&id))?;
    Ok(Json(state.blogs.to_response(&post)))
}

/// POST /api/blogs
pub async fn create_blog(
    State(state): State<AppState>,
    EditorAuth(_claims): EditorAuth,
    Json(req): Json<CreateUpdateBlogRequest>,
) -> Result<(StatusCode, Json<BlogResponse>), ApiError> {
    let post = state.blogs.create(&req).await?;
    Ok((StatusCode::CREATED, Json(state.blogs.to_response(&post))))
}

/// PUT /api/blogs/:id
pub async fn update_blog(
    State(state): State<AppState>,
    EditorAuth(_claims): EditorAuth,
    Path(id): Path<String>,
    Json(req): Json<CreateUpdateBlogRequest>,
) -> Result<Json<BlogResponse>, ApiError> {
    let post = state
        .blogs
        .update(&id, &req)
        .await?
        .ok_or_else(|| not_found(&id))?;
    Ok(Json(state.blogs.to_response(&post)))
}

/// POST /api/blogs/:id/toggle-published
pub async fn toggle_published(
    State(state): State<AppState>,
    EditorAuth(_claims): EditorAuth,
    Path(id): Path<String>,
) -> Result<Json<BlogResponse>, ApiError> {
    let post = state
        .blogs
        .toggle_published(&id)
        .await?
        .ok_or_else(|| not_found(&id))?;
    Ok(Json(state.blogs.to_response(&post)))
}

/// DELETE /api/blogs/:id
pub async fn delete_blog(
    State(state): State<AppState>,
    EditorAuth(_claims): EditorAuth,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    if state.blogs.delete(&id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(&id))
    }
}
