use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

use crate::api::errors::ApiError;
use crate::api::state::AppState;
use crate::auth::jwt::{verify_token, Claims};
use crate::domain::user::Role;

/// Any caller holding a valid bearer token
///
/// Usage:
/// ```rust,ignore
/// async fn protected_handler(JwtAuth(claims): JwtAuth) -> String {
///     format!("Hello {}", claims.username)
/// }
/// ```
pub struct JwtAuth(pub Claims);

/// Caller allowed to manage site content (ADMIN or CONTRIBUTOR)
pub struct EditorAuth(pub Claims);

/// Caller with the ADMIN role
pub struct AdminAuth(pub Claims);

#[async_trait]
impl FromRequestParts<AppState> for JwtAuth {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| ApiError::unauthorized("Missing authorization header"))?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            ApiError::unauthorized("Invalid authorization format. Use: Bearer <token>")
        })?;

        let claims = verify_token(token, &state.jwt.secret)
            .map_err(|e| ApiError::unauthorized(format!("Invalid token: {}", e)))?;

        Ok(JwtAuth(claims))
    }
}

#[async_trait]
impl FromRequestParts<AppState> for EditorAuth {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let JwtAuth(claims) = JwtAuth::from_request_parts(parts, state).await?;
        if !claims.role.can_edit_content() {
            return Err(ApiError::forbidden("Content editing requires CONTRIBUTOR or ADMIN"));
        }
        Ok(EditorAuth(claims))
    }
}

#[async_trait]
impl FromRequestParts<AppState> for AdminAuth {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let JwtAuth(claims) = JwtAuth::from_request_parts(parts, state).await?;
        if claims.role != Role::Admin {
            return Err(ApiError::forbidden("Requires ADMIN role"));
        }
        Ok(AdminAuth(claims))
    }
}
