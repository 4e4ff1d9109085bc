use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use sea_orm::EntityTrait;

use crate::api::response::ApiError;
use crate::infrastructure::auth::decode_jwt;
use crate::infrastructure::AppState;
use crate::models::user;

/// The caller, resolved from a Bearer token to a live account
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub id: String,
    pub username: String,
}

#[async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .and_then(|h| h.strip_prefix("Bearer "))
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| ApiError::unauthorized("Unauthorized request"))?;

        let claims = decode_jwt(token).map_err(|e| {
            tracing::debug!("Rejected access token: {}", e);
            ApiError::unauthorized("Invalid access token")
        })?;

        let account = user::Entity::find_by_id(claims.sub)
            .one(state.db())
            .await?
            .ok_or_else(|| ApiError::unauthorized("Invalid access token"))?;

        Ok(AuthUser {
            id: account.id,
            username: account.username,
        })
    }
}
