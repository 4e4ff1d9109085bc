use axum::extract::{Query, State};
use serde_json::{json, Value};

use super::auth::AuthUser;
use super::response::{ApiResponse, ApiResult};
use super::PageQuery;
use crate::infrastructure::AppState;

/// Totals for the caller's channel
#[utoipa::path(
    get,
    path = "/api/v1/dashboard/stats",
    tag = "vidtube",
    responses(
        (status = 200, description = "Channel stats"),
        (status = 401, description = "Missing or invalid access token")
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_channel_stats(
    State(state): State<AppState>,
    viewer: AuthUser,
) -> ApiResult<Value> {
    let stats = state.channel_repo.stats(&viewer.id).await?;
    Ok(ApiResponse::ok(json!({ "stats": stats })))
}

/// The caller's own videos, published or not
#[utoipa::path(
    get,
    path = "/api/v1/dashboard/videos",
    tag = "vidtube",
    params(PageQuery),
    responses(
        (status = 200, description = "Channel videos, newest first"),
        (status = 401, description = "Missing or invalid access token")
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_channel_videos(
    State(state): State<AppState>,
    viewer: AuthUser,
    Query(query): Query<PageQuery>,
) -> ApiResult<Value> {
    let videos = state
        .channel_repo
        .videos(&viewer.id, query.pagination())
        .await?;
    Ok(ApiResponse::ok(json!({ "videos": videos })))
}
