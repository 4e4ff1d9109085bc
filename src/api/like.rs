use axum::extract::{Query, State};
use serde_json::{json, Value};

use super::auth::AuthUser;
use super::response::{ApiResponse, ApiResult, ValidatedPath};
use super::PageQuery;
use crate::domain::LikeKind;
use crate::infrastructure::AppState;
use crate::services::like_service::{self, ToggleOutcome};

async fn toggle(
    state: &AppState,
    kind: LikeKind,
    raw_id: &str,
    viewer: &AuthUser,
) -> ApiResult<ToggleOutcome> {
    let target = like_service::target(kind, raw_id)?;
    let outcome = like_service::toggle_like(state.like_repo.as_ref(), &target, &viewer.id).await?;
    Ok(ApiResponse::ok(outcome))
}

#[utoipa::path(
    post,
    path = "/api/v1/likes/toggle/v/{videoId}",
    tag = "vidtube",
    params(("videoId" = String, Path, description = "Video id")),
    responses(
        (status = 200, description = "Like toggled"),
        (status = 400, description = "Invalid id"),
        (status = 404, description = "Video not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn toggle_video_like(
    State(state): State<AppState>,
    viewer: AuthUser,
    ValidatedPath(video_id): ValidatedPath<String>,
) -> ApiResult<ToggleOutcome> {
    toggle(&state, LikeKind::Video, &video_id, &viewer).await
}

#[utoipa::path(
    post,
    path = "/api/v1/likes/toggle/c/{commentId}",
    tag = "vidtube",
    params(("commentId" = String, Path, description = "Comment id")),
    responses(
        (status = 200, description = "Like toggled"),
        (status = 400, description = "Invalid id"),
        (status = 404, description = "Comment not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn toggle_comment_like(
    State(state): State<AppState>,
    viewer: AuthUser,
    ValidatedPath(comment_id): ValidatedPath<String>,
) -> ApiResult<ToggleOutcome> {
    toggle(&state, LikeKind::Comment, &comment_id, &viewer).await
}

#[utoipa::path(
    post,
    path = "/api/v1/likes/toggle/t/{tweetId}",
    tag = "vidtube",
    params(("tweetId" = String, Path, description = "Tweet id")),
    responses(
        (status = 200, description = "Like toggled"),
        (status = 400, description = "Invalid id"),
        (status = 404, description = "Tweet not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn toggle_tweet_like(
    State(state): State<AppState>,
    viewer: AuthUser,
    ValidatedPath(tweet_id): ValidatedPath<String>,
) -> ApiResult<ToggleOutcome> {
    toggle(&state, LikeKind::Tweet, &tweet_id, &viewer).await
}

/// Videos the caller liked, most recent like first
#[utoipa::path(
    get,
    path = "/api/v1/likes/videos",
    tag = "vidtube",
    params(PageQuery),
    responses(
        (status = 200, description = "Liked videos"),
        (status = 401, description = "Missing or invalid access token")
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_liked_videos(
    State(state): State<AppState>,
    viewer: AuthUser,
    Query(query): Query<PageQuery>,
) -> ApiResult<Value> {
    let videos = state
        .like_repo
        .liked_videos(&viewer.id, query.pagination())
        .await?;
    Ok(ApiResponse::ok(json!({ "videos": videos })))
}
