use axum::extract::{Query, State};
use serde_json::{json, Value};

use super::auth::AuthUser;
use super::response::{ApiResponse, ApiResult, ValidatedJson, ValidatedPath};
use super::PageQuery;
use crate::domain::validation::{CreatePlaylistRequest, UpdatePlaylistRequest};
use crate::infrastructure::AppState;
use crate::services::playlist_service;

#[utoipa::path(
    post,
    path = "/api/v1/playlist",
    tag = "vidtube",
    responses(
        (status = 200, description = "Playlist created"),
        (status = 400, description = "Invalid name or description")
    ),
    security(("bearer_auth" = []))
)]
pub async fn create_playlist(
    State(state): State<AppState>,
    viewer: AuthUser,
    ValidatedJson(body): ValidatedJson<CreatePlaylistRequest>,
) -> ApiResult<Value> {
    let playlist =
        playlist_service::create_playlist(state.playlist_repo.as_ref(), &viewer.id, body).await?;
    Ok(ApiResponse::ok(json!({ "playlist": playlist })))
}

/// Playlists owned by a user, newest first
#[utoipa::path(
    get,
    path = "/api/v1/playlist/user/{userId}",
    tag = "vidtube",
    params(
        ("userId" = String, Path, description = "Owner id"),
        PageQuery
    ),
    responses(
        (status = 200, description = "The user's playlists"),
        (status = 400, description = "Invalid user id")
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_user_playlists(
    State(state): State<AppState>,
    _viewer: AuthUser,
    ValidatedPath(user_id): ValidatedPath<String>,
    Query(query): Query<PageQuery>,
) -> ApiResult<Value> {
    let playlists = playlist_service::user_playlists(
        state.playlist_repo.as_ref(),
        &user_id,
        query.pagination(),
    )
    .await?;
    Ok(ApiResponse::ok(json!({ "playlists": playlists })))
}

#[utoipa::path(
    get,
    path = "/api/v1/playlist/{playlistId}",
    tag = "vidtube",
    params(("playlistId" = String, Path, description = "Playlist id")),
    responses(
        (status = 200, description = "Playlist with its videos"),
        (status = 400, description = "Invalid id"),
        (status = 404, description = "No playlist found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_playlist_by_id(
    State(state): State<AppState>,
    viewer: AuthUser,
    ValidatedPath(playlist_id): ValidatedPath<String>,
) -> ApiResult<Value> {
    let playlist =
        playlist_service::playlist_detail(state.playlist_repo.as_ref(), &playlist_id, &viewer.id)
            .await?;
    Ok(ApiResponse::ok(json!({ "playlist": playlist })))
}

#[utoipa::path(
    patch,
    path = "/api/v1/playlist/add/{videoId}/{playlistId}",
    tag = "vidtube",
    params(
        ("videoId" = String, Path, description = "Video id"),
        ("playlistId" = String, Path, description = "Playlist id")
    ),
    responses(
        (status = 200, description = "Video added"),
        (status = 400, description = "Invalid id"),
        (status = 404, description = "Playlist not owned or video not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn add_video_to_playlist(
    State(state): State<AppState>,
    viewer: AuthUser,
    ValidatedPath((video_id, playlist_id)): ValidatedPath<(String, String)>,
) -> ApiResult<Value> {
    let updated = playlist_service::add_video(
        state.playlist_repo.as_ref(),
        &playlist_id,
        &video_id,
        &viewer.id,
    )
    .await?;
    Ok(ApiResponse::ok(json!({ "added": true, "updatedPlaylist": updated })))
}

#[utoipa::path(
    patch,
    path = "/api/v1/playlist/remove/{videoId}/{playlistId}",
    tag = "vidtube",
    params(
        ("videoId" = String, Path, description = "Video id"),
        ("playlistId" = String, Path, description = "Playlist id")
    ),
    responses(
        (status = 200, description = "Video removed"),
        (status = 400, description = "Invalid id"),
        (status = 404, description = "Playlist not owned")
    ),
    security(("bearer_auth" = []))
)]
pub async fn remove_video_from_playlist(
    State(state): State<AppState>,
    viewer: AuthUser,
    ValidatedPath((video_id, playlist_id)): ValidatedPath<(String, String)>,
) -> ApiResult<Value> {
    let updated = playlist_service::remove_video(
        state.playlist_repo.as_ref(),
        &playlist_id,
        &video_id,
        &viewer.id,
    )
    .await?;
    Ok(ApiResponse::ok(json!({ "removed": true, "updatedPlaylist": updated })))
}

#[utoipa::path(
    patch,
    path = "/api/v1/playlist/{playlistId}",
    tag = "vidtube",
    params(("playlistId" = String, Path, description = "Playlist id")),
    responses(
        (status = 200, description = "Playlist updated"),
        (status = 400, description = "Invalid id or body"),
        (status = 404, description = "Playlist not owned")
    ),
    security(("bearer_auth" = []))
)]
pub async fn update_playlist(
    State(state): State<AppState>,
    viewer: AuthUser,
    ValidatedPath(playlist_id): ValidatedPath<String>,
    ValidatedJson(body): ValidatedJson<UpdatePlaylistRequest>,
) -> ApiResult<Value> {
    let updated = playlist_service::update_playlist(
        state.playlist_repo.as_ref(),
        &playlist_id,
        &viewer.id,
        body,
    )
    .await?;
    Ok(ApiResponse::ok(json!({ "updatedPlaylist": updated })))
}

#[utoipa::path(
    delete,
    path = "/api/v1/playlist/{playlistId}",
    tag = "vidtube",
    params(("playlistId" = String, Path, description = "Playlist id")),
    responses(
        (status = 200, description = "Playlist deleted"),
        (status = 400, description = "Invalid id"),
        (status = 404, description = "Playlist not owned")
    ),
    security(("bearer_auth" = []))
)]
pub async fn delete_playlist(
    State(state): State<AppState>,
    viewer: AuthUser,
    ValidatedPath(playlist_id): ValidatedPath<String>,
) -> ApiResult<Value> {
    let deleted =
        playlist_service::delete_playlist(state.playlist_repo.as_ref(), &playlist_id, &viewer.id)
            .await?;
    Ok(ApiResponse::ok(json!({ "deletedPlaylist": deleted })))
}
