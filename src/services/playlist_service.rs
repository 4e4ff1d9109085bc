//! Playlist Service - ownership and existence rules around the repository

use crate::domain::ids::parse_id;
use crate::domain::validation::{CreatePlaylistRequest, UpdatePlaylistRequest};
use crate::domain::{
    DomainError, Pagination, Playlist, PlaylistDetail, PlaylistOverview, PlaylistRepository,
};

pub const INVALID_ID: &str = "Provide valid id";
pub const INVALID_USER_ID: &str = "Please provide a valid id as user id";
pub const NOT_FOUND: &str = "No playlist found!!";
pub const NOT_OWNED: &str =
    "Either the playlist does not exist or you do not have permission to perform this action";

pub async fn create_playlist(
    repo: &dyn PlaylistRepository,
    owner_id: &str,
    body: CreatePlaylistRequest,
) -> Result<Playlist, DomainError> {
    let draft = body.into_draft()?;
    let playlist = repo.create(owner_id, draft).await?;
    tracing::info!("Playlist {} created by {}", playlist.id, owner_id);
    Ok(playlist)
}

pub async fn user_playlists(
    repo: &dyn PlaylistRepository,
    raw_user_id: &str,
    page: Pagination,
) -> Result<Vec<PlaylistOverview>, DomainError> {
    let user_id = parse_id(raw_user_id, INVALID_USER_ID)?;
    repo.find_by_owner(&user_id, page).await
}

pub async fn playlist_detail(
    repo: &dyn PlaylistRepository,
    raw_playlist_id: &str,
    viewer_id: &str,
) -> Result<PlaylistDetail, DomainError> {
    let playlist_id = parse_id(raw_playlist_id, INVALID_ID)?;
    repo.find_detail(&playlist_id, viewer_id)
        .await?
        .ok_or_else(|| DomainError::not_found(NOT_FOUND))
}

pub async fn add_video(
    repo: &dyn PlaylistRepository,
    raw_playlist_id: &str,
    raw_video_id: &str,
    owner_id: &str,
) -> Result<Playlist, DomainError> {
    let playlist_id = parse_id(raw_playlist_id, INVALID_ID)?;
    let video_id = parse_id(raw_video_id, INVALID_ID)?;

    repo.find_owned(&playlist_id, owner_id)
        .await?
        .ok_or_else(|| DomainError::not_found(NOT_OWNED))?;

    if !repo.video_exists(&video_id).await? {
        return Err(DomainError::not_found("Video not found"));
    }

    repo.add_video(&playlist_id, &video_id).await?;
    reload(repo, &playlist_id, owner_id).await
}

pub async fn remove_video(
    repo: &dyn PlaylistRepository,
    raw_playlist_id: &str,
    raw_video_id: &str,
    owner_id: &str,
) -> Result<Playlist, DomainError> {
    let playlist_id = parse_id(raw_playlist_id, INVALID_ID)?;
    let video_id = parse_id(raw_video_id, INVALID_ID)?;

    repo.find_owned(&playlist_id, owner_id)
        .await?
        .ok_or_else(|| DomainError::not_found(NOT_OWNED))?;

    repo.remove_video(&playlist_id, &video_id).await?;
    reload(repo, &playlist_id, owner_id).await
}

pub async fn update_playlist(
    repo: &dyn PlaylistRepository,
    raw_playlist_id: &str,
    owner_id: &str,
    body: UpdatePlaylistRequest,
) -> Result<Playlist, DomainError> {
    let playlist_id = parse_id(raw_playlist_id, INVALID_ID)?;
    let changes = body.into_changes()?;

    repo.update(&playlist_id, owner_id, changes)
        .await?
        .ok_or_else(|| DomainError::not_found(NOT_OWNED))
}

pub async fn delete_playlist(
    repo: &dyn PlaylistRepository,
    raw_playlist_id: &str,
    owner_id: &str,
) -> Result<Playlist, DomainError> {
    let playlist_id = parse_id(raw_playlist_id, INVALID_ID)?;
    let deleted = repo
        .delete(&playlist_id, owner_id)
        .await?
        .ok_or_else(|| DomainError::not_found(NOT_OWNED))?;
    tracing::info!("Playlist {} deleted by {}", deleted.id, owner_id);
    Ok(deleted)
}

/// The playlist after a mutation. Gone only if deleted concurrently.
async fn reload(
    repo: &dyn PlaylistRepository,
    playlist_id: &str,
    owner_id: &str,
) -> Result<Playlist, DomainError> {
    repo.find_owned(playlist_id, owner_id)
        .await?
        .ok_or_else(|| DomainError::not_found(NOT_OWNED))
}
