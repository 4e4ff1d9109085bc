//! Repository trait definitions
//!
//! These traits define the contract for data access, together with the
//! read models they return. Implementations live in the infrastructure layer.

use async_trait::async_trait;
use serde::Serialize;

use super::{DomainError, Pagination, VideoCard};

/// Public profile fields embedded wherever a user is referenced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerSummary {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
    pub full_name: String,
    pub avatar: Option<String>,
}

// ---------------------------------------------------------------------------
// Dashboard
// ---------------------------------------------------------------------------

/// Channel-wide totals
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelStats {
    pub total_videos: u64,
    pub total_views: u64,
    pub total_subscribers: u64,
    pub total_likes: u64,
}

/// One of the channel owner's videos, with engagement counts
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelVideo {
    #[serde(rename = "_id")]
    pub id: String,
    pub video_file: String,
    pub thumbnail: String,
    pub title: String,
    pub description: String,
    pub duration: f64,
    pub views: i64,
    pub is_published: bool,
    pub owner: String,
    pub number_of_likes: u64,
    pub number_of_comments: u64,
    pub created_at: String,
    pub updated_at: String,
}

#[async_trait]
pub trait ChannelRepository: Send + Sync {
    /// Totals for the channel owned by `channel_id`
    async fn stats(&self, channel_id: &str) -> Result<ChannelStats, DomainError>;

    /// The channel's videos, newest first
    async fn videos(
        &self,
        channel_id: &str,
        page: Pagination,
    ) -> Result<Vec<ChannelVideo>, DomainError>;
}

// ---------------------------------------------------------------------------
// Likes
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LikeKind {
    Video,
    Comment,
    Tweet,
}

impl LikeKind {
    /// Name used in "<X> not found" messages
    pub fn label(&self) -> &'static str {
        match self {
            LikeKind::Video => "Video",
            LikeKind::Comment => "Comment",
            LikeKind::Tweet => "Tweet",
        }
    }

    /// Route parameter carrying the target id
    pub fn param(&self) -> &'static str {
        match self {
            LikeKind::Video => "videoId",
            LikeKind::Comment => "commentId",
            LikeKind::Tweet => "tweetId",
        }
    }
}

/// The thing being liked
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LikeTarget {
    pub kind: LikeKind,
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Like {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tweet: Option<String>,
    pub liked_by: String,
    pub created_at: String,
    pub updated_at: String,
}

#[async_trait]
pub trait LikeRepository: Send + Sync {
    /// Remove `user_id`'s like on `target`; true if one existed
    async fn delete(&self, target: &LikeTarget, user_id: &str) -> Result<bool, DomainError>;

    /// Whether the liked document exists
    async fn target_exists(&self, target: &LikeTarget) -> Result<bool, DomainError>;

    /// Insert a like. `None` when an identical like already exists.
    async fn create(
        &self,
        target: &LikeTarget,
        user_id: &str,
    ) -> Result<Option<Like>, DomainError>;

    /// Videos liked by `user_id`, most recently liked first
    async fn liked_videos(
        &self,
        user_id: &str,
        page: Pagination,
    ) -> Result<Vec<VideoCard>, DomainError>;
}

// ---------------------------------------------------------------------------
// Playlists
// ---------------------------------------------------------------------------

/// A playlist as stored: videos are plain ids in insertion order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Playlist {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub description: String,
    pub owner: String,
    pub videos: Vec<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Listing entry for a user's playlists
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistOverview {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub description: String,
    pub owner: Option<OwnerSummary>,
    pub number_of_videos: u64,
    pub created_at: String,
    pub updated_at: String,
}

/// Full playlist view with resolved videos
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistDetail {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub description: String,
    pub owner: Option<OwnerSummary>,
    pub videos: Vec<VideoCard>,
    /// Ids still referenced by the playlist whose video is gone
    pub deleted_videos: Vec<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Validated input for a new playlist
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistDraft {
    pub name: String,
    pub description: String,
}

/// Validated partial update
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaylistChanges {
    pub name: Option<String>,
    pub description: Option<String>,
}

#[async_trait]
pub trait PlaylistRepository: Send + Sync {
    async fn create(&self, owner_id: &str, draft: PlaylistDraft) -> Result<Playlist, DomainError>;

    /// Playlists owned by `owner_id`, newest first
    async fn find_by_owner(
        &self,
        owner_id: &str,
        page: Pagination,
    ) -> Result<Vec<PlaylistOverview>, DomainError>;

    /// Resolve a playlist for display to `viewer_id`
    async fn find_detail(
        &self,
        playlist_id: &str,
        viewer_id: &str,
    ) -> Result<Option<PlaylistDetail>, DomainError>;

    /// The playlist, only if `owner_id` owns it
    async fn find_owned(
        &self,
        playlist_id: &str,
        owner_id: &str,
    ) -> Result<Option<Playlist>, DomainError>;

    /// Append a video; no-op when already present
    async fn add_video(&self, playlist_id: &str, video_id: &str) -> Result<(), DomainError>;

    async fn remove_video(&self, playlist_id: &str, video_id: &str) -> Result<(), DomainError>;

    /// Apply changes if `owner_id` owns the playlist
    async fn update(
        &self,
        playlist_id: &str,
        owner_id: &str,
        changes: PlaylistChanges,
    ) -> Result<Option<Playlist>, DomainError>;

    /// Delete if `owner_id` owns the playlist, returning what was removed
    async fn delete(
        &self,
        playlist_id: &str,
        owner_id: &str,
    ) -> Result<Option<Playlist>, DomainError>;

    async fn video_exists(&self, video_id: &str) -> Result<bool, DomainError>;
}
