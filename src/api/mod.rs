pub mod auth;
pub mod dashboard;
pub mod health;
pub mod like;
pub mod playlist;
pub mod response;

use axum::{
    routing::{get, patch, post},
    Router,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::domain::Pagination;
use crate::infrastructure::AppState;

/// `?page=&limit=` on list endpoints. Kept as raw strings so junk values
/// fall back to defaults instead of rejecting the request.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    /// 1-based page number (default 1)
    pub page: Option<String>,
    /// Page size (default 10, max 100)
    pub limit: Option<String>,
}

impl PageQuery {
    pub fn pagination(&self) -> Pagination {
        Pagination::from_raw(self.page.as_deref(), self.limit.as_deref())
    }
}

pub fn api_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Dashboard
        .route("/dashboard/stats", get(dashboard::get_channel_stats))
        .route("/dashboard/videos", get(dashboard::get_channel_videos))
        // Likes
        .route("/likes/toggle/v/:videoId", post(like::toggle_video_like))
        .route("/likes/toggle/c/:commentId", post(like::toggle_comment_like))
        .route("/likes/toggle/t/:tweetId", post(like::toggle_tweet_like))
        .route("/likes/videos", get(like::get_liked_videos))
        // Playlists
        .route("/playlist", post(playlist::create_playlist))
        .route(
            "/playlist/:playlistId",
            get(playlist::get_playlist_by_id)
                .patch(playlist::update_playlist)
                .delete(playlist::delete_playlist),
        )
        .route(
            "/playlist/add/:videoId/:playlistId",
            patch(playlist::add_video_to_playlist),
        )
        .route(
            "/playlist/remove/:videoId/:playlistId",
            patch(playlist::remove_video_from_playlist),
        )
        .route("/playlist/user/:userId", get(playlist::get_user_playlists))
        .with_state(state)
}
