//! Application state containing repositories and shared resources

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::domain::{ChannelRepository, LikeRepository, PlaylistRepository};
use crate::infrastructure::{
    SeaOrmChannelRepository, SeaOrmLikeRepository, SeaOrmPlaylistRepository,
};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Raw connection, used by the auth extractor
    db: DatabaseConnection,
    /// Dashboard queries
    pub channel_repo: Arc<dyn ChannelRepository>,
    /// Like toggles and liked videos
    pub like_repo: Arc<dyn LikeRepository>,
    /// Playlist CRUD
    pub playlist_repo: Arc<dyn PlaylistRepository>,
}

impl AppState {
    /// Create a new AppState with all repositories initialized
    pub fn new(db: DatabaseConnection) -> Self {
        let channel_repo = Arc::new(SeaOrmChannelRepository::new(db.clone()));
        let like_repo = Arc::new(SeaOrmLikeRepository::new(db.clone()));
        let playlist_repo = Arc::new(SeaOrmPlaylistRepository::new(db.clone()));

        Self {
            db,
            channel_repo,
            like_repo,
            playlist_repo,
        }
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}
