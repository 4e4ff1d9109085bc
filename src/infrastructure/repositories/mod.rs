//! Repository implementations using SeaORM

mod aggregate;
pub mod channel_repository;
pub mod like_repository;
pub mod playlist_repository;

pub use channel_repository::SeaOrmChannelRepository;
pub use like_repository::SeaOrmLikeRepository;
pub use playlist_repository::SeaOrmPlaylistRepository;
