pub mod comment;
pub mod like;
pub mod playlist;
pub mod playlist_video;
pub mod subscription;
pub mod tweet;
pub mod user;
pub mod video;

/// Row timestamp: RFC 3339, UTC, fixed microsecond width so text ordering
/// matches time ordering.
pub fn timestamp() -> String {
    chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Micros, true)
}
