//! Ownership/visibility projection for videos shown outside their owner's
//! dashboard (liked videos, playlist contents).
//!
//! A video's details are visible when it is published or when the viewer
//! owns it. Everyone else only learns the id and that it is unpublished.

use serde::Serialize;

use super::repositories::OwnerSummary;

/// Whether `viewer_id` may see the details of a video.
pub fn is_visible_to(is_published: bool, owner_id: &str, viewer_id: &str) -> bool {
    is_published || owner_id == viewer_id
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoDetails {
    pub video_file: String,
    pub thumbnail: String,
    pub title: String,
    pub description: String,
    pub duration: f64,
    pub views: i64,
    pub owner: Option<OwnerSummary>,
    pub number_of_likes: u64,
    pub created_at: String,
}

/// A video as seen by a particular viewer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoCard {
    #[serde(rename = "_id")]
    pub id: String,
    pub is_published: bool,
    #[serde(flatten)]
    pub details: Option<VideoDetails>,
}

impl VideoCard {
    pub fn project(
        id: String,
        is_published: bool,
        owner_id: &str,
        viewer_id: &str,
        details: VideoDetails,
    ) -> Self {
        let details = is_visible_to(is_published, owner_id, viewer_id).then_some(details);
        Self {
            id,
            is_published,
            details,
        }
    }
}
