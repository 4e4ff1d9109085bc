use crate::api;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::health::health_check,
        api::dashboard::get_channel_stats,
        api::dashboard::get_channel_videos,
        api::like::toggle_video_like,
        api::like::toggle_comment_like,
        api::like::toggle_tweet_like,
        api::like::get_liked_videos,
        api::playlist::create_playlist,
        api::playlist::get_user_playlists,
        api::playlist::get_playlist_by_id,
        api::playlist::add_video_to_playlist,
        api::playlist::remove_video_from_playlist,
        api::playlist::update_playlist,
        api::playlist::delete_playlist,
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "vidtube", description = "VidTube API")
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}
