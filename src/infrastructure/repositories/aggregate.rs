//! Query stages shared by several repositories: grouped counts over a
//! foreign key, and resolving video ids into viewer-specific cards.

use std::collections::HashMap;

use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::domain::{OwnerSummary, VideoCard, VideoDetails};
use crate::models::{like, playlist_video, user, video};

/// Count rows of `E` per value of `column`, restricted to `keys`.
/// Keys with no rows are absent from the map.
pub(super) async fn count_grouped<E, C>(
    db: &DatabaseConnection,
    column: C,
    keys: &[String],
) -> Result<HashMap<String, u64>, DbErr>
where
    E: EntityTrait,
    C: ColumnTrait,
{
    if keys.is_empty() {
        return Ok(HashMap::new());
    }

    let rows: Vec<(String, i64)> = E::find()
        .select_only()
        .column(column)
        .column_as(column.count(), "total")
        .filter(column.is_in(keys.iter().cloned()))
        .group_by(column)
        .into_tuple()
        .all(db)
        .await?;

    Ok(rows
        .into_iter()
        .map(|(key, total)| (key, total.max(0) as u64))
        .collect())
}

/// Video ids of a playlist in the order they were added.
pub(super) async fn playlist_video_ids(
    db: &DatabaseConnection,
    playlist_id: &str,
) -> Result<Vec<String>, DbErr> {
    playlist_video::Entity::find()
        .select_only()
        .column(playlist_video::Column::VideoId)
        .filter(playlist_video::Column::PlaylistId.eq(playlist_id))
        .order_by_asc(playlist_video::Column::Position)
        .order_by_asc(playlist_video::Column::AddedAt)
        .into_tuple::<String>()
        .all(db)
        .await
}

/// Look up videos with their owners and like counts, projected for
/// `viewer_id`. Ids without a surviving video are absent from the map.
pub(super) async fn video_cards(
    db: &DatabaseConnection,
    ids: &[String],
    viewer_id: &str,
) -> Result<HashMap<String, VideoCard>, DbErr> {
    if ids.is_empty() {
        return Ok(HashMap::new());
    }

    let videos = video::Entity::find()
        .find_also_related(user::Entity)
        .filter(video::Column::Id.is_in(ids.iter().cloned()))
        .all(db)
        .await?;

    let likes = count_grouped::<like::Entity, _>(db, like::Column::VideoId, ids).await?;

    let cards = videos
        .into_iter()
        .map(|(video, owner)| {
            let video::Model {
                id,
                video_file,
                thumbnail,
                title,
                description,
                duration,
                views,
                is_published,
                owner_id,
                created_at,
                ..
            } = video;

            let details = VideoDetails {
                video_file,
                thumbnail,
                title,
                description,
                duration,
                views,
                owner: owner.as_ref().map(OwnerSummary::from),
                number_of_likes: likes.get(&id).copied().unwrap_or(0),
                created_at,
            };
            let card = VideoCard::project(id.clone(), is_published, &owner_id, viewer_id, details);
            (id, card)
        })
        .collect();

    Ok(cards)
}
