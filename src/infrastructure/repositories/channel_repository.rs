//! SeaORM implementation of ChannelRepository

use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, RelationTrait,
};

use super::aggregate::count_grouped;
use crate::domain::{ChannelRepository, ChannelStats, ChannelVideo, DomainError, Pagination};
use crate::models::{comment, like, subscription, video};

/// SeaORM-based implementation of ChannelRepository
pub struct SeaOrmChannelRepository {
    db: DatabaseConnection,
}

impl SeaOrmChannelRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ChannelRepository for SeaOrmChannelRepository {
    async fn stats(&self, channel_id: &str) -> Result<ChannelStats, DomainError> {
        let total_videos = video::Entity::find()
            .filter(video::Column::OwnerId.eq(channel_id))
            .count(&self.db)
            .await?;

        // SUM over no rows is NULL
        let total_views = video::Entity::find()
            .select_only()
            .column_as(video::Column::Views.sum(), "total_views")
            .filter(video::Column::OwnerId.eq(channel_id))
            .into_tuple::<Option<i64>>()
            .one(&self.db)
            .await?
            .flatten()
            .unwrap_or(0);

        let total_subscribers = subscription::Entity::find()
            .filter(subscription::Column::ChannelId.eq(channel_id))
            .count(&self.db)
            .await?;

        let total_likes = like::Entity::find()
            .join(sea_orm::JoinType::InnerJoin, like::Relation::Video.def())
            .filter(video::Column::OwnerId.eq(channel_id))
            .count(&self.db)
            .await?;

        Ok(ChannelStats {
            total_videos,
            total_views: total_views.max(0) as u64,
            total_subscribers,
            total_likes,
        })
    }

    async fn videos(
        &self,
        channel_id: &str,
        page: Pagination,
    ) -> Result<Vec<ChannelVideo>, DomainError> {
        let videos = video::Entity::find()
            .filter(video::Column::OwnerId.eq(channel_id))
            .order_by_desc(video::Column::CreatedAt)
            .order_by_desc(video::Column::Id)
            .offset(page.offset())
            .limit(page.limit)
            .all(&self.db)
            .await?;

        let ids: Vec<String> = videos.iter().map(|v| v.id.clone()).collect();
        let likes = count_grouped::<like::Entity, _>(&self.db, like::Column::VideoId, &ids).await?;
        let comments =
            count_grouped::<comment::Entity, _>(&self.db, comment::Column::VideoId, &ids).await?;

        tracing::debug!(
            "Channel {} page {}: {} videos",
            channel_id,
            page.page,
            videos.len()
        );

        Ok(videos
            .into_iter()
            .map(|v| ChannelVideo {
                number_of_likes: likes.get(&v.id).copied().unwrap_or(0),
                number_of_comments: comments.get(&v.id).copied().unwrap_or(0),
                id: v.id,
                video_file: v.video_file,
                thumbnail: v.thumbnail,
                title: v.title,
                description: v.description,
                duration: v.duration,
                views: v.views,
                is_published: v.is_published,
                owner: v.owner_id,
                created_at: v.created_at,
                updated_at: v.updated_at,
            })
            .collect())
    }
}
