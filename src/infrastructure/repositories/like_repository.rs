//! SeaORM implementation of LikeRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait, Set, SqlErr,
};

use super::aggregate::video_cards;
use crate::domain::ids::new_id;
use crate::domain::{
    DomainError, Like, LikeKind, LikeRepository, LikeTarget, Pagination, VideoCard,
};
use crate::models::{comment, like, timestamp, tweet, video};

/// SeaORM-based implementation of LikeRepository
pub struct SeaOrmLikeRepository {
    db: DatabaseConnection,
}

impl SeaOrmLikeRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn target_column(kind: LikeKind) -> like::Column {
    match kind {
        LikeKind::Video => like::Column::VideoId,
        LikeKind::Comment => like::Column::CommentId,
        LikeKind::Tweet => like::Column::TweetId,
    }
}

#[async_trait]
impl LikeRepository for SeaOrmLikeRepository {
    async fn delete(&self, target: &LikeTarget, user_id: &str) -> Result<bool, DomainError> {
        let result = like::Entity::delete_many()
            .filter(target_column(target.kind).eq(target.id.as_str()))
            .filter(like::Column::LikedBy.eq(user_id))
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    async fn target_exists(&self, target: &LikeTarget) -> Result<bool, DomainError> {
        let id = target.id.as_str();
        let found = match target.kind {
            LikeKind::Video => video::Entity::find_by_id(id).count(&self.db).await?,
            LikeKind::Comment => comment::Entity::find_by_id(id).count(&self.db).await?,
            LikeKind::Tweet => tweet::Entity::find_by_id(id).count(&self.db).await?,
        };

        Ok(found > 0)
    }

    async fn create(
        &self,
        target: &LikeTarget,
        user_id: &str,
    ) -> Result<Option<Like>, DomainError> {
        let now = timestamp();
        let id = Some(target.id.clone());
        let (video_id, comment_id, tweet_id) = match target.kind {
            LikeKind::Video => (id, None, None),
            LikeKind::Comment => (None, id, None),
            LikeKind::Tweet => (None, None, id),
        };

        let new_like = like::ActiveModel {
            id: Set(new_id()),
            video_id: Set(video_id),
            comment_id: Set(comment_id),
            tweet_id: Set(tweet_id),
            liked_by: Set(user_id.to_string()),
            created_at: Set(now.clone()),
            updated_at: Set(now),
        };

        match new_like.insert(&self.db).await {
            Ok(model) => Ok(Some(Like::from(model))),
            // A concurrent toggle got there first
            Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                tracing::debug!(
                    "Like on {} {} by {} already present",
                    target.kind.label(),
                    target.id,
                    user_id
                );
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn liked_videos(
        &self,
        user_id: &str,
        page: Pagination,
    ) -> Result<Vec<VideoCard>, DomainError> {
        // Inner join drops likes whose video has since been deleted
        let likes = like::Entity::find()
            .join(sea_orm::JoinType::InnerJoin, like::Relation::Video.def())
            .filter(like::Column::LikedBy.eq(user_id))
            .filter(like::Column::VideoId.is_not_null())
            .order_by_desc(like::Column::CreatedAt)
            .order_by_desc(like::Column::Id)
            .offset(page.offset())
            .limit(page.limit)
            .all(&self.db)
            .await?;

        let ids: Vec<String> = likes.into_iter().filter_map(|l| l.video_id).collect();
        let mut cards = video_cards(&self.db, &ids, user_id).await?;

        Ok(ids.iter().filter_map(|id| cards.remove(id)).collect())
    }
}
