//! SeaORM implementation of PlaylistRepository

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set, SqlErr, TransactionTrait,
};

use super::aggregate::{count_grouped, playlist_video_ids, video_cards};
use crate::domain::ids::new_id;
use crate::domain::{
    DomainError, OwnerSummary, Pagination, Playlist, PlaylistChanges, PlaylistDetail,
    PlaylistDraft, PlaylistOverview, PlaylistRepository,
};
use crate::models::{playlist, playlist_video, timestamp, user, video};

/// SeaORM-based implementation of PlaylistRepository
pub struct SeaOrmPlaylistRepository {
    db: DatabaseConnection,
}

impl SeaOrmPlaylistRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn find_owned_model(
        &self,
        playlist_id: &str,
        owner_id: &str,
    ) -> Result<Option<playlist::Model>, DomainError> {
        Ok(playlist::Entity::find()
            .filter(playlist::Column::Id.eq(playlist_id))
            .filter(playlist::Column::OwnerId.eq(owner_id))
            .one(&self.db)
            .await?)
    }

    /// Attach the ordered video ids to a stored playlist.
    async fn with_videos(&self, model: playlist::Model) -> Result<Playlist, DomainError> {
        let videos = playlist_video_ids(&self.db, &model.id).await?;

        Ok(Playlist {
            id: model.id,
            name: model.name,
            description: model.description,
            owner: model.owner_id,
            videos,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }

    async fn touch(&self, playlist_id: &str) -> Result<(), DomainError> {
        playlist::Entity::update_many()
            .col_expr(playlist::Column::UpdatedAt, Expr::value(timestamp()))
            .filter(playlist::Column::Id.eq(playlist_id))
            .exec(&self.db)
            .await?;
        Ok(())
    }
}

#[async_trait]
impl PlaylistRepository for SeaOrmPlaylistRepository {
    async fn create(&self, owner_id: &str, draft: PlaylistDraft) -> Result<Playlist, DomainError> {
        let now = timestamp();

        let new_playlist = playlist::ActiveModel {
            id: Set(new_id()),
            name: Set(draft.name),
            description: Set(draft.description),
            owner_id: Set(owner_id.to_string()),
            created_at: Set(now.clone()),
            updated_at: Set(now),
        };

        let model = new_playlist.insert(&self.db).await?;

        Ok(Playlist {
            id: model.id,
            name: model.name,
            description: model.description,
            owner: model.owner_id,
            videos: Vec::new(),
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }

    async fn find_by_owner(
        &self,
        owner_id: &str,
        page: Pagination,
    ) -> Result<Vec<PlaylistOverview>, DomainError> {
        let rows = playlist::Entity::find()
            .filter(playlist::Column::OwnerId.eq(owner_id))
            .order_by_desc(playlist::Column::CreatedAt)
            .order_by_desc(playlist::Column::Id)
            .offset(page.offset())
            .limit(page.limit)
            .find_also_related(user::Entity)
            .all(&self.db)
            .await?;

        let ids: Vec<String> = rows.iter().map(|(p, _)| p.id.clone()).collect();
        let counts = count_grouped::<playlist_video::Entity, _>(
            &self.db,
            playlist_video::Column::PlaylistId,
            &ids,
        )
        .await?;

        Ok(rows
            .into_iter()
            .map(|(p, owner)| PlaylistOverview {
                number_of_videos: counts.get(&p.id).copied().unwrap_or(0),
                id: p.id,
                name: p.name,
                description: p.description,
                owner: owner.as_ref().map(OwnerSummary::from),
                created_at: p.created_at,
                updated_at: p.updated_at,
            })
            .collect())
    }

    async fn find_detail(
        &self,
        playlist_id: &str,
        viewer_id: &str,
    ) -> Result<Option<PlaylistDetail>, DomainError> {
        let Some((model, owner)) = playlist::Entity::find_by_id(playlist_id)
            .find_also_related(user::Entity)
            .one(&self.db)
            .await?
        else {
            return Ok(None);
        };

        let video_ids = playlist_video_ids(&self.db, &model.id).await?;
        let mut cards = video_cards(&self.db, &video_ids, viewer_id).await?;

        let mut videos = Vec::with_capacity(video_ids.len());
        let mut deleted_videos = Vec::new();
        for id in video_ids {
            match cards.remove(&id) {
                Some(card) => videos.push(card),
                None => deleted_videos.push(id),
            }
        }

        Ok(Some(PlaylistDetail {
            id: model.id,
            name: model.name,
            description: model.description,
            owner: owner.as_ref().map(OwnerSummary::from),
            videos,
            deleted_videos,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }))
    }

    async fn find_owned(
        &self,
        playlist_id: &str,
        owner_id: &str,
    ) -> Result<Option<Playlist>, DomainError> {
        match self.find_owned_model(playlist_id, owner_id).await? {
            Some(model) => Ok(Some(self.with_videos(model).await?)),
            None => Ok(None),
        }
    }

    async fn add_video(&self, playlist_id: &str, video_id: &str) -> Result<(), DomainError> {
        let existing = playlist_video::Entity::find_by_id((
            playlist_id.to_string(),
            video_id.to_string(),
        ))
        .one(&self.db)
        .await?;

        if existing.is_some() {
            return Ok(()); // Already exists, idempotent
        }

        let last_position = playlist_video::Entity::find()
            .select_only()
            .column_as(playlist_video::Column::Position.max(), "last_position")
            .filter(playlist_video::Column::PlaylistId.eq(playlist_id))
            .into_tuple::<Option<i32>>()
            .one(&self.db)
            .await?
            .flatten();

        let entry = playlist_video::ActiveModel {
            playlist_id: Set(playlist_id.to_string()),
            video_id: Set(video_id.to_string()),
            position: Set(last_position.map_or(0, |p| p + 1)),
            added_at: Set(timestamp()),
        };

        match playlist_video::Entity::insert(entry)
            .exec_without_returning(&self.db)
            .await
        {
            Ok(_) => {}
            Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        }

        self.touch(playlist_id).await
    }

    async fn remove_video(&self, playlist_id: &str, video_id: &str) -> Result<(), DomainError> {
        let result = playlist_video::Entity::delete_many()
            .filter(playlist_video::Column::PlaylistId.eq(playlist_id))
            .filter(playlist_video::Column::VideoId.eq(video_id))
            .exec(&self.db)
            .await?;

        if result.rows_affected > 0 {
            self.touch(playlist_id).await?;
        }
        Ok(())
    }

    async fn update(
        &self,
        playlist_id: &str,
        owner_id: &str,
        changes: PlaylistChanges,
    ) -> Result<Option<Playlist>, DomainError> {
        let Some(model) = self.find_owned_model(playlist_id, owner_id).await? else {
            return Ok(None);
        };

        let mut active: playlist::ActiveModel = model.into();
        if let Some(name) = changes.name {
            active.name = Set(name);
        }
        if let Some(description) = changes.description {
            active.description = Set(description);
        }
        active.updated_at = Set(timestamp());

        let updated = active.update(&self.db).await?;
        Ok(Some(self.with_videos(updated).await?))
    }

    async fn delete(
        &self,
        playlist_id: &str,
        owner_id: &str,
    ) -> Result<Option<Playlist>, DomainError> {
        let Some(model) = self.find_owned_model(playlist_id, owner_id).await? else {
            return Ok(None);
        };
        let removed = self.with_videos(model).await?;

        let txn = self.db.begin().await?;
        playlist_video::Entity::delete_many()
            .filter(playlist_video::Column::PlaylistId.eq(playlist_id))
            .exec(&txn)
            .await?;
        playlist::Entity::delete_by_id(playlist_id).exec(&txn).await?;
        txn.commit().await?;

        Ok(Some(removed))
    }

    async fn video_exists(&self, video_id: &str) -> Result<bool, DomainError> {
        Ok(video::Entity::find_by_id(video_id).count(&self.db).await? > 0)
    }
}
