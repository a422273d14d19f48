//! SQL implementation of the post store.

use async_trait::async_trait;
use sea_orm::sea_query::OnConflict;
use sea_orm::{DbConn, EntityTrait, QueryOrder};
use uuid::Uuid;

use quill_core::domain::Post;
use quill_core::error::StoreError;
use quill_core::ports::PostStore;

use super::entity::post::{self, Entity as PostEntity};

/// Post store backed by a SQL database (SQLite by default, Postgres behind
/// the `postgres` feature).
pub struct SqlPostStore {
    db: DbConn,
}

impl SqlPostStore {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PostStore for SqlPostStore {
    async fn insert(&self, post: Post) -> Result<(), StoreError> {
        let model: post::ActiveModel = post.try_into()?;

        // Upsert keyed on id. owner_id and created_at are immutable and stay
        // out of the conflict update list.
        PostEntity::insert(model)
            .on_conflict(
                OnConflict::column(post::Column::Id)
                    .update_columns([
                        post::Column::Title,
                        post::Column::Body,
                        post::Column::ImageUrl,
                        post::Column::Likes,
                        post::Column::Comments,
                        post::Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .map_err(|e| StoreError::Query(e.to_string()))?;

        Ok(())
    }

    async fn get(&self, id: Uuid) -> Result<Option<Post>, StoreError> {
        let result = PostEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| StoreError::Query(e.to_string()))?;

        result.map(Post::try_from).transpose()
    }

    async fn remove(&self, id: Uuid) -> Result<Option<Post>, StoreError> {
        let prior = self.get(id).await?;
        if prior.is_none() {
            return Ok(None);
        }

        PostEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| StoreError::Query(e.to_string()))?;

        Ok(prior)
    }

    async fn all(&self) -> Result<Vec<Post>, StoreError> {
        let result = PostEntity::find()
            .order_by_asc(post::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| StoreError::Query(e.to_string()))?;

        result.into_iter().map(Post::try_from).collect()
    }
}
