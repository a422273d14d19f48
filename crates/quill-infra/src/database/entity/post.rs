//! Post entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use quill_core::error::StoreError;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub owner_id: Uuid,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub body: String,
    pub image_url: String,
    pub likes: i64,
    pub comments: Json,
    pub created_at: DateTimeUtc,
    pub updated_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain Post.
///
/// Fallible: a comments column that does not decode to a list of strings is
/// corrupted data and surfaces as a serialization error rather than being
/// dropped.
impl TryFrom<Model> for quill_core::domain::Post {
    type Error = StoreError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        let comments = serde_json::from_value(model.comments)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;

        Ok(Self {
            id: model.id,
            owner_id: model.owner_id,
            title: model.title,
            body: model.body,
            image_url: model.image_url,
            likes: model.likes,
            comments,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

/// Conversion from Domain Post to SeaORM ActiveModel.
impl TryFrom<quill_core::domain::Post> for ActiveModel {
    type Error = StoreError;

    fn try_from(post: quill_core::domain::Post) -> Result<Self, Self::Error> {
        let comments = serde_json::to_value(&post.comments)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;

        Ok(Self {
            id: Set(post.id),
            owner_id: Set(post.owner_id),
            title: Set(post.title),
            body: Set(post.body),
            image_url: Set(post.image_url),
            likes: Set(post.likes),
            comments: Set(comments),
            created_at: Set(post.created_at),
            updated_at: Set(post.updated_at),
        })
    }
}
