use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::PostError;

/// Post entity - a blog entry with ownership and engagement fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub title: String,
    pub body: String,
    pub image_url: String,
    pub likes: i64,
    pub comments: Vec<String>,
    pub created_at: DateTime<Utc>,
    /// `None` until the first like/update, then refreshed on each one.
    pub updated_at: Option<DateTime<Utc>>,
}

/// The caller-supplied text fields of a post, shared by creation and update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostContent {
    pub title: String,
    pub body: String,
    pub image_url: String,
}

impl PostContent {
    /// Reject any empty required field.
    pub fn validate(&self) -> Result<(), PostError> {
        if self.title.is_empty() {
            return Err(PostError::InvalidInput("title must not be empty".into()));
        }
        if self.body.is_empty() {
            return Err(PostError::InvalidInput("body must not be empty".into()));
        }
        if self.image_url.is_empty() {
            return Err(PostError::InvalidInput(
                "image_url must not be empty".into(),
            ));
        }
        Ok(())
    }
}

impl Post {
    /// Create a new post owned by `owner_id`. The id comes from the
    /// identifier generator, never from the entity itself.
    pub fn new(id: Uuid, owner_id: Uuid, content: PostContent) -> Self {
        Self {
            id,
            owner_id,
            title: content.title,
            body: content.body,
            image_url: content.image_url,
            likes: 0,
            comments: Vec::new(),
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    /// Overwrite the text fields and mark the post as updated.
    pub fn update_content(&mut self, content: PostContent) {
        self.title = content.title;
        self.body = content.body;
        self.image_url = content.image_url;
        self.updated_at = Some(Utc::now());
    }

    /// Increment the like counter and mark the post as updated.
    pub fn like(&mut self) {
        self.likes += 1;
        self.updated_at = Some(Utc::now());
    }

    /// Append a comment. Comments do not count as an update of the post body,
    /// so `updated_at` is left alone.
    pub fn add_comment(&mut self, comment: String) {
        self.comments.push(comment);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn content() -> PostContent {
        PostContent {
            title: "title".to_string(),
            body: "body".to_string(),
            image_url: "https://example.com/a.png".to_string(),
        }
    }

    #[test]
    fn new_post_starts_clean() {
        let post = Post::new(Uuid::new_v4(), Uuid::new_v4(), content());
        assert_eq!(post.likes, 0);
        assert!(post.comments.is_empty());
        assert!(post.updated_at.is_none());
    }

    #[test]
    fn like_increments_and_touches() {
        let mut post = Post::new(Uuid::new_v4(), Uuid::new_v4(), content());
        post.like();
        assert_eq!(post.likes, 1);
        assert!(post.updated_at.is_some());
    }

    #[test]
    fn comments_append_in_order_without_touching() {
        let mut post = Post::new(Uuid::new_v4(), Uuid::new_v4(), content());
        post.add_comment("first".to_string());
        post.add_comment("second".to_string());
        assert_eq!(post.comments, vec!["first", "second"]);
        assert!(post.updated_at.is_none());
    }

    #[test]
    fn validate_rejects_empty_fields() {
        for field in ["title", "body", "image_url"] {
            let mut c = content();
            match field {
                "title" => c.title.clear(),
                "body" => c.body.clear(),
                _ => c.image_url.clear(),
            }
            assert!(matches!(c.validate(), Err(PostError::InvalidInput(_))));
        }
        assert!(content().validate().is_ok());
    }
}
