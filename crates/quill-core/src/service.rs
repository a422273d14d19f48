//! Post service - the request handlers of the system.
//!
//! Each operation validates its input, enforces the ownership rules, and
//! mutates the store. Ownership is compared on identity (`Uuid` equality),
//! never on a formatted string. Every precondition is checked before any
//! write, so a failed operation leaves the stored post untouched.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::{Post, PostContent};
use crate::error::PostError;
use crate::ids::{IdGenerator, RandomIdGenerator};
use crate::ports::PostStore;

/// Stateless handlers over a [`PostStore`].
///
/// The caller identity is supplied per call by the hosting environment; this
/// service never issues or verifies identities itself.
pub struct PostService {
    store: Arc<dyn PostStore>,
    ids: Arc<dyn IdGenerator>,
}

impl PostService {
    pub fn new(store: Arc<dyn PostStore>) -> Self {
        Self::with_id_generator(store, Arc::new(RandomIdGenerator::default()))
    }

    pub fn with_id_generator(store: Arc<dyn PostStore>, ids: Arc<dyn IdGenerator>) -> Self {
        Self { store, ids }
    }

    /// Create a post owned by `caller`. All three text fields are required
    /// non-empty.
    pub async fn add_post(&self, caller: Uuid, content: PostContent) -> Result<Post, PostError> {
        content.validate()?;

        let id = self.ids.generate(self.store.as_ref()).await?;
        let post = Post::new(id, caller, content);
        self.store.insert(post.clone()).await?;

        tracing::info!(post_id = %post.id, owner_id = %caller, "post created");
        Ok(post)
    }

    /// Fetch a single post.
    pub async fn get_post(&self, id: Uuid) -> Result<Post, PostError> {
        self.store
            .get(id)
            .await?
            .ok_or(PostError::NotFound { id })
    }

    /// Fetch every stored post, in the store's key order.
    pub async fn get_all_posts(&self) -> Result<Vec<Post>, PostError> {
        Ok(self.store.all().await?)
    }

    /// Overwrite the text fields of a post. Only the owner may update.
    pub async fn update_post(
        &self,
        caller: Uuid,
        id: Uuid,
        content: PostContent,
    ) -> Result<Post, PostError> {
        let mut post = self.get_post(id).await?;
        if post.owner_id != caller {
            return Err(PostError::Unauthorized);
        }

        post.update_content(content);
        self.store.insert(post.clone()).await?;

        tracing::debug!(post_id = %id, "post updated");
        Ok(post)
    }

    /// Remove a post and return the deleted value. Only the owner may delete.
    pub async fn delete_post(&self, caller: Uuid, id: Uuid) -> Result<Post, PostError> {
        let post = self.get_post(id).await?;
        if post.owner_id != caller {
            return Err(PostError::Unauthorized);
        }

        let removed = self
            .store
            .remove(id)
            .await?
            .ok_or(PostError::NotFound { id })?;

        tracing::info!(post_id = %id, "post deleted");
        Ok(removed)
    }

    /// Increment the like counter. Owners cannot like their own post; that is
    /// a business rule, not a technical one.
    pub async fn like_post(&self, caller: Uuid, id: Uuid) -> Result<Post, PostError> {
        let mut post = self.get_post(id).await?;
        if post.owner_id == caller {
            return Err(PostError::Forbidden);
        }

        post.like();
        self.store.insert(post.clone()).await?;

        tracing::debug!(post_id = %id, likes = post.likes, "post liked");
        Ok(post)
    }

    /// Append a comment. Any caller may comment; comments are append-only.
    pub async fn comment_on_post(
        &self,
        caller: Uuid,
        id: Uuid,
        comment: String,
    ) -> Result<Post, PostError> {
        let mut post = self.get_post(id).await?;

        post.add_comment(comment);
        self.store.insert(post.clone()).await?;

        tracing::debug!(post_id = %id, commenter = %caller, "comment added");
        Ok(post)
    }
}
