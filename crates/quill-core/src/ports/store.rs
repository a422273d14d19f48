use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::Post;
use crate::error::StoreError;

/// Durable ordered mapping from post id to post record.
///
/// Uniqueness of ids is the identifier generator's responsibility; the store
/// itself treats `insert` as an upsert. Each operation is individually
/// atomic; cross-operation sequences rely on the caller running requests to
/// completion one at a time.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Upsert a post keyed by its id. The immutable columns of an existing
    /// row (`owner_id`, `created_at`) must never be rewritten.
    async fn insert(&self, post: Post) -> Result<(), StoreError>;

    /// Point lookup by id.
    async fn get(&self, id: Uuid) -> Result<Option<Post>, StoreError>;

    /// Delete a post, returning the prior value if it was present.
    async fn remove(&self, id: Uuid) -> Result<Option<Post>, StoreError>;

    /// Full enumeration in the store's key order.
    async fn all(&self) -> Result<Vec<Post>, StoreError>;
}
