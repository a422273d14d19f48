//! In-memory post store - used as fallback when no database is configured.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use quill_core::domain::Post;
use quill_core::error::StoreError;
use quill_core::ports::PostStore;

/// Post store over a `BTreeMap` with an async RwLock.
///
/// Enumeration order is key order, matching the SQL store.
/// Note: Data is lost on process restart.
pub struct InMemoryPostStore {
    store: RwLock<BTreeMap<Uuid, Post>>,
}

impl InMemoryPostStore {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(BTreeMap::new()),
        }
    }
}

impl Default for InMemoryPostStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostStore for InMemoryPostStore {
    async fn insert(&self, post: Post) -> Result<(), StoreError> {
        let mut store = self.store.write().await;
        // Same upsert semantics as the SQL store: the immutable columns of an
        // existing row survive the overwrite.
        let post = match store.get(&post.id) {
            Some(existing) => Post {
                owner_id: existing.owner_id,
                created_at: existing.created_at,
                ..post
            },
            None => post,
        };
        store.insert(post.id, post);
        Ok(())
    }

    async fn get(&self, id: Uuid) -> Result<Option<Post>, StoreError> {
        let store = self.store.read().await;
        Ok(store.get(&id).cloned())
    }

    async fn remove(&self, id: Uuid) -> Result<Option<Post>, StoreError> {
        let mut store = self.store.write().await;
        Ok(store.remove(&id))
    }

    async fn all(&self) -> Result<Vec<Post>, StoreError> {
        let store = self.store.read().await;
        Ok(store.values().cloned().collect())
    }
}
