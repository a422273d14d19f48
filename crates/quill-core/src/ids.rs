//! Post identifier generation.
//!
//! Ids are 128-bit random values, but random alone is not trusted: every
//! candidate is verified against the store before it is issued, so a
//! collision (however unlikely) results in a retry rather than a silent
//! overwrite. Checking against the store keeps memory bounded; there is no
//! in-process set of every id ever issued.

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::StoreError;
use crate::ports::PostStore;

/// Source of fresh, verified-unique post ids.
#[async_trait]
pub trait IdGenerator: Send + Sync {
    /// Produce an id that is not currently present in `store`.
    async fn generate(&self, store: &dyn PostStore) -> Result<Uuid, StoreError>;
}

/// Random (UUIDv4) generator with collision verification.
pub struct RandomIdGenerator {
    max_attempts: u32,
}

impl RandomIdGenerator {
    pub fn new(max_attempts: u32) -> Self {
        Self { max_attempts }
    }
}

impl Default for RandomIdGenerator {
    fn default() -> Self {
        // More than one attempt is already astronomically rare.
        Self::new(16)
    }
}

#[async_trait]
impl IdGenerator for RandomIdGenerator {
    async fn generate(&self, store: &dyn PostStore) -> Result<Uuid, StoreError> {
        for attempt in 0..self.max_attempts {
            let id = Uuid::new_v4();
            if store.get(id).await?.is_none() {
                return Ok(id);
            }
            tracing::warn!(%id, attempt, "generated post id collided with stored post, retrying");
        }
        Err(StoreError::Operation(format!(
            "failed to generate a unique post id after {} attempts",
            self.max_attempts
        )))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Mutex;

    use super::*;
    use crate::domain::{Post, PostContent};

    /// Store stub that pretends a fixed set of ids is taken.
    struct TakenIds(Mutex<HashSet<Uuid>>);

    #[async_trait]
    impl PostStore for TakenIds {
        async fn insert(&self, post: Post) -> Result<(), StoreError> {
            self.0.lock().unwrap().insert(post.id);
            Ok(())
        }

        async fn get(&self, id: Uuid) -> Result<Option<Post>, StoreError> {
            let taken = self.0.lock().unwrap().contains(&id);
            Ok(taken.then(|| {
                Post::new(
                    id,
                    Uuid::new_v4(),
                    PostContent {
                        title: "t".into(),
                        body: "b".into(),
                        image_url: "i".into(),
                    },
                )
            }))
        }

        async fn remove(&self, _id: Uuid) -> Result<Option<Post>, StoreError> {
            Ok(None)
        }

        async fn all(&self) -> Result<Vec<Post>, StoreError> {
            Ok(Vec::new())
        }
    }

    #[tokio::test]
    async fn fresh_ids_are_distinct() {
        let store = TakenIds(Mutex::new(HashSet::new()));
        let ids = RandomIdGenerator::default();

        let a = ids.generate(&store).await.unwrap();
        let b = ids.generate(&store).await.unwrap();
        assert_ne!(a, b);
    }

    #[tokio::test]
    async fn generated_id_is_never_a_stored_one() {
        let store = TakenIds(Mutex::new(HashSet::new()));
        let ids = RandomIdGenerator::default();

        // Occupy a handful of ids, then ask for fresh ones.
        let mut taken = HashSet::new();
        for _ in 0..32 {
            let id = Uuid::new_v4();
            store.0.lock().unwrap().insert(id);
            taken.insert(id);
        }

        for _ in 0..100 {
            let id = ids.generate(&store).await.unwrap();
            assert!(!taken.contains(&id));
        }
    }
}
