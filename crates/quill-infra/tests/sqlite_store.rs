//! CRUD, upsert, and durability tests against the real SQLite store.
#![cfg(feature = "sqlite")]

use quill_core::domain::{Post, PostContent};
use quill_core::ports::PostStore;
use quill_infra::SqlPostStore;
use quill_infra::database::{StoreConfig, connect};
use uuid::Uuid;

fn content(title: &str) -> PostContent {
    PostContent {
        title: title.to_string(),
        body: "body".to_string(),
        image_url: "https://example.com/cover.png".to_string(),
    }
}

fn file_url(dir: &tempfile::TempDir) -> String {
    format!(
        "sqlite://{}?mode=rwc",
        dir.path().join("posts.db").display()
    )
}

async fn open(url: &str) -> SqlPostStore {
    let db = connect(&StoreConfig::new(url)).await.expect("connect");
    SqlPostStore::new(db)
}

#[tokio::test]
async fn crud_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let store = open(&file_url(&dir)).await;

    let post = Post::new(Uuid::new_v4(), Uuid::new_v4(), content("hello"));
    store.insert(post.clone()).await.unwrap();

    let loaded = store.get(post.id).await.unwrap().expect("stored post");
    assert_eq!(loaded.id, post.id);
    assert_eq!(loaded.owner_id, post.owner_id);
    assert_eq!(loaded.title, "hello");
    assert_eq!(loaded.likes, 0);
    assert!(loaded.comments.is_empty());
    assert!(loaded.updated_at.is_none());

    let removed = store.remove(post.id).await.unwrap().expect("prior value");
    assert_eq!(removed.id, post.id);
    assert!(store.get(post.id).await.unwrap().is_none());
    assert!(store.remove(post.id).await.unwrap().is_none());
}

#[tokio::test]
async fn upsert_keeps_owner_and_creation_time() {
    let dir = tempfile::tempdir().unwrap();
    let store = open(&file_url(&dir)).await;

    let post = Post::new(Uuid::new_v4(), Uuid::new_v4(), content("original"));
    store.insert(post.clone()).await.unwrap();

    // A row with the same id but a different owner must not rewrite the
    // immutable columns.
    let mut tampered = Post::new(post.id, Uuid::new_v4(), content("rewritten"));
    tampered.like();
    store.insert(tampered).await.unwrap();

    let loaded = store.get(post.id).await.unwrap().expect("stored post");
    assert_eq!(loaded.owner_id, post.owner_id);
    assert_eq!(loaded.title, "rewritten");
    assert_eq!(loaded.likes, 1);
}

#[tokio::test]
async fn survives_close_and_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let url = file_url(&dir);

    let mut post = Post::new(Uuid::new_v4(), Uuid::new_v4(), content("durable"));
    post.like();
    post.add_comment("still here".to_string());

    {
        let store = open(&url).await;
        store.insert(post.clone()).await.unwrap();
    }

    let store = open(&url).await;
    let loaded = store.get(post.id).await.unwrap().expect("post after reopen");
    assert_eq!(loaded.title, "durable");
    assert_eq!(loaded.likes, 1);
    assert_eq!(loaded.comments, vec!["still here"]);
    assert_eq!(loaded.created_at, post.created_at);
    assert_eq!(loaded.updated_at, post.updated_at);
    assert_eq!(store.all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn enumerates_in_key_order() {
    let dir = tempfile::tempdir().unwrap();
    let store = open(&file_url(&dir)).await;

    for i in 0..8 {
        let post = Post::new(Uuid::new_v4(), Uuid::new_v4(), content(&format!("p{i}")));
        store.insert(post).await.unwrap();
    }

    let ids: Vec<Uuid> = store.all().await.unwrap().iter().map(|p| p.id).collect();
    let mut sorted = ids.clone();
    sorted.sort();
    assert_eq!(ids, sorted);
}
