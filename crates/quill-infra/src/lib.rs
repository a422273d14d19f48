//! # Quill Infrastructure
//!
//! Concrete implementations of the ports defined in `quill-core`.
//!
//! ## Feature Flags
//!
//! - `full` (default) - durable SQLite-backed store
//! - `minimal` - no external dependencies, in-memory store only
//! - `sqlite` / `postgres` - driver selection for the SQL store

pub mod database;
pub mod memory;
pub mod store;

// Re-exports - In-Memory
pub use memory::InMemoryPostStore;
pub use store::init_store;

pub use database::StoreConfig;

#[cfg(feature = "sql")]
pub use database::SqlPostStore;
