//! Durable post storage.

mod connections;

#[cfg(feature = "sql")]
pub mod entity;
#[cfg(feature = "sql")]
mod sql_store;

pub use connections::StoreConfig;

#[cfg(feature = "sql")]
pub use connections::connect;
#[cfg(feature = "sql")]
pub use sql_store::SqlPostStore;
