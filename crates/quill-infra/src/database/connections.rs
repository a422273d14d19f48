use std::env;

#[cfg(feature = "sql")]
use std::time::Duration;

#[cfg(feature = "sql")]
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DbConn, Schema};

#[cfg(feature = "sql")]
use quill_core::error::StoreError;

/// Configuration for the post store database.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

impl StoreConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: 10,
            min_connections: 1,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Returns `None` when `DATABASE_URL` is not set, which selects the
    /// in-memory fallback store.
    pub fn from_env() -> Option<Self> {
        let url = env::var("DATABASE_URL").ok()?;

        Some(Self {
            url,
            max_connections: env::var("DB_MAX_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(10),
            min_connections: env::var("DB_MIN_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(1),
        })
    }
}

/// Connect to the configured database and make sure the posts table exists.
#[cfg(feature = "sql")]
pub async fn connect(config: &StoreConfig) -> Result<DbConn, StoreError> {
    tracing::info!(
        "Connecting post store (pool: {})",
        config.max_connections
    );

    let opts = ConnectOptions::new(&config.url)
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .connect_timeout(Duration::from_secs(10))
        .idle_timeout(Duration::from_secs(300))
        .sqlx_logging(false)
        .to_owned();

    let db = Database::connect(opts)
        .await
        .map_err(|e| StoreError::Connection(e.to_string()))?;

    init_schema(&db).await?;

    tracing::info!("Post store connected");
    Ok(db)
}

/// Create the posts table from the entity definition if it is missing.
///
/// The schema is a single table, so a versioned migration setup would be
/// overkill here.
#[cfg(feature = "sql")]
async fn init_schema(db: &DbConn) -> Result<(), StoreError> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    let mut stmt = schema.create_table_from_entity(super::entity::post::Entity);
    stmt.if_not_exists();

    db.execute(backend.build(&stmt))
        .await
        .map_err(|e| StoreError::Query(e.to_string()))?;

    Ok(())
}
