use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DbConn, DbErr};

/// Configuration for the embedded database.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// SeaORM connection string, e.g. `sqlite://blog.db?mode=rwc`.
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    /// Log every SQL statement through `tracing`.
    pub log_statements: bool,
}

impl DatabaseConfig {
    /// A private in-memory database.
    ///
    /// Pinned to a single connection: every SQLite memory connection opens
    /// its own empty database.
    pub fn in_memory() -> Self {
        Self {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            min_connections: 1,
            log_statements: false,
        }
    }
}

/// Open the connection pool.
///
/// The returned handle is cheap to clone and safe to share across workers;
/// SQLite serializes writers on its own.
pub async fn connect(config: &DatabaseConfig) -> Result<DbConn, DbErr> {
    tracing::info!("Connecting to database...");

    let opts = ConnectOptions::new(&config.url)
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .connect_timeout(Duration::from_secs(10))
        .idle_timeout(Duration::from_secs(300))
        .sqlx_logging(config.log_statements)
        .to_owned();

    let db = Database::connect(opts).await?;
    tracing::info!(pool = config.max_connections, "Database connected");

    Ok(db)
}
