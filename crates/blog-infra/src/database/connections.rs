use std::time::Duration;

#[cfg(feature = "postgres")]
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DbConn, DbErr, Schema};

/// Configuration for the post database.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Connection string naming the database, e.g. `postgres://localhost/blogapp`.
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

impl DatabaseConfig {
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
    pub const IDLE_TIMEOUT: Duration = Duration::from_secs(300);
}

/// Open the connection pool and make sure the `posts` table exists.
#[cfg(feature = "postgres")]
pub async fn connect(config: &DatabaseConfig) -> Result<DbConn, DbErr> {
    tracing::info!("Initializing database connection...");

    let opts = ConnectOptions::new(&config.url)
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .connect_timeout(DatabaseConfig::CONNECT_TIMEOUT)
        .idle_timeout(DatabaseConfig::IDLE_TIMEOUT)
        .sqlx_logging(false)
        .to_owned();

    let db = Database::connect(opts).await?;
    tracing::info!("Database connected (pool: {})", config.max_connections);

    ensure_schema(&db).await?;
    Ok(db)
}

/// Create the `posts` table from the entity definition if it is missing.
#[cfg(feature = "postgres")]
pub async fn ensure_schema(db: &DbConn) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let mut stmt = Schema::new(backend).create_table_from_entity(super::entity::post::Entity);
    stmt.if_not_exists();

    db.execute(backend.build(&stmt)).await?;
    tracing::debug!("Posts table ready");
    Ok(())
}
