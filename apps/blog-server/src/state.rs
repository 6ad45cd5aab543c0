//! Application state - shared across all handlers.

use std::fmt;
use std::sync::Arc;

use blog_core::PostService;
use blog_core::ports::PostRepository;
use blog_infra::{HtmlSanitizer, InMemoryPostRepository};

use crate::config::AppConfig;

/// Which post store the server is running against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Postgres,
    Memory,
}

impl fmt::Display for StoreBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreBackend::Postgres => write!(f, "postgres"),
            StoreBackend::Memory => write!(f, "memory"),
        }
    }
}

/// Failures that stop the server from starting.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("Database connection failed: {0}")]
    Database(String),
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<PostService>,
    pub store: StoreBackend,
}

impl AppState {
    /// Build the application state with the store the configuration asks for.
    pub async fn build(config: &AppConfig) -> Result<Self, StartupError> {
        let state = Self::connect(config).await?;
        tracing::info!(store = %state.store, "Application state initialized");
        Ok(state)
    }

    /// State backed by a fresh in-memory store.
    pub fn in_memory() -> Self {
        Self::with_repository(Arc::new(InMemoryPostRepository::new()), StoreBackend::Memory)
    }

    pub(crate) fn with_repository(repo: Arc<dyn PostRepository>, store: StoreBackend) -> Self {
        let posts = PostService::new(repo, Arc::new(HtmlSanitizer::new()));
        Self {
            posts: Arc::new(posts),
            store,
        }
    }

    #[cfg(feature = "postgres")]
    async fn connect(config: &AppConfig) -> Result<Self, StartupError> {
        let Some(db_config) = &config.database else {
            tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
            return Ok(Self::in_memory());
        };

        let conn = blog_infra::connect(db_config)
            .await
            .map_err(|e| StartupError::Database(e.to_string()))?;

        Ok(Self::with_repository(
            Arc::new(blog_infra::PostgresPostRepository::new(conn)),
            StoreBackend::Postgres,
        ))
    }

    #[cfg(not(feature = "postgres"))]
    async fn connect(config: &AppConfig) -> Result<Self, StartupError> {
        if config.database.is_some() {
            tracing::warn!("DATABASE_URL ignored: built without the postgres feature");
        }
        tracing::info!("Running without postgres feature - using in-memory repository");
        Ok(Self::in_memory())
    }
}
