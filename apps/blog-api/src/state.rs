//! Application state - shared across all handlers.

use std::sync::Arc;

use blog_core::error::RepoError;
use blog_core::ports::{AuthorRepository, BlogPostRepository};
use blog_infra::database::{DatabaseConfig, InMemoryAuthorRepository, InMemoryBlogPostRepository};

#[cfg(feature = "mongodb")]
use blog_infra::database::{DatabaseConnections, MongoAuthorRepository, MongoBlogPostRepository};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub authors: Arc<dyn AuthorRepository>,
    pub posts: Arc<dyn BlogPostRepository>,
    #[cfg(feature = "mongodb")]
    pub db: Option<Arc<DatabaseConnections>>,
}

impl AppState {
    /// State backed by in-memory repositories.
    pub fn in_memory() -> Self {
        Self {
            authors: Arc::new(InMemoryAuthorRepository::new()),
            posts: Arc::new(InMemoryBlogPostRepository::new()),
            #[cfg(feature = "mongodb")]
            db: None,
        }
    }

    /// Build the application state with appropriate implementations.
    ///
    /// Without a database configuration the server runs on in-memory storage.
    /// A configured database that cannot be reached is an error.
    pub async fn new(db_config: Option<&DatabaseConfig>) -> Result<Self, RepoError> {
        let Some(config) = db_config else {
            tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
            return Ok(Self::in_memory());
        };

        #[cfg(feature = "mongodb")]
        let state = Self::connect(config).await?;

        #[cfg(not(feature = "mongodb"))]
        let state = {
            tracing::warn!(
                database = ?config.database_name,
                "Built without mongodb feature - using in-memory repositories"
            );
            Self::in_memory()
        };

        tracing::info!("Application state initialized");
        Ok(state)
    }

    #[cfg(feature = "mongodb")]
    async fn connect(config: &DatabaseConfig) -> Result<Self, RepoError> {
        let connections = Arc::new(DatabaseConnections::init(config).await?);

        let authors = MongoAuthorRepository::new(&connections.main);
        if let Err(e) = authors.ensure_indexes().await {
            connections.close().await;
            return Err(e);
        }

        Ok(Self {
            authors: Arc::new(authors),
            posts: Arc::new(MongoBlogPostRepository::new(&connections.main)),
            db: Some(connections),
        })
    }

    /// Release storage resources.
    pub async fn close(&self) {
        #[cfg(feature = "mongodb")]
        if let Some(db) = &self.db {
            db.close().await;
        }
    }
}
