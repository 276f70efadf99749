#[cfg(feature = "mongodb")]
use std::time::Duration;

#[cfg(feature = "mongodb")]
use mongodb::bson::doc;
#[cfg(feature = "mongodb")]
use mongodb::options::ClientOptions;
#[cfg(feature = "mongodb")]
use mongodb::{Client, Database};

#[cfg(feature = "mongodb")]
use blog_core::error::RepoError;

/// Database name used when neither the configuration nor the URL names one.
pub const DEFAULT_DATABASE_NAME: &str = "blog";

/// Configuration for the document store.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    /// Overrides the database named in `url`.
    pub database_name: Option<String>,
    pub max_pool_size: u32,
    pub min_pool_size: u32,
}

/// Connection to the document store.
///
/// Holds the driver client (which owns the connection pool) and a handle to
/// the application database.
#[cfg(feature = "mongodb")]
pub struct DatabaseConnections {
    client: Client,
    /// Application database - home of the `authors` and `blogposts` collections.
    pub main: Database,
}

#[cfg(feature = "mongodb")]
impl DatabaseConnections {
    /// Connect and verify the server is reachable.
    pub async fn init(config: &DatabaseConfig) -> Result<Self, RepoError> {
        tracing::info!("Initializing database connection...");

        let mut options = ClientOptions::parse(&config.url)
            .await
            .map_err(|e| RepoError::Connection(e.to_string()))?;
        options.max_pool_size = Some(config.max_pool_size);
        options.min_pool_size = Some(config.min_pool_size);
        options.connect_timeout = Some(Duration::from_secs(10));
        options.server_selection_timeout = Some(Duration::from_secs(10));

        let name = config
            .database_name
            .clone()
            .or_else(|| options.default_database.clone())
            .unwrap_or_else(|| DEFAULT_DATABASE_NAME.to_string());

        let client =
            Client::with_options(options).map_err(|e| RepoError::Connection(e.to_string()))?;
        let main = client.database(&name);

        main.run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| RepoError::Connection(e.to_string()))?;

        tracing::info!(
            database = %name,
            pool = config.max_pool_size,
            "Database connected"
        );

        Ok(Self { client, main })
    }

    /// Close every pooled connection.
    pub async fn close(&self) {
        tracing::info!("Closing database connection");
        self.client.clone().shutdown().await;
    }
}
