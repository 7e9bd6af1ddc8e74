use std::time::Duration;

use mongodb::bson::doc;
use mongodb::options::ClientOptions;
use mongodb::{Client, Database};

use quill_core::error::RepoError;

use super::DatabaseConfig;
use super::mongo_repo::repo_error;

/// Process-wide document store handle.
///
/// Created once at startup with [`DatabaseConnections::init`] and released once
/// at shutdown with [`DatabaseConnections::close`]. The driver pools
/// connections internally, so the handle is shared freely between workers.
///
/// # Example
/// ```ignore
/// let db = DatabaseConnections::init(&config).await?;
/// let posts = MongoPostRepository::new(&db.db);
/// // ... serve ...
/// db.close().await;
/// ```
pub struct DatabaseConnections {
    pub client: Client,
    /// The configured database.
    pub db: Database,
}

impl DatabaseConnections {
    /// Connect to the configured database and verify it answers a `ping`.
    ///
    /// An unreachable server surfaces as [`RepoError::Connection`].
    pub async fn init(config: &DatabaseConfig) -> Result<Self, RepoError> {
        tracing::info!("Initializing document store connection...");

        let mut options = ClientOptions::parse(&config.uri)
            .await
            .map_err(|e| RepoError::Connection(e.to_string()))?;
        options.max_pool_size = Some(config.max_pool_size);
        options.min_pool_size = Some(config.min_pool_size);
        options.connect_timeout.get_or_insert(Duration::from_secs(10));
        options.max_idle_time = Some(Duration::from_secs(300));
        options.app_name = Some(config.app_name.clone());

        let client =
            Client::with_options(options).map_err(|e| RepoError::Connection(e.to_string()))?;
        let db = client.database(&config.name);
        db.run_command(doc! { "ping": 1 })
            .await
            .map_err(repo_error)?;

        tracing::info!(
            database = %config.name,
            "Document store connected (pool: {})",
            config.max_pool_size
        );

        Ok(Self { client, db })
    }

    /// Close the client, waiting for in-flight operations to finish.
    pub async fn close(&self) {
        tracing::info!(database = %self.db.name(), "Closing document store connection");
        self.client.clone().shutdown().await;
    }
}
