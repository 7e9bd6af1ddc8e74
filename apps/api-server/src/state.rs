//! Application state - shared across all handlers.

use std::sync::Arc;
use std::time::Duration;

use quill_core::error::RepoError;
use quill_core::ports::PostRepository;
use quill_infra::{DatabaseConfig, DatabaseConnections, MongoPostRepository};

/// Upper bound on waiting for in-flight store operations at shutdown.
const SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(10);

/// Which backend serves the posts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    MongoDb,
    /// In-process store, only used by tests.
    #[cfg_attr(not(test), allow(dead_code))]
    Memory,
}

impl StoreKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StoreKind::MongoDb => "mongodb",
            StoreKind::Memory => "memory",
        }
    }
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
    pub store: StoreKind,
    pub db: Option<Arc<DatabaseConnections>>,
}

impl AppState {
    /// Connect to the document store. Failing to reach it is fatal for the process.
    pub async fn new(db_config: &DatabaseConfig) -> Result<Self, RepoError> {
        let connections = DatabaseConnections::init(db_config).await?;
        let posts = Arc::new(MongoPostRepository::new(&connections.db));

        tracing::info!("Application state initialized");

        Ok(Self {
            posts,
            store: StoreKind::MongoDb,
            db: Some(Arc::new(connections)),
        })
    }

    /// State over an arbitrary repository, with no store connection to release.
    #[cfg(test)]
    pub fn with_repository(posts: Arc<dyn PostRepository>, store: StoreKind) -> Self {
        Self {
            posts,
            store,
            db: None,
        }
    }

    /// Release the document store connection. Called once, after the server stops.
    pub async fn shutdown(&self) {
        if let Some(db) = &self.db {
            if tokio::time::timeout(SHUTDOWN_TIMEOUT, db.close()).await.is_err() {
                tracing::warn!("Document store did not close within {:?}", SHUTDOWN_TIMEOUT);
            }
        }

        tracing::info!("Application state released");
    }
}
