//! Application configuration loaded from environment variables.

use std::env;

use quill_infra::DatabaseConfig;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required environment variable {0}")]
    Missing(&'static str),
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: DatabaseConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable lookup.
    ///
    /// `ATLAS_URI` and `DB_NAME` are required; everything else has a default.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database = DatabaseConfig {
            uri: var("ATLAS_URI").ok_or(ConfigError::Missing("ATLAS_URI"))?,
            name: var("DB_NAME").ok_or(ConfigError::Missing("DB_NAME"))?,
            max_pool_size: var("DB_MAX_POOL_SIZE")
                .and_then(|s| s.parse().ok())
                .unwrap_or(100),
            min_pool_size: var("DB_MIN_POOL_SIZE")
                .and_then(|s| s.parse().ok())
                .unwrap_or(10),
            app_name: var("SERVICE_NAME").unwrap_or_else(default_service_name),
        };

        Ok(Self {
            host: var("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: var("PORT").and_then(|p| p.parse().ok()).unwrap_or(8080),
            database,
        })
    }
}

fn default_service_name() -> String {
    "quill-api".to_string()
}

/// Service name used in logs and the store handshake.
pub fn service_name() -> String {
    env::var("SERVICE_NAME").unwrap_or_else(|_| default_service_name())
}
