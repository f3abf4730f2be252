//! Storage config: database connection, pool size, query deadline, logging. Loaded from env.

use std::env;
use std::time::Duration;

use crate::error::{Result, StorageError};

/// Storage config: database, pool and per-command deadline.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// DATABASE_URL: `sqlite:` connection string or a plain file path
    pub database_url: String,
    /// DATABASE_MAX_CONNECTIONS
    pub max_connections: u32,
    /// QUERY_TIMEOUT_SECS; `None` when set to 0
    pub query_timeout: Option<Duration>,
    /// LOG_FILE
    pub log_file: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            database_url: "sqlite:./articles.db".to_string(),
            max_connections: 5,
            query_timeout: Some(Duration::from_secs(30)),
            log_file: "logs/articles.log".to_string(),
        }
    }
}

impl StorageConfig {
    /// Load from environment variables, falling back to defaults for anything unset or unparsable.
    pub fn load() -> Self {
        let defaults = Self::default();

        let database_url = env::var("DATABASE_URL").unwrap_or(defaults.database_url);
        let max_connections = env::var("DATABASE_MAX_CONNECTIONS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.max_connections);
        let query_timeout = match env::var("QUERY_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            Some(0) => None,
            Some(secs) => Some(Duration::from_secs(secs)),
            None => defaults.query_timeout,
        };
        let log_file = env::var("LOG_FILE").unwrap_or(defaults.log_file);

        Self {
            database_url,
            max_connections,
            query_timeout,
            log_file,
        }
    }

    /// Validate config before opening the pool.
    pub fn validate(&self) -> Result<()> {
        if self.database_url.trim().is_empty() {
            return Err(StorageError::BadParamInput(
                "DATABASE_URL must not be empty".to_string(),
            ));
        }
        if self.max_connections == 0 {
            return Err(StorageError::BadParamInput(
                "DATABASE_MAX_CONNECTIONS must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
