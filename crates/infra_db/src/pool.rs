//! Database connection pool management
//!
//! This module provides connection pool configuration and creation for the
//! PostgreSQL databases that hold `Instant` columns.

use serde::Deserialize;
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;
use tracing::{info, instrument};

use crate::error::DatabaseError;
use crate::registry::register_defaults;

/// Type alias for the PostgreSQL connection pool
pub type DatabasePool = PgPool;

/// Configuration options for the database connection pool
///
/// # Example
///
/// ```rust
/// use infra_db::DatabaseConfig;
///
/// let config = DatabaseConfig::new("postgres://localhost/instants")
///     .max_connections(20)
///     .min_connections(5)
///     .connect_timeout_secs(10);
/// assert_eq!(config.max_connections, 20);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// PostgreSQL connection string
    pub url: String,
    /// Maximum number of connections in the pool
    pub max_connections: u32,
    /// Minimum number of connections to maintain
    pub min_connections: u32,
    /// Seconds to wait for a connection
    pub connect_timeout_secs: u64,
}

impl DatabaseConfig {
    /// Creates a new database configuration with the given connection URL
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: 10,
            min_connections: 2,
            connect_timeout_secs: 30,
        }
    }

    /// Loads configuration from `INSTANT_DB_*` environment variables
    ///
    /// A `.env` file in the working directory is read first if present.
    /// Unset variables keep their defaults.
    ///
    /// * `INSTANT_DB_URL` - PostgreSQL connection string
    /// * `INSTANT_DB_MAX_CONNECTIONS` - pool size (default: 10)
    /// * `INSTANT_DB_MIN_CONNECTIONS` - idle connections kept open (default: 2)
    /// * `INSTANT_DB_CONNECT_TIMEOUT_SECS` - acquire timeout (default: 30)
    pub fn from_env() -> Result<Self, DatabaseError> {
        let _ = dotenvy::dotenv();

        let config = config::Config::builder()
            .add_source(config::Environment::with_prefix("INSTANT_DB").try_parsing(true))
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Sets the maximum number of connections in the pool
    pub fn max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }

    /// Sets the minimum number of connections to maintain
    pub fn min_connections(mut self, min: u32) -> Self {
        self.min_connections = min;
        self
    }

    /// Sets the connection timeout in seconds
    pub fn connect_timeout_secs(mut self, secs: u64) -> Self {
        self.connect_timeout_secs = secs;
        self
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self::new("postgres://localhost/instants")
    }
}

/// Creates a database connection pool with the given configuration
///
/// The built-in type handlers are registered before the pool is returned.
///
/// # Errors
///
/// Returns `DatabaseError::ConnectionFailed` if the pool cannot be created
#[instrument(skip(config), fields(max_connections = config.max_connections))]
pub async fn create_pool(config: DatabaseConfig) -> Result<DatabasePool, DatabaseError> {
    info!(
        "Creating database pool with max_connections={}, min_connections={}",
        config.max_connections, config.min_connections
    );

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(config.connect_timeout())
        .connect(&config.url)
        .await
        .map_err(|e| DatabaseError::ConnectionFailed(e.to_string()))?;

    register_defaults();

    info!("Database pool created successfully");
    Ok(pool)
}
