//! Database error types
//!
//! This module defines the error types that can occur while mapping values to
//! and from the database, and during the surrounding connection plumbing.

use thiserror::Error;

/// Errors that can occur during database operations
///
/// Conversion failures raised by type handlers abort the enclosing read;
/// nothing in this crate retries them.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// A raw column value had a representation the handler cannot convert
    #[error("Cannot convert {type_name} to {target}")]
    UnsupportedSourceType {
        type_name: String,
        target: &'static str,
    },

    /// No handler is registered for the requested application type
    #[error("No type handler registered for {type_name}")]
    HandlerNotRegistered { type_name: &'static str },

    /// Failed to establish a database connection
    #[error("Failed to connect to database: {0}")]
    ConnectionFailed(String),

    /// Query execution failed
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Pool exhaustion - no available connections
    #[error("Connection pool exhausted")]
    PoolExhausted,

    /// Generic SQL error
    #[error("SQL error: {0}")]
    SqlError(#[from] sqlx::Error),
}

impl DatabaseError {
    /// Creates an unsupported source type error
    ///
    /// # Arguments
    ///
    /// * `type_name` - Runtime type of the raw value that was rejected
    /// * `target` - The application type the handler converts to
    ///
    /// # Example
    ///
    /// ```rust
    /// use infra_db::DatabaseError;
    ///
    /// let error = DatabaseError::unsupported_source("text", "Instant");
    /// assert_eq!(error.to_string(), "Cannot convert text to Instant");
    /// ```
    pub fn unsupported_source(type_name: impl Into<String>, target: &'static str) -> Self {
        DatabaseError::UnsupportedSourceType {
            type_name: type_name.into(),
            target,
        }
    }

    /// Checks if this error is a value conversion failure
    pub fn is_conversion_error(&self) -> bool {
        matches!(
            self,
            DatabaseError::UnsupportedSourceType { .. } | DatabaseError::HandlerNotRegistered { .. }
        )
    }

    /// Checks if this error is a connection-related issue
    pub fn is_connection_error(&self) -> bool {
        matches!(
            self,
            DatabaseError::ConnectionFailed(_) | DatabaseError::PoolExhausted
        )
    }
}

/// Converts SQLx errors to more specific DatabaseError variants
impl From<&sqlx::Error> for DatabaseError {
    fn from(error: &sqlx::Error) -> Self {
        match error {
            sqlx::Error::PoolTimedOut => DatabaseError::PoolExhausted,
            sqlx::Error::Configuration(e) => DatabaseError::Configuration(e.to_string()),
            sqlx::Error::Io(e) => DatabaseError::ConnectionFailed(e.to_string()),
            sqlx::Error::Database(db_err) => DatabaseError::QueryFailed(db_err.message().to_string()),
            _ => DatabaseError::QueryFailed(error.to_string()),
        }
    }
}

impl From<config::ConfigError> for DatabaseError {
    fn from(error: config::ConfigError) -> Self {
        DatabaseError::Configuration(error.to_string())
    }
}
