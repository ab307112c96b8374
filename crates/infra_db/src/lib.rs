//! Infrastructure Database Layer
//!
//! This crate teaches the database layer how to store and read `Instant`
//! values. Instants live in `TIMESTAMP` (without time zone) columns holding
//! the UTC clock reading.
//!
//! # Architecture
//!
//! - [`handlers::TypeHandler`] is the extension point: one handler per
//!   application type, with an outbound (`set_value`) and inbound (`parse`)
//!   conversion.
//! - [`handlers::InstantHandler`] is the stateless handler for `Instant`,
//!   shared through `InstantHandler::DEFAULT`.
//! - [`registry`] keeps handlers by type so mapping code can resolve them.
//! - [`PgInstant`] binds the same conversions into SQLx for PostgreSQL.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::{create_pool, DatabaseConfig, PgInstant};
//!
//! let pool = create_pool(DatabaseConfig::from_env()?).await?;
//! sqlx::query("INSERT INTO events (recorded_at) VALUES ($1)")
//!     .bind(PgInstant(Instant::now()))
//!     .execute(&pool)
//!     .await?;
//! ```

pub mod error;
pub mod handlers;
pub mod parameter;
pub mod pg;
pub mod pool;
pub mod registry;
pub mod value;

pub use error::DatabaseError;
pub use handlers::{InstantHandler, TypeHandler};
pub use parameter::{DbParameter, SqlType};
pub use pg::PgInstant;
pub use pool::{create_pool, DatabaseConfig, DatabasePool};
pub use registry::TypeHandlerRegistry;
pub use value::DbValue;
