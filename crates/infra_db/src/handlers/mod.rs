//! Type Handlers
//!
//! A type handler teaches the mapping layer how to bind one application type
//! to a query parameter and how to materialize it from a raw column value.
//!
//! # Usage
//!
//! ```rust
//! use core_kernel::Instant;
//! use infra_db::handlers::{InstantHandler, TypeHandler};
//! use infra_db::{DbParameter, DbValue, SqlType};
//!
//! let mut parameter = DbParameter::new();
//! InstantHandler::DEFAULT.set_value(&mut parameter, Instant::UNIX_EPOCH);
//! assert_eq!(parameter.db_type, Some(SqlType::Timestamp));
//!
//! let instant = InstantHandler::DEFAULT.parse(parameter.value).unwrap();
//! assert_eq!(instant, Instant::UNIX_EPOCH);
//! ```

pub mod instant;

pub use instant::InstantHandler;

use crate::error::DatabaseError;
use crate::parameter::DbParameter;
use crate::value::DbValue;

/// Extension point converting between a column value and an application type
///
/// Implementations must be stateless or internally synchronized; the mapping
/// layer shares one handler across every thread that touches the type.
pub trait TypeHandler<T>: Send + Sync {
    /// Writes `value` into `parameter`, including its declared storage type
    fn set_value(&self, parameter: &mut DbParameter, value: T);

    /// Converts a raw column value into `T`
    fn parse(&self, value: DbValue) -> Result<T, DatabaseError>;
}
