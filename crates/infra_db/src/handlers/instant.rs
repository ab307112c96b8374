//! Instant <-> TIMESTAMP handler
//!
//! Instants are stored as `TIMESTAMP` (no time zone) holding the UTC clock
//! reading. On read, three raw shapes are accepted:
//!
//! - an `Instant`, returned unchanged
//! - a date-time without offset, whose clock fields are taken verbatim as UTC
//! - a date-time with offset, converted to UTC
//!
//! Anything else is rejected with `DatabaseError::UnsupportedSourceType`.
//!
//! Values read from a `TIMESTAMP` column are never shifted, even when the data
//! was written as local time by another client. Those rows import wrong.

use core_kernel::Instant;
use tracing::{trace, warn};

use crate::error::DatabaseError;
use crate::handlers::TypeHandler;
use crate::parameter::{DbParameter, SqlType};
use crate::value::DbValue;

/// Stateless handler for `Instant` columns
///
/// Use the shared [`InstantHandler::DEFAULT`] instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstantHandler {
    _private: (),
}

impl InstantHandler {
    /// The process-wide handler instance
    pub const DEFAULT: InstantHandler = InstantHandler { _private: () };

    const TARGET: &'static str = "Instant";
}

impl TypeHandler<Instant> for InstantHandler {
    fn set_value(&self, parameter: &mut DbParameter, value: Instant) {
        parameter.value = DbValue::DateTime(value.to_date_time_utc());
        parameter.db_type = Some(SqlType::Timestamp);
    }

    fn parse(&self, value: DbValue) -> Result<Instant, DatabaseError> {
        match value {
            DbValue::Instant(instant) => Ok(instant),
            DbValue::DateTime(naive) => {
                trace!(%naive, "Reading unaware date-time as UTC");
                Ok(Instant::from_naive_utc(naive))
            }
            DbValue::DateTimeOffset(date_time) => {
                trace!(%date_time, "Converting offset date-time to UTC");
                Ok(Instant::from_date_time_offset(&date_time))
            }
            other @ (DbValue::Null
            | DbValue::Bool(_)
            | DbValue::Int(_)
            | DbValue::Float(_)
            | DbValue::Text(_)
            | DbValue::Bytes(_)
            | DbValue::Date(_)
            | DbValue::Other { .. }) => {
                let type_name = other.type_name();
                warn!(type_name, "Unsupported source type for Instant column");
                Err(DatabaseError::unsupported_source(type_name, Self::TARGET))
            }
        }
    }
}
