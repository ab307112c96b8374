//! Raw database values
//!
//! `DbValue` is the tagged union of representations a driver can hand to a
//! type handler, and the value a handler writes into a `DbParameter`.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Utc};
use core_kernel::Instant;
use sqlx::postgres::{PgTypeInfo, PgValueRef, Postgres};
use sqlx::{Decode, Type, TypeInfo, ValueRef};

use crate::error::DatabaseError;

/// A value as seen by the driver, before or after type-handler conversion
#[derive(Debug, Clone, PartialEq)]
pub enum DbValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Bytes(Vec<u8>),
    Date(NaiveDate),
    /// An already-typed instant
    Instant(Instant),
    /// A date-and-time with no time zone or offset
    DateTime(NaiveDateTime),
    /// A date-and-time carrying a fixed UTC offset
    DateTimeOffset(DateTime<FixedOffset>),
    /// A driver type this model does not carry, identified by name
    Other { type_name: String },
}

impl DbValue {
    /// Names the runtime representation of this value
    pub fn type_name(&self) -> &str {
        match self {
            DbValue::Null => "null",
            DbValue::Bool(_) => "bool",
            DbValue::Int(_) => "integer",
            DbValue::Float(_) => "float",
            DbValue::Text(_) => "text",
            DbValue::Bytes(_) => "bytes",
            DbValue::Date(_) => "date",
            DbValue::Instant(_) => "Instant",
            DbValue::DateTime(_) => "date-time",
            DbValue::DateTimeOffset(_) => "date-time-offset",
            DbValue::Other { type_name } => type_name,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, DbValue::Null)
    }

    /// Reads a PostgreSQL column value into its raw representation
    ///
    /// `TIMESTAMP` becomes `DateTime`, `TIMESTAMPTZ` becomes `DateTimeOffset`.
    /// Types outside the model come back as `Other` with the PostgreSQL type name.
    pub fn from_pg_value(value: PgValueRef<'_>) -> Result<Self, DatabaseError> {
        if value.is_null() {
            return Ok(DbValue::Null);
        }

        let type_info = value.type_info().into_owned();

        let decoded = if is::<NaiveDateTime>(&type_info) {
            <NaiveDateTime as Decode<'_, Postgres>>::decode(value).map(DbValue::DateTime)
        } else if is::<DateTime<Utc>>(&type_info) {
            <DateTime<FixedOffset> as Decode<'_, Postgres>>::decode(value).map(DbValue::DateTimeOffset)
        } else if is::<NaiveDate>(&type_info) {
            <NaiveDate as Decode<'_, Postgres>>::decode(value).map(DbValue::Date)
        } else if is::<String>(&type_info) {
            <String as Decode<'_, Postgres>>::decode(value).map(DbValue::Text)
        } else if is::<i64>(&type_info) {
            <i64 as Decode<'_, Postgres>>::decode(value).map(DbValue::Int)
        } else if is::<i32>(&type_info) {
            <i32 as Decode<'_, Postgres>>::decode(value).map(|v| DbValue::Int(i64::from(v)))
        } else if is::<bool>(&type_info) {
            <bool as Decode<'_, Postgres>>::decode(value).map(DbValue::Bool)
        } else if is::<f64>(&type_info) {
            <f64 as Decode<'_, Postgres>>::decode(value).map(DbValue::Float)
        } else if is::<Vec<u8>>(&type_info) {
            <Vec<u8> as Decode<'_, Postgres>>::decode(value).map(DbValue::Bytes)
        } else {
            return Ok(DbValue::Other {
                type_name: type_info.name().to_string(),
            });
        };

        decoded.map_err(|e| DatabaseError::QueryFailed(e.to_string()))
    }
}

fn is<T: Type<Postgres>>(type_info: &PgTypeInfo) -> bool {
    <T as Type<Postgres>>::compatible(type_info)
}

impl From<Instant> for DbValue {
    fn from(instant: Instant) -> Self {
        DbValue::Instant(instant)
    }
}

impl From<NaiveDateTime> for DbValue {
    fn from(naive: NaiveDateTime) -> Self {
        DbValue::DateTime(naive)
    }
}

impl From<DateTime<FixedOffset>> for DbValue {
    fn from(date_time: DateTime<FixedOffset>) -> Self {
        DbValue::DateTimeOffset(date_time)
    }
}

impl From<String> for DbValue {
    fn from(text: String) -> Self {
        DbValue::Text(text)
    }
}

impl From<&str> for DbValue {
    fn from(text: &str) -> Self {
        DbValue::Text(text.to_string())
    }
}

impl From<i64> for DbValue {
    fn from(value: i64) -> Self {
        DbValue::Int(value)
    }
}
