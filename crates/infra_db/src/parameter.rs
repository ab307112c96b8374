//! Query parameters
//!
//! A `DbParameter` is the mutable write target a type handler fills in when a
//! value is bound to a query: the value itself plus the storage type the
//! column is declared with.

use serde::{Deserialize, Serialize};

use crate::value::DbValue;

/// Declared storage type of a bound parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SqlType {
    Boolean,
    BigInt,
    Double,
    Text,
    Bytea,
    Date,
    /// Date and time with sub-second (microsecond) precision, no time zone
    Timestamp,
    /// Date and time with sub-second precision, normalized to UTC by the server
    TimestampTz,
}

impl SqlType {
    /// Returns the PostgreSQL name of this type
    pub fn pg_type_name(&self) -> &'static str {
        match self {
            SqlType::Boolean => "BOOL",
            SqlType::BigInt => "INT8",
            SqlType::Double => "FLOAT8",
            SqlType::Text => "TEXT",
            SqlType::Bytea => "BYTEA",
            SqlType::Date => "DATE",
            SqlType::Timestamp => "TIMESTAMP",
            SqlType::TimestampTz => "TIMESTAMPTZ",
        }
    }

    /// Returns true for the date-and-time types that keep sub-second digits
    pub fn has_subsecond_precision(&self) -> bool {
        matches!(self, SqlType::Timestamp | SqlType::TimestampTz)
    }
}

/// A parameter bound to a query
#[derive(Debug, Clone, PartialEq)]
pub struct DbParameter {
    /// Parameter name, if the query binds by name
    pub name: Option<String>,
    /// The value to send to the driver
    pub value: DbValue,
    /// The declared storage type, `None` lets the driver infer it
    pub db_type: Option<SqlType>,
}

impl DbParameter {
    /// Creates an unnamed parameter holding `NULL` with no declared type
    pub fn new() -> Self {
        Self {
            name: None,
            value: DbValue::Null,
            db_type: None,
        }
    }

    /// Creates a named parameter holding `NULL` with no declared type
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::new()
        }
    }

    pub fn set_value(&mut self, value: impl Into<DbValue>) {
        self.value = value.into();
    }

    pub fn set_db_type(&mut self, db_type: SqlType) {
        self.db_type = Some(db_type);
    }
}

impl Default for DbParameter {
    fn default() -> Self {
        Self::new()
    }
}
