//! SQLx bindings for `Instant`
//!
//! `PgInstant` wraps an `Instant` so it can be bound to and fetched from
//! PostgreSQL through SQLx. Both directions go through `InstantHandler`, so
//! the driver path and the handler share one set of conversion rules.
//!
//! ```rust,ignore
//! use infra_db::PgInstant;
//!
//! sqlx::query("INSERT INTO events (recorded_at) VALUES ($1)")
//!     .bind(PgInstant(Instant::now()))
//!     .execute(&pool)
//!     .await?;
//!
//! let (recorded_at,): (PgInstant,) = sqlx::query_as("SELECT recorded_at FROM events")
//!     .fetch_one(&pool)
//!     .await?;
//! ```

use chrono::{DateTime, NaiveDateTime, Utc};
use core_kernel::Instant;
use sqlx::encode::IsNull;
use sqlx::error::BoxDynError;
use sqlx::postgres::{PgArgumentBuffer, PgTypeInfo, PgValueRef, Postgres};
use sqlx::{Decode, Encode, Type};

use crate::error::DatabaseError;
use crate::handlers::{InstantHandler, TypeHandler};
use crate::parameter::DbParameter;
use crate::value::DbValue;

/// An `Instant` stored in a `TIMESTAMP` column
///
/// Decoding also accepts `TIMESTAMPTZ` columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PgInstant(pub Instant);

impl PgInstant {
    pub fn into_inner(self) -> Instant {
        self.0
    }
}

impl From<Instant> for PgInstant {
    fn from(instant: Instant) -> Self {
        Self(instant)
    }
}

impl From<PgInstant> for Instant {
    fn from(value: PgInstant) -> Self {
        value.0
    }
}

impl Type<Postgres> for PgInstant {
    fn type_info() -> PgTypeInfo {
        <NaiveDateTime as Type<Postgres>>::type_info()
    }

    fn compatible(ty: &PgTypeInfo) -> bool {
        <NaiveDateTime as Type<Postgres>>::compatible(ty)
            || <DateTime<Utc> as Type<Postgres>>::compatible(ty)
    }
}

impl Encode<'_, Postgres> for PgInstant {
    fn encode_by_ref(&self, buf: &mut PgArgumentBuffer) -> Result<IsNull, BoxDynError> {
        let mut parameter = DbParameter::new();
        InstantHandler::DEFAULT.set_value(&mut parameter, self.0);

        match parameter.value {
            DbValue::DateTime(naive) => <NaiveDateTime as Encode<'_, Postgres>>::encode_by_ref(&naive, buf),
            other => Err(DatabaseError::unsupported_source(other.type_name(), "TIMESTAMP").into()),
        }
    }
}

impl<'r> Decode<'r, Postgres> for PgInstant {
    fn decode(value: PgValueRef<'r>) -> Result<Self, BoxDynError> {
        let raw = DbValue::from_pg_value(value)?;
        let instant = InstantHandler::DEFAULT.parse(raw)?;
        Ok(Self(instant))
    }
}
