//! The `Instant` value type
//!
//! An `Instant` is a single point on the UTC timeline. It carries no time zone
//! or offset; calendar and clock fields only exist once it is projected into a
//! representation such as a UTC `NaiveDateTime` or an offset date-time.

use chrono::{
    DateTime, FixedOffset, NaiveDateTime, SecondsFormat, SubsecRound, TimeZone, Utc,
};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// A point on the UTC timeline with nanosecond resolution
///
/// Instants are immutable and cheap to copy. Ordering follows the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Instant(DateTime<Utc>);

impl Instant {
    /// 1970-01-01T00:00:00Z
    pub const UNIX_EPOCH: Instant = Instant(DateTime::<Utc>::UNIX_EPOCH);

    /// Returns the current instant from the system clock
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Creates an instant from a UTC date-time
    pub fn from_date_time_utc(date_time: DateTime<Utc>) -> Self {
        Self(date_time)
    }

    /// Creates an instant from a date-time in any time zone, applying its offset
    ///
    /// 10:00 at +02:00 becomes 08:00 UTC.
    pub fn from_date_time_offset<Tz: TimeZone>(date_time: &DateTime<Tz>) -> Self {
        Self(date_time.with_timezone(&Utc))
    }

    /// Creates an instant by taking the clock fields of `naive` verbatim as UTC
    ///
    /// No offset conversion is applied.
    pub fn from_naive_utc(naive: NaiveDateTime) -> Self {
        Self(naive.and_utc())
    }

    /// Creates an instant from whole seconds since the Unix epoch
    pub fn from_unix_seconds(seconds: i64) -> Result<Self, CoreError> {
        DateTime::from_timestamp(seconds, 0)
            .map(Self)
            .ok_or_else(|| CoreError::out_of_range(format!("{} Unix seconds", seconds)))
    }

    /// Creates an instant from milliseconds since the Unix epoch
    pub fn from_unix_millis(millis: i64) -> Result<Self, CoreError> {
        DateTime::from_timestamp_millis(millis)
            .map(Self)
            .ok_or_else(|| CoreError::out_of_range(format!("{} Unix milliseconds", millis)))
    }

    /// Creates an instant from nanoseconds since the Unix epoch
    ///
    /// Every `i64` is representable (roughly years 1677 to 2262).
    pub fn from_unix_nanos(nanos: i64) -> Self {
        Self(DateTime::from_timestamp_nanos(nanos))
    }

    /// Returns the UTC calendar/clock representation of this instant
    pub fn to_date_time_utc(&self) -> NaiveDateTime {
        self.0.naive_utc()
    }

    /// Returns this instant as a date-time with a zero offset
    pub fn to_date_time_offset(&self) -> DateTime<FixedOffset> {
        self.0.fixed_offset()
    }

    /// Returns this instant as a chrono UTC date-time
    pub fn as_date_time(&self) -> DateTime<Utc> {
        self.0
    }

    /// Whole seconds since the Unix epoch, rounded towards negative infinity
    pub fn unix_seconds(&self) -> i64 {
        self.0.timestamp()
    }

    /// Milliseconds since the Unix epoch
    pub fn unix_millis(&self) -> i64 {
        self.0.timestamp_millis()
    }

    /// Nanoseconds since the Unix epoch, `None` outside the `i64` range
    pub fn unix_nanos(&self) -> Option<i64> {
        self.0.timestamp_nanos_opt()
    }

    /// Drops sub-microsecond digits, the resolution PostgreSQL stores
    pub fn truncate_to_micros(&self) -> Self {
        Self(self.0.trunc_subsecs(6))
    }
}

impl From<DateTime<Utc>> for Instant {
    fn from(date_time: DateTime<Utc>) -> Self {
        Self(date_time)
    }
}

impl From<Instant> for DateTime<Utc> {
    fn from(instant: Instant) -> Self {
        instant.0
    }
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_rfc3339_opts(SecondsFormat::AutoSi, true))
    }
}

impl FromStr for Instant {
    type Err = CoreError;

    /// Parses an RFC 3339 string; any offset is applied
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DateTime::parse_from_rfc3339(s)
            .map(|dt| Self::from_date_time_offset(&dt))
            .map_err(|e| CoreError::parse(s, e))
    }
}

impl Serialize for Instant {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Instant {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Instant::from_str(&s).map_err(serde::de::Error::custom)
    }
}
