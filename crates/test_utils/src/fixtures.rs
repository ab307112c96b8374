//! Pre-built Test Fixtures
//!
//! Provides ready-to-use instants and raw driver values. These fixtures are
//! consistent and predictable for unit tests; the `random_*` helpers use
//! `fake` where any value will do.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Utc};
use core_kernel::Instant;
use fake::faker::chrono::en::DateTimeBetween;
use fake::faker::lorem::en::Sentence;
use fake::Fake;
use infra_db::DbValue;

/// Fixture for Instant test data
pub struct InstantFixtures;

impl InstantFixtures {
    /// 2024-01-01T00:00:00Z
    pub fn new_year_2024() -> Instant {
        Instant::from_date_time_utc(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())
    }

    /// 2024-02-29T12:00:00Z
    pub fn leap_day_noon() -> Instant {
        Instant::from_date_time_utc(Utc.with_ymd_and_hms(2024, 2, 29, 12, 0, 0).unwrap())
    }

    /// An instant with microsecond digits, storable without loss
    pub fn with_micros() -> Instant {
        Instant::from_unix_nanos(1_718_454_645_123_456_000)
    }

    /// An instant with nanosecond digits that PostgreSQL will truncate
    pub fn with_nanos() -> Instant {
        Instant::from_unix_nanos(1_718_454_645_123_456_789)
    }

    /// 1969-07-20T20:17:40Z
    pub fn before_epoch() -> Instant {
        Instant::from_date_time_utc(Utc.with_ymd_and_hms(1969, 7, 20, 20, 17, 40).unwrap())
    }
}

/// Fixture for raw driver values
pub struct RawValueFixtures;

impl RawValueFixtures {
    /// 2024-01-01T00:00:00.000 with no offset
    pub fn naive_new_year_2024() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_milli_opt(0, 0, 0, 0)
            .unwrap()
    }

    /// 10:00 local time at +02:00, which is 08:00 UTC
    pub fn ten_am_plus_two() -> DateTime<FixedOffset> {
        FixedOffset::east_opt(2 * 3600)
            .unwrap()
            .with_ymd_and_hms(2024, 6, 1, 10, 0, 0)
            .unwrap()
    }

    /// The UTC instant matching [`RawValueFixtures::ten_am_plus_two`]
    pub fn eight_am_utc() -> Instant {
        Instant::from_date_time_utc(Utc.with_ymd_and_hms(2024, 6, 1, 8, 0, 0).unwrap())
    }

    /// One value of every shape the instant handler must reject
    pub fn unsupported() -> Vec<DbValue> {
        vec![
            DbValue::Null,
            DbValue::Bool(true),
            DbValue::Int(1_704_067_200),
            DbValue::Float(1.5),
            DbValue::Text("2024-01-01T00:00:00Z".to_string()),
            DbValue::Bytes(vec![0, 1, 2]),
            DbValue::Date(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()),
            DbValue::Other {
                type_name: "INTERVAL".to_string(),
            },
        ]
    }
}

/// A random instant between 1970 and 2100
pub fn random_instant() -> Instant {
    let start = Utc.with_ymd_and_hms(1970, 1, 1, 0, 0, 0).unwrap();
    let end = Utc.with_ymd_and_hms(2100, 1, 1, 0, 0, 0).unwrap();
    let date_time: DateTime<Utc> = DateTimeBetween(start, end).fake();
    Instant::from_date_time_utc(date_time)
}

/// A random free-text value
pub fn random_text_value() -> DbValue {
    let text: String = Sentence(2..6).fake();
    DbValue::Text(text)
}
