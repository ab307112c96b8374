//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating instants, offsets and raw
//! driver values.

use chrono::{DateTime, FixedOffset};
use core_kernel::Instant;
use infra_db::DbValue;
use proptest::prelude::*;

/// Strategy for instants anywhere in the nanosecond `i64` range
pub fn instant_strategy() -> impl Strategy<Value = Instant> {
    any::<i64>().prop_map(Instant::from_unix_nanos)
}

/// Strategy for instants PostgreSQL can store without truncation
///
/// Covers 1900 through 2200 at microsecond resolution.
pub fn storable_instant_strategy() -> impl Strategy<Value = Instant> {
    (-2_208_988_800_000_000i64..7_258_118_400_000_000i64)
        .prop_map(|micros| Instant::from_unix_nanos(micros * 1_000))
}

/// Strategy for fixed UTC offsets between -14:00 and +14:00, minute aligned
pub fn offset_strategy() -> impl Strategy<Value = FixedOffset> {
    (-14 * 60..=14 * 60i32).prop_filter_map("offset out of range", |minutes| {
        FixedOffset::east_opt(minutes * 60)
    })
}

/// Strategy for offset date-times, paired with the instant they denote
pub fn offset_date_time_strategy() -> impl Strategy<Value = (DateTime<FixedOffset>, Instant)> {
    (storable_instant_strategy(), offset_strategy()).prop_map(|(instant, offset)| {
        (instant.as_date_time().with_timezone(&offset), instant)
    })
}

/// Strategy for raw values the instant handler does not accept
pub fn unsupported_value_strategy() -> impl Strategy<Value = DbValue> {
    prop_oneof![
        Just(DbValue::Null),
        any::<bool>().prop_map(DbValue::Bool),
        any::<i64>().prop_map(DbValue::Int),
        any::<f64>().prop_map(DbValue::Float),
        ".*".prop_map(DbValue::Text),
        proptest::collection::vec(any::<u8>(), 0..32).prop_map(DbValue::Bytes),
        "[A-Z]{3,12}".prop_map(|type_name| DbValue::Other { type_name }),
    ]
}
