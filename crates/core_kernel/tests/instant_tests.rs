//! Comprehensive unit tests for the Instant type
//!
//! Tests cover construction, projections, ordering, text
//! formatting and serde support.

use chrono::{DateTime, FixedOffset, NaiveDate, TimeZone, Timelike, Utc};
use core_kernel::{CoreError, Instant};
use proptest::prelude::*;

mod construction {
    use super::*;

    #[test]
    fn test_from_date_time_utc_preserves_value() {
        let dt = Utc.with_ymd_and_hms(2024, 6, 15, 12, 30, 45).unwrap();
        let instant = Instant::from_date_time_utc(dt);

        assert_eq!(instant.as_date_time(), dt);
        assert_eq!(DateTime::<Utc>::from(instant), dt);
    }

    #[test]
    fn test_from_date_time_offset_negative_offset() {
        let local = FixedOffset::west_opt(5 * 3600)
            .unwrap()
            .with_ymd_and_hms(2024, 12, 31, 22, 0, 0)
            .unwrap();

        let instant = Instant::from_date_time_offset(&local);

        assert_eq!(
            instant.as_date_time(),
            Utc.with_ymd_and_hms(2025, 1, 1, 3, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_from_unix_seconds() {
        let instant = Instant::from_unix_seconds(1_704_067_200).unwrap();
        assert_eq!(instant.to_string(), "2024-01-01T00:00:00Z");
    }

    #[test]
    fn test_from_unix_seconds_out_of_range() {
        let result = Instant::from_unix_seconds(i64::MAX);
        assert!(matches!(result, Err(CoreError::OutOfRange(_))));
    }

    #[test]
    fn test_from_unix_millis() {
        let instant = Instant::from_unix_millis(1_704_067_200_250).unwrap();
        assert_eq!(instant.as_date_time().nanosecond(), 250_000_000);
    }

    #[test]
    fn test_from_unix_millis_out_of_range() {
        assert!(Instant::from_unix_millis(i64::MIN).is_err());
    }

    #[test]
    fn test_now_is_after_epoch() {
        assert!(Instant::now() > Instant::UNIX_EPOCH);
    }
}

mod projections {
    use super::*;

    #[test]
    fn test_to_date_time_utc_has_utc_clock_fields() {
        let local = FixedOffset::east_opt(9 * 3600)
            .unwrap()
            .with_ymd_and_hms(2024, 1, 1, 9, 0, 0)
            .unwrap();
        let instant = Instant::from_date_time_offset(&local);

        let expected = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert_eq!(instant.to_date_time_utc(), expected);
    }

    #[test]
    fn test_to_date_time_offset_is_zero_offset() {
        let instant = Instant::from_unix_seconds(0).unwrap();
        let dto = instant.to_date_time_offset();

        assert_eq!(dto.offset().local_minus_utc(), 0);
        assert_eq!(dto.timestamp(), 0);
    }

    #[test]
    fn test_unix_accessors() {
        let instant = Instant::from_unix_nanos(1_500_000_001);

        assert_eq!(instant.unix_seconds(), 1);
        assert_eq!(instant.unix_millis(), 1_500);
        assert_eq!(instant.unix_nanos(), Some(1_500_000_001));
    }

    #[test]
    fn test_unix_seconds_before_epoch_rounds_down() {
        let instant = Instant::from_unix_nanos(-1);
        assert_eq!(instant.unix_seconds(), -1);
    }
}

mod ordering {
    use super::*;

    #[test]
    fn test_instants_order_by_timeline() {
        let earlier = Instant::from_unix_seconds(100).unwrap();
        let later = Instant::from_unix_seconds(200).unwrap();

        assert!(earlier < later);
        assert_eq!(earlier.max(later), later);
    }

    #[test]
    fn test_same_moment_different_offsets_are_equal() {
        let a = FixedOffset::east_opt(3600)
            .unwrap()
            .with_ymd_and_hms(2024, 5, 1, 13, 0, 0)
            .unwrap();
        let b = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();

        assert_eq!(Instant::from_date_time_offset(&a), Instant::from(b));
    }
}

mod text {
    use super::*;

    #[test]
    fn test_display_uses_z_suffix() {
        let instant = Instant::from_unix_millis(1_704_067_200_123).unwrap();
        assert_eq!(instant.to_string(), "2024-01-01T00:00:00.123Z");
    }

    #[test]
    fn test_parse_applies_offset() {
        let instant: Instant = "2024-01-01T10:00:00+02:00".parse().unwrap();
        assert_eq!(instant.to_string(), "2024-01-01T08:00:00Z");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let result = "not a timestamp".parse::<Instant>();
        assert!(matches!(result, Err(CoreError::Parse { .. })));
    }

    #[test]
    fn test_serde_uses_rfc3339_string() {
        let instant: Instant = "2024-02-29T23:59:59.5Z".parse().unwrap();

        let json = serde_json::to_string(&instant).unwrap();
        assert_eq!(json, "\"2024-02-29T23:59:59.500Z\"");

        let back: Instant = serde_json::from_str(&json).unwrap();
        assert_eq!(back, instant);
    }

    #[test]
    fn test_serde_rejects_invalid_string() {
        let result = serde_json::from_str::<Instant>("\"2024-02-30T00:00:00Z\"");
        assert!(result.is_err());
    }
}

proptest! {
    #[test]
    fn prop_naive_utc_projection_is_lossless(nanos in any::<i64>()) {
        let instant = Instant::from_unix_nanos(nanos);
        prop_assert_eq!(Instant::from_naive_utc(instant.to_date_time_utc()), instant);
    }

    #[test]
    fn prop_display_parse_round_trip(nanos in any::<i64>()) {
        let instant = Instant::from_unix_nanos(nanos);
        let parsed: Instant = instant.to_string().parse().unwrap();
        prop_assert_eq!(parsed, instant);
    }

    #[test]
    fn prop_truncate_to_micros_is_idempotent(nanos in any::<i64>()) {
        let once = Instant::from_unix_nanos(nanos).truncate_to_micros();
        prop_assert_eq!(once.truncate_to_micros(), once);
        prop_assert!(once <= Instant::from_unix_nanos(nanos));
    }
}
