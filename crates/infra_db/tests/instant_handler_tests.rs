//! Tests for the Instant type handler
//!
//! Covers both conversion directions, every rejected raw shape, and the
//! round-trip properties the handler guarantees.

use core_kernel::Instant;
use infra_db::handlers::{InstantHandler, TypeHandler};
use infra_db::{DatabaseError, DbParameter, DbValue, SqlType};
use proptest::prelude::*;
use test_utils::{
    assert_unsupported_source, init_test_tracing, instant_strategy, offset_date_time_strategy,
    random_instant, random_text_value, unsupported_value_strategy, InstantFixtures,
    RawValueFixtures,
};

mod outbound {
    use super::*;

    #[test]
    fn test_value_is_utc_clock_reading() {
        let mut parameter = DbParameter::new();
        InstantHandler::DEFAULT.set_value(&mut parameter, InstantFixtures::new_year_2024());

        assert_eq!(
            parameter.value,
            DbValue::DateTime(RawValueFixtures::naive_new_year_2024())
        );
    }

    #[test]
    fn test_overwrites_previous_value_and_type() {
        let mut parameter = DbParameter::named("recorded_at");
        parameter.set_value("stale");
        parameter.set_db_type(SqlType::Text);

        InstantHandler::DEFAULT.set_value(&mut parameter, InstantFixtures::leap_day_noon());

        assert_eq!(parameter.db_type, Some(SqlType::Timestamp));
        assert!(matches!(parameter.value, DbValue::DateTime(_)));
        assert_eq!(parameter.name.as_deref(), Some("recorded_at"));
    }

    #[test]
    fn test_keeps_nanosecond_digits() {
        let mut parameter = DbParameter::new();
        let instant = InstantFixtures::with_nanos();
        InstantHandler::DEFAULT.set_value(&mut parameter, instant);

        assert_eq!(parameter.value, DbValue::DateTime(instant.to_date_time_utc()));
    }

    #[test]
    fn test_before_epoch() {
        let mut parameter = DbParameter::new();
        InstantHandler::DEFAULT.set_value(&mut parameter, InstantFixtures::before_epoch());

        match parameter.value {
            DbValue::DateTime(naive) => assert_eq!(naive.to_string(), "1969-07-20 20:17:40"),
            other => panic!("Expected DateTime, got {:?}", other),
        }
    }
}

mod inbound {
    use super::*;

    #[test]
    fn test_instant_is_returned_unchanged() {
        let instant = random_instant();
        assert_eq!(
            InstantHandler::DEFAULT.parse(DbValue::Instant(instant)).unwrap(),
            instant
        );
    }

    #[test]
    fn test_unaware_value_taken_as_utc() {
        let parsed = InstantHandler::DEFAULT
            .parse(DbValue::DateTime(RawValueFixtures::naive_new_year_2024()))
            .unwrap();

        assert_eq!(parsed, InstantFixtures::new_year_2024());
        assert_eq!(parsed.to_string(), "2024-01-01T00:00:00Z");
    }

    #[test]
    fn test_offset_value_applies_offset() {
        let parsed = InstantHandler::DEFAULT
            .parse(DbValue::DateTimeOffset(RawValueFixtures::ten_am_plus_two()))
            .unwrap();

        assert_eq!(parsed, RawValueFixtures::eight_am_utc());
    }

    #[test]
    fn test_text_is_rejected() {
        init_test_tracing();
        assert_unsupported_source(InstantHandler::DEFAULT.parse(random_text_value()), "text");
    }

    #[test]
    fn test_every_unsupported_shape_is_rejected() {
        for value in RawValueFixtures::unsupported() {
            let expected = value.type_name().to_string();
            assert_unsupported_source(InstantHandler::DEFAULT.parse(value), &expected);
        }
    }

    #[test]
    fn test_error_message_names_type() {
        let error = InstantHandler::DEFAULT
            .parse(DbValue::Other {
                type_name: "INTERVAL".to_string(),
            })
            .unwrap_err();

        assert_eq!(error.to_string(), "Cannot convert INTERVAL to Instant");
        assert!(error.is_conversion_error());
    }
}

mod sharing {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_default_handler_is_shared_across_threads() {
        let handler: Arc<dyn TypeHandler<Instant>> = Arc::new(InstantHandler::DEFAULT);

        let workers: Vec<_> = (0..8i64)
            .map(|n| {
                let handler = Arc::clone(&handler);
                thread::spawn(move || {
                    let instant = Instant::from_unix_seconds(n * 86_400).unwrap();
                    let mut parameter = DbParameter::new();
                    handler.set_value(&mut parameter, instant);
                    handler.parse(parameter.value).map(|parsed| (parsed, instant))
                })
            })
            .collect();

        for worker in workers {
            let (parsed, instant) = worker.join().unwrap().unwrap();
            assert_eq!(parsed, instant);
        }
    }

    #[test]
    fn test_default_is_the_only_value() {
        let copy = InstantHandler::DEFAULT;
        assert_eq!(copy, InstantHandler::DEFAULT);
        assert_eq!(std::mem::size_of::<InstantHandler>(), 0);
    }
}

proptest! {
    #[test]
    fn prop_instant_branch_is_identity(instant in instant_strategy()) {
        let mut parameter = DbParameter::new();
        InstantHandler::DEFAULT.set_value(&mut parameter, instant);

        prop_assert_eq!(InstantHandler::DEFAULT.parse(DbValue::Instant(instant)).unwrap(), instant);
    }

    #[test]
    fn prop_outbound_then_inbound_is_lossless(instant in instant_strategy()) {
        let mut parameter = DbParameter::new();
        InstantHandler::DEFAULT.set_value(&mut parameter, instant);

        prop_assert_eq!(parameter.db_type, Some(SqlType::Timestamp));
        prop_assert_eq!(InstantHandler::DEFAULT.parse(parameter.value).unwrap(), instant);
    }

    #[test]
    fn prop_offset_branch_matches_timeline((date_time, instant) in offset_date_time_strategy()) {
        prop_assert_eq!(
            InstantHandler::DEFAULT.parse(DbValue::DateTimeOffset(date_time)).unwrap(),
            instant
        );
    }

    #[test]
    fn prop_unsupported_values_never_yield_instant(value in unsupported_value_strategy()) {
        let result = InstantHandler::DEFAULT.parse(value);
        let is_unsupported = matches!(result, Err(DatabaseError::UnsupportedSourceType { .. }));
        prop_assert!(is_unsupported);
    }
}
