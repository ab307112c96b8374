//! Custom Test Assertions
//!
//! Provides assertion helpers for instants and conversion results that give
//! more meaningful failure messages than standard assertions.

use core_kernel::Instant;
use infra_db::DatabaseError;

/// Asserts that two instants agree to the microsecond
///
/// # Panics
///
/// Panics if the instants differ once sub-microsecond digits are dropped
pub fn assert_instant_eq_micros(actual: Instant, expected: Instant) {
    assert_eq!(
        actual.truncate_to_micros(),
        expected.truncate_to_micros(),
        "Instants differ at microsecond precision: actual={}, expected={}",
        actual,
        expected
    );
}

/// Asserts that a conversion failed because of the raw value's type
///
/// # Panics
///
/// Panics if the result is `Ok`, another error, or names a different type
pub fn assert_unsupported_source<T: std::fmt::Debug>(
    result: Result<T, DatabaseError>,
    expected_type_name: &str,
) {
    match result {
        Err(DatabaseError::UnsupportedSourceType { type_name, .. }) => assert_eq!(
            type_name, expected_type_name,
            "Unsupported source type names the wrong type"
        ),
        other => panic!(
            "Expected UnsupportedSourceType for {}, got {:?}",
            expected_type_name, other
        ),
    }
}
