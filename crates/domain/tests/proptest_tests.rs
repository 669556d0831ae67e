//! Property-based tests for the domain layer
//!
//! These tests use proptest to verify the aggregation and validation
//! invariants across many random inputs.

use chrono::{NaiveDate, TimeZone, Utc};
use domain::{DailySummary, GeoLocation, WeatherSample, aggregate_daily};
use proptest::prelude::*;

// ============================================================================
// GeoLocation Property Tests
// ============================================================================

mod geo_location_tests {
    use super::*;

    proptest! {
        #[test]
        fn valid_coordinates_create_location(
            lat in -90.0f64..=90.0f64,
            lon in -180.0f64..=180.0f64
        ) {
            let result = GeoLocation::new(lat, lon);
            prop_assert!(result.is_ok());

            let loc = result.unwrap();
            prop_assert!((loc.latitude() - lat).abs() < f64::EPSILON);
            prop_assert!((loc.longitude() - lon).abs() < f64::EPSILON);
        }

        #[test]
        fn invalid_latitude_rejected(
            lat in prop_oneof![
                (-1000.0f64..-90.1f64),
                (90.1f64..1000.0f64)
            ],
            lon in -180.0f64..=180.0f64
        ) {
            let result = GeoLocation::new(lat, lon);
            prop_assert!(result.is_err());
        }

        #[test]
        fn invalid_longitude_rejected(
            lat in -90.0f64..=90.0f64,
            lon in prop_oneof![
                (-1000.0f64..-180.1f64),
                (180.1f64..1000.0f64)
            ]
        ) {
            let result = GeoLocation::new(lat, lon);
            prop_assert!(result.is_err());
        }
    }
}

// ============================================================================
// Daily Aggregation Property Tests
// ============================================================================

mod aggregation_tests {
    use super::*;

    const CONDITIONS: [&str; 5] = ["clear sky", "few clouds", "light rain", "mist", "snow"];

    fn arb_sample() -> impl Strategy<Value = WeatherSample> {
        (
            0u32..14,          // day offset from a fixed epoch
            0u32..8,           // 3-hour slot within the day
            -20.0f64..110.0,   // window minimum temperature
            0.0f64..30.0,      // spread above the minimum
            0usize..CONDITIONS.len(),
            proptest::option::of(0u8..=100),
        )
            .prop_map(|(day, slot, min, spread, cond, humidity)| {
                let timestamp = Utc
                    .with_ymd_and_hms(2025, 6, 1, 0, 0, 0)
                    .single()
                    .expect("valid epoch")
                    + chrono::Duration::days(i64::from(day))
                    + chrono::Duration::hours(i64::from(slot * 3));
                WeatherSample {
                    timestamp,
                    temperature: min + spread / 2.0,
                    temperature_min: min,
                    temperature_max: min + spread,
                    description: CONDITIONS[cond].to_string(),
                    humidity,
                }
            })
    }

    proptest! {
        #[test]
        fn at_most_horizon_summaries(
            samples in proptest::collection::vec(arb_sample(), 0..80),
            horizon in 1usize..10
        ) {
            let summaries = aggregate_daily(&samples, horizon).expect("well-formed samples");
            prop_assert!(summaries.len() <= horizon);
        }

        #[test]
        fn dates_strictly_increasing_and_valid_ranges(
            samples in proptest::collection::vec(arb_sample(), 1..80),
            horizon in 1usize..10
        ) {
            let summaries = aggregate_daily(&samples, horizon).expect("well-formed samples");
            for pair in summaries.windows(2) {
                prop_assert!(pair[0].date() < pair[1].date());
            }
            for summary in &summaries {
                prop_assert!(summary.max_temperature() >= summary.min_temperature());
                prop_assert!(!summary.conditions().is_empty());
            }
        }

        #[test]
        fn every_date_in_input_appears_exactly_once_before_truncation(
            samples in proptest::collection::vec(arb_sample(), 1..80)
        ) {
            // A horizon larger than any possible date count disables truncation.
            let summaries = aggregate_daily(&samples, 100).expect("well-formed samples");

            let mut distinct: Vec<NaiveDate> = Vec::new();
            for sample in &samples {
                if !distinct.contains(&sample.date()) {
                    distinct.push(sample.date());
                }
            }

            prop_assert_eq!(summaries.len(), distinct.len());
            for date in distinct {
                prop_assert_eq!(
                    summaries.iter().filter(|s| s.date() == date).count(),
                    1
                );
            }
        }

        #[test]
        fn truncation_keeps_earliest_dates(
            samples in proptest::collection::vec(arb_sample(), 1..80),
            horizon in 1usize..6
        ) {
            let truncated = aggregate_daily(&samples, horizon).expect("well-formed samples");
            let full = aggregate_daily(&samples, 100).expect("well-formed samples");

            let expected: Vec<NaiveDate> =
                full.iter().take(horizon).map(DailySummary::date).collect();
            let actual: Vec<NaiveDate> = truncated.iter().map(DailySummary::date).collect();
            prop_assert_eq!(actual, expected);
        }

        #[test]
        fn aggregation_is_deterministic(
            samples in proptest::collection::vec(arb_sample(), 0..40),
            horizon in 1usize..8
        ) {
            let first = aggregate_daily(&samples, horizon).expect("well-formed samples");
            let second = aggregate_daily(&samples, horizon).expect("well-formed samples");
            prop_assert_eq!(first, second);
        }
    }
}
