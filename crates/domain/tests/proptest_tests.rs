//! Property-based tests for domain value objects
//!
//! These tests use proptest to verify invariants across many random inputs.

use domain::{CityRecord, CityRequest, CurrentConditions, ForecastPoint};
use proptest::prelude::*;

// ============================================================================
// CityRequest Property Tests
// ============================================================================

mod city_request_tests {
    use super::*;

    proptest! {
        #[test]
        fn valid_inputs_create_request(
            name in "[A-Za-z][A-Za-z ]{0,30}",
            code in "[A-Za-z]{2}"
        ) {
            let city = CityRequest::new(name.clone(), code.clone()).unwrap();
            prop_assert_eq!(city.name(), name.trim());
            prop_assert_eq!(city.country_code(), code.to_ascii_lowercase());
        }

        #[test]
        fn blank_names_rejected(name in "[ \t]{0,10}", code in "[a-z]{2}") {
            prop_assert!(CityRequest::new(name, code).is_err());
        }

        #[test]
        fn wrong_length_codes_rejected(code in "[a-z]{3,6}") {
            prop_assert!(CityRequest::new("Tokyo", code).is_err());
        }
    }
}

// ============================================================================
// CityRecord Property Tests
// ============================================================================

mod city_record_tests {
    use super::*;

    /// Temperatures in tenths of a degree, as the provider reports them
    fn arb_celsius() -> impl Strategy<Value = f64> {
        (-600i32..600).prop_map(|tenths| f64::from(tenths) / 10.0)
    }

    fn arb_point() -> impl Strategy<Value = ForecastPoint> {
        ("[0-9]{4}-[0-9]{2}-[0-9]{2} [0-9]{2}:00:00", arb_celsius(), "[a-z ]{1,20}").prop_map(
            |(date, temperature, description)| ForecastPoint {
                date,
                temperature,
                description,
            },
        )
    }

    fn arb_record() -> impl Strategy<Value = CityRecord> {
        (
            "[A-Za-z ]{1,20}",
            arb_celsius(),
            "[a-z ]{1,20}",
            prop::collection::vec(arb_point(), 0..6),
            prop::collection::vec(".{1,40}", 1..4),
        )
            .prop_map(
                |(city, temperature, description, forecast, news_headlines)| CityRecord {
                    city,
                    current_weather: CurrentConditions {
                        temperature,
                        description,
                    },
                    forecast,
                    news_headlines,
                },
            )
    }

    proptest! {
        #[test]
        fn json_roundtrip_preserves_record(record in arb_record()) {
            let json = serde_json::to_string_pretty(&record).unwrap();
            let parsed: CityRecord = serde_json::from_str(&json).unwrap();
            prop_assert_eq!(parsed, record);
        }
    }
}
