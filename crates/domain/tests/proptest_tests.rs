//! Property-based tests for the classifiers and value objects
//!
//! These tests use proptest to verify invariants across many random inputs.

use domain::{
    classifiers::{classify_angle, classify_battery, classify_health, classify_rf, classify_wifi},
    value_objects::{
        AggregationMode, BatteryLevel, GeoLocation, ModuleModel, SensorType, SignalQuality,
    },
};
use proptest::prelude::*;

// ============================================================================
// Angle Property Tests
// ============================================================================

mod angle_tests {
    use super::*;

    proptest! {
        #[test]
        fn label_embeds_angle(angle in 0u16..=359) {
            let label = classify_angle(angle);
            let suffix = format!(" ({angle}°)");
            prop_assert!(label.ends_with(&suffix));
        }

        #[test]
        fn north_wraps_around(angle in prop_oneof![0u16..30, 330u16..=359]) {
            prop_assert!(classify_angle(angle).starts_with("N "));
        }
    }
}

// ============================================================================
// Battery Property Tests
// ============================================================================

mod battery_tests {
    use super::*;

    const BATTERY_MODELS: [&str; 4] = ["NAModule1", "NAModule2", "NAModule3", "NAModule4"];

    fn rank(level: BatteryLevel) -> u8 {
        match level {
            BatteryLevel::VeryLow => 0,
            BatteryLevel::Low => 1,
            BatteryLevel::Medium => 2,
            BatteryLevel::High => 3,
            BatteryLevel::Full => 4,
        }
    }

    proptest! {
        #[test]
        fn more_voltage_never_lowers_level(
            model in prop::sample::select(BATTERY_MODELS.to_vec()),
            low in 0i64..7000,
            delta in 0i64..2000
        ) {
            let a = classify_battery(low, model).unwrap();
            let b = classify_battery(low + delta, model).unwrap();
            prop_assert!(rank(b) >= rank(a));
        }

        #[test]
        fn every_voltage_is_classified(raw in any::<i64>()) {
            prop_assert!(classify_battery(raw, "NAModule1").is_ok());
        }

        #[test]
        fn hubs_have_no_profile(raw in any::<i64>()) {
            prop_assert!(classify_battery(raw, ModuleModel::IndoorStation.code()).is_err());
            prop_assert!(classify_battery(raw, ModuleModel::HomeCoach.code()).is_err());
        }
    }
}

// ============================================================================
// Signal and Health Property Tests
// ============================================================================

mod signal_tests {
    use super::*;

    proptest! {
        #[test]
        fn rf_is_total(strength in any::<i64>()) {
            let quality = classify_rf(strength);
            prop_assert!(!quality.label().is_empty());
        }

        #[test]
        fn weaker_rf_is_never_better(strength in -100i64..200, delta in 0i64..100) {
            let order = |q: SignalQuality| match q {
                SignalQuality::Low => 0,
                SignalQuality::Medium => 1,
                SignalQuality::High => 2,
                SignalQuality::Full => 3,
            };
            prop_assert!(order(classify_rf(strength + delta)) <= order(classify_rf(strength)));
            prop_assert!(order(classify_wifi(strength + delta)) <= order(classify_wifi(strength)));
        }

        #[test]
        fn health_only_accepts_table_indices(index in any::<i64>()) {
            prop_assert_eq!(classify_health(index).is_ok(), (0..=4).contains(&index));
        }
    }
}

// ============================================================================
// Aggregation Property Tests
// ============================================================================

mod aggregation_tests {
    use super::*;

    proptest! {
        #[test]
        fn average_lies_within_range(values in prop::collection::vec(-50.0f64..50.0, 1..20)) {
            let min = values.iter().copied().fold(f64::INFINITY, f64::min);
            let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            let avg = AggregationMode::Avg.aggregate(&values).unwrap();
            // rounding to one decimal may step over the range by 0.05
            prop_assert!(avg >= min - 0.05 && avg <= max + 0.05);
        }

        #[test]
        fn maximum_is_a_member(values in prop::collection::vec(-50.0f64..50.0, 1..20)) {
            let max = AggregationMode::Max.aggregate(&values).unwrap();
            prop_assert!(values.contains(&max));
        }

        #[test]
        fn midpoint_stays_inside(
            lat_a in -90.0f64..=90.0, lon_a in -180.0f64..=180.0,
            lat_b in -90.0f64..=90.0, lon_b in -180.0f64..=180.0
        ) {
            let a = GeoLocation::new(lat_a, lon_a).unwrap();
            let b = GeoLocation::new(lat_b, lon_b).unwrap();
            let mid = a.midpoint(&b);
            prop_assert!(mid.latitude() >= lat_a.min(lat_b) && mid.latitude() <= lat_a.max(lat_b));
        }
    }

    #[test]
    fn nothing_to_aggregate() {
        assert_eq!(AggregationMode::Avg.aggregate(&[]), None);
        assert_eq!(AggregationMode::Max.aggregate(&[]), None);
    }
}

// ============================================================================
// Catalogue Property Tests
// ============================================================================

mod catalogue_tests {
    use super::*;

    proptest! {
        #[test]
        fn keys_parse_back(sensor_type in prop::sample::select(SensorType::ALL.to_vec())) {
            let parsed: SensorType = sensor_type.key().parse().unwrap();
            prop_assert_eq!(parsed, sensor_type);
        }

        #[test]
        fn unknown_keys_are_rejected(key in "[a-z]{1,4}_x[0-9]") {
            prop_assert!(key.parse::<SensorType>().is_err());
        }
    }
}
