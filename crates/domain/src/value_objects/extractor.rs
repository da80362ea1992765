//! Data-driven extraction of a sensor value from a module's readings

use serde_json::Value;

use super::{SensorType, SensorValue};
use crate::{classifiers, errors::DomainError, snapshots::Measurements};

/// How a raw reading becomes a display value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    /// Copy the reading as-is
    Identity,
    /// Round to one decimal
    Round1,
    /// Battery voltage to level, using the module model's profile
    Battery,
    /// Angle to compass point
    Compass,
    /// Radio status to signal quality
    Rf,
    /// WiFi status to signal quality
    Wifi,
    /// Health index to label
    Health,
}

/// Source field and transform for one sensor type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extractor {
    /// Field name in the vendor readings record
    pub field: &'static str,
    pub transform: Transform,
}

impl Extractor {
    pub(crate) const fn new(field: &'static str, transform: Transform) -> Self {
        Self { field, transform }
    }

    /// Extract and transform this sensor's value
    ///
    /// Returns `Ok(None)` when the field is absent or null. Returns an error
    /// when the reading is present but cannot be transformed.
    pub fn extract(
        &self,
        sensor_type: SensorType,
        readings: &Measurements,
        model: &str,
    ) -> Result<Option<SensorValue>, DomainError> {
        match readings.get(self.field) {
            None | Some(Value::Null) => Ok(None),
            Some(raw) => self.apply(sensor_type, raw, model).map(Some),
        }
    }

    fn apply(
        &self,
        sensor_type: SensorType,
        raw: &Value,
        model: &str,
    ) -> Result<SensorValue, DomainError> {
        let invalid = || DomainError::unclassifiable(sensor_type.key(), raw);

        match self.transform {
            Transform::Identity => SensorValue::from_json(raw).ok_or_else(invalid),
            Transform::Round1 => raw
                .as_f64()
                .map(|x| SensorValue::Float(classifiers::round1(x)))
                .ok_or_else(invalid),
            Transform::Battery => {
                let millivolts = threshold_input(raw).ok_or_else(invalid)?;
                let level = classifiers::classify_battery(millivolts, model)?;
                Ok(SensorValue::Text(level.label().to_string()))
            },
            Transform::Compass => {
                let angle = threshold_input(raw)
                    .and_then(|a| u16::try_from(a).ok())
                    .ok_or_else(invalid)?;
                Ok(SensorValue::Text(classifiers::classify_angle(angle)))
            },
            Transform::Rf => {
                let strength = threshold_input(raw).ok_or_else(invalid)?;
                Ok(SensorValue::Text(
                    classifiers::classify_rf(strength).label().to_string(),
                ))
            },
            Transform::Wifi => {
                let strength = threshold_input(raw).ok_or_else(invalid)?;
                Ok(SensorValue::Text(
                    classifiers::classify_wifi(strength).label().to_string(),
                ))
            },
            Transform::Health => {
                let index = integer(raw).ok_or_else(invalid)?;
                let health = classifiers::classify_health(index)?;
                Ok(SensorValue::Text(health.label().to_string()))
            },
        }
    }
}

/// Integral view of a JSON number, accepting floats without a fraction
#[allow(clippy::cast_possible_truncation)]
fn integer(raw: &Value) -> Option<i64> {
    raw.as_i64().or_else(|| {
        raw.as_f64()
            .filter(|x| x.fract() == 0.0 && x.is_finite())
            .map(|x| x as i64)
    })
}

/// Input of an integer-threshold classifier
///
/// Fractional readings are floored: for an integer bound `t`, `x >= t`
/// holds exactly when `floor(x) >= t`.
#[allow(clippy::cast_possible_truncation)]
fn threshold_input(raw: &Value) -> Option<i64> {
    raw.as_i64().or_else(|| {
        raw.as_f64()
            .filter(|x| x.is_finite())
            .map(|x| x.floor() as i64)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn readings(value: Value) -> Measurements {
        value.as_object().cloned().expect("object")
    }

    #[test]
    fn absent_field_is_none() {
        let r = readings(json!({"Humidity": 40}));
        let value = SensorType::Temperature
            .extractor()
            .extract(SensorType::Temperature, &r, "NAModule1")
            .unwrap();
        assert_eq!(value, None);
    }

    #[test]
    fn null_field_is_none() {
        let r = readings(json!({"Temperature": null}));
        let value = SensorType::Temperature
            .extractor()
            .extract(SensorType::Temperature, &r, "NAModule1")
            .unwrap();
        assert_eq!(value, None);
    }

    #[test]
    fn round1_rounds_floats() {
        let r = readings(json!({"Pressure": 1013.46}));
        let value = SensorType::Pressure
            .extractor()
            .extract(SensorType::Pressure, &r, "NAMain")
            .unwrap();
        assert_eq!(value, Some(SensorValue::Float(1013.5)));
    }

    #[test]
    fn compass_accepts_integral_floats() {
        let r = readings(json!({"WindAngle": 200.0}));
        let value = SensorType::WindAngle
            .extractor()
            .extract(SensorType::WindAngle, &r, "NAModule2")
            .unwrap();
        assert_eq!(value, Some(SensorValue::Text("S (200°)".into())));
    }

    #[test]
    fn fractional_readings_compare_against_thresholds() {
        let r = readings(json!({"rf_status": 75.5, "WindAngle": 15.5, "wifi_status": 85.9}));
        let rf = SensorType::RfStatus
            .extractor()
            .extract(SensorType::RfStatus, &r, "NAModule1")
            .unwrap();
        let angle = SensorType::WindAngle
            .extractor()
            .extract(SensorType::WindAngle, &r, "NAModule2")
            .unwrap();
        let wifi = SensorType::WifiStatus
            .extractor()
            .extract(SensorType::WifiStatus, &r, "NAMain")
            .unwrap();
        assert_eq!(rf, Some(SensorValue::Text("High".into())));
        assert_eq!(angle, Some(SensorValue::Text("N (15°)".into())));
        assert_eq!(wifi, Some(SensorValue::Text("Medium".into())));
    }

    #[test]
    fn fractional_health_index_is_unclassifiable() {
        let r = readings(json!({"health_idx": 2.5}));
        assert!(
            SensorType::HealthIdx
                .extractor()
                .extract(SensorType::HealthIdx, &r, "NHC")
                .is_err()
        );
    }

    #[test]
    fn negative_angle_is_unclassifiable() {
        let r = readings(json!({"GustAngle": -1}));
        let err = SensorType::GustAngle
            .extractor()
            .extract(SensorType::GustAngle, &r, "NAModule2")
            .unwrap_err();
        assert!(matches!(err, DomainError::UnclassifiableValue { .. }));
    }

    #[test]
    fn text_where_number_expected_is_unclassifiable() {
        let r = readings(json!({"rf_status": "strong"}));
        assert!(
            SensorType::RfStatus
                .extractor()
                .extract(SensorType::RfStatus, &r, "NAModule1")
                .is_err()
        );
    }

    #[test]
    fn battery_uses_model_profile() {
        let r = readings(json!({"battery_vp": 5200}));
        let wind = SensorType::BatteryVp
            .extractor()
            .extract(SensorType::BatteryVp, &r, "NAModule2")
            .unwrap();
        let indoor = SensorType::BatteryVp
            .extractor()
            .extract(SensorType::BatteryVp, &r, "NAModule4")
            .unwrap();
        assert_eq!(wind, Some(SensorValue::Text("High".into())));
        assert_eq!(indoor, Some(SensorValue::Text("Medium".into())));
    }

    #[test]
    fn identity_keeps_booleans() {
        let r = readings(json!({"reachable": true}));
        let value = SensorType::Reachable
            .extractor()
            .extract(SensorType::Reachable, &r, "NAModule1")
            .unwrap();
        assert_eq!(value, Some(SensorValue::Flag(true)));
    }
}
