//! Value classifiers
//!
//! Pure functions turning a raw vendor reading into a display category.
//! Each one is a step function over inclusive lower bounds, checked from the
//! highest bound down.

use std::str::FromStr;

use crate::{
    errors::DomainError,
    value_objects::{BatteryLevel, CompassPoint, HealthIndex, ModuleModel, SignalQuality},
};

/// Compass heading with the raw angle, e.g. `"N (15°)"`
#[must_use]
pub fn classify_angle(angle: u16) -> String {
    format!("{} ({angle}\u{b0})", CompassPoint::from_angle(angle))
}

/// Battery level of a module from its voltage in millivolts
///
/// # Errors
///
/// Returns `DomainError::NoBatteryProfile` when `module_model` is not a
/// known battery powered model.
pub fn classify_battery(raw: i64, module_model: &str) -> Result<BatteryLevel, DomainError> {
    ModuleModel::from_str(module_model)
        .ok()
        .and_then(|model| model.battery_profile())
        .map(|profile| profile.classify(raw))
        .ok_or_else(|| DomainError::NoBatteryProfile(module_model.to_string()))
}

/// Home Coach health label
///
/// # Errors
///
/// Returns `DomainError::UnclassifiableValue` outside 0..=4.
pub fn classify_health(index: i64) -> Result<HealthIndex, DomainError> {
    HealthIndex::from_index(index).ok_or_else(|| DomainError::unclassifiable("health_idx", index))
}

/// Radio link quality; lower readings are better
#[must_use]
pub const fn classify_rf(strength: i64) -> SignalQuality {
    SignalQuality::from_rf_status(strength)
}

/// WiFi link quality; lower readings are better
#[must_use]
pub const fn classify_wifi(strength: i64) -> SignalQuality {
    SignalQuality::from_wifi_status(strength)
}

/// Round to one decimal
///
/// Rounds the exact binary value, with exact ties going to the even digit:
/// `10.25` becomes `10.2` and `21.27` becomes `21.3`.
#[must_use]
pub fn round1(value: f64) -> f64 {
    format!("{value:.1}").parse().unwrap_or(value)
}
