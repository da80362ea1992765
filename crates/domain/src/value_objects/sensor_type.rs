//! Sensor type keys
//!
//! Every measurement a station or module can report is addressed by a
//! lowercase key such as `temperature` or `rf_status_lvl`. The key selects
//! the display descriptor and the extractor used on each refresh.
//!
//! # Examples
//!
//! ```
//! use domain::value_objects::SensorType;
//!
//! let sensor_type: SensorType = "windangle".parse().expect("known key");
//! assert_eq!(sensor_type.descriptor().label, "Angle");
//! assert_eq!(sensor_type.extractor().field, "WindAngle");
//! assert!("dew_point".parse::<SensorType>().is_err());
//! ```

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use super::{
    extractor::{Extractor, Transform},
    sensor_descriptor::{DeviceClass, SensorDescriptor},
};
use crate::errors::DomainError;

const CELSIUS: Option<&str> = Some("°C");
const PERCENT: Option<&str> = Some("%");
const MILLIMETERS: Option<&str> = Some("mm");
const KILOMETERS_PER_HOUR: Option<&str> = Some("km/h");
const DEGREES: Option<&str> = Some("º");

/// A measurement kind reported by a weather station or module
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SensorType {
    Temperature,
    Co2,
    Pressure,
    Noise,
    Humidity,
    Rain,
    SumRain1,
    SumRain24,
    BatteryVp,
    BatteryLvl,
    BatteryPercent,
    MinTemp,
    MaxTemp,
    WindAngle,
    WindAngleValue,
    WindStrength,
    GustAngle,
    GustAngleValue,
    GustStrength,
    Reachable,
    RfStatus,
    RfStatusLvl,
    WifiStatus,
    WifiStatusLvl,
    HealthIdx,
}

impl SensorType {
    /// Every sensor type, in descriptor table order
    pub const ALL: [Self; 25] = [
        Self::Temperature,
        Self::Co2,
        Self::Pressure,
        Self::Noise,
        Self::Humidity,
        Self::Rain,
        Self::SumRain1,
        Self::SumRain24,
        Self::BatteryVp,
        Self::BatteryLvl,
        Self::BatteryPercent,
        Self::MinTemp,
        Self::MaxTemp,
        Self::WindAngle,
        Self::WindAngleValue,
        Self::WindStrength,
        Self::GustAngle,
        Self::GustAngleValue,
        Self::GustStrength,
        Self::Reachable,
        Self::RfStatus,
        Self::RfStatusLvl,
        Self::WifiStatus,
        Self::WifiStatusLvl,
        Self::HealthIdx,
    ];

    /// Lowercase key of this sensor type
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Temperature => "temperature",
            Self::Co2 => "co2",
            Self::Pressure => "pressure",
            Self::Noise => "noise",
            Self::Humidity => "humidity",
            Self::Rain => "rain",
            Self::SumRain1 => "sum_rain_1",
            Self::SumRain24 => "sum_rain_24",
            Self::BatteryVp => "battery_vp",
            Self::BatteryLvl => "battery_lvl",
            Self::BatteryPercent => "battery_percent",
            Self::MinTemp => "min_temp",
            Self::MaxTemp => "max_temp",
            Self::WindAngle => "windangle",
            Self::WindAngleValue => "windangle_value",
            Self::WindStrength => "windstrength",
            Self::GustAngle => "gustangle",
            Self::GustAngleValue => "gustangle_value",
            Self::GustStrength => "guststrength",
            Self::Reachable => "reachable",
            Self::RfStatus => "rf_status",
            Self::RfStatusLvl => "rf_status_lvl",
            Self::WifiStatus => "wifi_status",
            Self::WifiStatusLvl => "wifi_status_lvl",
            Self::HealthIdx => "health_idx",
        }
    }

    /// Display descriptor of this sensor type
    #[must_use]
    pub const fn descriptor(&self) -> SensorDescriptor {
        use DeviceClass as Class;
        use SensorDescriptor as D;

        match self {
            Self::Temperature => D::new(
                "Temperature",
                CELSIUS,
                Some("mdi:thermometer"),
                Some(Class::Temperature),
            ),
            Self::Co2 => D::new("CO2", Some("ppm"), Some("mdi:periodic-table-co2"), None),
            Self::Pressure => D::new("Pressure", Some("mbar"), Some("mdi:gauge"), None),
            Self::Noise => D::new("Noise", Some("dB"), Some("mdi:volume-high"), None),
            Self::Humidity => D::new(
                "Humidity",
                PERCENT,
                Some("mdi:water-percent"),
                Some(Class::Humidity),
            ),
            Self::Rain => D::new("Rain", MILLIMETERS, Some("mdi:weather-rainy"), None),
            Self::SumRain1 => D::new("sum_rain_1", MILLIMETERS, Some("mdi:weather-rainy"), None),
            Self::SumRain24 => D::new("sum_rain_24", MILLIMETERS, Some("mdi:weather-rainy"), None),
            Self::BatteryVp => D::new("Battery", None, Some("mdi:battery"), None),
            Self::BatteryLvl => D::new("Battery_lvl", None, Some("mdi:battery"), None),
            Self::BatteryPercent => D::new("battery_percent", PERCENT, None, Some(Class::Battery)),
            Self::MinTemp => D::new("Min Temp.", CELSIUS, Some("mdi:thermometer"), None),
            Self::MaxTemp => D::new("Max Temp.", CELSIUS, Some("mdi:thermometer"), None),
            Self::WindAngle => D::new("Angle", None, Some("mdi:compass"), None),
            Self::WindAngleValue => D::new("Angle Value", DEGREES, Some("mdi:compass"), None),
            Self::WindStrength => D::new(
                "Wind Strength",
                KILOMETERS_PER_HOUR,
                Some("mdi:weather-windy"),
                None,
            ),
            Self::GustAngle => D::new("Gust Angle", None, Some("mdi:compass"), None),
            Self::GustAngleValue => D::new("Gust Angle Value", DEGREES, Some("mdi:compass"), None),
            Self::GustStrength => D::new(
                "Gust Strength",
                KILOMETERS_PER_HOUR,
                Some("mdi:weather-windy"),
                None,
            ),
            Self::Reachable => D::new("Reachability", None, Some("mdi:signal"), None),
            Self::RfStatus => D::new("Radio", None, Some("mdi:signal"), None),
            Self::RfStatusLvl => D::new("Radio_lvl", None, Some("mdi:signal"), None),
            Self::WifiStatus => D::new("Wifi", None, Some("mdi:wifi"), None),
            Self::WifiStatusLvl => D::new("Wifi_lvl", Some("dBm"), Some("mdi:wifi"), None),
            Self::HealthIdx => D::new("Health", None, Some("mdi:cloud"), None),
        }
    }

    /// Source field and transform applied to a module's readings
    #[must_use]
    pub const fn extractor(&self) -> Extractor {
        use Extractor as E;

        match self {
            Self::Temperature => E::new("Temperature", Transform::Round1),
            Self::Co2 => E::new("CO2", Transform::Identity),
            Self::Pressure => E::new("Pressure", Transform::Round1),
            Self::Noise => E::new("Noise", Transform::Identity),
            Self::Humidity => E::new("Humidity", Transform::Identity),
            Self::Rain => E::new("Rain", Transform::Identity),
            Self::SumRain1 => E::new("sum_rain_1", Transform::Round1),
            Self::SumRain24 => E::new("sum_rain_24", Transform::Identity),
            // battery_lvl exposes the raw voltage, battery_vp classifies it
            Self::BatteryVp => E::new("battery_vp", Transform::Battery),
            Self::BatteryLvl => E::new("battery_vp", Transform::Identity),
            Self::BatteryPercent => E::new("battery_percent", Transform::Identity),
            Self::MinTemp => E::new("min_temp", Transform::Identity),
            Self::MaxTemp => E::new("max_temp", Transform::Identity),
            Self::WindAngle => E::new("WindAngle", Transform::Compass),
            Self::WindAngleValue => E::new("WindAngle", Transform::Identity),
            Self::WindStrength => E::new("WindStrength", Transform::Identity),
            Self::GustAngle => E::new("GustAngle", Transform::Compass),
            Self::GustAngleValue => E::new("GustAngle", Transform::Identity),
            Self::GustStrength => E::new("GustStrength", Transform::Identity),
            Self::Reachable => E::new("reachable", Transform::Identity),
            Self::RfStatus => E::new("rf_status", Transform::Rf),
            Self::RfStatusLvl => E::new("rf_status", Transform::Identity),
            Self::WifiStatus => E::new("wifi_status", Transform::Wifi),
            Self::WifiStatusLvl => E::new("wifi_status", Transform::Identity),
            Self::HealthIdx => E::new("health_idx", Transform::Health),
        }
    }
}

impl fmt::Display for SensorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for SensorType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|sensor_type| sensor_type.key() == s)
            .ok_or_else(|| DomainError::UnknownSensorType(s.to_string()))
    }
}

impl Serialize for SensorType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.key())
    }
}

impl<'de> Deserialize<'de> for SensorType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let key = String::deserialize(deserializer)?;
        key.parse().map_err(serde::de::Error::custom)
    }
}
