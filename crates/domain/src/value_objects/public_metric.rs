//! Metrics that can be aggregated across public stations

use serde::{Deserialize, Serialize};
use std::fmt;

use super::SensorType;
use crate::errors::DomainError;

/// Sensor types supported by area sensors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "SensorType", into = "SensorType")]
pub enum PublicMetric {
    Temperature,
    Pressure,
    Humidity,
    Rain,
    WindStrength,
    GustStrength,
    Rain60Min,
    Rain24H,
}

impl PublicMetric {
    /// All supported metrics, in the order area sensors are created
    pub const ALL: [Self; 8] = [
        Self::Temperature,
        Self::Pressure,
        Self::Humidity,
        Self::Rain,
        Self::WindStrength,
        Self::GustStrength,
        Self::Rain60Min,
        Self::Rain24H,
    ];

    /// Sensor type this metric is displayed as
    #[must_use]
    pub const fn sensor_type(&self) -> SensorType {
        match self {
            Self::Temperature => SensorType::Temperature,
            Self::Pressure => SensorType::Pressure,
            Self::Humidity => SensorType::Humidity,
            Self::Rain => SensorType::Rain,
            Self::WindStrength => SensorType::WindStrength,
            Self::GustStrength => SensorType::GustStrength,
            Self::Rain60Min => SensorType::SumRain1,
            Self::Rain24H => SensorType::SumRain24,
        }
    }
}

impl TryFrom<SensorType> for PublicMetric {
    type Error = DomainError;

    fn try_from(sensor_type: SensorType) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|metric| metric.sensor_type() == sensor_type)
            .ok_or_else(|| DomainError::UnsupportedPublicSensor(sensor_type.key().to_string()))
    }
}

impl From<PublicMetric> for SensorType {
    fn from(metric: PublicMetric) -> Self {
        metric.sensor_type()
    }
}

impl fmt::Display for PublicMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.sensor_type(), f)
    }
}
