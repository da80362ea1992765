//! Static display metadata for a sensor type

use serde::{Deserialize, Serialize};
use std::fmt;

/// Device class understood by home-automation frontends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceClass {
    /// Temperature in °C
    Temperature,
    /// Relative humidity in %
    Humidity,
    /// Battery charge in %
    Battery,
}

impl DeviceClass {
    /// Get the class name as used by frontends
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Temperature => "temperature",
            Self::Humidity => "humidity",
            Self::Battery => "battery",
        }
    }
}

impl fmt::Display for DeviceClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display label, unit, icon and device class of one sensor type
///
/// Defined once per [`SensorType`](super::SensorType) and never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SensorDescriptor {
    /// Label appended to the device name
    pub label: &'static str,
    /// Unit of measurement, `None` for unitless and categorical values
    pub unit: Option<&'static str>,
    /// Material Design icon name
    pub icon: Option<&'static str>,
    /// Frontend device class
    pub device_class: Option<DeviceClass>,
}

impl SensorDescriptor {
    pub(crate) const fn new(
        label: &'static str,
        unit: Option<&'static str>,
        icon: Option<&'static str>,
        device_class: Option<DeviceClass>,
    ) -> Self {
        Self {
            label,
            unit,
            icon,
            device_class,
        }
    }
}
