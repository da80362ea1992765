//! Remote data feeds a sensor can subscribe to

use serde::{Deserialize, Serialize};
use std::{fmt, time::Duration};

use super::{BoundingBox, WeatherArea};

/// A data handler subscription
///
/// Device classes are global; each public area is its own subscription,
/// keyed by the area name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DataClass {
    /// Personal weather stations and their modules
    WeatherStation,
    /// Home Coach air quality monitors
    HomeCoach,
    /// Public stations inside a bounding box
    Public {
        area_name: String,
        bounding_box: BoundingBox,
    },
}

impl DataClass {
    /// Data classes backed by the account's own devices
    pub const DEVICE_CLASSES: [Self; 2] = [Self::WeatherStation, Self::HomeCoach];

    /// Subscription for a configured area
    #[must_use]
    pub fn public(area: &WeatherArea) -> Self {
        Self::Public {
            area_name: area.area_name().to_string(),
            bounding_box: area.bounding_box(),
        }
    }

    /// Vendor data class name
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::WeatherStation => "WeatherStationData",
            Self::HomeCoach => "HomeCoachData",
            Self::Public { .. } => "PublicData",
        }
    }

    /// Key under which the handler stores this subscription's snapshot
    #[must_use]
    pub fn entry_name(&self) -> String {
        match self {
            Self::Public { area_name, .. } => format!("{}-{area_name}", self.kind()),
            Self::WeatherStation | Self::HomeCoach => self.kind().to_string(),
        }
    }

    /// Default interval between two fetches of this data class
    #[must_use]
    pub const fn scan_interval(&self) -> Duration {
        match self {
            Self::WeatherStation | Self::HomeCoach => Duration::from_secs(300),
            Self::Public { .. } => Duration::from_secs(600),
        }
    }
}

impl fmt::Display for DataClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.entry_name())
    }
}
