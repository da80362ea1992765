//! Geographic areas aggregated from public weather stations

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use super::GeoLocation;
use crate::errors::DomainError;

/// How readings from many public stations collapse into one value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AggregationMode {
    /// Arithmetic mean rounded to one decimal
    #[default]
    Avg,
    /// Maximum, unrounded
    Max,
}

impl AggregationMode {
    /// Aggregate present readings; `None` when there are none
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn aggregate(&self, values: &[f64]) -> Option<f64> {
        if values.is_empty() {
            return None;
        }
        match self {
            Self::Avg => {
                let mean = values.iter().sum::<f64>() / values.len() as f64;
                Some(crate::classifiers::round1(mean))
            },
            Self::Max => values.iter().copied().reduce(f64::max),
        }
    }
}

impl fmt::Display for AggregationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Avg => f.write_str("avg"),
            Self::Max => f.write_str("max"),
        }
    }
}

impl FromStr for AggregationMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "avg" => Ok(Self::Avg),
            "max" => Ok(Self::Max),
            _ => Err(DomainError::ValidationError(format!(
                "invalid aggregation mode: {s}. Use 'avg' or 'max'"
            ))),
        }
    }
}

/// North-east and south-west corners of a rectangular area
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    north_east: GeoLocation,
    south_west: GeoLocation,
}

impl BoundingBox {
    /// Create a bounding box from validated corner coordinates
    pub fn new(lat_ne: f64, lon_ne: f64, lat_sw: f64, lon_sw: f64) -> Result<Self, DomainError> {
        Ok(Self {
            north_east: GeoLocation::new(lat_ne, lon_ne)?,
            south_west: GeoLocation::new(lat_sw, lon_sw)?,
        })
    }

    #[must_use]
    pub const fn north_east(&self) -> GeoLocation {
        self.north_east
    }

    #[must_use]
    pub const fn south_west(&self) -> GeoLocation {
        self.south_west
    }

    /// Center used to place the area on a map
    #[must_use]
    pub fn midpoint(&self) -> GeoLocation {
        self.north_east.midpoint(&self.south_west)
    }
}

/// A configured area whose public stations feed one set of sensors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherArea {
    area_name: String,
    bounding_box: BoundingBox,
    mode: AggregationMode,
    show_on_map: bool,
}

impl WeatherArea {
    /// Create an area; the name must not be blank
    pub fn new(
        area_name: impl Into<String>,
        bounding_box: BoundingBox,
        mode: AggregationMode,
        show_on_map: bool,
    ) -> Result<Self, DomainError> {
        let area_name = area_name.into();
        if area_name.trim().is_empty() {
            return Err(DomainError::ValidationError(
                "area name must not be empty".to_string(),
            ));
        }
        Ok(Self {
            area_name,
            bounding_box,
            mode,
            show_on_map,
        })
    }

    #[must_use]
    pub fn area_name(&self) -> &str {
        &self.area_name
    }

    #[must_use]
    pub const fn bounding_box(&self) -> BoundingBox {
        self.bounding_box
    }

    #[must_use]
    pub const fn mode(&self) -> AggregationMode {
        self.mode
    }

    #[must_use]
    pub const fn show_on_map(&self) -> bool {
        self.show_on_map
    }
}
