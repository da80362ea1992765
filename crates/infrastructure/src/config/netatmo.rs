//! Netatmo data and public area configuration

use std::path::PathBuf;

use domain::{AggregationMode, BoundingBox, DomainError, WeatherArea};
use serde::{Deserialize, Serialize};

pub(super) const DEFAULT_SNAPSHOT_DIR: &str = "snapshots";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetatmoConfig {
    /// Directory holding one `<entry name>.json` response per data class
    #[serde(default = "default_snapshot_dir")]
    pub snapshot_dir: PathBuf,

    /// Areas aggregated from public stations
    #[serde(default)]
    pub weather_areas: Vec<WeatherAreaConfig>,
}

fn default_snapshot_dir() -> PathBuf {
    PathBuf::from(DEFAULT_SNAPSHOT_DIR)
}

impl Default for NetatmoConfig {
    fn default() -> Self {
        Self {
            snapshot_dir: default_snapshot_dir(),
            weather_areas: Vec::new(),
        }
    }
}

/// One public weather area, as written in the configuration file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherAreaConfig {
    pub area_name: String,
    pub lat_ne: f64,
    pub lon_ne: f64,
    pub lat_sw: f64,
    pub lon_sw: f64,
    /// `avg` or `max`
    #[serde(default = "default_mode")]
    pub mode: String,
    #[serde(default)]
    pub show_on_map: bool,
}

fn default_mode() -> String {
    AggregationMode::default().to_string()
}

impl WeatherAreaConfig {
    /// Validate into a domain area
    pub fn to_weather_area(&self) -> Result<WeatherArea, DomainError> {
        let bounding_box = BoundingBox::new(self.lat_ne, self.lon_ne, self.lat_sw, self.lon_sw)?;
        let mode = self.mode.parse::<AggregationMode>()?;
        WeatherArea::new(self.area_name.clone(), bounding_box, mode, self.show_on_map)
    }
}
