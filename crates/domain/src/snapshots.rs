//! Read-only views over data fetched by the data handler
//!
//! Entities never reach into shared handler state. The caller passes the
//! current snapshot to each refresh.

use std::{collections::BTreeMap, collections::HashMap, time::Duration};

use crate::{entities::ModuleInfo, value_objects::PublicMetric};

/// Latest readings of one station or module, keyed by vendor field name
pub type Measurements = serde_json::Map<String, serde_json::Value>;

/// Latest readings per module id
pub type LatestReadings = HashMap<String, Measurements>;

/// One reading per public station id; `None` where a station has no value
pub type StationReadings = BTreeMap<String, Option<f64>>;

/// Readings older than this are not reported for a station
pub const MAX_READING_AGE: Duration = Duration::from_secs(3600);

/// Snapshot of an account's weather stations or Home Coaches
pub trait StationSnapshot: Send + Sync {
    /// Ids of every station in the snapshot
    fn station_ids(&self) -> Vec<String>;

    /// Ids of the modules attached to a station
    fn module_ids(&self, station_id: &str) -> Vec<String>;

    /// Metadata of a module (not a station)
    fn module(&self, module_id: &str) -> Option<ModuleInfo>;

    /// Metadata of a station
    fn station(&self, station_id: &str) -> Option<ModuleInfo>;

    /// Sensor type keys the device reports, vendor casing
    fn monitored_conditions(&self, module_id: &str) -> Vec<String>;

    /// Readings of a station and its modules no older than `max_age`
    fn latest_readings(&self, station_id: &str, max_age: Duration) -> LatestReadings;
}

/// Snapshot of the public stations inside one area
pub trait PublicSnapshot: Send + Sync {
    fn latest_temperatures(&self) -> StationReadings;
    fn latest_pressures(&self) -> StationReadings;
    fn latest_humidities(&self) -> StationReadings;
    fn latest_rain(&self) -> StationReadings;
    fn rain_60min(&self) -> StationReadings;
    fn rain_24h(&self) -> StationReadings;
    fn latest_wind_strengths(&self) -> StationReadings;
    fn latest_gust_strengths(&self) -> StationReadings;

    /// Dispatch to the accessor for `metric`
    fn readings(&self, metric: PublicMetric) -> StationReadings {
        match metric {
            PublicMetric::Temperature => self.latest_temperatures(),
            PublicMetric::Pressure => self.latest_pressures(),
            PublicMetric::Humidity => self.latest_humidities(),
            PublicMetric::Rain => self.latest_rain(),
            PublicMetric::Rain60Min => self.rain_60min(),
            PublicMetric::Rain24H => self.rain_24h(),
            PublicMetric::WindStrength => self.latest_wind_strengths(),
            PublicMetric::GustStrength => self.latest_gust_strengths(),
        }
    }
}
