//! Snapshot over a stations or Home Coach response

use std::time::Duration;

use chrono::Utc;
use domain::{LatestReadings, Measurements, ModuleInfo, ModuleModel, StationSnapshot};
use serde_json::Value;

use crate::{
    error::NetatmoError,
    models::{RawModule, RawStation, StationsResponse},
};

const WIND_CONDITIONS: [&str; 6] = [
    "windangle",
    "windangle_value",
    "windstrength",
    "gustangle",
    "gustangle_value",
    "guststrength",
];
const RAIN_CONDITIONS: [&str; 3] = ["rain", "sum_rain_1", "sum_rain_24"];
const HUB_CONDITIONS: [&str; 2] = ["wifi_status", "reachable"];
const MODULE_CONDITIONS: [&str; 3] = ["rf_status", "battery_vp", "battery_percent"];

/// Devices of one account, as returned by the vendor
#[derive(Debug, Clone)]
pub struct StationData {
    stations: Vec<RawStation>,
}

impl StationData {
    /// Parse a `getstationsdata` or `gethomecoachsdata` response
    ///
    /// # Errors
    ///
    /// Fails on malformed JSON or when the response lists no device.
    pub fn from_json(raw: &str) -> Result<Self, NetatmoError> {
        let response: StationsResponse = serde_json::from_str(raw)?;
        Self::new(response.body.devices)
    }

    /// # Errors
    ///
    /// Returns `NetatmoError::NoDevice` for an empty device list.
    pub fn new(stations: Vec<RawStation>) -> Result<Self, NetatmoError> {
        if stations.is_empty() {
            return Err(NetatmoError::NoDevice);
        }
        Ok(Self { stations })
    }

    fn find_station(&self, station_id: &str) -> Option<&RawStation> {
        self.stations
            .iter()
            .find(|s| s.id.as_deref() == Some(station_id))
    }

    fn find_module(&self, module_id: &str) -> Option<(&RawStation, &RawModule)> {
        self.stations.iter().find_map(|station| {
            station
                .modules
                .iter()
                .find(|m| m.id.as_deref() == Some(module_id))
                .map(|m| (station, m))
        })
    }

    /// Readings of a station and its modules measured after `now - max_age`
    ///
    /// `now` is a unix timestamp in seconds. Devices without dashboard data
    /// are not listed.
    pub fn latest_readings_at(
        &self,
        station_id: &str,
        max_age: Duration,
        now: i64,
    ) -> LatestReadings {
        let mut readings = LatestReadings::new();
        let Some(station) = self.find_station(station_id) else {
            return readings;
        };
        let limit = now.saturating_sub(i64::try_from(max_age.as_secs()).unwrap_or(i64::MAX));

        if let Some(mut record) = fresh(station.dashboard_data.as_ref(), limit) {
            insert_some(&mut record, "wifi_status", station.wifi_status.map(Value::from));
            insert_some(&mut record, "reachable", station.reachable.map(Value::from));
            readings.insert(station_id.to_string(), record);
        }

        for module in &station.modules {
            let Some(module_id) = module.id.as_deref() else {
                continue;
            };
            if let Some(mut record) = fresh(module.dashboard_data.as_ref(), limit) {
                insert_some(&mut record, "battery_vp", module.battery_vp.map(Value::from));
                insert_some(
                    &mut record,
                    "battery_percent",
                    module.battery_percent.map(Value::from),
                );
                insert_some(&mut record, "rf_status", module.rf_status.map(Value::from));
                insert_some(&mut record, "reachable", module.reachable.map(Value::from));
                readings.insert(module_id.to_string(), record);
            }
        }

        readings
    }
}

fn fresh(dashboard: Option<&Measurements>, limit: i64) -> Option<Measurements> {
    let dashboard = dashboard?;
    let measured_at = dashboard.get("time_utc").and_then(Value::as_i64)?;
    (measured_at >= limit).then(|| dashboard.clone())
}

fn insert_some(record: &mut Measurements, key: &str, value: Option<Value>) {
    if let Some(value) = value {
        record.insert(key.to_string(), value);
    }
}

fn conditions(data_type: &[String], model: &str) -> Vec<String> {
    let mut conditions: Vec<String> = Vec::new();
    for family in data_type {
        match family.as_str() {
            "Wind" => conditions.extend(WIND_CONDITIONS.iter().map(ToString::to_string)),
            "Rain" => conditions.extend(RAIN_CONDITIONS.iter().map(ToString::to_string)),
            other => conditions.push(other.to_lowercase()),
        }
    }

    match model.parse::<ModuleModel>() {
        Ok(m) if m.is_station() => {
            conditions.extend(HUB_CONDITIONS.iter().map(ToString::to_string));
            if m == ModuleModel::HomeCoach && !conditions.iter().any(|c| c == "health_idx") {
                conditions.push("health_idx".to_string());
            }
        },
        _ => conditions.extend(MODULE_CONDITIONS.iter().map(ToString::to_string)),
    }
    conditions
}

impl StationSnapshot for StationData {
    fn station_ids(&self) -> Vec<String> {
        self.stations.iter().filter_map(|s| s.id.clone()).collect()
    }

    fn module_ids(&self, station_id: &str) -> Vec<String> {
        self.find_station(station_id)
            .map(|s| s.modules.iter().filter_map(|m| m.id.clone()).collect())
            .unwrap_or_default()
    }

    fn module(&self, module_id: &str) -> Option<ModuleInfo> {
        self.find_module(module_id)
            .map(|(station, module)| module.info(station.id.as_deref()))
    }

    fn station(&self, station_id: &str) -> Option<ModuleInfo> {
        self.find_station(station_id).map(RawStation::info)
    }

    fn monitored_conditions(&self, module_id: &str) -> Vec<String> {
        if let Some((_, module)) = self.find_module(module_id) {
            return conditions(&module.data_type, &module.model);
        }
        self.find_station(module_id)
            .map(|s| conditions(&s.data_type, &s.model))
            .unwrap_or_default()
    }

    fn latest_readings(&self, station_id: &str, max_age: Duration) -> LatestReadings {
        self.latest_readings_at(station_id, max_age, Utc::now().timestamp())
    }
}
