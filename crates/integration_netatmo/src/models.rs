//! Netatmo payload models
//!
//! Raw bodies of the `getstationsdata`, `gethomecoachsdata` and
//! `getpublicdata` endpoints, as stored by the data handler.

use std::collections::BTreeMap;

use domain::{Measurements, ModuleInfo};
use serde::Deserialize;

/// Response of `getstationsdata` and `gethomecoachsdata`
#[derive(Debug, Clone, Deserialize)]
pub struct StationsResponse {
    pub body: StationsBody,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StationsBody {
    #[serde(default)]
    pub devices: Vec<RawStation>,
}

/// A weather station base or a Home Coach
#[derive(Debug, Clone, Deserialize)]
pub struct RawStation {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub model: String,
    #[serde(default)]
    pub station_name: Option<String>,
    #[serde(default)]
    pub module_name: Option<String>,
    /// Measurement families, e.g. `Temperature`, `CO2`
    #[serde(default)]
    pub data_type: Vec<String>,
    #[serde(default)]
    pub reachable: Option<bool>,
    #[serde(default)]
    pub wifi_status: Option<i64>,
    #[serde(default)]
    pub dashboard_data: Option<Measurements>,
    #[serde(default)]
    pub modules: Vec<RawModule>,
}

/// A module attached to a weather station
#[derive(Debug, Clone, Deserialize)]
pub struct RawModule {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub model: String,
    #[serde(default)]
    pub module_name: Option<String>,
    #[serde(default)]
    pub data_type: Vec<String>,
    #[serde(default)]
    pub battery_vp: Option<i64>,
    #[serde(default)]
    pub battery_percent: Option<i64>,
    #[serde(default)]
    pub rf_status: Option<i64>,
    #[serde(default)]
    pub reachable: Option<bool>,
    #[serde(default)]
    pub dashboard_data: Option<Measurements>,
}

impl RawStation {
    pub(crate) fn info(&self) -> ModuleInfo {
        ModuleInfo {
            id: self.id.clone(),
            model: self.model.clone(),
            module_name: self.module_name.clone(),
            station_name: self.station_name.clone(),
            main_device: None,
        }
    }
}

impl RawModule {
    pub(crate) fn info(&self, station_id: Option<&str>) -> ModuleInfo {
        ModuleInfo {
            id: self.id.clone(),
            model: self.model.clone(),
            module_name: self.module_name.clone(),
            station_name: None,
            main_device: station_id.map(str::to_string),
        }
    }
}

/// Response of `getpublicdata`
#[derive(Debug, Clone, Deserialize)]
pub struct PublicResponse {
    #[serde(default)]
    pub body: Vec<RawPublicStation>,
}

/// A public station inside the requested area
#[derive(Debug, Clone, Deserialize)]
pub struct RawPublicStation {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub place: Option<Place>,
    /// Keyed by module id
    #[serde(default)]
    pub measures: BTreeMap<String, RawMeasure>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Place {
    /// `[longitude, latitude]`
    #[serde(default)]
    pub location: Vec<f64>,
}

/// Measures of one module of a public station
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawMeasure {
    /// Base and outdoor module: values per timestamp, ordered like `types`
    Station {
        res: BTreeMap<String, Vec<Option<f64>>>,
        #[serde(rename = "type")]
        types: Vec<String>,
    },
    /// Rain gauge and anemometer: named fields
    Accessory(Measurements),
}

impl RawMeasure {
    /// Most recent value of `data_type`, if this module reports it
    ///
    /// `Some(None)` means the module reports the type but sent no value.
    pub(crate) fn station_value(&self, data_type: &str) -> Option<Option<f64>> {
        let Self::Station { res, types } = self else {
            return None;
        };
        let index = types.iter().position(|t| t == data_type)?;
        let latest = res
            .iter()
            .max_by_key(|(ts, _)| ts.parse::<i64>().unwrap_or(i64::MIN))
            .map(|(_, values)| values);
        Some(latest.and_then(|values| values.get(index).copied().flatten()))
    }

    /// Value of a named accessory field, if this module reports it
    pub(crate) fn accessory_value(&self, field: &str) -> Option<Option<f64>> {
        let Self::Accessory(fields) = self else {
            return None;
        };
        fields.get(field).map(serde_json::Value::as_f64)
    }
}
