//! Vendor metadata of a station or module

use serde::{Deserialize, Serialize};

/// Identity and naming of one physical device, as reported by the vendor
///
/// Stations carry `station_name`; modules carry `module_name` and the id of
/// their parent station in `main_device`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ModuleInfo {
    /// Device id (a MAC address); missing on malformed records
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    /// Vendor model code, e.g. `NAModule1`
    #[serde(rename = "type")]
    pub model: String,
    #[serde(default)]
    pub module_name: Option<String>,
    #[serde(default)]
    pub station_name: Option<String>,
    /// Parent station id, for modules only
    #[serde(default)]
    pub main_device: Option<String>,
}

impl ModuleInfo {
    /// Metadata of a station
    pub fn station(
        id: impl Into<String>,
        model: impl Into<String>,
        station_name: impl Into<String>,
    ) -> Self {
        Self {
            id: Some(id.into()),
            model: model.into(),
            station_name: Some(station_name.into()),
            ..Self::default()
        }
    }

    /// Metadata of a module attached to `main_device`
    pub fn module(
        id: impl Into<String>,
        model: impl Into<String>,
        module_name: impl Into<String>,
        main_device: impl Into<String>,
    ) -> Self {
        Self {
            id: Some(id.into()),
            model: model.into(),
            module_name: Some(module_name.into()),
            main_device: Some(main_device.into()),
            ..Self::default()
        }
    }

    /// Id of the station owning this device, itself for stations
    #[must_use]
    pub fn station_id(&self) -> Option<&str> {
        self.main_device.as_deref().or(self.id.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn station_owns_itself() {
        let station = ModuleInfo::station("70:ee:50:00:00:01", "NAMain", "Home");
        assert_eq!(station.station_id(), Some("70:ee:50:00:00:01"));
    }

    #[test]
    fn module_points_to_parent() {
        let module = ModuleInfo::module("02:00:00:00:00:01", "NAModule1", "Garden", "70:ee");
        assert_eq!(module.station_id(), Some("70:ee"));
    }

    #[test]
    fn deserializes_vendor_field_names() {
        let info: ModuleInfo = serde_json::from_str(
            r#"{"_id": "02:00", "type": "NAModule4", "module_name": "Bedroom", "battery_vp": 5000}"#,
        )
        .expect("deserialize");
        assert_eq!(info.id.as_deref(), Some("02:00"));
        assert_eq!(info.model, "NAModule4");
        assert_eq!(info.module_name.as_deref(), Some("Bedroom"));
        assert_eq!(info.main_device, None);
    }

    #[test]
    fn missing_id_is_allowed() {
        let info: ModuleInfo = serde_json::from_str(r#"{"type": "NAModule1"}"#).unwrap();
        assert_eq!(info.id, None);
        assert_eq!(info.station_id(), None);
    }
}
