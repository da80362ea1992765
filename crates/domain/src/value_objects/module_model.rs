//! Vendor module model codes

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use super::battery::BatteryProfile;
use crate::errors::DomainError;

/// Model of a station, module or pseudo-device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModuleModel {
    /// Weather station indoor base (`NAMain`)
    #[serde(rename = "NAMain")]
    IndoorStation,
    /// Outdoor module (`NAModule1`)
    #[serde(rename = "NAModule1")]
    Outdoor,
    /// Anemometer (`NAModule2`)
    #[serde(rename = "NAModule2")]
    Wind,
    /// Rain gauge (`NAModule3`)
    #[serde(rename = "NAModule3")]
    Rain,
    /// Additional indoor module (`NAModule4`)
    #[serde(rename = "NAModule4")]
    Indoor,
    /// Home Coach air quality monitor (`NHC`)
    #[serde(rename = "NHC")]
    HomeCoach,
    /// Aggregate of public stations in an area
    #[serde(rename = "public")]
    Public,
}

impl ModuleModel {
    /// Vendor model code
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::IndoorStation => "NAMain",
            Self::Outdoor => "NAModule1",
            Self::Wind => "NAModule2",
            Self::Rain => "NAModule3",
            Self::Indoor => "NAModule4",
            Self::HomeCoach => "NHC",
            Self::Public => "public",
        }
    }

    /// Marketing name shown as the device model
    #[must_use]
    pub const fn model_name(&self) -> &'static str {
        match self {
            Self::IndoorStation => "Smart Home Weather station – indoor module",
            Self::Outdoor => "Smart Home Weather station – outdoor module",
            Self::Wind => "Smart Anemometer",
            Self::Rain => "Smart Rain Gauge",
            Self::Indoor => "Smart Additional Indoor module",
            Self::HomeCoach => "Smart Indoor Air Quality Monitor",
            Self::Public => "Public Weather stations",
        }
    }

    /// Whether this model is a hub that owns its own station record
    #[must_use]
    pub const fn is_station(&self) -> bool {
        matches!(self, Self::IndoorStation | Self::HomeCoach)
    }

    /// Battery voltage profile, for battery powered modules only
    #[must_use]
    pub const fn battery_profile(&self) -> Option<BatteryProfile> {
        match self {
            Self::Outdoor => Some(BatteryProfile::OUTDOOR),
            Self::Wind => Some(BatteryProfile::WIND),
            Self::Rain => Some(BatteryProfile::RAIN),
            Self::Indoor => Some(BatteryProfile::INDOOR),
            Self::IndoorStation | Self::HomeCoach | Self::Public => None,
        }
    }
}

impl fmt::Display for ModuleModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for ModuleModel {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NAMain" => Ok(Self::IndoorStation),
            "NAModule1" => Ok(Self::Outdoor),
            "NAModule2" => Ok(Self::Wind),
            "NAModule3" => Ok(Self::Rain),
            "NAModule4" => Ok(Self::Indoor),
            "NHC" => Ok(Self::HomeCoach),
            "public" => Ok(Self::Public),
            _ => Err(DomainError::ValidationError(format!(
                "unknown module model: {s}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for model in [
            ModuleModel::IndoorStation,
            ModuleModel::Outdoor,
            ModuleModel::Wind,
            ModuleModel::Rain,
            ModuleModel::Indoor,
            ModuleModel::HomeCoach,
            ModuleModel::Public,
        ] {
            assert_eq!(model.code().parse::<ModuleModel>().unwrap(), model);
        }
    }

    #[test]
    fn unknown_code_is_rejected() {
        assert!("NAModule9".parse::<ModuleModel>().is_err());
    }

    #[test]
    fn hubs_are_stations() {
        assert!(ModuleModel::IndoorStation.is_station());
        assert!(ModuleModel::HomeCoach.is_station());
        assert!(!ModuleModel::Indoor.is_station());
        assert!(!ModuleModel::Outdoor.is_station());
    }

    #[test]
    fn only_battery_modules_have_profiles() {
        assert!(ModuleModel::Outdoor.battery_profile().is_some());
        assert!(ModuleModel::Wind.battery_profile().is_some());
        assert!(ModuleModel::Rain.battery_profile().is_some());
        assert!(ModuleModel::Indoor.battery_profile().is_some());
        assert!(ModuleModel::IndoorStation.battery_profile().is_none());
        assert!(ModuleModel::HomeCoach.battery_profile().is_none());
        assert!(ModuleModel::Public.battery_profile().is_none());
    }

    #[test]
    fn serde_uses_vendor_codes() {
        let json = serde_json::to_string(&ModuleModel::Wind).expect("serialize");
        assert_eq!(json, "\"NAModule2\"");
        let model: ModuleModel = serde_json::from_str("\"NHC\"").expect("deserialize");
        assert_eq!(model, ModuleModel::HomeCoach);
    }

    #[test]
    fn public_model_name() {
        assert_eq!(ModuleModel::Public.model_name(), "Public Weather stations");
    }
}
