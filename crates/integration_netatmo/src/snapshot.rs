//! Parsed payload of any data class

use std::sync::Arc;

use domain::DataClass;

use crate::{NetatmoError, PublicData, StationData};

/// Snapshot of one data class entry
#[derive(Debug, Clone)]
pub enum Snapshot {
    Stations(Arc<StationData>),
    Public(Arc<PublicData>),
}

impl Snapshot {
    /// Parse a raw response body according to the data class it was fetched for
    pub fn parse(data_class: &DataClass, raw: &str) -> Result<Self, NetatmoError> {
        match data_class {
            DataClass::WeatherStation | DataClass::HomeCoach => {
                StationData::from_json(raw).map(|data| Self::Stations(Arc::new(data)))
            },
            DataClass::Public { .. } => {
                PublicData::from_json(raw).map(|data| Self::Public(Arc::new(data)))
            },
        }
    }
}
