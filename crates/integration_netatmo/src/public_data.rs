//! Snapshot over a public stations response

use domain::{GeoLocation, PublicSnapshot, StationReadings};

use crate::{
    error::NetatmoError,
    models::{PublicResponse, RawMeasure, RawPublicStation},
};

/// Public stations inside one area, as returned by the vendor
#[derive(Debug, Clone)]
pub struct PublicData {
    stations: Vec<RawPublicStation>,
}

impl PublicData {
    /// Parse a `getpublicdata` response
    ///
    /// # Errors
    ///
    /// Fails on malformed JSON or when no station lies in the area.
    pub fn from_json(raw: &str) -> Result<Self, NetatmoError> {
        let response: PublicResponse = serde_json::from_str(raw)?;
        Self::new(response.body)
    }

    /// # Errors
    ///
    /// Returns `NetatmoError::NoDevice` for an empty station list.
    pub fn new(stations: Vec<RawPublicStation>) -> Result<Self, NetatmoError> {
        if stations.is_empty() {
            return Err(NetatmoError::NoDevice);
        }
        Ok(Self { stations })
    }

    /// Number of stations in the area
    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    /// Position of a station, when reported
    pub fn location(&self, station_id: &str) -> Option<GeoLocation> {
        let station = self.stations.iter().find(|s| s.id == station_id)?;
        GeoLocation::from_lon_lat(&station.place.as_ref()?.location)
    }

    /// Latest value of a base or outdoor module measure, per station
    pub fn latest_station_measures(&self, data_type: &str) -> StationReadings {
        self.collect(|measure| measure.station_value(data_type))
    }

    /// Value of a rain gauge or anemometer field, per station
    pub fn accessory_data(&self, field: &str) -> StationReadings {
        self.collect(|measure| measure.accessory_value(field))
    }

    /// Stations where some module reports the value
    ///
    /// When several modules of a station report it, the one with the
    /// highest module id wins.
    fn collect(&self, value: impl Fn(&RawMeasure) -> Option<Option<f64>>) -> StationReadings {
        self.stations
            .iter()
            .filter_map(|station| {
                station
                    .measures
                    .values()
                    .rev()
                    .find_map(&value)
                    .map(|v| (station.id.clone(), v))
            })
            .collect()
    }
}

impl PublicSnapshot for PublicData {
    fn latest_temperatures(&self) -> StationReadings {
        self.latest_station_measures("temperature")
    }

    fn latest_pressures(&self) -> StationReadings {
        self.latest_station_measures("pressure")
    }

    fn latest_humidities(&self) -> StationReadings {
        self.latest_station_measures("humidity")
    }

    fn latest_rain(&self) -> StationReadings {
        self.accessory_data("rain_live")
    }

    fn rain_60min(&self) -> StationReadings {
        self.accessory_data("rain_60min")
    }

    fn rain_24h(&self) -> StationReadings {
        self.accessory_data("rain_24h")
    }

    fn latest_wind_strengths(&self) -> StationReadings {
        self.accessory_data("wind_strength")
    }

    fn latest_gust_strengths(&self) -> StationReadings {
        self.accessory_data("gust_strength")
    }
}
