//! WGS84 coordinates of a station or area corner

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    latitude: f64,
    longitude: f64,
}

impl GeoLocation {
    /// # Errors
    ///
    /// Returns `DomainError::ValidationError` outside [-90, 90] x [-180, 180].
    /// NaN is rejected as well.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, DomainError> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(DomainError::ValidationError(format!(
                "latitude out of range: {latitude}"
            )));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(DomainError::ValidationError(format!(
                "longitude out of range: {longitude}"
            )));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Parse a vendor `[longitude, latitude]` pair
    ///
    /// Extra trailing elements (altitude) are ignored.
    #[must_use]
    pub fn from_lon_lat(pair: &[f64]) -> Option<Self> {
        match pair {
            [lon, lat, ..] => Self::new(*lat, *lon).ok(),
            _ => None,
        }
    }

    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Coordinate average; good enough for areas a few kilometres wide
    #[must_use]
    pub fn midpoint(&self, other: &Self) -> Self {
        Self {
            latitude: (self.latitude + other.latitude) / 2.0,
            longitude: (self.longitude + other.longitude) / 2.0,
        }
    }
}

impl fmt::Display for GeoLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.4}, {:.4})", self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn poles_and_antimeridian_are_valid() {
        assert!(GeoLocation::new(90.0, 180.0).is_ok());
        assert!(GeoLocation::new(-90.0, -180.0).is_ok());
    }

    #[test]
    fn out_of_range_is_rejected() {
        assert!(GeoLocation::new(90.5, 0.0).is_err());
        assert!(GeoLocation::new(0.0, -180.5).is_err());
        assert!(GeoLocation::new(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn vendor_pair_is_longitude_first() {
        let loc = GeoLocation::from_lon_lat(&[13.4, 52.5, 34.0]).unwrap();
        assert!((loc.latitude() - 52.5).abs() < f64::EPSILON);
        assert!((loc.longitude() - 13.4).abs() < f64::EPSILON);
    }

    #[test]
    fn short_or_swapped_pairs_are_dropped() {
        assert_eq!(GeoLocation::from_lon_lat(&[13.4]), None);
        // latitude slot holds 120
        assert_eq!(GeoLocation::from_lon_lat(&[52.5, 120.0]), None);
    }

    #[test]
    fn midpoint_of_berlin_box() {
        let ne = GeoLocation::new(52.6, 13.5).unwrap();
        let sw = GeoLocation::new(52.4, 13.3).unwrap();
        let mid = ne.midpoint(&sw);
        assert!((mid.latitude() - 52.5).abs() < 1e-9);
        assert!((mid.longitude() - 13.4).abs() < 1e-9);
    }

    #[test]
    fn display_is_latitude_first() {
        let loc = GeoLocation::new(52.52, 13.405).unwrap();
        assert_eq!(loc.to_string(), "(52.5200, 13.4050)");
    }
}
