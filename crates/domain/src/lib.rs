//! Domain layer for netatmo-sensors
//!
//! Sensor catalogue, value classifiers and the sensor entities built from
//! vendor snapshots. No I/O happens here; snapshots are passed in by the
//! caller.

pub mod classifiers;
pub mod entities;
pub mod errors;
pub mod snapshots;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use snapshots::{
    LatestReadings, MAX_READING_AGE, Measurements, PublicSnapshot, StationReadings,
    StationSnapshot,
};
pub use value_objects::*;
