//! Netatmo payload integration
//!
//! Parses the JSON bodies of the Netatmo weather API and exposes them
//! through the domain snapshot traits.

mod error;
mod models;
mod public_data;
mod snapshot;
mod station_data;

pub use error::NetatmoError;
pub use models::{
    Place, PublicResponse, RawMeasure, RawModule, RawPublicStation, RawStation, StationsBody,
    StationsResponse,
};
pub use public_data::PublicData;
pub use snapshot::Snapshot;
pub use station_data::StationData;
