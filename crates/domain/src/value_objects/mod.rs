//! Value Objects - Immutable, identity-less domain primitives

mod battery;
mod compass_point;
mod data_class;
mod extractor;
mod geo_location;
mod health_index;
mod module_model;
mod public_metric;
mod sensor_descriptor;
mod sensor_type;
mod sensor_value;
mod signal_quality;
mod weather_area;

pub use battery::{BatteryLevel, BatteryProfile};
pub use compass_point::CompassPoint;
pub use data_class::DataClass;
pub use extractor::{Extractor, Transform};
pub use geo_location::GeoLocation;
pub use health_index::HealthIndex;
pub use module_model::ModuleModel;
pub use public_metric::PublicMetric;
pub use sensor_descriptor::{DeviceClass, SensorDescriptor};
pub use sensor_type::SensorType;
pub use sensor_value::SensorValue;
pub use signal_quality::SignalQuality;
pub use weather_area::{AggregationMode, BoundingBox, WeatherArea};
