//! Domain entities - Objects with identity and lifecycle

mod area_sensor;
mod device_sensor;
mod module_info;
mod sensor_entity;

pub use area_sensor::AreaSensor;
pub use device_sensor::DeviceSensor;
pub use module_info::ModuleInfo;
pub use sensor_entity::{DeviceInfo, MANUFACTURER, SensorEntity, SensorState};
