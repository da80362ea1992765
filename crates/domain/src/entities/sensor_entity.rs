//! Read-only surface shared by every sensor entity

use serde::Serialize;
use std::collections::BTreeMap;

use crate::value_objects::{DataClass, DeviceClass, SensorDescriptor, SensorType, SensorValue};

/// Manufacturer reported for every device
pub const MANUFACTURER: &str = "Netatmo";

/// Device an entity belongs to, for grouping in a device directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeviceInfo {
    /// Module id or area name
    pub identifier: String,
    pub name: String,
    pub manufacturer: String,
    /// Marketing model name
    pub model: String,
}

/// Point-in-time view of an entity, as handed to the hosting platform
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SensorState {
    pub unique_id: String,
    pub name: String,
    pub sensor_type: SensorType,
    pub value: Option<SensorValue>,
    pub available: bool,
    pub unit: Option<&'static str>,
    pub icon: Option<&'static str>,
    pub device_class: Option<DeviceClass>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, f64>,
}

/// Accessors the hosting platform reads from a sensor
pub trait SensorEntity {
    fn unique_id(&self) -> &str;

    fn name(&self) -> &str;

    fn sensor_type(&self) -> SensorType;

    /// Data class whose updates refresh this entity
    fn data_class(&self) -> &DataClass;

    fn value(&self) -> Option<SensorValue>;

    fn device_info(&self) -> DeviceInfo;

    fn descriptor(&self) -> SensorDescriptor {
        self.sensor_type().descriptor()
    }

    fn unit(&self) -> Option<&'static str> {
        self.descriptor().unit
    }

    fn icon(&self) -> Option<&'static str> {
        self.descriptor().icon
    }

    fn device_class(&self) -> Option<DeviceClass> {
        self.descriptor().device_class
    }

    /// An entity is available iff it holds a value
    fn available(&self) -> bool {
        self.value().is_some()
    }

    /// Extra numeric attributes, e.g. map coordinates
    fn extra_attributes(&self) -> BTreeMap<String, f64> {
        BTreeMap::new()
    }

    fn state(&self) -> SensorState {
        let descriptor = self.descriptor();
        SensorState {
            unique_id: self.unique_id().to_string(),
            name: self.name().to_string(),
            sensor_type: self.sensor_type(),
            value: self.value(),
            available: self.available(),
            unit: descriptor.unit,
            icon: descriptor.icon,
            device_class: descriptor.device_class,
            attributes: self.extra_attributes(),
        }
    }
}
