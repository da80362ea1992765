//! Sensor aggregating one metric over the public stations of an area

use std::collections::BTreeMap;

use tracing::{debug, warn};

use super::sensor_entity::{DeviceInfo, MANUFACTURER, SensorEntity};
use crate::{
    errors::DomainError,
    snapshots::PublicSnapshot,
    value_objects::{DataClass, ModuleModel, PublicMetric, SensorType, SensorValue, WeatherArea},
};

#[derive(Debug, Clone, PartialEq)]
pub struct AreaSensor {
    area: WeatherArea,
    metric: PublicMetric,
    data_class: DataClass,
    name: String,
    unique_id: String,
    value: Option<f64>,
}

impl AreaSensor {
    /// Create the sensor for `sensor_type` over `area`
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnsupportedPublicSensor` for types public
    /// stations do not report.
    pub fn new(area: &WeatherArea, sensor_type: SensorType) -> Result<Self, DomainError> {
        let metric = PublicMetric::try_from(sensor_type)?;
        Ok(Self::with_metric(area, metric))
    }

    /// One sensor per public metric
    #[must_use]
    pub fn for_area(area: &WeatherArea) -> Vec<Self> {
        PublicMetric::ALL
            .into_iter()
            .map(|metric| Self::with_metric(area, metric))
            .collect()
    }

    fn with_metric(area: &WeatherArea, metric: PublicMetric) -> Self {
        let name = format!(
            "{MANUFACTURER} {} {}",
            area.area_name(),
            metric.sensor_type().descriptor().label
        );
        let unique_id = name.replace(' ', "-");
        Self {
            area: area.clone(),
            metric,
            data_class: DataClass::public(area),
            name,
            unique_id,
            value: None,
        }
    }

    #[must_use]
    pub const fn area(&self) -> &WeatherArea {
        &self.area
    }

    #[must_use]
    pub const fn metric(&self) -> PublicMetric {
        self.metric
    }

    /// Aggregate the area's readings with the configured mode
    ///
    /// Stations without a reading are skipped. The value is cleared when no
    /// station reports the metric or no snapshot is available.
    pub fn refresh(&mut self, snapshot: Option<&dyn PublicSnapshot>) {
        let Some(snapshot) = snapshot else {
            if self.value.is_some() {
                warn!(unique_id = %self.unique_id, "No data from update");
            }
            self.value = None;
            return;
        };

        let readings: Vec<f64> = snapshot
            .readings(self.metric)
            .into_values()
            .flatten()
            .collect();

        if readings.is_empty() {
            if self.value.is_some() {
                debug!(
                    metric = %self.metric.sensor_type(),
                    area = %self.area.area_name(),
                    "No station provides metric in the area"
                );
            }
            self.value = None;
            return;
        }

        self.value = self.area.mode().aggregate(&readings);
    }
}

impl SensorEntity for AreaSensor {
    fn unique_id(&self) -> &str {
        &self.unique_id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn sensor_type(&self) -> SensorType {
        self.metric.sensor_type()
    }

    fn data_class(&self) -> &DataClass {
        &self.data_class
    }

    fn value(&self) -> Option<SensorValue> {
        self.value.map(SensorValue::Float)
    }

    fn device_info(&self) -> DeviceInfo {
        DeviceInfo {
            identifier: self.area.area_name().to_string(),
            name: self.area.area_name().to_string(),
            manufacturer: MANUFACTURER.to_string(),
            model: ModuleModel::Public.model_name().to_string(),
        }
    }

    fn extra_attributes(&self) -> BTreeMap<String, f64> {
        let mut attributes = BTreeMap::new();
        if self.area.show_on_map() {
            let center = self.area.bounding_box().midpoint();
            attributes.insert("latitude".to_string(), center.latitude());
            attributes.insert("longitude".to_string(), center.longitude());
        }
        attributes
    }
}
