//! Sensor bound to one measurement of one physical module

use std::str::FromStr;

use tracing::{debug, warn};

use super::{
    ModuleInfo,
    sensor_entity::{DeviceInfo, MANUFACTURER, SensorEntity},
};
use crate::{
    errors::DomainError,
    snapshots::{MAX_READING_AGE, StationSnapshot},
    value_objects::{DataClass, ModuleModel, SensorType, SensorValue},
};

/// One measurement of one station or module
///
/// The value is replaced on every [`refresh`](Self::refresh) and is `None`
/// whenever the latest snapshot holds no reading for it.
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceSensor {
    data_class: DataClass,
    module_id: String,
    station_id: String,
    sensor_type: SensorType,
    device_name: String,
    model: String,
    name: String,
    unique_id: String,
    value: Option<SensorValue>,
}

impl DeviceSensor {
    /// Create the sensor for `sensor_type` on `module`
    ///
    /// The station and device records are looked up in `snapshot` to resolve
    /// the display name and the model used for battery classification.
    ///
    /// # Errors
    ///
    /// Fails on an unknown sensor type key, a module without id, or when the
    /// station or device record needed for naming is missing.
    pub fn new(
        data_class: DataClass,
        module: &ModuleInfo,
        sensor_type: &str,
        snapshot: &dyn StationSnapshot,
    ) -> Result<Self, DomainError> {
        let sensor_type = SensorType::from_str(sensor_type)?;
        let module_id = module.id.clone().ok_or_else(|| {
            DomainError::ValidationError(format!(
                "module {} has no identifier",
                module.module_name.as_deref().unwrap_or(&module.model)
            ))
        })?;
        let station_id = module
            .main_device
            .clone()
            .unwrap_or_else(|| module_id.clone());

        let station = snapshot.station(&station_id);
        // Stations are not listed as modules of themselves
        let device = snapshot
            .module(&module_id)
            .or_else(|| station.clone())
            .ok_or_else(|| DomainError::not_found("Device", &module_id))?;

        let device_name = resolve_device_name(module, &device, station.as_ref(), &station_id)?;
        let name = format!(
            "{MANUFACTURER} {device_name} {}",
            sensor_type.descriptor().label
        );
        let unique_id = format!("{module_id}-{sensor_type}");

        Ok(Self {
            data_class,
            module_id,
            station_id,
            sensor_type,
            device_name,
            model: device.model,
            name,
            unique_id,
            value: None,
        })
    }

    #[must_use]
    pub fn module_id(&self) -> &str {
        &self.module_id
    }

    #[must_use]
    pub fn station_id(&self) -> &str {
        &self.station_id
    }

    /// Name of the station or module, without manufacturer and label
    #[must_use]
    pub fn device_name(&self) -> &str {
        &self.device_name
    }

    /// Vendor model code of the device
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Update the value from the latest station snapshot
    ///
    /// A missing snapshot, module record or field clears the value without
    /// error. Repeated misses keep it cleared.
    ///
    /// # Errors
    ///
    /// Returns the classifier error when the reading is present but cannot
    /// be classified. The value is cleared in that case too.
    pub fn refresh(&mut self, snapshot: Option<&dyn StationSnapshot>) -> Result<(), DomainError> {
        let Some(snapshot) = snapshot else {
            if self.value.is_some() {
                warn!(unique_id = %self.unique_id, "No data from update");
            }
            self.value = None;
            return Ok(());
        };

        let readings = snapshot.latest_readings(&self.station_id, MAX_READING_AGE);
        let Some(record) = readings.get(&self.module_id) else {
            if self.value.is_some() {
                debug!(
                    module = %self.device_name,
                    module_id = %self.module_id,
                    "No data found"
                );
            }
            self.value = None;
            return Ok(());
        };

        match self
            .sensor_type
            .extractor()
            .extract(self.sensor_type, record, &self.model)
        {
            Ok(Some(value)) => {
                self.value = Some(value);
                Ok(())
            },
            Ok(None) => {
                if self.value.is_some() {
                    debug!(
                        sensor_type = %self.sensor_type,
                        module = %self.device_name,
                        "No data found for sensor type"
                    );
                }
                self.value = None;
                Ok(())
            },
            Err(e) => {
                self.value = None;
                Err(e)
            },
        }
    }
}

fn resolve_device_name(
    module: &ModuleInfo,
    device: &ModuleInfo,
    station: Option<&ModuleInfo>,
    station_id: &str,
) -> Result<String, DomainError> {
    let is_station = ModuleModel::from_str(&device.model).is_ok_and(|m| m.is_station());
    let station_name = module
        .station_name
        .as_deref()
        .filter(|_| is_station)
        .or_else(|| station.and_then(|s| s.station_name.as_deref()))
        .ok_or_else(|| DomainError::not_found("Station", station_id))?;

    if is_station {
        return Ok(station_name.to_string());
    }

    let module_name = module.module_name.as_deref().unwrap_or(&device.model);
    Ok(format!("{station_name} {module_name}"))
}

impl SensorEntity for DeviceSensor {
    fn unique_id(&self) -> &str {
        &self.unique_id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn sensor_type(&self) -> SensorType {
        self.sensor_type
    }

    fn data_class(&self) -> &DataClass {
        &self.data_class
    }

    fn value(&self) -> Option<SensorValue> {
        self.value.clone()
    }

    fn device_info(&self) -> DeviceInfo {
        let model = ModuleModel::from_str(&self.model)
            .map_or_else(|_| self.model.clone(), |m| m.model_name().to_string());
        DeviceInfo {
            identifier: self.module_id.clone(),
            name: self.device_name.clone(),
            manufacturer: MANUFACTURER.to_string(),
            model,
        }
    }
}
