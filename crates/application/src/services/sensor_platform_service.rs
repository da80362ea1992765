//! Sensor platform service
//!
//! Discovers sensor entities from the data handler's snapshots, keeps the
//! public area sensors in line with the configured areas and dispatches data
//! updates to the entities bound to each data class.

use std::{collections::BTreeSet, fmt, sync::Arc};

use domain::{
    AreaSensor, DataClass, DeviceInfo, DeviceSensor, DomainError, ModuleInfo, ModuleModel,
    SensorEntity, SensorState, StationSnapshot, WeatherArea,
};
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::{
    error::ApplicationError,
    ports::{DataHandlerPort, DeviceRegistryPort},
};

/// Outcome of refreshing a group of entities
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RefreshSummary {
    /// Entities refreshed
    pub refreshed: usize,
    /// Entities holding a value afterwards
    pub available: usize,
    /// Entities whose reading could not be classified
    pub failed: usize,
}

impl RefreshSummary {
    fn merge(&mut self, other: Self) {
        self.refreshed += other.refreshed;
        self.available += other.available;
        self.failed += other.failed;
    }
}

/// Owns the sensor entities and wires them to the data handler
pub struct SensorPlatformService {
    data_handler: Arc<dyn DataHandlerPort>,
    devices: Arc<dyn DeviceRegistryPort>,
    device_sensors: Vec<DeviceSensor>,
    area_sensors: Vec<AreaSensor>,
}

impl fmt::Debug for SensorPlatformService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SensorPlatformService")
            .field("device_sensors", &self.device_sensors.len())
            .field("area_sensors", &self.area_sensors.len())
            .finish_non_exhaustive()
    }
}

impl SensorPlatformService {
    /// Create a service with no entities
    pub fn new(
        data_handler: Arc<dyn DataHandlerPort>,
        devices: Arc<dyn DeviceRegistryPort>,
    ) -> Self {
        Self {
            data_handler,
            devices,
            device_sensors: Vec::new(),
            area_sensors: Vec::new(),
        }
    }

    /// Discover and add device sensors, then build the area sensors
    #[instrument(skip(self, areas), fields(areas = areas.len()))]
    pub async fn setup(&mut self, areas: &[WeatherArea]) -> Result<(), ApplicationError> {
        let sensors = self.discover_device_sensors().await?;
        self.add_device_sensors(sensors).await?;
        self.replace_area_sensors(areas).await?;
        info!(
            device_sensors = self.device_sensors.len(),
            area_sensors = self.area_sensors.len(),
            "Sensor platform ready"
        );
        Ok(())
    }

    /// Build one sensor per monitored condition of every station and module
    ///
    /// Each device data class is registered for the duration of discovery.
    /// A data class without snapshot yields no sensors.
    #[instrument(skip(self))]
    pub async fn discover_device_sensors(&self) -> Result<Vec<DeviceSensor>, ApplicationError> {
        let mut sensors = Vec::new();

        for data_class in DataClass::DEVICE_CLASSES {
            self.data_handler.register_data_class(&data_class).await?;
            let entry_name = data_class.entry_name();

            let found = self
                .data_handler
                .station_snapshot(&entry_name)
                .map_or_else(
                    || Ok(Vec::new()),
                    |snapshot| find_device_sensors(&data_class, snapshot.as_ref()),
                );

            self.data_handler.unregister_data_class(&entry_name).await;
            let found = found?;
            debug!(data_class = %entry_name, count = found.len(), "Discovered sensors");
            sensors.extend(found);
        }

        Ok(sensors)
    }

    /// Add device sensors, subscribing each to its data class
    pub async fn add_device_sensors(
        &mut self,
        sensors: Vec<DeviceSensor>,
    ) -> Result<(), ApplicationError> {
        for mut sensor in sensors {
            self.subscribe(sensor.data_class(), sensor.device_info()).await?;
            let snapshot = self
                .data_handler
                .station_snapshot(&sensor.data_class().entry_name());
            if let Err(e) = sensor.refresh(snapshot.as_deref()) {
                warn!(unique_id = %sensor.unique_id(), error = %e, "Initial refresh failed");
            }
            self.device_sensors.push(sensor);
        }
        Ok(())
    }

    /// Replace every area sensor with sensors for `areas`
    ///
    /// Existing area sensors are unsubscribed and their devices removed from
    /// the device directory before the new ones are added. Returns the number
    /// of area sensors added.
    #[instrument(skip(self, areas), fields(areas = areas.len()))]
    pub async fn replace_area_sensors(
        &mut self,
        areas: &[WeatherArea],
    ) -> Result<usize, ApplicationError> {
        for sensor in std::mem::take(&mut self.area_sensors) {
            self.data_handler
                .unregister_data_class(&sensor.data_class().entry_name())
                .await;
        }
        let removed = self.devices.remove_by_model(ModuleModel::Public.model_name());
        debug!(removed, "Removed public weather devices");

        let mut sensors = Vec::new();
        for area in areas {
            let data_class = DataClass::public(area);
            self.data_handler.register_data_class(&data_class).await?;
            sensors.extend(AreaSensor::for_area(area));
            self.data_handler
                .unregister_data_class(&data_class.entry_name())
                .await;
        }

        let added = sensors.len();
        for mut sensor in sensors {
            self.subscribe(sensor.data_class(), sensor.device_info()).await?;
            let snapshot = self
                .data_handler
                .public_snapshot(&sensor.data_class().entry_name());
            sensor.refresh(snapshot.as_deref());
            self.area_sensors.push(sensor);
        }

        info!(added, "Area sensors rebuilt");
        Ok(added)
    }

    /// Refresh every entity bound to `entry_name` from the current snapshot
    #[instrument(skip(self))]
    pub fn handle_data_update(&mut self, entry_name: &str) -> RefreshSummary {
        let mut summary = RefreshSummary::default();

        if self.device_sensors.iter().any(|s| bound_to(s, entry_name)) {
            let snapshot = self.data_handler.station_snapshot(entry_name);
            for sensor in self
                .device_sensors
                .iter_mut()
                .filter(|s| bound_to(&**s, entry_name))
            {
                summary.refreshed += 1;
                match sensor.refresh(snapshot.as_deref()) {
                    Ok(()) if sensor.available() => summary.available += 1,
                    Ok(()) => {},
                    Err(e) => {
                        warn!(unique_id = %sensor.unique_id(), error = %e, "Refresh failed");
                        summary.failed += 1;
                    },
                }
            }
        }

        if self.area_sensors.iter().any(|s| bound_to(s, entry_name)) {
            let snapshot = self.data_handler.public_snapshot(entry_name);
            for sensor in self
                .area_sensors
                .iter_mut()
                .filter(|s| bound_to(&**s, entry_name))
            {
                summary.refreshed += 1;
                sensor.refresh(snapshot.as_deref());
                if sensor.available() {
                    summary.available += 1;
                }
            }
        }

        debug!(
            refreshed = summary.refreshed,
            available = summary.available,
            failed = summary.failed,
            "Data update handled"
        );
        summary
    }

    /// Refresh every entity
    pub fn refresh_all(&mut self) -> RefreshSummary {
        let mut summary = RefreshSummary::default();
        for entry_name in self.entry_names() {
            summary.merge(self.handle_data_update(&entry_name));
        }
        summary
    }

    /// Data class entries at least one entity is bound to
    pub fn entry_names(&self) -> BTreeSet<String> {
        self.device_sensors
            .iter()
            .map(|s| s.data_class().entry_name())
            .chain(self.area_sensors.iter().map(|s| s.data_class().entry_name()))
            .collect()
    }

    /// States of all entities, sorted by unique id
    pub fn states(&self) -> Vec<SensorState> {
        let mut states: Vec<_> = self
            .device_sensors
            .iter()
            .map(SensorEntity::state)
            .chain(self.area_sensors.iter().map(SensorEntity::state))
            .collect();
        states.sort_by(|a, b| a.unique_id.cmp(&b.unique_id));
        states
    }

    /// States of the entities bound to `entry_name`, sorted by unique id
    pub fn states_for(&self, entry_name: &str) -> Vec<SensorState> {
        let mut states: Vec<_> = self
            .device_sensors
            .iter()
            .filter(|s| bound_to(*s, entry_name))
            .map(SensorEntity::state)
            .chain(
                self.area_sensors
                    .iter()
                    .filter(|s| bound_to(*s, entry_name))
                    .map(SensorEntity::state),
            )
            .collect();
        states.sort_by(|a, b| a.unique_id.cmp(&b.unique_id));
        states
    }

    pub fn device_sensors(&self) -> &[DeviceSensor] {
        &self.device_sensors
    }

    pub fn area_sensors(&self) -> &[AreaSensor] {
        &self.area_sensors
    }

    /// Unsubscribe and drop every entity
    pub async fn remove_all(&mut self) {
        let entries: Vec<String> = self
            .device_sensors
            .drain(..)
            .map(|s| s.data_class().entry_name())
            .chain(self.area_sensors.drain(..).map(|s| s.data_class().entry_name()))
            .collect();
        for entry_name in entries {
            self.data_handler.unregister_data_class(&entry_name).await;
        }
    }

    async fn subscribe(
        &self,
        data_class: &DataClass,
        device: DeviceInfo,
    ) -> Result<(), ApplicationError> {
        self.data_handler.register_data_class(data_class).await?;
        self.devices.register(device);
        Ok(())
    }
}

fn bound_to(sensor: &dyn SensorEntity, entry_name: &str) -> bool {
    sensor.data_class().entry_name() == entry_name
}

/// One sensor per monitored condition of every module and station
fn find_device_sensors(
    data_class: &DataClass,
    snapshot: &dyn StationSnapshot,
) -> Result<Vec<DeviceSensor>, DomainError> {
    let mut modules: Vec<ModuleInfo> = Vec::new();
    for station_id in snapshot.station_ids() {
        modules.extend(
            snapshot
                .module_ids(&station_id)
                .iter()
                .filter_map(|id| snapshot.module(id)),
        );
        modules.extend(snapshot.station(&station_id));
    }

    let mut sensors = Vec::new();
    for module in &modules {
        let Some(module_id) = module.id.as_deref() else {
            debug!(module_name = ?module.module_name, "Skipping module without id");
            continue;
        };
        debug!(module_name = ?module.module_name, module_id, "Adding module");

        for condition in snapshot.monitored_conditions(module_id) {
            sensors.push(DeviceSensor::new(
                data_class.clone(),
                module,
                &condition.to_lowercase(),
                snapshot,
            )?);
        }
    }
    Ok(sensors)
}
