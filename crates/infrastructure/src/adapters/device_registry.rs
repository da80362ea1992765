//! Device registry adapter - Implements DeviceRegistryPort in memory

use std::collections::BTreeMap;

use application::ports::DeviceRegistryPort;
use domain::DeviceInfo;
use parking_lot::RwLock;
use tracing::debug;

/// Devices keyed by identifier
#[derive(Debug, Default)]
pub struct InMemoryDeviceRegistry {
    devices: RwLock<BTreeMap<String, DeviceInfo>>,
}

impl InMemoryDeviceRegistry {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DeviceRegistryPort for InMemoryDeviceRegistry {
    fn register(&self, device: DeviceInfo) {
        debug!(identifier = %device.identifier, model = %device.model, "Device registered");
        self.devices.write().insert(device.identifier.clone(), device);
    }

    fn remove_by_model(&self, model: &str) -> usize {
        let mut devices = self.devices.write();
        let before = devices.len();
        devices.retain(|_, d| d.model != model);
        before - devices.len()
    }

    fn devices(&self) -> Vec<DeviceInfo> {
        self.devices.read().values().cloned().collect()
    }
}
