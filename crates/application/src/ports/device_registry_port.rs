//! Device directory port

use domain::DeviceInfo;
#[cfg(test)]
use mockall::automock;

/// Directory of the devices entities are grouped under
#[cfg_attr(test, automock)]
pub trait DeviceRegistryPort: Send + Sync {
    /// Record a device, replacing an entry with the same identifier
    fn register(&self, device: DeviceInfo);

    /// Remove every device of a model; returns how many were removed
    fn remove_by_model(&self, model: &str) -> usize;

    /// All known devices
    fn devices(&self) -> Vec<DeviceInfo>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn DeviceRegistryPort>();
    }

    #[test]
    fn mock_counts_removals() {
        let mut registry = MockDeviceRegistryPort::new();
        registry
            .expect_remove_by_model()
            .withf(|model| model == "Public Weather stations")
            .return_const(2_usize);
        assert_eq!(registry.remove_by_model("Public Weather stations"), 2);
    }
}
