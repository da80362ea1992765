//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod data_handler_port;
mod device_registry_port;

pub use data_handler_port::DataHandlerPort;
#[cfg(test)]
pub use data_handler_port::MockDataHandlerPort;
pub use device_registry_port::DeviceRegistryPort;
#[cfg(test)]
pub use device_registry_port::MockDeviceRegistryPort;
