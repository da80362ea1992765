//! Application services - Use case implementations

mod sensor_platform_service;

pub use sensor_platform_service::{RefreshSummary, SensorPlatformService};
