//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer: the snapshot backed
//! data handler and the in-memory device registry. Also owns
//! configuration loading and tracing setup.

pub mod adapters;
pub mod config;
pub mod telemetry;

pub use adapters::*;
pub use config::{AppConfig, Environment, NetatmoConfig, TelemetryAppConfig, WeatherAreaConfig};
pub use telemetry::{TelemetryError, init_tracing};
