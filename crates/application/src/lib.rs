//! Application layer - Use cases and orchestration
//!
//! Contains the sensor platform service and the ports it drives.
//! Orchestrates domain entities and infrastructure adapters.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
