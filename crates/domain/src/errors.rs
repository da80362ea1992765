//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Sensor type key has no entry in the descriptor table
    #[error("Unknown sensor type: {0}")]
    UnknownSensorType(String),

    /// Sensor type cannot be aggregated over public stations
    #[error("Sensor type not supported for public areas: {0}")]
    UnsupportedPublicSensor(String),

    /// Module model code has no battery profile
    #[error("No battery profile for module model: {0}")]
    NoBatteryProfile(String),

    /// A raw reading falls outside the classifier's table
    #[error("Cannot classify {sensor_type} value: {value}")]
    UnclassifiableValue { sensor_type: String, value: String },

    /// Entity not found
    #[error("{entity_type} not found: {id}")]
    NotFound { entity_type: String, id: String },

    /// Validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

impl DomainError {
    /// Create a not found error
    pub fn not_found(entity_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: entity_type.into(),
            id: id.into(),
        }
    }

    /// Create an unclassifiable value error
    pub fn unclassifiable(sensor_type: impl Into<String>, value: impl ToString) -> Self {
        Self::UnclassifiableValue {
            sensor_type: sensor_type.into(),
            value: value.to_string(),
        }
    }
}
