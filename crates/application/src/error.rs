//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The data handler could not serve a registration
    #[error("Data handler error: {0}")]
    DataHandler(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Check if this error is retryable
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::DataHandler(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_errors_convert() {
        let err: ApplicationError = DomainError::UnknownSensorType("dew".into()).into();
        assert!(matches!(err, ApplicationError::Domain(_)));
        assert_eq!(err.to_string(), "Unknown sensor type: dew");
    }

    #[test]
    fn only_handler_errors_are_retryable() {
        assert!(ApplicationError::DataHandler("timeout".into()).is_retryable());
        assert!(!ApplicationError::Configuration("bad".into()).is_retryable());
    }
}
