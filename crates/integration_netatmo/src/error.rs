//! Netatmo payload errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum NetatmoError {
    /// The payload is not a valid response body
    #[error("Parse error: {0}")]
    Parse(String),

    /// The response lists no device
    #[error("No device found in response")]
    NoDevice,
}

impl From<serde_json::Error> for NetatmoError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e.to_string())
    }
}
