//! Radio and WiFi signal quality
//!
//! The vendor reports signal as an attenuation-like number: the lower the
//! number, the better the link. Radio and WiFi use different thresholds.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Signal quality bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SignalQuality {
    Low,
    Medium,
    High,
    Full,
}

impl SignalQuality {
    /// Classify a module's radio (RF) status
    #[must_use]
    pub const fn from_rf_status(strength: i64) -> Self {
        match strength {
            90.. => Self::Low,
            76.. => Self::Medium,
            60.. => Self::High,
            _ => Self::Full,
        }
    }

    /// Classify a station's WiFi status
    #[must_use]
    pub const fn from_wifi_status(strength: i64) -> Self {
        match strength {
            86.. => Self::Low,
            71.. => Self::Medium,
            56.. => Self::High,
            _ => Self::Full,
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Full => "Full",
        }
    }
}

impl fmt::Display for SignalQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
