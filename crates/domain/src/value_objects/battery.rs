//! Battery voltage classification
//!
//! Each battery powered module model discharges along its own curve, so the
//! millivolt thresholds differ per model.
//!
//! # Examples
//!
//! ```
//! use domain::value_objects::{BatteryLevel, BatteryProfile};
//!
//! assert_eq!(BatteryProfile::OUTDOOR.classify(5590), BatteryLevel::Full);
//! assert_eq!(BatteryProfile::OUTDOOR.classify(3999), BatteryLevel::VeryLow);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Categorical battery level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BatteryLevel {
    Full,
    High,
    Medium,
    Low,
    VeryLow,
}

impl BatteryLevel {
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Full => "Full",
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
            Self::VeryLow => "Very Low",
        }
    }
}

impl fmt::Display for BatteryLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Inclusive lower bounds, in millivolts, of the Full/High/Medium/Low levels
///
/// Thresholds are strictly decreasing. Anything below `low` is very low.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatteryProfile {
    pub full: i64,
    pub high: i64,
    pub medium: i64,
    pub low: i64,
}

impl BatteryProfile {
    /// Outdoor module (`NAModule1`)
    pub const OUTDOOR: Self = Self::new(5500, 5000, 4500, 4000);
    /// Anemometer (`NAModule2`)
    pub const WIND: Self = Self::new(5590, 5180, 4770, 4360);
    /// Rain gauge (`NAModule3`)
    pub const RAIN: Self = Self::new(5500, 5000, 4500, 4000);
    /// Additional indoor module (`NAModule4`)
    pub const INDOOR: Self = Self::new(5640, 5280, 4920, 4560);

    const fn new(full: i64, high: i64, medium: i64, low: i64) -> Self {
        Self {
            full,
            high,
            medium,
            low,
        }
    }

    /// Classify a raw battery voltage
    #[must_use]
    pub const fn classify(&self, millivolts: i64) -> BatteryLevel {
        if millivolts >= self.full {
            BatteryLevel::Full
        } else if millivolts >= self.high {
            BatteryLevel::High
        } else if millivolts >= self.medium {
            BatteryLevel::Medium
        } else if millivolts >= self.low {
            BatteryLevel::Low
        } else {
            BatteryLevel::VeryLow
        }
    }

    /// Thresholds in classification order
    #[must_use]
    pub const fn thresholds(&self) -> [i64; 4] {
        [self.full, self.high, self.medium, self.low]
    }
}
