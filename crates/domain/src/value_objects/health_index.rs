//! Home Coach air quality health index

use serde::{Deserialize, Serialize};
use std::fmt;

/// Air quality reported by a Home Coach, 0 (best) to 4 (worst)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HealthIndex {
    Healthy,
    Fine,
    Fair,
    Poor,
    Unhealthy,
}

impl HealthIndex {
    /// Map a raw index; `None` outside 0..=4
    #[must_use]
    pub const fn from_index(index: i64) -> Option<Self> {
        match index {
            0 => Some(Self::Healthy),
            1 => Some(Self::Fine),
            2 => Some(Self::Fair),
            3 => Some(Self::Poor),
            4 => Some(Self::Unhealthy),
            _ => None,
        }
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Healthy => "Healthy",
            Self::Fine => "Fine",
            Self::Fair => "Fair",
            Self::Poor => "Poor",
            Self::Unhealthy => "Unhealthy",
        }
    }
}

impl fmt::Display for HealthIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_every_index() {
        let labels: Vec<_> = (0..=4)
            .filter_map(HealthIndex::from_index)
            .map(|h| h.label())
            .collect();
        assert_eq!(labels, ["Healthy", "Fine", "Fair", "Poor", "Unhealthy"]);
    }

    #[test]
    fn rejects_out_of_table_index() {
        assert_eq!(HealthIndex::from_index(-1), None);
        assert_eq!(HealthIndex::from_index(5), None);
    }
}
