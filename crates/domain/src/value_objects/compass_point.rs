//! Eight-point compass bucketing for wind and gust angles

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the eight principal compass points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompassPoint {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

impl CompassPoint {
    /// Bucket an angle in degrees
    ///
    /// Lower bounds are inclusive and checked from the highest down.
    /// Angles from 330 upward wrap back to north.
    #[must_use]
    pub const fn from_angle(angle: u16) -> Self {
        match angle {
            330.. => Self::N,
            300.. => Self::NW,
            240.. => Self::W,
            210.. => Self::SW,
            150.. => Self::S,
            120.. => Self::SE,
            60.. => Self::E,
            30.. => Self::NE,
            _ => Self::N,
        }
    }

    /// Short label of the compass point
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::N => "N",
            Self::NE => "NE",
            Self::E => "E",
            Self::SE => "SE",
            Self::S => "S",
            Self::SW => "SW",
            Self::W => "W",
            Self::NW => "NW",
        }
    }
}

impl fmt::Display for CompassPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries() {
        assert_eq!(CompassPoint::from_angle(0), CompassPoint::N);
        assert_eq!(CompassPoint::from_angle(29), CompassPoint::N);
        assert_eq!(CompassPoint::from_angle(30), CompassPoint::NE);
        assert_eq!(CompassPoint::from_angle(60), CompassPoint::E);
        assert_eq!(CompassPoint::from_angle(119), CompassPoint::E);
        assert_eq!(CompassPoint::from_angle(120), CompassPoint::SE);
        assert_eq!(CompassPoint::from_angle(150), CompassPoint::S);
        assert_eq!(CompassPoint::from_angle(210), CompassPoint::SW);
        assert_eq!(CompassPoint::from_angle(240), CompassPoint::W);
        assert_eq!(CompassPoint::from_angle(300), CompassPoint::NW);
        assert_eq!(CompassPoint::from_angle(329), CompassPoint::NW);
        assert_eq!(CompassPoint::from_angle(330), CompassPoint::N);
        assert_eq!(CompassPoint::from_angle(359), CompassPoint::N);
    }

    #[test]
    fn label_matches_display() {
        assert_eq!(CompassPoint::SW.to_string(), CompassPoint::SW.label());
    }
}
