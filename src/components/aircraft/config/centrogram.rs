use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::utils::WnbError;

/// A vertex of the certified weight-and-balance envelope.
///
/// All three coordinates are populated once the configuration is loaded;
/// `moment` always equals `lever_arm * mass`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CentrogramPoint {
    pub designation: String,
    /// Lever arm (m).
    pub lever_arm: f64,
    /// Mass (kg).
    pub mass: f64,
    /// Moment (kg·m).
    pub moment: f64,
}

impl CentrogramPoint {
    /// Creates a point from its lever arm and mass, deriving the moment.
    pub fn new(designation: impl Into<String>, lever_arm: f64, mass: f64) -> Self {
        Self {
            designation: designation.into(),
            lever_arm,
            mass,
            moment: lever_arm * mass,
        }
    }

    /// Creates a point from its moment and mass, deriving the lever arm.
    pub fn from_moment(
        designation: impl Into<String>,
        moment: f64,
        mass: f64,
    ) -> Result<Self, WnbError> {
        let designation = designation.into();
        if mass == 0.0 {
            return Err(WnbError::InvalidCentrogramPoint {
                designation,
                reason: "cannot derive lever arm from a zero mass".to_string(),
            });
        }
        Ok(Self {
            designation,
            lever_arm: moment / mass,
            mass,
            moment,
        })
    }

    /// Position of the point along `axis` paired with its mass.
    pub fn coordinates(&self, axis: CentrogramAxis) -> (f64, f64) {
        match axis {
            CentrogramAxis::LeverArm => (self.lever_arm, self.mass),
            CentrogramAxis::Moment => (self.moment, self.mass),
        }
    }
}

/// Quantity plotted on the horizontal axis of a centrogram; the vertical axis is mass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CentrogramAxis {
    #[default]
    LeverArm,
    Moment,
}

impl CentrogramAxis {
    /// Axis label including its unit.
    pub fn label(&self) -> &'static str {
        match self {
            CentrogramAxis::LeverArm => "lever_arm (m)",
            CentrogramAxis::Moment => "moment (kg.m)",
        }
    }
}

impl fmt::Display for CentrogramAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CentrogramAxis::LeverArm => write!(f, "lever_arm"),
            CentrogramAxis::Moment => write!(f, "moment"),
        }
    }
}

impl FromStr for CentrogramAxis {
    type Err = WnbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lever_arm" => Ok(CentrogramAxis::LeverArm),
            "moment" => Ok(CentrogramAxis::Moment),
            other => Err(WnbError::InvalidConfig(format!(
                "unknown x-axis '{}' (must be lever_arm or moment)",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_moment_is_derived() {
        let point = CentrogramPoint::new("Pt3", 0.87, 726.0);
        assert_relative_eq!(point.moment, 631.62, epsilon = 1e-9);
    }

    #[test]
    fn test_lever_arm_is_derived() {
        let point = CentrogramPoint::from_moment("Pt3", 631.62, 726.0).unwrap();
        assert_relative_eq!(point.lever_arm, 0.87, epsilon = 1e-9);

        let err = CentrogramPoint::from_moment("Pt0", 10.0, 0.0).unwrap_err();
        assert!(matches!(err, WnbError::InvalidCentrogramPoint { .. }));
    }

    #[test]
    fn test_axis_round_trip_through_str() {
        for axis in [CentrogramAxis::LeverArm, CentrogramAxis::Moment] {
            assert_eq!(axis.to_string().parse::<CentrogramAxis>().unwrap(), axis);
        }
        assert!("mass".parse::<CentrogramAxis>().is_err());
    }

    #[test]
    fn test_coordinates_by_axis() {
        let point = CentrogramPoint::new("Pt1", 0.8, 250.0);
        assert_eq!(point.coordinates(CentrogramAxis::LeverArm), (0.8, 250.0));
        let (moment, mass) = point.coordinates(CentrogramAxis::Moment);
        assert_relative_eq!(moment, 200.0);
        assert_eq!(mass, 250.0);
    }
}
