use serde::{Deserialize, Serialize};

use crate::components::aircraft::config::CentrogramAxis;

/// Resultant center of gravity of all loads.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CenterOfGravity {
    /// Total mass (kg).
    pub mass: f64,
    /// Lever arm of the resultant (m).
    pub lever_arm: f64,
    /// Total moment (kg·m).
    pub moment: f64,
}

impl CenterOfGravity {
    /// Position of the center of gravity along `axis` paired with its mass.
    pub fn coordinates(&self, axis: CentrogramAxis) -> (f64, f64) {
        match axis {
            CentrogramAxis::LeverArm => (self.lever_arm, self.mass),
            CentrogramAxis::Moment => (self.moment, self.mass),
        }
    }
}
