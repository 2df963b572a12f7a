use serde::Serialize;
use std::collections::BTreeMap;

use crate::components::aircraft::config::LoadDefinition;
use crate::utils::WnbError;

/// A load as adjusted during a session: a copy of its definition plus the
/// value currently selected, in kg for mass loads or L for liquid loads.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedLoad {
    pub definition: LoadDefinition,
    pub current_value: f64,
}

impl ResolvedLoad {
    /// Seeds a resolved load with the default of its quantity.
    pub fn from_definition(definition: &LoadDefinition) -> Self {
        Self {
            current_value: definition.quantity().default,
            definition: definition.clone(),
        }
    }

    pub fn designation(&self) -> &str {
        self.definition.designation()
    }

    pub fn lever_arm(&self) -> f64 {
        self.definition.lever_arm()
    }

    /// Restores the configured default.
    pub fn reset(&mut self) {
        self.current_value = self.definition.quantity().default;
    }

    /// Whether the current value lies within the declared bounds.
    pub fn within_bounds(&self) -> bool {
        self.definition.quantity().contains(self.current_value)
    }

    /// Mass (kg) this load contributes at its current value.
    ///
    /// Volumes are converted with the density of the named liquid.
    pub fn contributing_mass(&self, densities: &BTreeMap<String, f64>) -> Result<f64, WnbError> {
        if !self.current_value.is_finite() || self.current_value < 0.0 {
            return Err(WnbError::InvalidLoadValue {
                designation: self.designation().to_string(),
                value: self.current_value,
            });
        }

        match &self.definition {
            LoadDefinition::FixedMass(_) => Ok(self.current_value),
            LoadDefinition::LiquidVolume(load) => densities
                .get(&load.liquid)
                .map(|density| self.current_value * density)
                .ok_or_else(|| WnbError::UnknownLiquid {
                    designation: load.designation.clone(),
                    liquid: load.liquid.clone(),
                }),
        }
    }

    /// Moment (kg·m) this load contributes at its current value.
    pub fn contributing_moment(&self, densities: &BTreeMap<String, f64>) -> Result<f64, WnbError> {
        Ok(self.contributing_mass(densities)? * self.lever_arm())
    }
}
