use serde::{Deserialize, Serialize};

use crate::utils::{WnbError, DEFAULT_SLIDER_STEP};

/// An adjustable quantity (mass in kg or volume in L) with its default and UI bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quantity {
    /// Value used when loads are resolved.
    pub default: f64,
    /// Lowest value a front-end should offer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    /// Highest value a front-end should offer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    /// Slider increment. Has no effect on calculations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step: Option<f64>,
}

/// Slider settings derived from a [`Quantity`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    /// False when the quantity declares no bounds and should be shown read-only.
    pub enabled: bool,
}

impl Quantity {
    /// A quantity fixed at `default` with no bounds.
    pub fn fixed(default: f64) -> Self {
        Self {
            default,
            min: None,
            max: None,
            step: None,
        }
    }

    /// A quantity adjustable within `[min, max]` in increments of `step`.
    pub fn bounded(default: f64, min: f64, max: f64, step: f64) -> Self {
        Self {
            default,
            min: Some(min),
            max: Some(max),
            step: Some(step),
        }
    }

    /// Checks whether `value` respects the declared bounds. Missing bounds are open.
    pub fn contains(&self, value: f64) -> bool {
        self.min.map_or(true, |min| value >= min) && self.max.map_or(true, |max| value <= max)
    }

    /// Slider settings for a front-end.
    ///
    /// The step falls back to one unit. A quantity with both bounds is adjustable;
    /// otherwise the slider spans one step either side of the default and is disabled.
    pub fn slider_range(&self) -> SliderRange {
        let step = self.step.unwrap_or(DEFAULT_SLIDER_STEP);
        match (self.min, self.max) {
            (Some(min), Some(max)) => SliderRange {
                min,
                max,
                step,
                enabled: true,
            },
            _ => SliderRange {
                min: self.default - step,
                max: self.default + step,
                step,
                enabled: false,
            },
        }
    }

    /// Validates the quantity of the load named `designation`.
    pub(crate) fn validate(&self, designation: &str) -> Result<(), WnbError> {
        let invalid = |reason: String| WnbError::InvalidLoadDefinition {
            designation: designation.to_string(),
            reason,
        };

        let values = [Some(self.default), self.min, self.max, self.step];
        if values.iter().flatten().any(|v| !v.is_finite()) {
            return Err(invalid("quantity values must be finite".to_string()));
        }
        if self.default < 0.0 {
            return Err(invalid(format!("default {} is negative", self.default)));
        }
        if let (Some(min), Some(max)) = (self.min, self.max) {
            if min > max {
                return Err(invalid(format!("min {} exceeds max {}", min, max)));
            }
        }
        if !self.contains(self.default) {
            return Err(invalid(format!(
                "default {} lies outside [{}, {}]",
                self.default,
                self.min.map_or("-inf".to_string(), |v| v.to_string()),
                self.max.map_or("+inf".to_string(), |v| v.to_string()),
            )));
        }
        if let Some(step) = self.step {
            if step <= 0.0 {
                return Err(invalid(format!("step {} must be positive", step)));
            }
        }
        Ok(())
    }
}

/// A load whose contribution is given directly as a mass (kg).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FixedMassLoad {
    pub designation: String,
    /// Distance from the datum (m).
    pub lever_arm: f64,
    pub mass: Quantity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// A load given as a volume (L) of a liquid whose density is declared by the aircraft.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LiquidVolumeLoad {
    pub designation: String,
    /// Distance from the datum (m).
    pub lever_arm: f64,
    /// Key into the aircraft's liquid densities.
    pub liquid: String,
    pub volume: Quantity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// One contributor to the total weight.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum LoadDefinition {
    FixedMass(FixedMassLoad),
    LiquidVolume(LiquidVolumeLoad),
}

impl LoadDefinition {
    pub fn designation(&self) -> &str {
        match self {
            LoadDefinition::FixedMass(load) => &load.designation,
            LoadDefinition::LiquidVolume(load) => &load.designation,
        }
    }

    pub fn lever_arm(&self) -> f64 {
        match self {
            LoadDefinition::FixedMass(load) => load.lever_arm,
            LoadDefinition::LiquidVolume(load) => load.lever_arm,
        }
    }

    /// The mass or volume quantity, whichever the load is expressed in.
    pub fn quantity(&self) -> &Quantity {
        match self {
            LoadDefinition::FixedMass(load) => &load.mass,
            LoadDefinition::LiquidVolume(load) => &load.volume,
        }
    }

    pub fn comment(&self) -> Option<&str> {
        match self {
            LoadDefinition::FixedMass(load) => load.comment.as_deref(),
            LoadDefinition::LiquidVolume(load) => load.comment.as_deref(),
        }
    }

    /// Display unit of the load's quantity.
    pub fn unit(&self) -> &'static str {
        match self {
            LoadDefinition::FixedMass(_) => "kg",
            LoadDefinition::LiquidVolume(_) => "L",
        }
    }

    /// Name of the adjusted quantity, as shown in prompts.
    pub fn quantity_name(&self) -> &'static str {
        match self {
            LoadDefinition::FixedMass(_) => "mass",
            LoadDefinition::LiquidVolume(_) => "volume",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slider_range_bounded() {
        let quantity = Quantity::bounded(77.0, 0.0, 150.0, 1.0);
        let range = quantity.slider_range();
        assert!(range.enabled);
        assert_eq!(range.min, 0.0);
        assert_eq!(range.max, 150.0);
        assert_eq!(range.step, 1.0);
    }

    #[test]
    fn test_slider_range_unbounded_is_disabled() {
        let quantity = Quantity::fixed(520.0);
        let range = quantity.slider_range();
        assert!(!range.enabled);
        assert_eq!(range.min, 519.0);
        assert_eq!(range.max, 521.0);
        assert_eq!(range.step, DEFAULT_SLIDER_STEP);
    }

    #[test]
    fn test_slider_range_half_bounded_is_disabled() {
        let quantity = Quantity {
            default: 10.0,
            min: Some(0.0),
            max: None,
            step: Some(5.0),
        };
        let range = quantity.slider_range();
        assert!(!range.enabled);
        assert_eq!(range.min, 5.0);
        assert_eq!(range.max, 15.0);
    }

    #[test]
    fn test_validate_default_outside_bounds() {
        let quantity = Quantity::bounded(160.0, 0.0, 150.0, 1.0);
        let err = quantity.validate("Pilot").unwrap_err();
        assert!(matches!(
            err,
            WnbError::InvalidLoadDefinition { ref designation, .. } if designation == "Pilot"
        ));
    }

    #[test]
    fn test_validate_rejects_inverted_bounds_and_bad_step() {
        assert!(Quantity::bounded(5.0, 10.0, 0.0, 1.0).validate("x").is_err());
        assert!(Quantity::bounded(5.0, 0.0, 10.0, 0.0).validate("x").is_err());
        assert!(Quantity::fixed(f64::NAN).validate("x").is_err());
        assert!(Quantity::fixed(-1.0).validate("x").is_err());
        assert!(Quantity::bounded(0.0, 0.0, 10.0, 1.0).validate("x").is_ok());
    }

    #[test]
    fn test_unit_and_quantity_name() {
        let fuel = LoadDefinition::LiquidVolume(LiquidVolumeLoad {
            designation: "Fuel".to_string(),
            lever_arm: 1.07,
            liquid: "fuel_100LL".to_string(),
            volume: Quantity::bounded(85.0, 0.0, 100.0, 1.0),
            comment: None,
        });
        assert_eq!(fuel.unit(), "L");
        assert_eq!(fuel.quantity_name(), "volume");
        assert_eq!(fuel.quantity().default, 85.0);
        assert_eq!(fuel.designation(), "Fuel");
    }
}
