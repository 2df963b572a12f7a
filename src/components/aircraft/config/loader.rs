use serde::Deserialize;
use std::collections::BTreeMap;
use tracing::warn;

use crate::components::aircraft::config::{
    AircraftInfo, CentrogramPoint, FixedMassLoad, LiquidVolumeLoad, LoadDefinition, Quantity,
    WeightAndBalanceInfo,
};
use crate::utils::WnbError;

/// The weight-and-balance document exactly as it appears in YAML.
///
/// Every section is optional at this level so that a missing section is reported
/// as a configuration error naming it, rather than as a bare parse failure.
#[derive(Debug, Default, Deserialize)]
pub struct RawAircraftConfig {
    /// Document kind tag, `aircraft-wnb-data` when present.
    #[serde(rename = "type", default)]
    pub config_type: Option<String>,
    #[serde(default)]
    pub file_format_version: Option<String>,
    #[serde(default)]
    pub weight_and_balance: Option<WeightAndBalanceInfo>,
    #[serde(default)]
    pub aircraft: Option<AircraftInfo>,

    /// Liquids nested under `constants`.
    #[serde(default)]
    pub constants: Option<RawConstants>,
    /// Liquids declared at the top level.
    #[serde(default)]
    pub liquids: Option<BTreeMap<String, RawLiquid>>,

    #[serde(default)]
    pub loads: Option<Vec<RawLoad>>,
    #[serde(default)]
    pub centrogram: Option<Vec<RawCentrogramPoint>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawConstants {
    #[serde(default)]
    pub liquids: BTreeMap<String, RawLiquid>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct RawLiquid {
    /// Density (kg/L).
    pub density: f64,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawLoad {
    pub designation: Option<String>,
    pub lever_arm: Option<f64>,
    pub mass: Option<Quantity>,
    pub volume: Option<Quantity>,
    #[serde(alias = "liquid_name")]
    pub liquid: Option<String>,
    pub comment: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawCentrogramPoint {
    pub designation: Option<String>,
    pub lever_arm: Option<f64>,
    pub mass: Option<f64>,
    pub moment: Option<f64>,
}

impl RawAircraftConfig {
    /// Merges the liquids declared at the top level and under `constants`.
    pub fn liquid_densities(&self) -> Result<BTreeMap<String, f64>, WnbError> {
        let nested = self.constants.iter().flat_map(|c| c.liquids.iter());
        let top_level = self.liquids.iter().flatten();

        let mut densities = BTreeMap::new();
        for (name, liquid) in nested.chain(top_level) {
            if densities.insert(name.clone(), liquid.density).is_some() {
                return Err(WnbError::InvalidConfig(format!(
                    "liquid '{}' is declared more than once",
                    name
                )));
            }
        }
        Ok(densities)
    }
}

impl RawLoad {
    /// Converts the raw entry at position `index` into a typed load definition.
    ///
    /// The entry must carry exactly one of `mass` or `volume`; a volume load must
    /// name its liquid.
    pub fn into_definition(self, index: usize) -> Result<LoadDefinition, WnbError> {
        let designation = self
            .designation
            .filter(|d| !d.trim().is_empty())
            .ok_or_else(|| WnbError::InvalidLoadDefinition {
                designation: format!("load #{}", index + 1),
                reason: "missing designation".to_string(),
            })?;

        let invalid = |reason: &str| WnbError::InvalidLoadDefinition {
            designation: designation.clone(),
            reason: reason.to_string(),
        };

        let lever_arm = self.lever_arm.ok_or_else(|| invalid("missing lever_arm"))?;
        if !lever_arm.is_finite() {
            return Err(invalid("lever_arm must be finite"));
        }

        match (self.mass, self.volume) {
            (Some(mass), None) => {
                if let Some(liquid) = &self.liquid {
                    warn!(
                        "Load '{}' is given as a mass; ignoring liquid '{}'",
                        designation, liquid
                    );
                }
                mass.validate(&designation)?;
                Ok(LoadDefinition::FixedMass(FixedMassLoad {
                    designation,
                    lever_arm,
                    mass,
                    comment: self.comment,
                }))
            }
            (None, Some(volume)) => {
                let liquid = self
                    .liquid
                    .ok_or_else(|| invalid("a volume load must name its liquid"))?;
                volume.validate(&designation)?;
                Ok(LoadDefinition::LiquidVolume(LiquidVolumeLoad {
                    designation,
                    lever_arm,
                    liquid,
                    volume,
                    comment: self.comment,
                }))
            }
            (Some(_), Some(_)) => Err(invalid("has both mass and volume")),
            (None, None) => Err(invalid("has neither mass nor volume")),
        }
    }
}

impl RawCentrogramPoint {
    /// Converts the raw vertex at position `index`, deriving the missing coordinate.
    pub fn into_point(self, index: usize) -> Result<CentrogramPoint, WnbError> {
        let designation = self
            .designation
            .unwrap_or_else(|| format!("Pt{}", index + 1));
        let invalid = |reason: &str| WnbError::InvalidCentrogramPoint {
            designation: designation.clone(),
            reason: reason.to_string(),
        };

        let given = [self.lever_arm, self.mass, self.moment];
        if given.iter().flatten().any(|v| !v.is_finite()) {
            return Err(invalid("coordinates must be finite"));
        }

        match (self.lever_arm, self.mass, self.moment) {
            (Some(lever_arm), Some(mass), None) => {
                Ok(CentrogramPoint::new(designation, lever_arm, mass))
            }
            (None, Some(mass), Some(moment)) => {
                CentrogramPoint::from_moment(designation, moment, mass)
            }
            (Some(lever_arm), None, Some(moment)) => {
                if lever_arm == 0.0 {
                    return Err(invalid("cannot derive mass from a zero lever arm"));
                }
                Ok(CentrogramPoint {
                    mass: moment / lever_arm,
                    designation,
                    lever_arm,
                    moment,
                })
            }
            (Some(_), Some(_), Some(_)) => {
                Err(invalid("lever_arm, mass and moment are all given; expected exactly two"))
            }
            _ => Err(invalid("expected exactly two of lever_arm, mass and moment")),
        }
    }
}
