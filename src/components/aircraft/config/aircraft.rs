use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::components::aircraft::config::{
    CentrogramPoint, FixedMassLoad, LiquidVolumeLoad, LoadDefinition, Quantity, RawAircraftConfig,
};
use crate::components::Envelope;
use crate::utils::{WnbError, FUEL_100LL_DENSITY, WNB_CONFIG_TYPE};

/// Identification of the aircraft a weight-and-balance document belongs to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AircraftInfo {
    #[serde(default)]
    pub designation: Option<String>,
    /// ICAO type designator, e.g. `C150`.
    #[serde(rename = "type", default)]
    pub aircraft_type: Option<String>,
    /// Registration.
    #[serde(default)]
    pub immat: Option<String>,
    #[serde(default)]
    pub picture: Option<String>,
    #[serde(default)]
    pub owner: Option<String>,
    #[serde(default)]
    pub owner_picture: Option<String>,
    #[serde(default)]
    pub comment: Option<String>,
}

/// Revision of the weight-and-balance report the document was taken from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeightAndBalanceInfo {
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
}

/// The weight-and-balance data of one aircraft: liquids, loads and centrogram.
///
/// A configuration can only be obtained through validation, so every value
/// reachable from it satisfies the document invariants: each load is a mass
/// or a volume of a declared liquid, defaults respect their bounds, and the
/// centrogram is a simple polygon with non-zero area.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AircraftConfig {
    file_format_version: Option<String>,
    weight_and_balance: Option<WeightAndBalanceInfo>,
    aircraft: Option<AircraftInfo>,
    liquid_densities: BTreeMap<String, f64>,
    loads: Vec<LoadDefinition>,
    centrogram: Vec<CentrogramPoint>,
}

impl AircraftConfig {
    /// Creates a new aircraft configuration from a given source.
    ///
    /// # Arguments
    /// * `source` - An `AircraftSource` enum specifying if the configuration is built in
    ///              (`Programmed`) or loaded from a file (`File`).
    ///
    /// # Returns
    /// A `Result` containing the new configuration or an error if the file fails to load.
    pub fn new(source: AircraftSource) -> Result<Self, WnbError> {
        match source {
            AircraftSource::Programmed(aircraft_type) => Ok(Self::from_programmed(aircraft_type)),
            AircraftSource::File(path) => Self::from_file(path),
        }
    }

    /// Creates an aircraft configuration for built-in types.
    fn from_programmed(aircraft_type: AircraftType) -> Self {
        match aircraft_type {
            AircraftType::Cessna150 => Self::cessna_150(),
        }
    }

    /// Creates an aircraft configuration by reading from a YAML file.
    ///
    /// # Arguments
    /// * `path` - Path to the YAML configuration file.
    ///
    /// # Returns
    /// A `Result` containing the loaded configuration or an error if reading,
    /// deserialization or validation fails.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, WnbError> {
        let path = path.as_ref();
        info!("Loading weight and balance data from {}", path.display());
        let file_contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&file_contents)
    }

    /// Parses and validates a YAML weight-and-balance document.
    pub fn from_yaml_str(contents: &str) -> Result<Self, WnbError> {
        let raw_config: RawAircraftConfig = serde_yaml::from_str(contents)?;
        Self::from_raw_config(raw_config)
    }

    /// Converts a raw document into a validated configuration.
    pub fn from_raw_config(raw: RawAircraftConfig) -> Result<Self, WnbError> {
        if let Some(config_type) = &raw.config_type {
            if config_type != WNB_CONFIG_TYPE {
                return Err(WnbError::InvalidConfig(format!(
                    "unsupported document type '{}' (expected '{}')",
                    config_type, WNB_CONFIG_TYPE
                )));
            }
        }

        let liquid_densities = raw.liquid_densities()?;

        let loads = raw
            .loads
            .ok_or_else(|| WnbError::InvalidConfig("missing `loads` section".to_string()))?
            .into_iter()
            .enumerate()
            .map(|(i, load)| load.into_definition(i))
            .collect::<Result<Vec<_>, _>>()?;

        let centrogram = raw
            .centrogram
            .ok_or_else(|| WnbError::InvalidConfig("missing `centrogram` section".to_string()))?
            .into_iter()
            .enumerate()
            .map(|(i, point)| point.into_point(i))
            .collect::<Result<Vec<_>, _>>()?;

        let config = Self {
            file_format_version: raw.file_format_version,
            weight_and_balance: raw.weight_and_balance,
            aircraft: raw.aircraft,
            liquid_densities,
            loads,
            centrogram,
        };
        config.validate()?;

        info!(
            "Loaded weight and balance data for {} ({} loads, {} centrogram points)",
            config.display_name(),
            config.loads.len(),
            config.centrogram.len()
        );
        Ok(config)
    }

    /// Checks the invariants that span several sections of the document.
    pub fn validate(&self) -> Result<(), WnbError> {
        for (name, density) in &self.liquid_densities {
            if !density.is_finite() || *density <= 0.0 {
                return Err(WnbError::InvalidConfig(format!(
                    "density of liquid '{}' must be positive (got {})",
                    name, density
                )));
            }
        }

        if self.loads.is_empty() {
            return Err(WnbError::InvalidConfig(
                "at least one load is required".to_string(),
            ));
        }

        for load in &self.loads {
            load.quantity().validate(load.designation())?;
            if let LoadDefinition::LiquidVolume(liquid_load) = load {
                if !self.liquid_densities.contains_key(&liquid_load.liquid) {
                    return Err(WnbError::UnknownLiquid {
                        designation: liquid_load.designation.clone(),
                        liquid: liquid_load.liquid.clone(),
                    });
                }
            }
        }

        let envelope = Envelope::from_centrogram(&self.centrogram)?;
        debug!(
            "Centrogram of {} encloses {:.3} kg.m over {} vertices",
            self.display_name(),
            envelope.area(),
            envelope.vertices().len()
        );
        Ok(())
    }

    pub fn file_format_version(&self) -> Option<&str> {
        self.file_format_version.as_deref()
    }

    pub fn weight_and_balance(&self) -> Option<&WeightAndBalanceInfo> {
        self.weight_and_balance.as_ref()
    }

    pub fn aircraft(&self) -> Option<&AircraftInfo> {
        self.aircraft.as_ref()
    }

    /// Liquid name to density (kg/L).
    pub fn liquid_densities(&self) -> &BTreeMap<String, f64> {
        &self.liquid_densities
    }

    pub fn liquid_density(&self, liquid: &str) -> Option<f64> {
        self.liquid_densities.get(liquid).copied()
    }

    /// Load definitions in display order.
    pub fn loads(&self) -> &[LoadDefinition] {
        &self.loads
    }

    /// Envelope vertices in polygon order.
    pub fn centrogram(&self) -> &[CentrogramPoint] {
        &self.centrogram
    }

    /// Registration, designation or a placeholder, for log and console output.
    pub fn display_name(&self) -> &str {
        self.aircraft
            .as_ref()
            .and_then(|a| a.immat.as_deref().or(a.designation.as_deref()))
            .unwrap_or("unnamed aircraft")
    }

    /// The Cessna 150 F-BUBK, used as the reference aircraft.
    pub fn cessna_150() -> Self {
        let mut liquid_densities = BTreeMap::new();
        liquid_densities.insert("fuel_100LL".to_string(), FUEL_100LL_DENSITY);

        let fixed = |designation: &str, lever_arm: f64, mass: Quantity| {
            LoadDefinition::FixedMass(FixedMassLoad {
                designation: designation.to_string(),
                lever_arm,
                mass,
                comment: Some(String::new()),
            })
        };

        Self {
            file_format_version: Some("0.0.1".to_string()),
            weight_and_balance: Some(WeightAndBalanceInfo {
                version: Some("1".to_string()),
                date: Some("21/03/2006".to_string()),
            }),
            aircraft: Some(AircraftInfo {
                designation: Some("Cessna 150".to_string()),
                aircraft_type: Some("C150".to_string()),
                immat: Some("F-BUBK".to_string()),
                picture: Some("f-bubk.png".to_string()),
                owner: Some("Aéro-Club du Poitou".to_string()),
                owner_picture: Some("acp.png".to_string()),
                comment: Some(String::new()),
            }),
            liquid_densities,
            loads: vec![
                fixed("Empty aircraft", 0.862, Quantity::fixed(520.0)),
                fixed("Pilot", 0.993, Quantity::bounded(77.0, 0.0, 150.0, 1.0)),
                fixed("Passenger", 0.993, Quantity::bounded(0.0, 0.0, 150.0, 1.0)),
                fixed("Luggage", 1.619, Quantity::bounded(10.0, 0.0, 54.0, 1.0)),
                LoadDefinition::LiquidVolume(LiquidVolumeLoad {
                    designation: "Fuel".to_string(),
                    lever_arm: 1.07,
                    liquid: "fuel_100LL".to_string(),
                    volume: Quantity::bounded(85.0, 0.0, 100.0, 1.0),
                    comment: Some(String::new()),
                }),
            ],
            centrogram: vec![
                CentrogramPoint::new("Pt1", 0.8, 250.0),
                CentrogramPoint::new("Pt2", 0.8, 560.0),
                CentrogramPoint::new("Pt3", 0.87, 726.0),
                CentrogramPoint::new("Pt4", 0.94, 726.0),
                CentrogramPoint::new("Pt5", 0.94, 250.0),
            ],
        }
    }
}

impl Default for AircraftConfig {
    /// The Cessna 150 reference aircraft is chosen as the default for convenience.
    fn default() -> Self {
        Self::cessna_150()
    }
}

/// Source for aircraft configuration.
/// Can either be a built-in configuration (`Programmed`) or loaded from a file.
#[derive(Debug, Clone)]
pub enum AircraftSource {
    Programmed(AircraftType),
    File(PathBuf),
}

/// Enumeration of built-in aircraft.
#[derive(Debug, Clone, Copy, Deserialize, Hash, PartialEq, Eq)]
pub enum AircraftType {
    Cessna150,
}
