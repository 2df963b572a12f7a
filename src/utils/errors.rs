use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WnbError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid load definition '{designation}': {reason}")]
    InvalidLoadDefinition { designation: String, reason: String },

    #[error("Load '{designation}' references unknown liquid '{liquid}'")]
    UnknownLiquid { designation: String, liquid: String },

    #[error("Invalid centrogram point '{designation}': {reason}")]
    InvalidCentrogramPoint { designation: String, reason: String },

    #[error("Invalid value {value} for load '{designation}'")]
    InvalidLoadValue { designation: String, value: f64 },

    #[error("Total mass must be positive to locate the center of gravity (got {total_mass})")]
    DegenerateAggregate { total_mass: f64 },

    #[error("Invalid envelope: {0}")]
    InvalidEnvelope(String),
}

impl WnbError {
    /// True for errors raised while reading or validating a configuration document.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            WnbError::Io(_)
                | WnbError::Yaml(_)
                | WnbError::InvalidConfig(_)
                | WnbError::InvalidLoadDefinition { .. }
                | WnbError::UnknownLiquid { .. }
                | WnbError::InvalidCentrogramPoint { .. }
                | WnbError::InvalidEnvelope(_)
        )
    }
}
