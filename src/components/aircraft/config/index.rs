use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::utils::WnbError;

/// A list of aircraft weight-and-balance documents, e.g. one per club aircraft.
///
/// Entries are file names relative to the directory holding the index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AircraftIndex {
    #[serde(default)]
    pub title: String,
    pub aircrafts: Vec<String>,
}

impl AircraftIndex {
    /// Reads an index from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, WnbError> {
        let path = path.as_ref();
        info!("Loading aircraft index from {}", path.display());
        let file_contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&file_contents)
    }

    pub fn from_yaml_str(contents: &str) -> Result<Self, WnbError> {
        let index: Self = serde_yaml::from_str(contents)?;
        if index.aircrafts.is_empty() {
            return Err(WnbError::InvalidConfig(
                "aircraft index lists no aircraft".to_string(),
            ));
        }
        Ok(index)
    }

    /// Path of the document for the 1-based `choice`, resolved against the
    /// directory of `index_path`.
    pub fn config_path(&self, index_path: &Path, choice: usize) -> Result<PathBuf, WnbError> {
        let entry = choice
            .checked_sub(1)
            .and_then(|i| self.aircrafts.get(i))
            .ok_or_else(|| {
                WnbError::InvalidConfig(format!(
                    "index out of range (must be in [1;{}])",
                    self.aircrafts.len()
                ))
            })?;
        let directory = index_path.parent().unwrap_or_else(|| Path::new(""));
        Ok(directory.join(entry))
    }
}
