use std::path::PathBuf;

/// Path of a document shipped in the `data` directory.
pub fn data_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data").join(name)
}

/// A small but complete document with one liquid load.
pub const TRAINER_DOCUMENT: &str = r#"
type: aircraft-wnb-data
file_format_version: "0.0.1"
aircraft:
  designation: Trainer
  immat: F-TEST
liquids:
  fuel_100LL:
    density: 0.72
loads:
  - designation: Empty aircraft
    lever_arm: 1.0
    mass:
      default: 500
  - designation: Pilot
    lever_arm: 1.2
    mass:
      default: 80
      min: 0
      max: 120
  - designation: Fuel
    lever_arm: 1.1
    liquid: fuel_100LL
    volume:
      default: 50
      min: 0
      max: 80
      step: 5
centrogram:
  - designation: A
    lever_arm: 0.9
    mass: 400
  - designation: B
    lever_arm: 0.9
    mass: 800
  - designation: C
    mass: 800
    moment: 960
  - designation: D
    lever_arm: 1.2
    mass: 400
"#;
