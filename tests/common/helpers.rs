use std::io::Write;

use tempfile::NamedTempFile;
use wnb::{CenterOfGravity, ResolvedLoad};

/// Writes `contents` to a temporary YAML file that lives as long as the handle.
pub fn write_document(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("failed to create temporary file");
    file.write_all(contents.as_bytes())
        .expect("failed to write temporary file");
    file
}

/// Sets the current value of the load named `designation`.
pub fn set_load(loads: &mut [ResolvedLoad], designation: &str, value: f64) {
    let load = loads
        .iter_mut()
        .find(|load| load.designation() == designation)
        .unwrap_or_else(|| panic!("no load named '{}'", designation));
    load.current_value = value;
}

/// A point of the (lever arm, mass) plane as a center of gravity.
pub fn cg_at(lever_arm: f64, mass: f64) -> CenterOfGravity {
    CenterOfGravity {
        mass,
        lever_arm,
        moment: lever_arm * mass,
    }
}
