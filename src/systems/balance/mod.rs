mod center_of_gravity;
mod envelope;
mod loads;

pub use center_of_gravity::calculate_cg;
pub use envelope::{centrogram_outline, inside_envelope};
pub use loads::resolve_loads;
