pub mod balance;

pub use balance::{calculate_cg, centrogram_outline, inside_envelope, resolve_loads};
