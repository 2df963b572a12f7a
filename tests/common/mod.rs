#![allow(dead_code, unused_imports)]

mod assertions;
mod fixtures;
mod helpers;

// Re-export
pub use assertions::{assert_cg_eq, assert_cg_valid, assert_config_error};

pub use helpers::*;

pub use fixtures::*;
