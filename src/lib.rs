//! Weight and balance for light aircraft.
//!
//! A configuration describes the loads of an aircraft (empty aircraft, crew,
//! luggage, fuel) and its certified envelope, the centrogram. Loads are
//! resolved into an adjustable list, aggregated into a center of gravity, and
//! that point is checked against the centrogram.
//!
//! ```no_run
//! use wnb::{calculate_cg, inside_envelope, resolve_loads, AircraftConfig};
//!
//! let config = AircraftConfig::from_file("data/f-bubk.yml")?;
//! let mut loads = resolve_loads(&config);
//! loads[2].current_value = 60.0; // Passenger
//! let cg = calculate_cg(&config, &loads)?;
//! let inside = inside_envelope(&cg, config.centrogram())?;
//! # Ok::<(), wnb::WnbError>(())
//! ```

pub mod components;
pub mod systems;
pub mod utils;

pub use components::{
    AircraftConfig, AircraftIndex, AircraftSource, AircraftType, CenterOfGravity, CentrogramAxis,
    CentrogramPoint, Envelope, LoadDefinition, Quantity, ResolvedLoad,
};
pub use systems::{calculate_cg, centrogram_outline, inside_envelope, resolve_loads};
pub use utils::WnbError;
