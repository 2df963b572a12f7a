use tracing::debug;

use crate::components::{AircraftConfig, ResolvedLoad};

/// Builds the session's current loads from the configuration, each seeded with
/// its default quantity.
///
/// The result has one entry per load definition, in the same order, so a
/// front-end can correlate them by position. The configuration itself is never
/// modified; calling this again yields a fresh set of defaults.
pub fn resolve_loads(config: &AircraftConfig) -> Vec<ResolvedLoad> {
    let loads: Vec<ResolvedLoad> = config
        .loads()
        .iter()
        .map(ResolvedLoad::from_definition)
        .collect();
    debug!("Resolved {} loads for {}", loads.len(), config.display_name());
    loads
}
