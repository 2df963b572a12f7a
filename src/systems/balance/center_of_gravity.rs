use tracing::{debug, warn};

use crate::components::{AircraftConfig, CenterOfGravity, ResolvedLoad};
use crate::utils::WnbError;

/// Aggregates the current loads into the resultant center of gravity.
///
/// Each load contributes its mass (volumes converted through the liquid
/// density) and the moment of that mass about the datum. The resultant lever
/// arm is the total moment divided by the total mass.
///
/// # Arguments
/// * `config` - The aircraft the loads were resolved from; supplies liquid densities.
/// * `loads` - Current loads, index-correlated with `config.loads()`. Each
///   definition must equal the configured one at the same position.
///
/// # Returns
/// The resultant point, or an error when a load cannot be evaluated or the
/// total mass is not positive.
pub fn calculate_cg(
    config: &AircraftConfig,
    loads: &[ResolvedLoad],
) -> Result<CenterOfGravity, WnbError> {
    if loads.len() != config.loads().len() {
        return Err(WnbError::InvalidConfig(format!(
            "expected {} resolved loads for {}, got {}",
            config.loads().len(),
            config.display_name(),
            loads.len()
        )));
    }

    let mut total_mass = 0.0;
    let mut total_moment = 0.0;

    for (i, (load, definition)) in loads.iter().zip(config.loads()).enumerate() {
        if load.definition != *definition {
            return Err(WnbError::InvalidConfig(format!(
                "resolved load #{} ('{}') does not match load '{}' of {}",
                i + 1,
                load.designation(),
                definition.designation(),
                config.display_name()
            )));
        }
        if !load.within_bounds() {
            warn!(
                "Load '{}' is set to {} outside its declared bounds",
                load.designation(),
                load.current_value
            );
        }
        let mass = load.contributing_mass(config.liquid_densities())?;
        total_mass += mass;
        total_moment += mass * load.lever_arm();
    }

    // Also catches NaN
    if !(total_mass > 0.0) {
        return Err(WnbError::DegenerateAggregate { total_mass });
    }

    let cg = CenterOfGravity {
        mass: total_mass,
        lever_arm: total_moment / total_mass,
        moment: total_moment,
    };
    debug!(
        "G: mass={:.1} kg, lever_arm={:.3} m, moment={:.1} kg.m",
        cg.mass, cg.lever_arm, cg.moment
    );
    Ok(cg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::LoadDefinition;
    use crate::systems::resolve_loads;
    use approx::assert_relative_eq;

    #[test]
    fn test_reference_defaults() {
        let config = AircraftConfig::cessna_150();
        let loads = resolve_loads(&config);
        let cg = calculate_cg(&config, &loads).unwrap();

        assert_relative_eq!(cg.mass, 668.2, epsilon = 1e-9);
        assert_relative_eq!(cg.lever_arm, 0.907, epsilon = 0.001);
        assert_relative_eq!(cg.moment, 606.375, epsilon = 0.001);
    }

    #[test]
    fn test_zero_total_mass_is_degenerate() {
        let config = AircraftConfig::cessna_150();
        let mut loads = resolve_loads(&config);
        for load in &mut loads {
            load.current_value = 0.0;
        }

        let err = calculate_cg(&config, &loads).unwrap_err();
        assert!(matches!(err, WnbError::DegenerateAggregate { total_mass } if total_mass == 0.0));
    }

    #[test]
    fn test_load_count_must_match_config() {
        let config = AircraftConfig::cessna_150();
        let loads = resolve_loads(&config);
        assert!(matches!(
            calculate_cg(&config, &loads[..3]),
            Err(WnbError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_loads_must_come_from_config() {
        let config = AircraftConfig::cessna_150();

        let mut edited = resolve_loads(&config);
        if let LoadDefinition::FixedMass(empty) = &mut edited[0].definition {
            empty.lever_arm = 0.9;
        }
        assert!(matches!(
            calculate_cg(&config, &edited),
            Err(WnbError::InvalidConfig(_))
        ));

        let other = AircraftConfig::from_yaml_str(
            r#"
loads:
  - {designation: A, lever_arm: 5.0, mass: {default: 1000}}
  - {designation: B, lever_arm: 5.0, mass: {default: 1000}}
  - {designation: C, lever_arm: 5.0, mass: {default: 1000}}
  - {designation: D, lever_arm: 5.0, mass: {default: 1000}}
  - {designation: E, lever_arm: 5.0, mass: {default: 1000}}
centrogram:
  - {lever_arm: 4.0, mass: 0}
  - {lever_arm: 6.0, mass: 0}
  - {lever_arm: 6.0, mass: 6000}
"#,
        )
        .unwrap();
        assert!(matches!(
            calculate_cg(&config, &resolve_loads(&other)),
            Err(WnbError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_inputs_are_not_mutated() {
        let config = AircraftConfig::cessna_150();
        let loads = resolve_loads(&config);
        let before = loads.clone();
        let first = calculate_cg(&config, &loads).unwrap();
        let second = calculate_cg(&config, &loads).unwrap();
        assert_eq!(loads, before);
        assert_eq!(first, second);
        assert_eq!(config, AircraftConfig::cessna_150());
    }
}
