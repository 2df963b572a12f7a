use approx::assert_relative_eq;
use wnb::{CenterOfGravity, WnbError};

/// Assert that a center of gravity is finite and self-consistent
#[track_caller]
pub fn assert_cg_valid(cg: &CenterOfGravity) {
    assert!(cg.mass.is_finite(), "Mass is not finite");
    assert!(cg.mass > 0.0, "Mass must be positive");
    assert!(cg.lever_arm.is_finite(), "Lever arm is not finite");
    assert!(cg.moment.is_finite(), "Moment is not finite");

    // Moment and lever arm must describe the same point
    assert_relative_eq!(
        cg.moment,
        cg.mass * cg.lever_arm,
        epsilon = 1e-9,
        max_relative = 1e-12
    );
}

/// Assert that a center of gravity sits at the expected mass and lever arm
#[track_caller]
pub fn assert_cg_eq(actual: &CenterOfGravity, mass: f64, lever_arm: f64, epsilon: f64) {
    assert_cg_valid(actual);
    assert_relative_eq!(actual.mass, mass, epsilon = epsilon, max_relative = epsilon);
    assert_relative_eq!(
        actual.lever_arm,
        lever_arm,
        epsilon = epsilon,
        max_relative = epsilon
    );
}

/// Assert that loading failed with a configuration error
#[track_caller]
pub fn assert_config_error<T: std::fmt::Debug>(result: Result<T, WnbError>) -> WnbError {
    let err = result.expect_err("expected the document to be rejected");
    assert!(err.is_config_error(), "not a configuration error: {}", err);
    err
}
