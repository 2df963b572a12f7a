/// Value of the optional `type` tag of an aircraft weight-and-balance document.
pub const WNB_CONFIG_TYPE: &str = "aircraft-wnb-data";

/// Density of 100LL aviation gasoline (kg/L).
pub const FUEL_100LL_DENSITY: f64 = 0.72;

/// Slider increment used when a quantity declares no step.
pub const DEFAULT_SLIDER_STEP: f64 = 1.0;

// Geometry
pub const GEOMETRY_EPSILON: f64 = 1e-9; // Relative tolerance for collinearity
