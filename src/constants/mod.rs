//! Constants shared across the geometric model

use std::f64::consts::PI;

// Validation tolerances
/// Maximum allowed disagreement between the two radius estimates when
/// constructing a planet
pub const RADIUS_TOLERANCE: f64 = 1e-6;

// Angles
/// Degrees to radians conversion factor
pub const DEG2RAD: f64 = PI / 180.0;
/// Radians to degrees conversion factor
pub const RAD2DEG: f64 = 180.0 / PI;
/// Tau (2*PI) for full circle
pub const TAU: f64 = 2.0 * PI;
