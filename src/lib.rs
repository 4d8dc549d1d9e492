//! Stationfield: planetary surface geometry calculations
//!
//! This crate models spherical celestial bodies and the ground stations
//! placed on their surfaces. A [`Planet`] is built from raw geometric
//! inputs and cross-validated; a [`Station`] is placed on it by two angles
//! and carries its own orthonormal tangent frame; a [`Connection`] relates
//! two stations and checks whether the line between them leaves and arrives
//! on the correct side of each surface.

use thiserror::Error;

pub mod connection;
pub mod constants;
pub mod coordinates;
pub mod planet;
pub mod station;

// Re-export commonly used types
pub use connection::Connection;
pub use coordinates::{Direction, Point};
pub use planet::Planet;
pub use station::Station;

/// Main error type for the stationfield library
#[derive(Debug, Error)]
pub enum StationfieldError {
    /// A zero-length vector was asked for a direction it does not have
    #[error("zero-length vector cannot be normalized")]
    ZeroLengthVector,

    /// The two independently supplied radius estimates disagree
    #[error("inconsistent radius: axis gives {from_axis}, reference city gives {from_city}")]
    InconsistentRadius {
        /// Radius implied by the axis vector's half-length
        from_axis: f64,
        /// Distance from the center to the reference city
        from_city: f64,
    },

    /// An inclination outside the open interval (0, π)
    #[error("inclination {0} rad is outside the open interval (0, π); the tangent frame is undefined at the poles")]
    InvalidInclination(f64),
}

/// Result type for stationfield operations
pub type Result<T> = std::result::Result<T, StationfieldError>;
