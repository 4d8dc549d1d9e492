//! # Direction Module
//!
//! A free vector in 3-space: three `f64` components with no anchor position.
//! Directions carry displacements, surface normals, and frame axes
//! throughout the crate.
//!
//! ## Design Notes
//!
//! - All operations are pure and return new values; nothing mutates in
//!   place.
//! - [`normalize`](Direction::normalize) is fallible: a zero-length vector
//!   has no direction, and asking for one is reported as
//!   [`StationfieldError::ZeroLengthVector`]. The cutoff is exact zero;
//!   tiny but nonzero vectors normalize successfully.
//! - [`cross`](Direction::cross) returns the raw, non-normalized product.
//!   Callers normalize explicitly where a unit vector is required.
//!
//! ## Examples
//!
//! ```rust
//! use stationfield::coordinates::Direction;
//!
//! let v = Direction::new(3.0, 4.0, 0.0);
//! assert_eq!(v.magnitude(), 5.0);
//!
//! let unit = v.normalize().unwrap();
//! assert!((unit.magnitude() - 1.0).abs() < 1e-15);
//!
//! // Zero-length vectors have no direction
//! assert!(Direction::new(0.0, 0.0, 0.0).normalize().is_err());
//! ```

use crate::{Result, StationfieldError};
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// A free vector in 3-space
///
/// Represents displacements and axes rather than positions; see
/// [`Point`](super::Point) for the anchored counterpart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Direction {
    /// X-component
    pub x: f64,
    /// Y-component
    pub y: f64,
    /// Z-component
    pub z: f64,
}

impl Direction {
    /// Creates a new direction from its three components
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Direction { x, y, z }
    }

    /// Euclidean norm of the vector
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stationfield::coordinates::Direction;
    ///
    /// assert_eq!(Direction::new(3.0, 4.0, 0.0).magnitude(), 5.0);
    /// assert_eq!(Direction::new(0.0, 0.0, 0.0).magnitude(), 0.0);
    /// ```
    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Returns a unit-length copy pointing the same way
    ///
    /// Fails with [`StationfieldError::ZeroLengthVector`] when the magnitude
    /// is exactly zero. Normalization is idempotent: normalizing an already
    /// unit-length vector returns it unchanged up to floating-point error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stationfield::coordinates::Direction;
    ///
    /// let unit = Direction::new(0.0, 0.0, 2.0).normalize().unwrap();
    /// assert_eq!(unit, Direction::new(0.0, 0.0, 1.0));
    /// ```
    pub fn normalize(&self) -> Result<Direction> {
        let mag = self.magnitude();
        if mag == 0.0 {
            return Err(StationfieldError::ZeroLengthVector);
        }
        Ok(Direction {
            x: self.x / mag,
            y: self.y / mag,
            z: self.z / mag,
        })
    }

    /// Dot product with another direction
    ///
    /// For unit vectors this is the cosine of the angle between them; a
    /// value of zero means the two are perpendicular.
    pub fn dot(&self, other: &Direction) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product with another direction
    ///
    /// Returns the standard right-handed cross product as a new,
    /// non-normalized direction perpendicular to both operands. The result
    /// is the zero vector when the operands are parallel.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stationfield::coordinates::Direction;
    ///
    /// let x = Direction::new(1.0, 0.0, 0.0);
    /// let y = Direction::new(0.0, 1.0, 0.0);
    /// assert_eq!(x.cross(&y), Direction::new(0.0, 0.0, 1.0));
    /// ```
    pub fn cross(&self, other: &Direction) -> Direction {
        Direction {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Converts to nalgebra `Vector3` for linear algebra operations
    pub fn to_vector3(&self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Creates from nalgebra `Vector3`
    pub fn from_vector3(vec: Vector3<f64>) -> Self {
        Direction {
            x: vec.x,
            y: vec.y,
            z: vec.z,
        }
    }
}

// Arithmetic operations for convenience
impl std::ops::Add for Direction {
    type Output = Direction;

    fn add(self, other: Direction) -> Direction {
        Direction {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl std::ops::Sub for Direction {
    type Output = Direction;

    fn sub(self, other: Direction) -> Direction {
        Direction {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

impl std::ops::Mul<f64> for Direction {
    type Output = Direction;

    fn mul(self, scalar: f64) -> Direction {
        Direction {
            x: self.x * scalar,
            y: self.y * scalar,
            z: self.z * scalar,
        }
    }
}

impl std::ops::Div<f64> for Direction {
    type Output = Direction;

    fn div(self, scalar: f64) -> Direction {
        Direction {
            x: self.x / scalar,
            y: self.y / scalar,
            z: self.z / scalar,
        }
    }
}

impl std::ops::Neg for Direction {
    type Output = Direction;

    fn neg(self) -> Direction {
        Direction {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}
