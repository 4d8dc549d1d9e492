//! # Point Module
//!
//! An absolute position in 3-space. Points are plain value objects: three
//! `f64` coordinates, immutable once constructed, with no frame information
//! attached. Positions in this crate are always expressed in the single
//! planet-centered world frame.
//!
//! ## Subtraction Convention
//!
//! `a - b` is the componentwise difference `a.x - b.x, ...`: the free vector
//! that carries `b` to `a`. Equivalently, `b + (a - b) == a` for every pair
//! of points.
//!
//! ## Examples
//!
//! ```rust
//! use stationfield::coordinates::{Direction, Point};
//!
//! let center = Point::new(0.0, 0.0, 0.0);
//! let city = Point::new(1.0, 0.0, 0.0);
//!
//! // Vector from the center to the city
//! let center_to_city = city - center;
//! assert_eq!(center_to_city, Direction::new(1.0, 0.0, 0.0));
//! ```

use super::direction::Direction;
use nalgebra::Point3;
use serde::{Deserialize, Serialize};

/// An absolute position in 3-space
///
/// Supports `Point - Point -> Direction` (the vector carrying the right
/// operand to the left one) and `Point + Direction -> Point` (displacement).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// X-coordinate
    pub x: f64,
    /// Y-coordinate
    pub y: f64,
    /// Z-coordinate
    pub z: f64,
}

impl Point {
    /// Creates a new point from its three coordinates
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Point { x, y, z }
    }

    /// Euclidean distance to another point
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stationfield::coordinates::Point;
    ///
    /// let a = Point::new(0.0, 0.0, 0.0);
    /// let b = Point::new(3.0, 4.0, 0.0);
    /// assert_eq!(a.distance_to(&b), 5.0);
    /// ```
    pub fn distance_to(&self, other: &Point) -> f64 {
        (*self - *other).magnitude()
    }

    /// Converts to nalgebra `Point3` for linear algebra operations
    pub fn to_point3(&self) -> Point3<f64> {
        Point3::new(self.x, self.y, self.z)
    }

    /// Creates from nalgebra `Point3`
    pub fn from_point3(p: Point3<f64>) -> Self {
        Point {
            x: p.x,
            y: p.y,
            z: p.z,
        }
    }
}

impl std::ops::Sub for Point {
    type Output = Direction;

    fn sub(self, other: Point) -> Direction {
        Direction {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

impl std::ops::Add<Direction> for Point {
    type Output = Point;

    fn add(self, dir: Direction) -> Point {
        Point {
            x: self.x + dir.x,
            y: self.y + dir.y,
            z: self.z + dir.z,
        }
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}
