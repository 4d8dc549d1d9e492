//! Spherical celestial bodies
//!
//! A [`Planet`] is a sphere with a rotation axis and a designated reference
//! city on its surface. Construction cross-checks the two independently
//! supplied radius estimates and derives the planet's own right-handed basis:
//! the normalized axis, the equatorial direction, and the azimuth-zero
//! reference every station on the planet measures its azimuth from.

use crate::constants::RADIUS_TOLERANCE;
use crate::coordinates::{Direction, Point};
use crate::{Result, StationfieldError};
use log::debug;

/// A sphere in 3-space with a rotation axis and a reference ground location
///
/// Immutable after construction: all fields are derived and validated once
/// in [`Planet::new`] and only read thereafter, so a `Planet` can be shared
/// freely between threads.
#[derive(Debug, Clone)]
pub struct Planet {
    center: Point,
    axis: Direction,
    city_ref: Point,
    radius: f64,
    equatorial: Direction,
    azimuth_reference: Direction,
}

impl Planet {
    /// Builds a planet from its center, axis vector, and reference city
    ///
    /// The axis vector's magnitude is meaningful: half of it is the sphere's
    /// radius. That estimate must agree, within
    /// [`RADIUS_TOLERANCE`](crate::constants::RADIUS_TOLERANCE), with the
    /// distance from `center` to `city_ref`, or construction fails with
    /// [`StationfieldError::InconsistentRadius`].
    ///
    /// The azimuth reference is derived by two cross products:
    /// `equatorial = axis × center_to_city` followed by
    /// `azimuth_reference = equatorial × axis`. Both lie in the equatorial
    /// plane, and the second points toward the meridian containing
    /// `city_ref` without assuming `center_to_city` is itself exactly
    /// perpendicular to the axis. The construction degenerates (and fails
    /// with [`StationfieldError::ZeroLengthVector`]) only when the axis and
    /// `center_to_city` are parallel, i.e. when the reference city sits on a
    /// pole.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stationfield::{Direction, Planet, Point};
    ///
    /// let planet = Planet::new(
    ///     Point::new(0.0, 0.0, 0.0),
    ///     Direction::new(0.0, 0.0, 2.0),
    ///     Point::new(1.0, 0.0, 0.0),
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(planet.radius(), 1.0);
    /// assert_eq!(planet.axis(), Direction::new(0.0, 0.0, 1.0));
    /// ```
    pub fn new(center: Point, axis: Direction, city_ref: Point) -> Result<Planet> {
        // Two independent radius estimates must agree
        let from_axis = axis.magnitude() / 2.0;
        let from_city = (city_ref - center).magnitude();

        if (from_axis - from_city).abs() > RADIUS_TOLERANCE {
            return Err(StationfieldError::InconsistentRadius {
                from_axis,
                from_city,
            });
        }

        let axis = axis.normalize()?;
        let center_to_city = (city_ref - center).normalize()?;

        // Perpendicular to the axis and to the meridian plane of the city
        let equatorial = axis.cross(&center_to_city).normalize()?;
        // In the equatorial plane, toward the meridian of the city
        let azimuth_reference = equatorial.cross(&axis).normalize()?;

        debug!(
            "planet constructed: radius={}, axis={}, azimuth_reference={}",
            from_axis, axis, azimuth_reference
        );

        Ok(Planet {
            center,
            axis,
            city_ref,
            radius: from_axis,
            equatorial,
            azimuth_reference,
        })
    }

    /// The sphere's center
    pub fn center(&self) -> Point {
        self.center
    }

    /// Unit vector along the rotation axis, from south to north pole
    pub fn axis(&self) -> Direction {
        self.axis
    }

    /// The reference city on the surface
    pub fn city_ref(&self) -> Point {
        self.city_ref
    }

    /// Sphere radius
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Unit vector in the equatorial plane, perpendicular to the meridian
    /// plane of the reference city
    pub fn equatorial(&self) -> Direction {
        self.equatorial
    }

    /// Unit vector in the equatorial plane pointing toward the meridian of
    /// the reference city; azimuth zero for every station on this planet
    pub fn azimuth_reference(&self) -> Direction {
        self.azimuth_reference
    }
}
