//! Ground stations and their local tangent frames
//!
//! A [`Station`] sits on a [`Planet`]'s surface at an inclination and an
//! azimuth and carries the orthonormal frame {i, j, k} of its local
//! horizon: k points radially outward, i and j span the tangent plane.
//! Directions convert between that frame and world coordinates with
//! [`Station::local_to_world`] and [`Station::world_to_local`].

use crate::constants::{DEG2RAD, RAD2DEG, TAU};
use crate::coordinates::{Direction, Point};
use crate::planet::Planet;
use crate::{Result, StationfieldError};
use log::debug;
use std::f64::consts::PI;

/// Wraps an azimuth into (-π, π]
fn wrap_azimuth(azimuth: f64) -> f64 {
    let wrapped = azimuth.rem_euclid(TAU);
    if wrapped > PI {
        wrapped - TAU
    } else {
        wrapped
    }
}

/// A point on a planet's surface plus its local orthonormal frame
///
/// Borrows the owning [`Planet`]; the planet is read during construction
/// and never mutated. Immutable after construction.
#[derive(Debug, Clone)]
pub struct Station<'a> {
    planet: &'a Planet,
    inclination: f64,
    azimuth: f64,
    position: Point,
    i: Direction,
    j: Direction,
    k: Direction,
}

impl<'a> Station<'a> {
    /// Places a station on `planet` at the given angles (radians)
    ///
    /// `inclination` is measured from the positive axis direction and must
    /// lie strictly inside (0, π): at the poles the tangent frame is
    /// undefined, and construction fails fast with
    /// [`StationfieldError::InvalidInclination`] instead of letting a
    /// zero-length cross product surface later. `azimuth` is measured from
    /// the planet's azimuth reference and is wrapped into (-π, π].
    ///
    /// The position is obtained by spherical-to-Cartesian conversion
    /// applied as world-frame offsets from the planet's center:
    ///
    /// ```text
    /// x = radius * sin(inclination) * sin(azimuth)
    /// y = radius * sin(inclination) * cos(azimuth)
    /// z = radius * cos(inclination)
    /// ```
    ///
    /// The offsets are not rotated by the planet's axis orientation, so
    /// placement is geometrically exact for planets whose axis is aligned
    /// with the world Z axis. The derived frame is:
    ///
    /// - `k`: outward unit normal (radial from the center)
    /// - `i`: unit tangent perpendicular to the axis and to k
    /// - `j`: unit tangent completing the triad (as implemented,
    ///   `i x j = -k`)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stationfield::{Direction, Planet, Point, Station};
    /// use std::f64::consts::PI;
    ///
    /// let planet = Planet::new(
    ///     Point::new(0.0, 0.0, 0.0),
    ///     Direction::new(0.0, 0.0, 2.0),
    ///     Point::new(1.0, 0.0, 0.0),
    /// )
    /// .unwrap();
    ///
    /// let station = Station::new(&planet, PI / 2.0, 0.0).unwrap();
    /// assert!((station.position().y - 1.0).abs() < 1e-12);
    /// ```
    pub fn new(planet: &'a Planet, inclination: f64, azimuth: f64) -> Result<Station<'a>> {
        if !(inclination > 0.0 && inclination < PI) {
            return Err(StationfieldError::InvalidInclination(inclination));
        }
        let azimuth = wrap_azimuth(azimuth);

        let radius = planet.radius();
        let offset = Direction::new(
            radius * inclination.sin() * azimuth.sin(),
            radius * inclination.sin() * azimuth.cos(),
            radius * inclination.cos(),
        );
        let position = planet.center() + offset;

        // Outward surface normal
        let k = (position - planet.center()).normalize()?;
        // Tangent, perpendicular to the axis and to k; collapses only when
        // k is parallel to the axis
        let i = planet.axis().cross(&k).normalize()?;
        // Completes the triad
        let j = i.cross(&k).normalize()?;

        debug!(
            "station placed: inclination={}, azimuth={}, position={}",
            inclination, azimuth, position
        );

        Ok(Station {
            planet,
            inclination,
            azimuth,
            position,
            i,
            j,
            k,
        })
    }

    /// Places a station from angles given in degrees
    pub fn from_degrees(
        planet: &'a Planet,
        inclination_deg: f64,
        azimuth_deg: f64,
    ) -> Result<Station<'a>> {
        Station::new(planet, inclination_deg * DEG2RAD, azimuth_deg * DEG2RAD)
    }

    /// The planet this station stands on
    pub fn planet(&self) -> &Planet {
        self.planet
    }

    /// Angle from the positive axis direction, in (0, π)
    pub fn inclination(&self) -> f64 {
        self.inclination
    }

    /// Angle from the planet's azimuth reference, wrapped into (-π, π]
    pub fn azimuth(&self) -> f64 {
        self.azimuth
    }

    /// Inclination in degrees
    pub fn inclination_degrees(&self) -> f64 {
        self.inclination * RAD2DEG
    }

    /// Azimuth in degrees
    pub fn azimuth_degrees(&self) -> f64 {
        self.azimuth * RAD2DEG
    }

    /// The station's location on the sphere
    pub fn position(&self) -> Point {
        self.position
    }

    /// Unit tangent perpendicular to the planet's axis and to k
    pub fn i(&self) -> Direction {
        self.i
    }

    /// Unit tangent completing the frame
    pub fn j(&self) -> Direction {
        self.j
    }

    /// Outward unit normal to the sphere at the station
    pub fn k(&self) -> Direction {
        self.k
    }

    /// Expresses a direction given in the station frame {i, j, k} in world
    /// coordinates
    pub fn local_to_world(&self, local: &Direction) -> Direction {
        self.i * local.x + self.j * local.y + self.k * local.z
    }

    /// Expresses a world-frame direction in the station frame {i, j, k}
    ///
    /// The frame is orthonormal, so the inverse transform is the plain
    /// projection onto each frame axis.
    pub fn world_to_local(&self, world: &Direction) -> Direction {
        Direction::new(self.i.dot(world), self.j.dot(world), self.k.dot(world))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    fn unit_planet() -> Planet {
        Planet::new(
            Point::new(0.0, 0.0, 0.0),
            Direction::new(0.0, 0.0, 2.0),
            Point::new(1.0, 0.0, 0.0),
        )
        .unwrap()
    }

    #[test]
    fn test_position_on_reference_meridian() {
        let planet = unit_planet();
        let station = Station::new(&planet, PI / 2.0, 0.0).unwrap();

        // sin(0) kills x, cos(0) keeps y, cos(π/2) kills z
        let pos = station.position();
        assert_relative_eq!(pos.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(pos.y, 1.0, epsilon = 1e-12);
        assert_relative_eq!(pos.z, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_position_quarter_turn() {
        let planet = unit_planet();
        let station = Station::new(&planet, PI / 2.0, PI / 2.0).unwrap();

        let pos = station.position();
        assert_relative_eq!(pos.x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(pos.y, 0.0, epsilon = 1e-12);
        assert_relative_eq!(pos.z, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_offset_from_displaced_center() {
        let planet = Planet::new(
            Point::new(5.0, -3.0, 2.0),
            Direction::new(0.0, 0.0, 4.0),
            Point::new(7.0, -3.0, 2.0),
        )
        .unwrap();
        let station = Station::new(&planet, PI / 2.0, 0.0).unwrap();

        let pos = station.position();
        assert_relative_eq!(pos.x, 5.0, epsilon = 1e-12);
        assert_relative_eq!(pos.y, -1.0, epsilon = 1e-12);
        assert_relative_eq!(pos.z, 2.0, epsilon = 1e-12);
    }

    #[rstest]
    #[case(PI / 2.0, 0.0)]
    #[case(PI / 4.0, 1.0)]
    #[case(3.0 * PI / 4.0, -2.5)]
    #[case(0.01, 3.0)]
    #[case(PI - 0.01, PI)]
    fn test_station_lies_on_sphere(#[case] inclination: f64, #[case] azimuth: f64) {
        let planet = unit_planet();
        let station = Station::new(&planet, inclination, azimuth).unwrap();

        let r = station.position().distance_to(&planet.center());
        assert_relative_eq!(r, planet.radius(), epsilon = 1e-12);
    }

    #[rstest]
    #[case(PI / 2.0, 0.0)]
    #[case(PI / 3.0, 2.0)]
    #[case(2.0 * PI / 3.0, -1.2)]
    fn test_frame_is_orthonormal(#[case] inclination: f64, #[case] azimuth: f64) {
        let planet = unit_planet();
        let station = Station::new(&planet, inclination, azimuth).unwrap();

        let (i, j, k) = (station.i(), station.j(), station.k());

        assert_relative_eq!(i.magnitude(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(j.magnitude(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(k.magnitude(), 1.0, epsilon = 1e-12);

        assert_relative_eq!(i.dot(&j), 0.0, epsilon = 1e-12);
        assert_relative_eq!(i.dot(&k), 0.0, epsilon = 1e-12);
        assert_relative_eq!(j.dot(&k), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_frame_concrete_values() {
        let planet = unit_planet();
        let station = Station::new(&planet, PI / 2.0, 0.0).unwrap();

        // k radially outward through (0, 1, 0)
        let k = station.k();
        assert_relative_eq!(k.y, 1.0, epsilon = 1e-12);

        // i = axis × k, j = i × k
        let i = station.i();
        assert_relative_eq!(i.x, -1.0, epsilon = 1e-12);
        let j = station.j();
        assert_relative_eq!(j.z, -1.0, epsilon = 1e-12);

        // Frame orientation as implemented
        let cross = i.cross(&j);
        assert_relative_eq!(cross.dot(&k), -1.0, epsilon = 1e-12);
    }

    #[rstest]
    #[case(0.0)]
    #[case(PI)]
    #[case(-0.3)]
    #[case(3.5)]
    fn test_pole_and_out_of_range_inclinations_rejected(#[case] inclination: f64) {
        let planet = unit_planet();
        let result = Station::new(&planet, inclination, 0.0);
        assert!(matches!(
            result,
            Err(StationfieldError::InvalidInclination(_))
        ));
    }

    #[test]
    fn test_azimuth_wrapping() {
        let planet = unit_planet();

        let wrapped = Station::new(&planet, PI / 2.0, 3.0 * PI / 2.0).unwrap();
        assert_relative_eq!(wrapped.azimuth(), -PI / 2.0, epsilon = 1e-12);

        let direct = Station::new(&planet, PI / 2.0, -PI / 2.0).unwrap();
        assert_relative_eq!(wrapped.position().x, direct.position().x, epsilon = 1e-12);
        assert_relative_eq!(wrapped.position().y, direct.position().y, epsilon = 1e-12);

        // -π lands on the closed end of (-π, π]
        let negative_pi = Station::new(&planet, PI / 2.0, -PI).unwrap();
        assert_relative_eq!(negative_pi.azimuth(), PI, epsilon = 1e-12);
    }

    #[test]
    fn test_from_degrees() {
        let planet = unit_planet();

        let deg = Station::from_degrees(&planet, 90.0, 0.0).unwrap();
        let rad = Station::new(&planet, PI / 2.0, 0.0).unwrap();

        assert_relative_eq!(deg.position().y, rad.position().y, epsilon = 1e-12);
        assert_relative_eq!(deg.inclination(), PI / 2.0, epsilon = 1e-15);
        assert_relative_eq!(deg.inclination_degrees(), 90.0, epsilon = 1e-12);
        assert_relative_eq!(deg.azimuth_degrees(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_frame_transforms() {
        let planet = unit_planet();
        let station = Station::new(&planet, PI / 3.0, 0.7).unwrap();

        // The frame axes map to the local basis vectors
        let up = station.world_to_local(&station.k());
        assert_relative_eq!(up.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(up.y, 0.0, epsilon = 1e-12);
        assert_relative_eq!(up.z, 1.0, epsilon = 1e-12);

        assert_relative_eq!(
            station.local_to_world(&Direction::new(1.0, 0.0, 0.0)).x,
            station.i().x,
            epsilon = 1e-15
        );

        // Round trip through the frame
        let world = Direction::new(0.3, -1.2, 2.0);
        let back = station.local_to_world(&station.world_to_local(&world));
        assert_relative_eq!(back.x, world.x, epsilon = 1e-12);
        assert_relative_eq!(back.y, world.y, epsilon = 1e-12);
        assert_relative_eq!(back.z, world.z, epsilon = 1e-12);
    }

    #[test]
    fn test_planet_shared_by_stations() {
        let planet = unit_planet();

        let a = Station::new(&planet, PI / 2.0, 0.0).unwrap();
        let b = Station::new(&planet, PI / 2.0, PI).unwrap();

        assert_eq!(a.planet().radius(), b.planet().radius());
        assert_relative_eq!(
            a.position().distance_to(&b.position()),
            2.0 * planet.radius(),
            epsilon = 1e-12
        );
    }
}
