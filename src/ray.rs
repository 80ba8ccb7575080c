//! Ray representation for 3D ray tracing.
//!
//! A ray is defined as r(t) = origin + t * direction. For intersection math
//! it is treated as a full line: `at` is valid for any real t, including
//! negative values, even though only t > 0 is meaningful physically.

use crate::vec3::{Point3, Vec3};

/// Ray in 3D space defined by origin and direction.
///
/// Mathematical representation: r(t) = origin + t * direction
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    /// Starting point of the ray in world coordinates, typically the camera
    /// position for primary rays.
    pub origin: Point3,

    /// Direction vector of the ray.
    ///
    /// Not required to be normalized. A zero direction is degenerate: it
    /// produces no valid intersections, and callers must not normalize it.
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray with origin and direction.
    pub fn new(origin: Point3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Compute a point at parameter t along the ray.
    ///
    /// Returns r(t) = origin + t * direction.
    pub fn at(&self, t: f64) -> Point3 {
        self.origin + t * self.direction
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stores_origin_and_direction() {
        let r = Ray::new(Point3::new(1.0, 2.0, 3.0), Vec3::new(0.0, 0.0, 1.0));
        assert_eq!(r.origin, Point3::new(1.0, 2.0, 3.0));
        assert_eq!(r.direction, Vec3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn at_walks_along_the_direction() {
        let r = Ray::new(Point3::new(0.0, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(r.at(2.5), Point3::new(2.5, 0.0, 0.0));

        let r = Ray::new(Point3::new(1.0, 1.0, 1.0), Vec3::new(-1.0, 0.0, 0.0));
        assert_eq!(r.at(1.0), Point3::new(0.0, 1.0, 1.0));
    }

    #[test]
    fn at_accepts_negative_parameters() {
        // The parametric form is a full line; t < 0 walks behind the origin.
        let r = Ray::new(Point3::new(-2.0, 0.0, 10.0), Vec3::new(0.0, -2.0, 0.0));
        assert_eq!(r.at(-3.0), Point3::new(-2.0, 6.0, 10.0));
    }

    #[test]
    fn at_with_zero_direction_stays_at_origin() {
        let r = Ray::new(Point3::ZERO, Vec3::ZERO);
        assert_eq!(r.at(1.0), Point3::ZERO);
    }
}
