//! Sphere primitive for ray tracing.
//!
//! Implements ray-sphere intersection using an optimized quadratic formula.

use crate::hittable::{HitRecord, Hittable};
use crate::interval::Interval;
use crate::ray::Ray;
use crate::vec3::Point3;

/// Sphere primitive defined by center and radius.
#[derive(Debug, Clone, Copy)]
pub struct Sphere {
    /// Center point of the sphere in world coordinates.
    pub center: Point3,

    /// Radius of the sphere (always non-negative).
    ///
    /// Negative radius values are clamped to 0.0 in the constructor.
    pub radius: f64,
}

impl Sphere {
    /// Create a new sphere.
    ///
    /// Negative radius values are clamped to 0.0.
    pub fn new(center: Point3, radius: f64) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
        }
    }
}

impl Hittable for Sphere {
    /// Solve |O + tD - C|^2 = r^2 for t.
    ///
    /// The quadratic a*t^2 + b*t + c = 0 is rewritten with the substitution
    /// b = -2h, so both roots become (h +- sqrt(h^2 - a*c)) / a with fewer
    /// operations than the general formula. Assumes the ray direction is not
    /// the zero vector (a != 0); callers must not pass degenerate rays.
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord> {
        let oc = self.center - ray.origin;
        let a = ray.direction.length_squared();
        let h = ray.direction.dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = h * h - a * c;
        if discriminant < 0.0 {
            return None;
        }

        // Find the nearest root that lies in the acceptable range,
        // preferring the closer (front-face) intersection.
        let sqrtd = discriminant.sqrt();
        let mut root = (h - sqrtd) / a;
        if !ray_t.surrounds(root) {
            root = (h + sqrtd) / a;
            if !ray_t.surrounds(root) {
                return None;
            }
        }

        let point = ray.at(root);
        // Unit length by construction: |point - center| = radius on the surface.
        // A zero-radius sphere degenerates to a tangency test against a point;
        // its normal is undefined, so the zero vector is reported instead of
        // dividing by zero.
        let outward = point - self.center;
        let normal = if self.radius > 0.0 {
            outward / self.radius
        } else {
            outward
        };
        Some(HitRecord {
            t: root,
            point,
            normal,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vec3::Vec3;

    fn unit_half_sphere() -> Sphere {
        Sphere::new(Point3::new(0.0, 0.0, -1.0), 0.5)
    }

    #[test]
    fn negative_radius_is_clamped_to_zero() {
        let s = Sphere::new(Point3::ZERO, -1.5);
        assert_eq!(s.radius, 0.0);
    }

    #[test]
    fn head_on_ray_hits() {
        let s = unit_half_sphere();
        let r = Ray::new(Point3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let rec = s
            .hit(&r, Interval::new(0.0, 1.0))
            .expect("head-on ray should hit");
        assert_eq!(rec.t, 0.5);
        assert_eq!(rec.point, Point3::new(0.0, 0.0, -0.5));
        // Front-face normal points back toward the ray origin.
        assert_eq!(rec.normal, Vec3::new(0.0, 0.0, 1.0));
        assert!((rec.normal.length() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn grazing_ray_hits() {
        let s = unit_half_sphere();
        let r = Ray::new(Point3::ZERO, Vec3::new(0.0, 0.5, -1.0));
        assert!(s.hit(&r, Interval::new(0.0, 5.0)).is_some());
    }

    #[test]
    fn steep_ray_misses() {
        let s = unit_half_sphere();
        let r = Ray::new(Point3::ZERO, Vec3::new(0.0, 0.6, -1.0));
        assert!(s.hit(&r, Interval::new(0.0, 5.0)).is_none());
    }

    #[test]
    fn sideways_ray_misses() {
        let s = unit_half_sphere();
        let r = Ray::new(Point3::ZERO, Vec3::new(10.0, 10.0, -1.0));
        assert!(s.hit(&r, Interval::new(0.0, 10.0)).is_none());
    }

    #[test]
    fn inverted_interval_rejects_everything() {
        let s = unit_half_sphere();
        let r = Ray::new(Point3::ZERO, Vec3::new(0.0, 0.0, 1.0));
        assert!(s.hit(&r, Interval::new(0.0, -1.0)).is_none());
    }

    #[test]
    fn roots_on_the_interval_bounds_are_rejected() {
        let s = unit_half_sphere();
        let r = Ray::new(Point3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        // Near root t = 0.5 equals the lower bound: rejected, the far root
        // t = 1.5 is taken instead.
        let rec = s.hit(&r, Interval::new(0.5, 2.0)).unwrap();
        assert_eq!(rec.t, 1.5);
        // Near root equals the upper bound and the far root is beyond it.
        assert!(s.hit(&r, Interval::new(0.0, 0.5)).is_none());
    }

    #[test]
    fn far_root_used_when_near_root_is_out_of_range() {
        // Ray starts inside the sphere: near root is behind the origin.
        let s = unit_half_sphere();
        let r = Ray::new(Point3::new(0.0, 0.0, -1.0), Vec3::new(0.0, 0.0, -1.0));
        let rec = s
            .hit(&r, Interval::new(0.0, f64::INFINITY))
            .expect("ray from the center should exit the sphere");
        assert_eq!(rec.t, 0.5);
        assert_eq!(rec.point, Point3::new(0.0, 0.0, -1.5));
    }

    #[test]
    fn zero_radius_sphere_is_well_defined() {
        let s = Sphere::new(Point3::new(0.0, 0.0, -1.0), 0.0);
        let r = Ray::new(Point3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        // Tangency against a point: the double root t = 1 is found and the
        // undefined normal is reported as the zero vector.
        let rec = s.hit(&r, Interval::new(0.0, 2.0)).unwrap();
        assert_eq!(rec.t, 1.0);
        assert_eq!(rec.normal, Vec3::ZERO);
    }

    #[test]
    fn sphere_behind_the_ray_misses() {
        let s = Sphere::new(Point3::new(0.0, 0.0, 1.0), 0.5);
        let r = Ray::new(Point3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        assert!(s.hit(&r, Interval::new(0.0, f64::INFINITY)).is_none());
    }
}
