//! Ray-object intersection system.
//!
//! Defines the Hittable trait for geometric primitives, HitRecord for
//! intersection data, and HittableList for scenes of multiple objects.

use crate::interval::Interval;
use crate::ray::Ray;
use crate::vec3::{Point3, Vec3};

/// Ray-object intersection information.
///
/// Returned by a successful hit test; a failed test returns `None` instead,
/// so a record never carries stale data from a previous query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitRecord {
    /// Point where the ray intersects the object
    pub point: Point3,
    /// Surface normal at the intersection point (unit vector)
    pub normal: Vec3,
    /// Ray parameter at the intersection point
    pub t: f64,
}

/// Trait for objects that can be intersected by rays.
///
/// Core abstraction for geometric primitives: the renderer and shader depend
/// only on this contract, never on concrete surface types. Must be
/// thread-safe (Sync + Send) so scenes can be shared across render workers.
pub trait Hittable: Sync + Send {
    /// Test for ray intersection within the given parameter range.
    ///
    /// `ray_t` is an open interval: a root exactly equal to either bound is
    /// rejected. Returns the nearest valid intersection, or `None` when no
    /// root lies strictly inside the range. No intersection is a normal
    /// outcome, not an error.
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord>;
}

/// Collection of objects forming a scene.
///
/// Uses linear search for intersection testing. Supports polymorphic
/// objects through Box<dyn Hittable>.
#[derive(Default)]
pub struct HittableList {
    /// Vector of boxed hittable objects
    pub objects: Vec<Box<dyn Hittable>>,
}

impl HittableList {
    /// Create a new empty scene.
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
        }
    }

    /// Add an object to the scene.
    pub fn add(&mut self, object: Box<dyn Hittable>) {
        self.objects.push(object);
    }

    /// Clear all objects from the list
    pub fn clear(&mut self) {
        self.objects.clear();
    }
}

impl Hittable for HittableList {
    /// Return the globally nearest hit across all members.
    ///
    /// Narrows the interval maximum to the best t found so far, so later
    /// objects can only win by being strictly closer.
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord> {
        let mut closest_so_far = ray_t.max;
        let mut best_hit = None;

        for object in &self.objects {
            if let Some(rec) = object.hit(ray, Interval::new(ray_t.min, closest_so_far)) {
                closest_so_far = rec.t;
                best_hit = Some(rec);
            }
        }

        best_hit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sphere::Sphere;

    #[test]
    fn empty_list_never_hits() {
        let world = HittableList::new();
        let r = Ray::new(Point3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        assert!(world.hit(&r, Interval::new(0.0, f64::INFINITY)).is_none());
    }

    #[test]
    fn nearest_object_wins_regardless_of_insertion_order() {
        let r = Ray::new(Point3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        // Far sphere first, near sphere second.
        let mut world = HittableList::new();
        world.add(Box::new(Sphere::new(Point3::new(0.0, 0.0, -5.0), 0.5)));
        world.add(Box::new(Sphere::new(Point3::new(0.0, 0.0, -1.0), 0.5)));
        let rec = world
            .hit(&r, Interval::new(0.0, f64::INFINITY))
            .expect("ray down -z should hit both spheres");
        assert_eq!(rec.t, 0.5);

        // Same scene with insertion order reversed.
        let mut world = HittableList::new();
        world.add(Box::new(Sphere::new(Point3::new(0.0, 0.0, -1.0), 0.5)));
        world.add(Box::new(Sphere::new(Point3::new(0.0, 0.0, -5.0), 0.5)));
        let rec = world
            .hit(&r, Interval::new(0.0, f64::INFINITY))
            .expect("ray down -z should hit both spheres");
        assert_eq!(rec.t, 0.5);
    }

    #[test]
    fn clear_empties_the_scene() {
        let mut world = HittableList::new();
        world.add(Box::new(Sphere::new(Point3::new(0.0, 0.0, -1.0), 0.5)));
        world.clear();
        assert!(world.objects.is_empty());
    }
}
