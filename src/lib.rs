//! PixelRay primary-ray tracer
//!
//! A single-pass geometric ray-tracing kernel: vector algebra, parametric
//! rays, a polymorphic hit-testable surface contract, closed-form sphere
//! intersection, and normal-visualization shading over a pinhole camera.

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod camera;
pub mod hittable;
pub mod interval;
pub mod ray;
pub mod shade;
pub mod sphere;
pub mod vec3;
