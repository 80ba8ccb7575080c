//! Pixel shading rules.
//!
//! Maps a ray and its (possibly absent) intersection result to a color.
//! This is a normal-visualization shading model, not physically based
//! lighting: no materials, no secondary rays.

use crate::hittable::HitRecord;
use crate::ray::Ray;
use crate::vec3::Color;

/// Sky color at the top of the background gradient.
const SKY_BLUE: Color = Color::new(0.5, 0.7, 1.0);

/// Ground color at the bottom of the background gradient.
const WHITE: Color = Color::new(1.0, 1.0, 1.0);

/// Compute the color seen along a ray.
///
/// A valid hit in front of the ray origin is shaded from its surface normal,
/// mapped per axis from [-1, 1] to [0, 1] via 0.5 * (n + 1). Anything else
/// falls through to the background: a vertical gradient between white and
/// sky blue, blended on the normalized ray direction's y component.
///
/// Pure function of its inputs, no side effects.
pub fn ray_color(ray: &Ray, hit: Option<&HitRecord>) -> Color {
    if let Some(rec) = hit {
        if rec.t > 0.0 {
            let n = rec.normal;
            return 0.5 * Color::new(n.x + 1.0, n.y + 1.0, n.z + 1.0);
        }
    }

    // Background gradient: y = -1 (down) gives a = 0, y = 1 (up) gives a = 1.
    let unit_direction = ray.direction.unit();
    let a = 0.5 * (unit_direction.y + 1.0);
    (1.0 - a) * WHITE + a * SKY_BLUE
}
