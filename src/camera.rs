//! Camera for ray generation and scene rendering

use image::{ImageBuffer, Rgb};
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use rayon::prelude::*;

use crate::hittable::Hittable;
use crate::interval::Interval;
use crate::ray::Ray;
use crate::shade::ray_color;
use crate::vec3::{Point3, Vec3};

/// Pinhole camera and render driver.
///
/// Owns the camera/viewport geometry and walks the image pixel by pixel,
/// building one primary ray per pixel center. Public fields configure the
/// camera; the derived viewport fields are computed once by `initialize`.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Ratio of image width over height
    pub aspect_ratio: f64,
    /// Rendered image width in pixel count
    pub image_width: u32,
    /// Distance from the camera center to the viewport plane
    pub focal_length: f64,
    /// Height of the viewport rectangle in world units
    pub viewport_height: f64,

    /// Rendered image height, derived from width and aspect ratio (at least 1)
    image_height: u32,
    /// Camera position in world space
    center: Point3,
    /// World position of the top-left pixel (pixel 0,0)
    pixel00_loc: Point3,
    /// Offset vector from pixel to pixel horizontally (right direction)
    pixel_delta_u: Vec3,
    /// Offset vector from pixel to pixel vertically (down direction)
    pixel_delta_v: Vec3,
    /// Flag to track whether camera parameters have been calculated
    initialized: bool,
}

impl Camera {
    /// Creates a new camera with default settings.
    ///
    /// Default: 400 pixels wide at 16:9, focal length 1, viewport height 2.
    pub fn new() -> Self {
        Self {
            aspect_ratio: 16.0 / 9.0,
            image_width: 400,
            focal_length: 1.0,
            viewport_height: 2.0,
            image_height: 0,
            center: Point3::ZERO,
            pixel00_loc: Point3::ZERO,
            pixel_delta_u: Vec3::ZERO,
            pixel_delta_v: Vec3::ZERO,
            initialized: false,
        }
    }

    /// Rendered image height in pixels, derived during initialization.
    pub fn image_height(&mut self) -> u32 {
        self.initialize();
        self.image_height
    }

    /// Renders the scene with one primary ray per pixel.
    ///
    /// Walks rows top to bottom and columns left to right, intersects each
    /// ray against the scene over the open interval (0, +inf), shades, and
    /// writes the color into the buffer in row-major order. Pixels are
    /// independent, so the work is distributed across CPU cores; each worker
    /// writes only its own pixel.
    ///
    /// Returns an image buffer with linear f32 RGB values in [0, 1].
    pub fn render(&mut self, world: &dyn Hittable) -> ImageBuffer<Rgb<f32>, Vec<f32>> {
        self.initialize();

        let mut image: ImageBuffer<Rgb<f32>, Vec<f32>> =
            ImageBuffer::new(self.image_width, self.image_height);

        info!(
            "Rendering {}x{} using {} CPU cores...",
            self.image_width,
            self.image_height,
            rayon::current_num_threads()
        );
        let generation_start = std::time::Instant::now();
        let pb = ProgressBar::new((self.image_width * self.image_height) as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{bar:40} {pos}/{len} ETA: {eta}")
                .unwrap(),
        );

        image.enumerate_pixels_mut().par_bridge().for_each(|(i, j, pixel)| {
            let ray = self.get_ray(i, j);
            let hit = world.hit(&ray, Interval::new(0.0, f64::INFINITY));
            let color = ray_color(&ray, hit.as_ref());
            *pixel = Rgb([color.x as f32, color.y as f32, color.z as f32]);
            pb.inc(1);
        });

        pb.finish();
        info!("Image generated in {:.2?}", generation_start.elapsed());

        image
    }

    /// Initialize camera parameters based on current settings.
    ///
    /// Derives the image height and the viewport geometry used for per-pixel
    /// ray generation.
    fn initialize(&mut self) {
        if self.initialized {
            return;
        }

        // Derive image height from the aspect ratio; never below one pixel.
        self.image_height = ((self.image_width as f64 / self.aspect_ratio) as u32).max(1);

        self.center = Point3::ZERO;

        // Viewport width follows the real aspect of the derived dimensions.
        let viewport_width =
            self.viewport_height * (self.image_width as f64 / self.image_height as f64);

        // Vectors across the horizontal and down the vertical viewport edges.
        let viewport_u = Vec3::new(viewport_width, 0.0, 0.0);
        let viewport_v = Vec3::new(0.0, -self.viewport_height, 0.0);

        // Horizontal and vertical delta vectors from pixel to pixel.
        self.pixel_delta_u = viewport_u / self.image_width as f64;
        self.pixel_delta_v = viewport_v / self.image_height as f64;

        // Location of the upper left pixel center.
        let viewport_upper_left = self.center
            - Vec3::new(0.0, 0.0, self.focal_length)
            - viewport_u / 2.0
            - viewport_v / 2.0;
        self.pixel00_loc = viewport_upper_left + 0.5 * (self.pixel_delta_u + self.pixel_delta_v);

        self.initialized = true;
    }

    /// Build the primary ray through the center of pixel (i, j).
    fn get_ray(&self, i: u32, j: u32) -> Ray {
        let pixel_center = self.pixel00_loc
            + (i as f64 * self.pixel_delta_u)
            + (j as f64 * self.pixel_delta_v);
        Ray::new(self.center, pixel_center - self.center)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}
