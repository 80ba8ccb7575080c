use clap::Parser;
use log::info;

mod cli;
mod logger;
mod output;

use cli::Args;
use logger::init_logger;
use output::{save_image_as_png, save_image_as_ppm};
use pixelray::camera::Camera;
use pixelray::hittable::HittableList;
use pixelray::sphere::Sphere;
use pixelray::vec3::Point3;

/// Create the default scene: a subject sphere in front of the camera and a
/// large ground sphere below it.
fn create_scene() -> HittableList {
    let mut world = HittableList::new();
    world.add(Box::new(Sphere::new(Point3::new(0.0, 0.0, -1.0), 0.5)));
    world.add(Box::new(Sphere::new(Point3::new(0.0, -100.5, -1.0), 100.0)));
    world
}

/// Create a camera from the command line settings.
fn create_camera(args: &Args) -> Camera {
    let mut camera = Camera::new();
    camera.aspect_ratio = args.aspect_ratio;
    camera.image_width = args.width;
    camera.focal_length = args.focal_length;
    camera.viewport_height = args.viewport_height;
    camera
}

fn main() {
    let args = Args::parse();

    init_logger(args.debug_level.into());

    info!(
        "PixelRay - Git Version {} ({})",
        env!("GIT_HASH"),
        env!("GIT_DATE")
    );

    let world = create_scene();
    let mut camera = create_camera(&args);

    let image = camera.render(&world);

    // Save image based on file extension
    if args.output.ends_with(".ppm") {
        save_image_as_ppm(&image, &args.output);
    } else if args.output.ends_with(".png") {
        save_image_as_png(&image, &args.output);
    } else {
        log::error!(
            "Unsupported file extension '{}'. Only .ppm and .png formats are supported.",
            std::path::Path::new(&args.output)
                .extension()
                .unwrap_or_default()
                .to_string_lossy()
        );
        std::process::exit(1);
    }
}
