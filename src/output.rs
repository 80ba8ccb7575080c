//! Image output in PPM and PNG formats.
//!
//! The renderer produces a linear f32 RGB buffer with values in [0, 1].
//! This module converts it to 8-bit channel values and serializes it either
//! as an ASCII "P3" PPM file or as a PNG via the `image` crate. Components
//! are clamped to [0, 1] before conversion, so out-of-range shading output
//! degrades to a saturated channel instead of an undefined byte value.

use std::fs::File;
use std::io::{self, BufWriter, Write};

use image::{ImageBuffer, Rgb};
use log::{info, warn};

use pixelray::interval::Interval;

/// Valid channel range for byte conversion.
const INTENSITY: Interval = Interval { min: 0.0, max: 1.0 };

/// Convert one [0, 1] channel component to a byte in [0, 255].
///
/// The 255.999 scale factor, rather than 256, guards against an input of
/// exactly 1.0 rounding up to 256.
fn component_to_byte(component: f32) -> u8 {
    (255.999 * INTENSITY.clamp(component as f64)) as u8
}

/// Write an f32 RGB image as ASCII PPM to the given writer.
///
/// Format: header line `P3`, a line `<width> <height>`, a line `255`, then
/// one `<r> <g> <b>` line per pixel in row-major order, top row first.
pub fn write_ppm<W: Write>(
    image: &ImageBuffer<Rgb<f32>, Vec<f32>>,
    writer: &mut W,
) -> io::Result<()> {
    let (width, height) = image.dimensions();
    writeln!(writer, "P3")?;
    writeln!(writer, "{} {}", width, height)?;
    writeln!(writer, "255")?;

    // enumerate_pixels iterates row-major, top row first
    for (_, _, pixel) in image.enumerate_pixels() {
        writeln!(
            writer,
            "{} {} {}",
            component_to_byte(pixel[0]),
            component_to_byte(pixel[1]),
            component_to_byte(pixel[2])
        )?;
    }

    Ok(())
}

/// Save an f32 RGB image as an ASCII PPM file.
///
/// I/O failures are logged as warnings; the render itself has already
/// completed by the time this is called.
pub fn save_image_as_ppm(image: &ImageBuffer<Rgb<f32>, Vec<f32>>, output_path: &str) {
    let result = File::create(output_path)
        .map(BufWriter::new)
        .and_then(|mut writer| {
            write_ppm(image, &mut writer)?;
            writer.flush()
        });

    match result {
        Ok(_) => info!("Image saved as {}", output_path),
        Err(e) => warn!("Failed to save image {}: {}", output_path, e),
    }
}

/// Save an f32 RGB image as an 8-bit PNG file.
///
/// Uses the same clamp-and-scale channel conversion as the PPM path; the
/// shader output is display-ready, so no tone mapping is applied.
pub fn save_image_as_png(image: &ImageBuffer<Rgb<f32>, Vec<f32>>, output_path: &str) {
    let (width, height) = image.dimensions();
    let u8_image: ImageBuffer<Rgb<u8>, Vec<u8>> = ImageBuffer::from_fn(width, height, |x, y| {
        let pixel = image.get_pixel(x, y);
        Rgb([
            component_to_byte(pixel[0]),
            component_to_byte(pixel[1]),
            component_to_byte(pixel[2]),
        ])
    });

    match u8_image.save(output_path) {
        Ok(_) => info!("Image saved as {}", output_path),
        Err(e) => warn!("Failed to save image {}: {}", output_path, e),
    }
}
