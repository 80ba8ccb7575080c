use clap::{Parser, ValueEnum};
use log::LevelFilter;

/// Custom enum for log levels that can be used with clap's ValueEnum
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convert our custom LogLevel enum to log crate's LevelFilter
impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Command line arguments structure using clap derive macros
#[derive(Parser)]
#[command(name = "pixelray")]
#[command(about = "A primary-ray sphere tracer")]
pub struct Args {
    /// Set the logging level (defaults to "info")
    #[arg(long, default_value = "info", help = "Set the logging level")]
    pub debug_level: LogLevel,

    /// Image width in pixels
    #[arg(long, short = 'w', default_value = "400", help = "Image width in pixels")]
    pub width: u32,

    /// Image aspect ratio (width over height)
    #[arg(long, default_value_t = 16.0 / 9.0, help = "Image aspect ratio (width over height)")]
    pub aspect_ratio: f64,

    /// Camera focal length in world units
    #[arg(long, default_value_t = 1.0, help = "Camera focal length in world units")]
    pub focal_length: f64,

    /// Viewport height in world units
    #[arg(long, default_value_t = 2.0, help = "Viewport height in world units")]
    pub viewport_height: f64,

    /// Output file path (.ppm for ASCII P3, .png for 8-bit PNG)
    #[arg(
        short,
        long,
        default_value = "image.ppm",
        help = "Output file path (.ppm for ASCII P3, .png for 8-bit PNG)"
    )]
    pub output: String,
}
