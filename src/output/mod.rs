mod png;

pub use png::PngFile;

use anyhow::Result;
use image::DynamicImage;

/// Trait for output destinations
pub trait OutputSink {
    /// Write a finished image
    fn write_image(&mut self, image: &DynamicImage) -> Result<()>;

    /// Human-readable name of the destination, used in messages
    fn describe(&self) -> String;
}
