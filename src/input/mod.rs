mod file;

pub use file::FileSource;

use anyhow::Result;
use image::RgbaImage;

/// Trait for image sources
pub trait ImageSource {
    /// Decode the image as 8-bit RGBA
    fn load(&mut self) -> Result<RgbaImage>;

    /// Human-readable name of the source, used in messages
    fn describe(&self) -> String;
}
