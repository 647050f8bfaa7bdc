mod classify;
mod color_key;
mod parse;
pub mod types;

pub use classify::{classify, classify_and_composite, color_distance, composite, is_background};
pub use color_key::ColorKey;
pub use parse::{parse_target_color, target_color_or_default, ColorParseError};
pub use types::{Matte, Pixel, TargetColor, Tolerance, DEFAULT_TOLERANCE, TRANSPARENT};

use image::RgbaImage;

/// Trait for background keyers
pub trait BackgroundKey {
    /// Classify a frame without modifying it
    fn matte(&self, frame: &RgbaImage) -> Matte;

    /// Replace the background pixels of a frame with [`TRANSPARENT`]
    fn key(&self, frame: &RgbaImage) -> RgbaImage;
}
