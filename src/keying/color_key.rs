use super::classify::{classify, classify_and_composite};
use super::types::{Matte, Pixel, TargetColor, Tolerance, DEFAULT_TOLERANCE};
use super::BackgroundKey;
use image::RgbaImage;

/// Hard color key: every pixel within `tolerance` of `target` (summed
/// absolute RGB difference) is background.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorKey {
    target: TargetColor,
    tolerance: Tolerance,
}

impl ColorKey {
    pub fn new(target: TargetColor, tolerance: Tolerance) -> Self {
        Self { target, tolerance }
    }

    pub fn target(&self) -> TargetColor {
        self.target
    }

    pub fn tolerance(&self) -> Tolerance {
        self.tolerance
    }
}

impl Default for ColorKey {
    fn default() -> Self {
        Self::new(TargetColor::default(), DEFAULT_TOLERANCE)
    }
}

impl BackgroundKey for ColorKey {
    fn matte(&self, frame: &RgbaImage) -> Matte {
        let pixels: Vec<Pixel> = frame.pixels().copied().collect();
        classify(&pixels, self.target, self.tolerance)
    }

    fn key(&self, frame: &RgbaImage) -> RgbaImage {
        let _span = tracing::debug_span!("color_key", target = %self.target, tolerance = self.tolerance).entered();

        let pixels: Vec<Pixel> = frame.pixels().copied().collect();
        let keyed = classify_and_composite(&pixels, self.target, self.tolerance);

        // same length and order as the frame's pixels
        let (width, height) = frame.dimensions();
        let mut image = RgbaImage::new(width, height);
        for (dst, px) in image.pixels_mut().zip(keyed) {
            *dst = px;
        }
        image
    }
}
