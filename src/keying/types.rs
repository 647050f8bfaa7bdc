use image::{GrayImage, Luma, Rgba};

/// A single RGBA pixel as produced by the decoder
pub type Pixel = Rgba<u8>;

/// Threshold compared against the summed channel distance.
/// Negative values are allowed and match nothing.
pub type Tolerance = i64;

/// Tolerance used when none is given on the command line
pub const DEFAULT_TOLERANCE: Tolerance = 60;

/// Replacement written over every background pixel
pub const TRANSPARENT: Pixel = Rgba([255, 255, 255, 0]);

/// Color to key out. Channels are not range checked: anything outside
/// 0..=255 simply shifts the distance arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetColor {
    pub r: i64,
    pub g: i64,
    pub b: i64,
}

impl TargetColor {
    /// Pure green, the classic green-screen key
    pub const GREEN: Self = Self::new(0, 255, 0);

    pub const fn new(r: i64, g: i64, b: i64) -> Self {
        Self { r, g, b }
    }
}

impl Default for TargetColor {
    fn default() -> Self {
        Self::GREEN
    }
}

impl std::fmt::Display for TargetColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{},{}", self.r, self.g, self.b)
    }
}

/// Per-pixel classification: `true` = background, `false` = keep.
/// Flattened in row-major order, same length as the pixel buffer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Matte(pub Vec<bool>);

impl Matte {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of pixels classified as background
    pub fn background_count(&self) -> usize {
        self.0.iter().filter(|&&bg| bg).count()
    }

    /// Render as a grayscale image for visualization (255 = background)
    pub fn to_luma(&self, width: u32, height: u32) -> GrayImage {
        GrayImage::from_fn(width, height, |x, y| {
            let idx = (y * width + x) as usize;
            let value = if self.0[idx] { 255 } else { 0 };
            Luma([value])
        })
    }
}

