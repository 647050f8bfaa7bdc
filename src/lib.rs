//! Color-key background removal for still images.
//!
//! Pixels whose summed RGB distance to a target color is below a
//! tolerance become fully transparent; everything else is kept as is.

pub mod error;
pub mod input;
pub mod keying;
pub mod output;
pub mod pipeline;

pub use error::KeyError;
pub use keying::{classify_and_composite, BackgroundKey, ColorKey, TargetColor, Tolerance};
pub use pipeline::{process_file, Summary};
