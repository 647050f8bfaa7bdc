use super::ImageSource;
use anyhow::{Context, Result};
use image::{ImageReader, RgbaImage};
use std::path::{Path, PathBuf};

/// Image file on disk, in any format the `image` crate can decode
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl ImageSource for FileSource {
    fn load(&mut self) -> Result<RgbaImage> {
        let _span = tracing::debug_span!("decode").entered();

        tracing::debug!("Opening {}", self.path.display());

        let decoded = ImageReader::open(&self.path)
            .with_context(|| format!("Failed to open {}", self.path.display()))?
            .with_guessed_format()
            .context("Failed to read image header")?
            .decode()
            .with_context(|| format!("Failed to decode {}", self.path.display()))?;

        tracing::debug!(
            "Decoded {}x{} {:?}",
            decoded.width(),
            decoded.height(),
            decoded.color()
        );

        Ok(decoded.into_rgba8())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
