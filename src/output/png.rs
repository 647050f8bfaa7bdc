use super::OutputSink;
use anyhow::{Context, Result};
use image::{DynamicImage, ImageFormat};
use std::fs::File;
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// PNG file on disk. The format is PNG whatever the file extension says.
pub struct PngFile {
    path: PathBuf,
}

impl PngFile {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Encode into memory so a failed encode never leaves a partial file
    fn encode(image: &DynamicImage) -> Result<Vec<u8>> {
        let mut buf = Cursor::new(Vec::new());
        image
            .write_to(&mut buf, ImageFormat::Png)
            .context("Failed to encode PNG")?;
        Ok(buf.into_inner())
    }
}

/// Write `path` through a temporary file in the same directory that is
/// renamed into place only once `fill` succeeds. On any failure the
/// temporary file is removed and `path` is left as it was.
fn write_atomically<F>(path: &Path, fill: F) -> Result<()>
where
    F: FnOnce(&mut File) -> std::io::Result<()>,
{
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).with_context(|| {
        format!(
            "Failed to write {}: cannot stage a file in {}",
            path.display(),
            dir.display()
        )
    })?;
    tracing::debug!("Staging output at {}", tmp.path().display());

    fill(tmp.as_file_mut())
        .and_then(|()| tmp.as_file_mut().flush())
        .with_context(|| format!("Failed to write {}", path.display()))?;

    tmp.persist(path)
        .map_err(|e| e.error)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(())
}

impl OutputSink for PngFile {
    fn write_image(&mut self, image: &DynamicImage) -> Result<()> {
        let _span = tracing::debug_span!("encode").entered();

        let bytes = Self::encode(image)?;
        tracing::debug!("Encoded {} bytes of PNG", bytes.len());

        write_atomically(&self.path, |file| file.write_all(&bytes))
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
