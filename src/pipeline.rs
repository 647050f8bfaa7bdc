use crate::error::KeyError;
use crate::input::{FileSource, ImageSource};
use crate::keying::BackgroundKey;
use crate::output::{OutputSink, PngFile};
use image::DynamicImage;
use std::path::Path;
use std::time::{Duration, Instant};

/// What a successful run did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub width: u32,
    pub height: u32,
    pub elapsed: Duration,
}

/// Decode `input`, key out its background and write the result as PNG
/// to `output`. With `show_matte` the classification mask is written
/// instead of the keyed image.
pub fn process_file<K: BackgroundKey>(
    input: &Path,
    output: &Path,
    key: &K,
    show_matte: bool,
) -> Result<Summary, KeyError> {
    let mut source = FileSource::new(input);
    let mut sink = PngFile::new(output);
    tracing::debug!("Keying {} -> {}", source.describe(), sink.describe());

    let start = Instant::now();

    let frame = source
        .load()
        .map_err(|e| KeyError::Decode {
            path: input.to_path_buf(),
            source: e,
        })?;
    let (width, height) = frame.dimensions();
    let decode_time = start.elapsed();

    let key_start = Instant::now();
    let result = if show_matte {
        let matte = key.matte(&frame);
        tracing::debug!("{} of {} pixels are background", matte.background_count(), matte.len());
        DynamicImage::ImageLuma8(matte.to_luma(width, height))
    } else {
        DynamicImage::ImageRgba8(key.key(&frame))
    };
    drop(frame);
    let key_time = key_start.elapsed();

    let encode_start = Instant::now();
    sink.write_image(&result).map_err(|e| KeyError::Encode {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        source: e,
    })?;
    let encode_time = encode_start.elapsed();

    tracing::debug!(
        "decode={:.1}ms, key={:.1}ms, encode={:.1}ms",
        decode_time.as_secs_f64() * 1000.0,
        key_time.as_secs_f64() * 1000.0,
        encode_time.as_secs_f64() * 1000.0
    );

    Ok(Summary {
        width,
        height,
        elapsed: start.elapsed(),
    })
}
