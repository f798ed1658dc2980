//! Output writers for the atlas PNG and the metadata document.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use fontatlas_core::{Atlas, FontMetadata};
use image::RgbaImage;
use image::codecs::png::PngEncoder;

use crate::error::OutputError;

/// Encode `atlas` as an RGBA8 PNG at `path`.
///
/// Pixels are written as-is, premultiplied alpha included.
pub fn write_png(path: &Path, atlas: Atlas) -> Result<(), OutputError> {
    let (width, height) = (atlas.width(), atlas.height());
    let pixels = atlas.into_pixels();
    let len = pixels.len();
    let img = RgbaImage::from_raw(width, height, pixels)
        .ok_or(OutputError::BufferSize { width, height, len })?;

    let write_err = |source| OutputError::Write {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(write_err)?;
    let mut writer = BufWriter::new(file);
    img.write_with_encoder(PngEncoder::new(&mut writer))
        .map_err(|source| OutputError::Encode {
            path: path.to_path_buf(),
            source,
        })?;
    writer.flush().map_err(write_err)?;

    log::info!("output: wrote {width}x{height} atlas to {}", path.display());
    Ok(())
}

/// Serialize `metadata` as JSON at `path`.
pub fn write_metadata(path: &Path, metadata: &FontMetadata) -> Result<(), OutputError> {
    let json = metadata.to_json_pretty().map_err(OutputError::Metadata)?;
    std::fs::write(path, json).map_err(|source| OutputError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!(
        "output: wrote metadata for {} glyphs to {}",
        metadata.glyphs.len(),
        path.display()
    );
    Ok(())
}
