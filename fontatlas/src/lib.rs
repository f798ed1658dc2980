//! Bake a TrueType/OpenType font into a bitmap font atlas.
//!
//! A run loads the font, enumerates its character map, extracts kerning,
//! packs every rendered glyph into one power-of-two-tall RGBA atlas and
//! writes two artifacts: the atlas PNG and a JSON metadata document.

pub mod cli;
pub mod config;
pub mod error;
pub mod font;
pub mod output;

use fontatlas_core::{
    FontMetadata, GlyphSource, build_atlas, build_kerning_table, enumerate_codepoints,
};

pub use config::Job;
pub use error::Error;

use font::{FontData, FontFace};

/// What a finished run produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub width: u32,
    pub height: u32,
    pub glyphs: usize,
    pub whitespaces: usize,
    pub kerning_pairs: usize,
}

/// Execute one job end to end.
pub fn run(job: &Job) -> Result<Summary, Error> {
    job.validate()?;
    let data = FontData::read(&job.font_path)?;

    // The face only lives for this block; every font query, line height
    // included, happens before it is dropped.
    let (metadata, atlas) = {
        let mut face = FontFace::new(&data, job.face_index, job.pixel_size())?;
        let codepoints = enumerate_codepoints(&face);
        let kerning = build_kerning_table(&face, &codepoints);
        let (layout, atlas) = build_atlas(&mut face, &codepoints, job.bitmap_width, job.color)?;
        let kerning = face.has_kerning().then_some(kerning);
        (FontMetadata::new(face.line_height(), &layout, kerning), atlas)
    };

    let summary = Summary {
        width: atlas.width(),
        height: atlas.height(),
        glyphs: metadata.glyphs.len(),
        whitespaces: metadata.whitespaces.len(),
        kerning_pairs: metadata.kerning_pairs.as_ref().map_or(0, Vec::len),
    };

    output::write_png(&job.bitmap_path, atlas)?;
    output::write_metadata(&job.metadata_path, &metadata)?;
    Ok(summary)
}
