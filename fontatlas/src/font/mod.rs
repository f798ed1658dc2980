//! Font engine: swash rasterization plus ttf-parser kerning lookup.
//!
//! `FontData` owns the raw file bytes; `FontFace` borrows them for the
//! duration of one bake, so dropping the face releases every engine
//! resource before the bytes go away.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use fontatlas_core::{Codepoint, GlyphBitmap, GlyphSource, Raster};
use rustybuzz::ttf_parser;
use swash::scale::{Render, ScaleContext, Source};
use swash::zeno::Format;
use swash::{FontRef, GlyphId};

use crate::error::FontError;

/// Raw bytes of a font file.
pub struct FontData {
    path: PathBuf,
    bytes: Vec<u8>,
}

impl FontData {
    pub fn read(path: &Path) -> Result<Self, FontError> {
        let bytes = std::fs::read(path).map_err(|source| FontError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("font: read {} ({} bytes)", path.display(), bytes.len());
        Ok(Self {
            path: path.to_path_buf(),
            bytes,
        })
    }

    pub fn from_bytes(path: impl Into<PathBuf>, bytes: Vec<u8>) -> Self {
        Self {
            path: path.into(),
            bytes,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// One face of a font at a fixed pixel size.
pub struct FontFace<'a> {
    font: FontRef<'a>,
    /// Same face parsed by ttf-parser, used for the legacy `kern` table.
    face: ttf_parser::Face<'a>,
    ppem: f32,
    scale_cx: ScaleContext,
    /// Character map in traversal order.
    charmap: Vec<Codepoint>,
    glyph_ids: HashMap<Codepoint, GlyphId>,
    /// Left glyph of every `kern` pair, when all subtables are pair lists.
    kern_lefts: Option<HashSet<GlyphId>>,
}

impl<'a> FontFace<'a> {
    /// Parse face `index` of `data` for rendering at `ppem` pixels per em.
    pub fn new(data: &'a FontData, index: u32, ppem: f32) -> Result<Self, FontError> {
        let parse_err = |reason: String| FontError::Parse {
            path: data.path.clone(),
            reason,
        };

        let font = FontRef::from_index(&data.bytes, index as usize)
            .ok_or_else(|| parse_err(format!("no font at face index {index}")))?;
        let face = ttf_parser::Face::parse(&data.bytes, index).map_err(|e| parse_err(e.to_string()))?;

        let mut charmap = Vec::new();
        let mut glyph_ids = HashMap::new();
        font.charmap().enumerate(|cp, glyph_id| {
            // Glyph 0 is .notdef: the code is not really mapped.
            if glyph_id != 0 {
                charmap.push(cp);
                glyph_ids.entry(cp).or_insert(glyph_id);
            }
        });

        log::info!(
            "font: face {index} of {}: {} mapped codepoints, {ppem}px/em, kern table: {}",
            data.path.display(),
            charmap.len(),
            face.tables().kern.is_some(),
        );

        let kern_lefts = kern_lefts(&face);
        Ok(Self {
            font,
            face,
            ppem,
            scale_cx: ScaleContext::new(),
            charmap,
            glyph_ids,
            kern_lefts,
        })
    }

    pub fn ppem(&self) -> f32 {
        self.ppem
    }

    fn advance(&self, glyph_id: GlyphId) -> i32 {
        self.font
            .glyph_metrics(&[])
            .scale(self.ppem)
            .advance_width(glyph_id)
            .round() as i32
    }

    /// Font units to whole pixels at the current size.
    fn units_to_px(&self, units: i32) -> i32 {
        let upem = f32::from(self.face.units_per_em());
        (units as f32 * self.ppem / upem).round() as i32
    }
}

impl GlyphSource for FontFace<'_> {
    fn charmap(&self) -> Vec<Codepoint> {
        self.charmap.clone()
    }

    fn rasterize(&mut self, codepoint: Codepoint) -> Option<Raster> {
        let glyph_id = *self.glyph_ids.get(&codepoint)?;
        let advance = self.advance(glyph_id);

        let mut scaler = self
            .scale_cx
            .builder(self.font)
            .size(self.ppem)
            .hint(true)
            .build();

        let Some(image) = Render::new(&[Source::Outline])
            .format(Format::Alpha)
            .render(&mut scaler, glyph_id)
        else {
            // No image: glyphs without contours (empty `glyf` entries have no
            // outline at all) are whitespace. Ink that failed to render is a
            // real failure.
            return match scaler.scale_outline(glyph_id) {
                Some(outline) if !outline.points().is_empty() => {
                    log::warn!("font: U+{codepoint:04X} has an outline but no image");
                    None
                }
                _ => Some(Raster::Whitespace { advance }),
            };
        };

        let p = image.placement;
        if image.data.len() != p.width as usize * p.height as usize {
            log::warn!(
                "font: U+{codepoint:04X} rendered {} bytes for {}x{}",
                image.data.len(),
                p.width,
                p.height
            );
            return None;
        }

        let bitmap = GlyphBitmap::new(p.width, p.height, p.left, p.top, advance, image.data);
        Some(Raster::from_bitmap(bitmap))
    }

    fn kerning(&self, first: Codepoint, second: Codepoint) -> i32 {
        let (Some(&left), Some(&right)) = (self.glyph_ids.get(&first), self.glyph_ids.get(&second))
        else {
            return 0;
        };
        let Some(kern) = self.face.tables().kern else {
            return 0;
        };

        let left = ttf_parser::GlyphId(left);
        let right = ttf_parser::GlyphId(right);
        let units: i32 = kern
            .subtables
            .into_iter()
            .filter(is_plain_horizontal)
            .filter_map(|st| st.glyphs_kerning(left, right))
            .map(i32::from)
            .sum();
        self.units_to_px(units)
    }

    fn may_kern_first(&self, first: Codepoint) -> bool {
        match &self.kern_lefts {
            Some(lefts) => self.glyph_ids.get(&first).is_some_and(|g| lefts.contains(g)),
            None => true,
        }
    }

    fn has_kerning(&self) -> bool {
        self.face.tables().kern.is_some()
    }

    fn line_height(&self) -> i32 {
        let m = self.font.metrics(&[]).scale(self.ppem);
        (m.ascent + m.descent.abs() + m.leading).round() as i32
    }
}

/// Subtables that apply to horizontal text in the default kerning mode.
fn is_plain_horizontal(st: &ttf_parser::kern::Subtable<'_>) -> bool {
    st.horizontal && !st.variable && !st.has_cross_stream
}

/// Collect left glyphs from format 0 pair lists. `None` when some subtable
/// uses a class-based format and cannot be enumerated.
fn kern_lefts(face: &ttf_parser::Face<'_>) -> Option<HashSet<GlyphId>> {
    let kern = face.tables().kern?;
    let mut lefts = HashSet::new();
    for st in kern.subtables.into_iter().filter(is_plain_horizontal) {
        match &st.format {
            ttf_parser::kern::Format::Format0(table) => {
                lefts.extend(table.pairs.into_iter().map(|pair| pair.left().0));
            }
            _ => return None,
        }
    }
    log::debug!("font: {} glyphs start kerning pairs", lefts.len());
    Some(lefts)
}
