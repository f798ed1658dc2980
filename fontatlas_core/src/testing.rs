//! In-memory `GlyphSource` for unit tests.

use std::cell::Cell;
use std::collections::{HashMap, HashSet};

use crate::glyph::{Codepoint, GlyphBitmap, GlyphSource, Raster};

/// Scripted font: each codepoint maps to a fixed raster (or a failure).
#[derive(Debug, Default)]
pub(crate) struct FakeFont {
    pub(crate) entries: Vec<(Codepoint, Option<Raster>)>,
    pub(crate) kerning: HashMap<(Codepoint, Codepoint), i32>,
    pub(crate) has_kerning: bool,
    pub(crate) line_height: i32,
    pub(crate) rasterize_calls: usize,
    /// When set, only these codepoints report `may_kern_first`.
    pub(crate) kern_firsts: Option<HashSet<Codepoint>>,
    pub(crate) kerning_calls: Cell<usize>,
}

impl FakeFont {
    pub(crate) fn new() -> Self {
        Self {
            line_height: 16,
            ..Self::default()
        }
    }

    /// Add a solid glyph of the given size (coverage 255 everywhere).
    pub(crate) fn glyph(mut self, cp: Codepoint, width: u32, height: u32) -> Self {
        let coverage = vec![255; (width * height) as usize];
        let bmp = GlyphBitmap::new(width, height, 1, height as i32, width as i32 + 1, coverage);
        self.entries.push((cp, Some(Raster::Bitmap(bmp))));
        self
    }

    pub(crate) fn bitmap(mut self, cp: Codepoint, bmp: GlyphBitmap) -> Self {
        self.entries.push((cp, Some(Raster::Bitmap(bmp))));
        self
    }

    pub(crate) fn whitespace(mut self, cp: Codepoint, advance: i32) -> Self {
        self.entries.push((cp, Some(Raster::Whitespace { advance })));
        self
    }

    pub(crate) fn broken(mut self, cp: Codepoint) -> Self {
        self.entries.push((cp, None));
        self
    }

    pub(crate) fn kern(mut self, first: Codepoint, second: Codepoint, value: i32) -> Self {
        self.has_kerning = true;
        self.kerning.insert((first, second), value);
        self
    }
}

impl GlyphSource for FakeFont {
    fn charmap(&self) -> Vec<Codepoint> {
        self.entries.iter().map(|(cp, _)| *cp).collect()
    }

    fn rasterize(&mut self, codepoint: Codepoint) -> Option<Raster> {
        self.rasterize_calls += 1;
        self.entries
            .iter()
            .find(|(cp, _)| *cp == codepoint)
            .and_then(|(_, r)| r.clone())
    }

    fn kerning(&self, first: Codepoint, second: Codepoint) -> i32 {
        self.kerning_calls.set(self.kerning_calls.get() + 1);
        self.kerning.get(&(first, second)).copied().unwrap_or(0)
    }

    fn may_kern_first(&self, first: Codepoint) -> bool {
        self.kern_firsts.as_ref().is_none_or(|firsts| firsts.contains(&first))
    }

    fn has_kerning(&self) -> bool {
        self.has_kerning
    }

    fn line_height(&self) -> i32 {
        self.line_height
    }
}
