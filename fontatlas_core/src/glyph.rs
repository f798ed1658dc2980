//! Rasterized glyph types and the font engine seam.

/// A character code as reported by the font's character map.
///
/// Usually a Unicode scalar value, but symbol fonts may map codes that are
/// not valid `char`s, so this stays a plain integer.
pub type Codepoint = u32;

/// Coverage bitmap and metrics for a glyph with visible ink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphBitmap {
    pub width: u32,
    pub height: u32,
    /// Bytes per coverage row. Always `>= width`.
    pub pitch: u32,
    /// Horizontal offset from the pen position to the bitmap's left edge.
    pub left: i32,
    /// Vertical offset from the baseline up to the bitmap's top edge.
    pub top: i32,
    /// Horizontal pen movement in whole pixels.
    pub advance: i32,
    /// Row-major coverage, `pitch * height` bytes (0 = background, 255 = ink).
    pub coverage: Vec<u8>,
}

impl GlyphBitmap {
    /// Build a tightly packed bitmap (`pitch == width`).
    pub fn new(width: u32, height: u32, left: i32, top: i32, advance: i32, coverage: Vec<u8>) -> Self {
        debug_assert_eq!(
            coverage.len(),
            width as usize * height as usize,
            "coverage length must match dimensions",
        );
        Self {
            width,
            height,
            pitch: width,
            left,
            top,
            advance,
            coverage,
        }
    }

    /// Coverage byte at local `(x, y)`.
    pub fn coverage_at(&self, x: u32, y: u32) -> u8 {
        self.coverage[(y * self.pitch + x) as usize]
    }
}

/// Outcome of rasterizing one codepoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Raster {
    /// The glyph produced coverage and needs atlas space.
    Bitmap(GlyphBitmap),
    /// Zero-area coverage (space, tab, ...). Only the advance matters.
    Whitespace { advance: i32 },
}

impl Raster {
    /// Classify a rendered image: zero width or height means whitespace.
    pub fn from_bitmap(bitmap: GlyphBitmap) -> Self {
        if bitmap.width == 0 || bitmap.height == 0 {
            Self::Whitespace {
                advance: bitmap.advance,
            }
        } else {
            Self::Bitmap(bitmap)
        }
    }

    pub fn advance(&self) -> i32 {
        match self {
            Self::Bitmap(b) => b.advance,
            Self::Whitespace { advance } => *advance,
        }
    }
}

/// A loaded font at a fixed pixel size.
///
/// Implemented by the font engine in the application crate and by fakes in
/// tests. All queries happen on one thread in enumeration order.
pub trait GlyphSource {
    /// Codepoints in character-map traversal order. May contain duplicates.
    fn charmap(&self) -> Vec<Codepoint>;

    /// Rasterize a codepoint. `None` means the rasterizer failed and the
    /// codepoint is dropped from the output entirely.
    fn rasterize(&mut self, codepoint: Codepoint) -> Option<Raster>;

    /// Default-mode horizontal kerning between two codepoints, in pixels.
    fn kerning(&self, first: Codepoint, second: Codepoint) -> i32;

    /// Whether `first` can begin any non-zero kerning pair.
    ///
    /// Lets the table builder skip whole rows. Returning `true` is always
    /// correct; returning `false` for a codepoint that does kern is a bug.
    fn may_kern_first(&self, _first: Codepoint) -> bool {
        true
    }

    /// Whether the font carries kerning data at all.
    fn has_kerning(&self) -> bool;

    /// Height of one line of text in pixels.
    fn line_height(&self) -> i32;
}
