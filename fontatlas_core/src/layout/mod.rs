//! Atlas layout engine: sizes the atlas, then places and composites glyphs.
//!
//! Layout runs in two passes over the same rasters. The sizing pass packs
//! glyph rectangles without touching pixels to find the atlas height (the
//! smallest power of two that holds every row). The placement pass replays
//! the identical packing into a buffer of that height, recording each
//! glyph's origin and compositing its coverage. Whitespace glyphs take no
//! space and are recorded with their advance only.

mod packer;

use std::fmt;

use serde::Serialize;

use crate::compositor::{Atlas, Color};
use crate::glyph::{Codepoint, GlyphBitmap, GlyphSource, Raster};

pub use packer::ShelfPacker;

/// A rendered glyph and the atlas rectangle it was packed into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacedGlyph {
    pub codepoint: Codepoint,
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    pub left_bearing: i32,
    pub top_bearing: i32,
    pub advance: i32,
}

impl PlacedGlyph {
    /// Whether the two atlas rectangles share any pixel.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.x < other.x + other.width
            && other.x < self.x + self.width
            && self.y < other.y + other.height
            && other.y < self.y + self.height
    }
}

/// A zero-area glyph: it moves the pen but occupies no atlas space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WhitespaceGlyph {
    pub codepoint: Codepoint,
    pub advance: i32,
}

/// Final atlas dimensions and per-glyph placement.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AtlasLayout {
    pub width: u32,
    pub height: u32,
    /// Rendered glyphs in enumeration order.
    pub glyphs: Vec<PlacedGlyph>,
    /// Whitespace glyphs in enumeration order.
    pub whitespaces: Vec<WhitespaceGlyph>,
}

/// Inputs the layout engine refuses to pack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// The configured atlas width is zero.
    ZeroWidth,
    /// A single glyph is wider than the whole atlas.
    GlyphTooWide {
        codepoint: Codepoint,
        width: u32,
        atlas_width: u32,
    },
    /// Packed content needs more rows than a `u32` power of two can hold.
    TooTall { content_height: u32 },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroWidth => write!(f, "atlas width must be greater than zero"),
            Self::GlyphTooWide {
                codepoint,
                width,
                atlas_width,
            } => write!(
                f,
                "glyph U+{codepoint:04X} is {width}px wide and cannot fit an atlas {atlas_width}px wide"
            ),
            Self::TooTall { content_height } => write!(
                f,
                "packed glyphs need {content_height}px of height, beyond the largest power of two"
            ),
        }
    }
}

impl std::error::Error for LayoutError {}

/// Sizing pass: smallest power-of-two height (at least 1) that fits every
/// bitmap in `rasters` when packed into rows of `width` pixels.
pub fn required_height(width: u32, rasters: &[(Codepoint, Raster)]) -> Result<u32, LayoutError> {
    if width == 0 {
        return Err(LayoutError::ZeroWidth);
    }

    let mut packer = ShelfPacker::new(width);
    for (cp, raster) in rasters {
        let Raster::Bitmap(bmp) = raster else {
            continue;
        };
        if bmp.width > width {
            return Err(LayoutError::GlyphTooWide {
                codepoint: *cp,
                width: bmp.width,
                atlas_width: width,
            });
        }
        packer.place(bmp.width, bmp.height);
    }

    let content_height = packer.content_height();
    content_height
        .checked_next_power_of_two()
        .ok_or(LayoutError::TooTall { content_height })
}

/// Lay out `rasters` without compositing any pixels.
pub fn layout_atlas(width: u32, rasters: &[(Codepoint, Raster)]) -> Result<AtlasLayout, LayoutError> {
    let height = required_height(width, rasters)?;
    Ok(place(width, height, rasters, |_, _, _| {}))
}

/// Rasterize `codepoints`, size the atlas, then place and composite every
/// glyph in `color`.
///
/// Each codepoint is rasterized once and reused by both passes. Codepoints
/// whose rasterization fails are left out of the layout entirely.
pub fn build_atlas<S: GlyphSource + ?Sized>(
    source: &mut S,
    codepoints: &[Codepoint],
    width: u32,
    color: Color,
) -> Result<(AtlasLayout, Atlas), LayoutError> {
    let rasters = rasterize_all(source, codepoints);
    let height = required_height(width, &rasters)?;
    log::info!("layout: atlas {width}x{height} for {} rasters", rasters.len());

    let mut atlas = Atlas::new(width, height);
    let layout = place(width, height, &rasters, |x, y, bmp| {
        atlas.blit(x, y, bmp, color);
    });
    Ok((layout, atlas))
}

fn rasterize_all<S: GlyphSource + ?Sized>(
    source: &mut S,
    codepoints: &[Codepoint],
) -> Vec<(Codepoint, Raster)> {
    codepoints
        .iter()
        .filter_map(|&cp| match source.rasterize(cp) {
            Some(raster) => Some((cp, raster)),
            None => {
                log::warn!("layout: skipping U+{cp:04X}, rasterizer failed");
                None
            }
        })
        .collect()
}

/// Placement pass. `blit` is called once per bitmap, in packing order.
fn place(
    width: u32,
    height: u32,
    rasters: &[(Codepoint, Raster)],
    mut blit: impl FnMut(u32, u32, &GlyphBitmap),
) -> AtlasLayout {
    let mut packer = ShelfPacker::new(width);
    let mut layout = AtlasLayout {
        width,
        height,
        ..AtlasLayout::default()
    };

    for (cp, raster) in rasters {
        match raster {
            Raster::Bitmap(bmp) => {
                let (x, y) = packer.place(bmp.width, bmp.height);
                debug_assert!(y + bmp.height <= height, "placement pass outgrew sizing pass");
                blit(x, y, bmp);
                layout.glyphs.push(PlacedGlyph {
                    codepoint: *cp,
                    x,
                    y,
                    width: bmp.width,
                    height: bmp.height,
                    left_bearing: bmp.left,
                    top_bearing: bmp.top,
                    advance: bmp.advance,
                });
            }
            Raster::Whitespace { advance } => layout.whitespaces.push(WhitespaceGlyph {
                codepoint: *cp,
                advance: *advance,
            }),
        }
    }

    log::debug!(
        "layout: placed {} glyphs, {} whitespaces",
        layout.glyphs.len(),
        layout.whitespaces.len()
    );
    layout
}
