//! Core data structures and algorithms for baking a bitmap font atlas.
//!
//! This crate turns rasterized glyphs into a single packed RGBA atlas plus a
//! metadata document. It contains no font parsing, no image encoding, and no
//! file I/O: the font engine is reached through the [`GlyphSource`] trait.

#![deny(unsafe_code)]

pub mod charmap;
pub mod compositor;
pub mod glyph;
pub mod kerning;
pub mod layout;
pub mod metadata;

#[cfg(test)]
mod testing;

pub use charmap::enumerate_codepoints;
pub use compositor::{Atlas, Color};
pub use glyph::{Codepoint, GlyphBitmap, GlyphSource, Raster};
pub use kerning::{KerningPair, build_kerning_table};
pub use layout::{
    AtlasLayout, LayoutError, PlacedGlyph, ShelfPacker, WhitespaceGlyph, build_atlas,
    layout_atlas, required_height,
};
pub use metadata::FontMetadata;
