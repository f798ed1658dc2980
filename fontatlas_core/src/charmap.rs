//! Glyph enumeration: the ordered codepoint list that drives packing.

use std::collections::HashSet;

use crate::glyph::{Codepoint, GlyphSource};

/// Collect the font's codepoints in character-map order, without duplicates.
///
/// The order is load-bearing: it decides packing order and therefore every
/// atlas coordinate. Later duplicates are dropped, the first occurrence wins.
pub fn enumerate_codepoints<S: GlyphSource + ?Sized>(source: &S) -> Vec<Codepoint> {
    dedup_in_order(source.charmap())
}

fn dedup_in_order(raw: Vec<Codepoint>) -> Vec<Codepoint> {
    let mut seen = HashSet::with_capacity(raw.len());
    let mut out = Vec::with_capacity(raw.len());
    for cp in raw {
        if seen.insert(cp) {
            out.push(cp);
        }
    }
    log::debug!("charmap: {} codepoints", out.len());
    out
}
