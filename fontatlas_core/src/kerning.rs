//! Kerning table extraction.

use serde::Serialize;

use crate::glyph::{Codepoint, GlyphSource};

/// Horizontal adjustment applied when `first` is followed by `second`.
///
/// Directional: `(A, V)` and `(V, A)` are distinct pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KerningPair {
    pub first: Codepoint,
    pub second: Codepoint,
    pub kerning: i32,
}

/// Query every ordered pair of `codepoints` and keep the non-zero ones.
///
/// Pairs come out in nested `(i, k)` order, `i == k` included. This is
/// quadratic in glyph count, fine for the few hundred glyphs of a typical
/// font but not for large symbol sets; rows the source rules out through
/// [`GlyphSource::may_kern_first`] are skipped. Returns an empty table
/// without any queries when the font has no kerning data.
pub fn build_kerning_table<S: GlyphSource + ?Sized>(
    source: &S,
    codepoints: &[Codepoint],
) -> Vec<KerningPair> {
    if !source.has_kerning() {
        log::debug!("kerning: font has no kerning data");
        return Vec::new();
    }

    let mut pairs = Vec::new();
    for &first in codepoints {
        if !source.may_kern_first(first) {
            continue;
        }
        for &second in codepoints {
            let kerning = source.kerning(first, second);
            if kerning != 0 {
                pairs.push(KerningPair {
                    first,
                    second,
                    kerning,
                });
            }
        }
    }
    log::info!(
        "kerning: {} non-zero pairs over {} codepoints",
        pairs.len(),
        codepoints.len()
    );
    pairs
}
