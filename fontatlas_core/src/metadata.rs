//! Metadata document describing the atlas for downstream text renderers.
//!
//! Serialized as strict JSON. Field names and their order are part of the
//! output contract:
//!
//! ```text
//! { "lineHeight", "glyphs": [..], "whitespaces": [..], "kerningPairs": [..] }
//! ```
//!
//! `whitespaces` is omitted when empty. `kerningPairs` is omitted when the
//! font has no kerning data or no pair survived the non-zero filter.

use serde::Serialize;

use crate::kerning::KerningPair;
use crate::layout::{AtlasLayout, PlacedGlyph, WhitespaceGlyph};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FontMetadata {
    pub line_height: i32,
    pub glyphs: Vec<PlacedGlyph>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub whitespaces: Vec<WhitespaceGlyph>,
    #[serde(skip_serializing_if = "no_kerning")]
    pub kerning_pairs: Option<Vec<KerningPair>>,
}

fn no_kerning(pairs: &Option<Vec<KerningPair>>) -> bool {
    pairs.as_ref().is_none_or(Vec::is_empty)
}

impl FontMetadata {
    /// Assemble the document. `kerning` is `None` when the font reports no
    /// kerning support.
    pub fn new(line_height: i32, layout: &AtlasLayout, kerning: Option<Vec<KerningPair>>) -> Self {
        Self {
            line_height,
            glyphs: layout.glyphs.clone(),
            whitespaces: layout.whitespaces.clone(),
            kerning_pairs: kerning,
        }
    }

    /// Pretty-printed JSON with a trailing newline.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        let mut out = serde_json::to_string_pretty(self)?;
        out.push('\n');
        Ok(out)
    }
}
