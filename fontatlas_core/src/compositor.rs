//! Pixel compositor: copies glyph coverage into the RGBA atlas buffer.

use serde::{Deserialize, Serialize};

use crate::glyph::GlyphBitmap;

/// Bytes per atlas pixel (RGBA8).
pub const BYTES_PER_PIXEL: usize = 4;

/// Straight (non-premultiplied) text color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Premultiplied RGBA pixel for a coverage value.
    ///
    /// `alpha = (a / 255) * (coverage / 255)`, each color channel becomes
    /// `channel * alpha` and A becomes `alpha * 255`. Computed in integers and
    /// rounded so full coverage of an opaque color reproduces it exactly.
    pub fn transform(self, coverage: u8) -> [u8; 4] {
        let alpha = u32::from(self.a) * u32::from(coverage);
        let scale = |ch: u8| ((u32::from(ch) * alpha + 32_512) / 65_025) as u8;
        [
            scale(self.r),
            scale(self.g),
            scale(self.b),
            ((alpha + 127) / 255) as u8,
        ]
    }
}

/// Fixed-size RGBA8 pixel buffer holding every packed glyph.
///
/// Row-major, stride `width * 4`. Dimensions are fixed at creation, which is
/// why the layout engine sizes the atlas before any pixel is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Atlas {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Atlas {
    /// Create a fully transparent atlas.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize * BYTES_PER_PIXEL],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Consume the atlas and hand the raw buffer to an encoder.
    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    /// RGBA value at `(x, y)`.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = self.offset(x, y);
        [
            self.pixels[i],
            self.pixels[i + 1],
            self.pixels[i + 2],
            self.pixels[i + 3],
        ]
    }

    /// Write `bitmap` with its top-left corner at `(x, y)`.
    ///
    /// Every covered pixel is overwritten, zero coverage included (it becomes
    /// transparent black). Placement must already be in bounds.
    pub fn blit(&mut self, x: u32, y: u32, bitmap: &GlyphBitmap, color: Color) {
        debug_assert!(
            x + bitmap.width <= self.width && y + bitmap.height <= self.height,
            "glyph {}x{} at ({x}, {y}) exceeds atlas {}x{}",
            bitmap.width,
            bitmap.height,
            self.width,
            self.height,
        );

        for dy in 0..bitmap.height {
            let src = (dy * bitmap.pitch) as usize;
            let row = &bitmap.coverage[src..src + bitmap.width as usize];
            let dst = self.offset(x, y + dy);
            let out = &mut self.pixels[dst..dst + row.len() * BYTES_PER_PIXEL];
            for (px, &c) in out.chunks_exact_mut(BYTES_PER_PIXEL).zip(row) {
                px.copy_from_slice(&color.transform(c));
            }
        }
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL
    }
}
