//! Row-based shelf packer shared by the sizing and placement passes.

/// Fills rows left to right; a glyph that would cross the right edge starts
/// a new row beneath the tallest glyph of the current one.
///
/// Both layout passes drive a fresh packer with the same glyph sequence, so
/// the sizing pass and the placement pass cannot disagree about positions.
#[derive(Debug, Clone)]
pub struct ShelfPacker {
    width: u32,
    x: u32,
    y: u32,
    /// Tallest glyph placed in the current row.
    row_height: u32,
}

impl ShelfPacker {
    pub fn new(width: u32) -> Self {
        Self {
            width,
            x: 0,
            y: 0,
            row_height: 0,
        }
    }

    /// Reserve a `w`×`h` cell and return its top-left corner.
    pub fn place(&mut self, w: u32, h: u32) -> (u32, u32) {
        if self.x + w > self.width {
            log::debug!(
                "packer: row at y={} full (x={}, next w={w}), height {}",
                self.y,
                self.x,
                self.row_height
            );
            self.x = 0;
            self.y += self.row_height;
            self.row_height = 0;
        }

        let pos = (self.x, self.y);
        self.x += w;
        self.row_height = self.row_height.max(h);
        pos
    }

    /// Total height used so far, including the open row.
    pub fn content_height(&self) -> u32 {
        self.y + self.row_height
    }
}

#[cfg(test)]
mod tests {
    use super::ShelfPacker;

    #[test]
    fn first_glyph_at_origin() {
        let mut p = ShelfPacker::new(100);
        assert_eq!(p.place(10, 5), (0, 0));
        assert_eq!(p.content_height(), 5);
    }

    #[test]
    fn fills_row_left_to_right() {
        let mut p = ShelfPacker::new(100);
        assert_eq!(p.place(30, 5), (0, 0));
        assert_eq!(p.place(30, 9), (30, 0));
        assert_eq!(p.place(40, 2), (60, 0));
        assert_eq!(p.content_height(), 9);
    }

    #[test]
    fn exact_fit_does_not_wrap() {
        let mut p = ShelfPacker::new(64);
        p.place(32, 4);
        assert_eq!(p.place(32, 4), (32, 0));
    }

    #[test]
    fn wraps_below_tallest_glyph() {
        let mut p = ShelfPacker::new(64);
        p.place(20, 7);
        p.place(20, 12);
        p.place(20, 3);
        assert_eq!(p.place(20, 4), (0, 12));
        assert_eq!(p.content_height(), 16);
    }

    #[test]
    fn row_height_resets_after_wrap() {
        let mut p = ShelfPacker::new(10);
        p.place(10, 20);
        assert_eq!(p.place(10, 2), (0, 20));
        assert_eq!(p.place(10, 3), (0, 22));
        assert_eq!(p.content_height(), 25);
    }

    #[test]
    fn empty_packer_has_no_height() {
        assert_eq!(ShelfPacker::new(16).content_height(), 0);
    }
}
