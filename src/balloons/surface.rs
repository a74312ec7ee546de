//! Drawing contract between the game and whatever renders it.
//!
//! Coordinates are canvas units with the origin at the top-left corner and
//! `y` growing downward.

/// A 24-bit color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);

    /// Build a color from a `0xRRGGBB` literal.
    pub const fn from_hex(hex: u32) -> Self {
        Rgb(
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
        )
    }
}

/// The four primitives balloons are drawn with.
pub trait Surface {
    /// Erase a rectangular region.
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64);

    /// Paint a solid disc.
    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Rgb);

    /// Paint a circle outline.
    fn stroke_circle(&mut self, x: f64, y: f64, radius: f64, color: Rgb);

    /// Paint a straight segment.
    fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: Rgb);

    /// Write `text` horizontally centered on `(x, y)`.
    fn text(&mut self, x: f64, y: f64, text: &str, color: Rgb);
}
