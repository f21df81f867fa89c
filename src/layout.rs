//! Pixel layout for the seven-segment glyph matrix.
//!
//! The display is a single LED strip folded into four seven-segment digit
//! glyphs plus a two-pixel colon. Each segment is `PIXELS_PER_SEGMENT`
//! consecutive strip indices; segments are wired in A, B, C, D, E, F, G
//! order per glyph:
//!
//! ```text
//!     AAA
//!    F   B
//!     GGG
//!    E   C
//!     DDD
//! ```
//!
//! The coordinate tables below assign every strip index a position on a
//! 25x9 grid so that effects can be written against (x, y) instead of
//! wiring order. The tables are hand-authored for this specific display;
//! they are data, not something derived from the segment geometry at
//! runtime.

use core::ops::Range;

/// LEDs per segment stroke.
pub const PIXELS_PER_SEGMENT: usize = 3;

/// Number of digit glyphs on the display.
pub const GLYPH_COUNT: usize = 4;

/// Strip indices per glyph (7 segments).
pub const PIXELS_PER_GLYPH: usize = 7 * PIXELS_PER_SEGMENT;

/// Total LED count: four glyphs plus the colon.
pub const PIXEL_COUNT: usize = GLYPH_COUNT * PIXELS_PER_GLYPH + 2;

/// Largest x coordinate on the grid.
pub const MAX_X: u8 = 24;

/// Largest y coordinate on the grid.
pub const MAX_Y: u8 = 8;

/// Grid width in columns.
pub const MATRIX_WIDTH: u8 = MAX_X + 1;

/// Grid height in rows.
pub const MATRIX_HEIGHT: u8 = MAX_Y + 1;

#[rustfmt::skip]
static COORDS_X: [u8; PIXEL_COUNT] = [
    // glyph 1
     1,  2,  3,  4,  4,  4,  4,  4,  4,  3,  2,  1,  0,  0,  0,  0,  0,  0,  1,  2,  3,
    // glyph 2
     7,  8,  9, 10, 10, 10, 10, 10, 10,  9,  8,  7,  6,  6,  6,  6,  6,  6,  7,  8,  9,
    // glyph 3
    15, 16, 17, 18, 18, 18, 18, 18, 18, 17, 16, 15, 14, 14, 14, 14, 14, 14, 15, 16, 17,
    // glyph 4
    21, 22, 23, 24, 24, 24, 24, 24, 24, 23, 22, 21, 20, 20, 20, 20, 20, 20, 21, 22, 23,
    // colon
    12, 12,
];

#[rustfmt::skip]
static COORDS_Y: [u8; PIXEL_COUNT] = [
    // glyph 1
     0,  0,  0,  1,  2,  3,  5,  6,  7,  8,  8,  8,  7,  6,  5,  3,  2,  1,  4,  4,  4,
    // glyph 2
     0,  0,  0,  1,  2,  3,  5,  6,  7,  8,  8,  8,  7,  6,  5,  3,  2,  1,  4,  4,  4,
    // glyph 3
     0,  0,  0,  1,  2,  3,  5,  6,  7,  8,  8,  8,  7,  6,  5,  3,  2,  1,  4,  4,  4,
    // glyph 4
     0,  0,  0,  1,  2,  3,  5,  6,  7,  8,  8,  8,  7,  6,  5,  3,  2,  1,  4,  4,  4,
    // colon
     3,  5,
];

/// Grid position of one pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Coord {
    pub x: u8,
    pub y: u8,
}

/// One stroke of a seven-segment glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Segment {
    A = 0,
    B = 1,
    C = 2,
    D = 3,
    E = 4,
    F = 5,
    G = 6,
}

/// Immutable strip-index to grid-coordinate mapping.
///
/// Cheap to copy; it only holds references to the static tables.
#[derive(Debug, Clone, Copy)]
pub struct GlyphLayout {
    xs: &'static [u8; PIXEL_COUNT],
    ys: &'static [u8; PIXEL_COUNT],
}

/// The four-digit clock layout this display is built around.
pub static CLOCK_LAYOUT: GlyphLayout = GlyphLayout {
    xs: &COORDS_X,
    ys: &COORDS_Y,
};

impl GlyphLayout {
    /// Number of mapped pixels.
    pub const fn len(self) -> usize {
        PIXEL_COUNT
    }

    pub const fn is_empty(self) -> bool {
        false
    }

    /// Grid coordinate of a strip index.
    ///
    /// # Panics
    /// Panics if `index >= self.len()`.
    pub fn coord(self, index: usize) -> Coord {
        Coord {
            x: self.xs[index],
            y: self.ys[index],
        }
    }

    /// Iterate over `(index, coord)` pairs in strip order.
    pub fn iter(self) -> impl Iterator<Item = (usize, Coord)> {
        self.xs
            .iter()
            .zip(self.ys.iter())
            .enumerate()
            .map(|(i, (&x, &y))| (i, Coord { x, y }))
    }

    /// Strip indices of one segment of one glyph (glyphs numbered from 0).
    pub const fn segment_pixels(self, glyph: usize, segment: Segment) -> Range<usize> {
        let start = glyph * PIXELS_PER_GLYPH + (segment as usize) * PIXELS_PER_SEGMENT;
        start..start + PIXELS_PER_SEGMENT
    }

    /// Strip indices of the colon pixels.
    pub const fn colon_pixels(self) -> Range<usize> {
        GLYPH_COUNT * PIXELS_PER_GLYPH..PIXEL_COUNT
    }
}
