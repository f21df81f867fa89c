//! Palette tables and phase-indexed color sampling.
//!
//! Two palette sources exist for the wave effects:
//! - a bank of discrete preset palettes ([`PALETTES`]) selected by index,
//! - a separately maintained [`GradientPalette`] that blends smoothly
//!   toward whatever target it was last given.
//!
//! Both are sampled through [`Palette16::color_at`], which treats the
//! 8-bit phase as a position on a 256-step cycle and wraps past the last
//! entry back to the first.

use crate::color::{Rgb, blend_colors, rgb_from_u32};

/// Create a palette from a list of hex colors (0xRRGGBB format)
macro_rules! hex_palette {
    ($($color:expr),* $(,)?) => {
        Palette16([
            $(rgb_from_u32($color)),*
        ])
    };
}

/// A 16-entry color table sampled by an 8-bit phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette16(pub [Rgb; 16]);

/// One anchor color of a gradient definition.
#[derive(Debug, Clone, Copy)]
pub struct GradientStop {
    /// Position on the 0-255 cycle. Stop lists must be ascending and
    /// cover 0 and 255.
    pub pos: u8,
    pub color: Rgb,
}

impl Palette16 {
    /// Sample the palette at `phase`.
    ///
    /// The high nibble picks an entry, the low nibble blends toward the
    /// next one. Sampling past entry 15 wraps to entry 0, so the palette
    /// is cyclic over the full 256-phase domain.
    pub const fn color_at(&self, phase: u8) -> Rgb {
        let hi = (phase >> 4) as usize;
        let frac = (phase & 0x0F) << 4;

        let a = self.0[hi];
        if frac == 0 {
            return a;
        }
        let b = self.0[(hi + 1) % 16];
        blend_colors(a, b, frac)
    }

    /// Expand a gradient stop list into a 16-entry palette.
    ///
    /// Entry `i` is the gradient sampled at position `i * 255 / 15`, so
    /// the first and last stops land exactly on entries 0 and 15.
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_gradient(stops: &[GradientStop]) -> Self {
        let mut entries = [Rgb::default(); 16];

        for (i, entry) in entries.iter_mut().enumerate() {
            let pos = ((i as u16 * 255) / 15) as u8;
            *entry = sample_stops(stops, pos);
        }

        Self(entries)
    }
}

fn sample_stops(stops: &[GradientStop], pos: u8) -> Rgb {
    let Some(first) = stops.first() else {
        return Rgb::default();
    };
    if pos <= first.pos {
        return first.color;
    }

    for pair in stops.windows(2) {
        let (lo, hi) = (pair[0], pair[1]);
        if pos <= hi.pos {
            let span = u16::from(hi.pos - lo.pos).max(1);
            #[allow(clippy::cast_possible_truncation)]
            let t = ((u16::from(pos - lo.pos) * 255) / span) as u8;
            return blend_colors(lo.color, hi.color, t);
        }
    }

    stops.last().map_or_else(Rgb::default, |s| s.color)
}

/// Channel adjustments per [`GradientPalette::tick`] call.
///
/// Small enough that target changes fade in over roughly a second of
/// frames instead of snapping.
const BLEND_BUDGET: u8 = 24;

/// The currently-active interpolated palette.
///
/// Holds a live palette that creeps toward a target a few channel steps
/// per frame, so gradient swaps blend instead of cutting.
#[derive(Debug, Clone)]
pub struct GradientPalette {
    current: Palette16,
    target: Palette16,
}

impl GradientPalette {
    pub const fn new(initial: Palette16) -> Self {
        Self {
            current: initial,
            target: initial,
        }
    }

    /// The palette to sample this frame.
    pub const fn palette(&self) -> &Palette16 {
        &self.current
    }

    /// Set a new target; `tick` blends toward it over subsequent frames.
    pub const fn set_target(&mut self, target: Palette16) {
        self.target = target;
    }

    pub fn is_settled(&self) -> bool {
        self.current == self.target
    }

    /// Advance the blend by one frame.
    ///
    /// Moves at most `BLEND_BUDGET` color channels one step toward the
    /// target per call.
    pub fn tick(&mut self) {
        let mut budget = BLEND_BUDGET;

        for (entry, target) in self.current.0.iter_mut().zip(self.target.0.iter()) {
            for (channel, goal) in [
                (&mut entry.r, target.r),
                (&mut entry.g, target.g),
                (&mut entry.b, target.b),
            ] {
                if *channel == goal {
                    continue;
                }
                if *channel < goal {
                    *channel += 1;
                } else {
                    *channel -= 1;
                }
                budget -= 1;
                if budget == 0 {
                    return;
                }
            }
        }
    }
}

/// Discrete preset palettes, selected by index from the control surface.
pub static PALETTES: [Palette16; 4] = [RAINBOW, PARTY, OCEAN, HEAT];

#[allow(clippy::unreadable_literal)]
pub static RAINBOW: Palette16 = hex_palette![
    0xFF0000, 0xD52A00, 0xAB5500, 0xAB7F00, 0xABAB00, 0x56D500, 0x00FF00, 0x00D52A, 0x00AB55,
    0x0056AA, 0x0000FF, 0x2A00D5, 0x5500AB, 0x7F0081, 0xAB0055, 0xD5002B,
];

#[allow(clippy::unreadable_literal)]
pub static PARTY: Palette16 = hex_palette![
    0x5500AB, 0x84007C, 0xB5004B, 0xE5001B, 0xE81700, 0xB84700, 0xAB7700, 0xABAB00, 0xAB5500,
    0xDD2200, 0xF2000E, 0xC2003E, 0x8F0071, 0x5F00A1, 0x2F00D0, 0x0007F9,
];

#[allow(clippy::unreadable_literal)]
pub static OCEAN: Palette16 = hex_palette![
    0x191970, 0x00008B, 0x191970, 0x000080, 0x00008B, 0x0000CD, 0x2E8B57, 0x008080, 0x5F9EA0,
    0x0000FF, 0x008B8B, 0x6495ED, 0x7FFFD4, 0x00CED1, 0x40E0D0, 0x6495ED,
];

#[allow(clippy::unreadable_literal)]
pub static HEAT: Palette16 = hex_palette![
    0x000000, 0x330000, 0x660000, 0x990000, 0xCC0000, 0xFF0000, 0xFF3300, 0xFF6600, 0xFF9900,
    0xFFCC00, 0xFFFF00, 0xFFFF33, 0xFFFF66, 0xFFFF99, 0xFFFFCC, 0xFFFFFF,
];

/// Gradient definitions the renderer rotates through.
///
/// Warm-to-cool picks that read well on the small digit glyphs.
pub static GRADIENTS: [&[GradientStop]; 3] = [SUNSET, OCEAN_BREEZE, PINK_SPLASH];

macro_rules! stop {
    ($pos:expr, $color:expr) => {
        GradientStop {
            pos: $pos,
            color: rgb_from_u32($color),
        }
    };
}

#[allow(clippy::unreadable_literal)]
static SUNSET: &[GradientStop] = &[
    stop!(0, 0x780000),
    stop!(22, 0xB31600),
    stop!(51, 0xFF6800),
    stop!(85, 0xA71612),
    stop!(135, 0x640067),
    stop!(198, 0x100082),
    stop!(255, 0x0000A0),
];

#[allow(clippy::unreadable_literal)]
static OCEAN_BREEZE: &[GradientStop] = &[
    stop!(0, 0x010607),
    stop!(89, 0x01636F),
    stop!(153, 0x90D1FF),
    stop!(255, 0x004952),
];

#[allow(clippy::unreadable_literal)]
static PINK_SPLASH: &[GradientStop] = &[
    stop!(0, 0x7E0BFF),
    stop!(127, 0xC50116),
    stop!(175, 0xD29DAC),
    stop!(221, 0x9D0370),
    stop!(255, 0x9D0370),
];
