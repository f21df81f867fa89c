//! Palette wave effects
//!
//! One implementation covers the six wave variants: the phase offset is
//! driven by a pixel's x, y, or x+y coordinate, and colors come from
//! either the selected discrete palette or the active gradient palette.
//! The result is a traveling color wave across the glyphs - horizontal,
//! vertical, or diagonal.

use embassy_time::Instant;

use super::{Effect, Scene};
use crate::{color::Rgb, math8::beat8};

/// Phase step per grid unit. Larger values compress the wave.
const HUES_PER_UNIT: u8 = 8;

/// Which coordinate term drives the phase offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaveAxis {
    /// Horizontal wave (offset by x)
    X,
    /// Vertical wave (offset by y)
    Y,
    /// Diagonal wave (offset by x + y)
    Diagonal,
}

/// Which palette the wave samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteSource {
    /// The discrete palette selected by index
    Selected,
    /// The active interpolated gradient palette
    Gradient,
}

/// Traveling color wave over the coordinate grid.
///
/// Stateless between frames: every pixel's color is a pure function of
/// its coordinate, the time-derived phase and the palette.
#[derive(Debug, Clone, Copy)]
pub struct PaletteWaveEffect {
    axis: WaveAxis,
    source: PaletteSource,
}

impl PaletteWaveEffect {
    pub const fn new(axis: WaveAxis, source: PaletteSource) -> Self {
        Self { axis, source }
    }

    const fn offset(self, x: u8, y: u8) -> u8 {
        let term = match self.axis {
            WaveAxis::X => x,
            WaveAxis::Y => y,
            WaveAxis::Diagonal => x.wrapping_add(y),
        };
        term.wrapping_mul(HUES_PER_UNIT)
    }
}

impl Effect for PaletteWaveEffect {
    fn render(&mut self, now: Instant, scene: &Scene<'_>, leds: &mut [Rgb]) {
        let base = beat8(scene.speed, now);
        let palette = match self.source {
            PaletteSource::Selected => scene.palette,
            PaletteSource::Gradient => scene.gradient,
        };

        let count = scene.layout.len().min(leds.len());
        for (i, led) in leds.iter_mut().enumerate().take(count) {
            let coord = scene.layout.coord(i);
            // Wrapping subtraction on purpose: going "negative" wraps the
            // phase around the 256-step palette cycle.
            let phase = base.wrapping_sub(self.offset(coord.x, coord.y));
            *led = palette.color_at(phase);
        }
    }
}
