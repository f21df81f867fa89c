//! Coordinate scan effect
//!
//! Walks a cursor through every grid coordinate in row-major order and
//! lights exactly the pixels mapped to the current position. Useful for
//! verifying a coordinate table against the physical wiring.

use embassy_time::{Duration, Instant};

use super::{Effect, Scene};
use crate::{
    color::{Hsv, Rgb, hsv2rgb},
    layout::{Coord, MAX_X, MAX_Y},
};

/// Raster scan over the coordinate grid.
///
/// The cursor advances once per gate interval; a higher scene speed means
/// a shorter interval (`255 - speed` milliseconds). Between due ticks the
/// frame buffer is left untouched.
#[derive(Debug, Clone, Default)]
pub struct ScanEffect {
    cursor: Coord,
    last_step: Option<Instant>,
}

impl ScanEffect {
    pub const fn new() -> Self {
        Self {
            cursor: Coord { x: 0, y: 0 },
            last_step: None,
        }
    }

    /// Current cursor position.
    pub const fn cursor(&self) -> Coord {
        self.cursor
    }

    #[allow(clippy::cast_lossless)]
    const fn step_interval(speed: u8) -> Duration {
        Duration::from_millis((255 - speed) as u64)
    }

    /// Whether the gate has elapsed since the last cursor step.
    fn due(&self, now: Instant, speed: u8) -> bool {
        match self.last_step {
            None => true,
            Some(last) => now.duration_since(last) >= Self::step_interval(speed),
        }
    }

    /// Advance the cursor one step, wrapping at both grid bounds.
    fn advance(&mut self) {
        self.cursor.x += 1;
        if self.cursor.x > MAX_X {
            self.cursor.x = 0;
            self.cursor.y += 1;
            if self.cursor.y > MAX_Y {
                self.cursor.y = 0;
            }
        }
    }
}

impl Effect for ScanEffect {
    fn render(&mut self, now: Instant, scene: &Scene<'_>, leds: &mut [Rgb]) {
        if !self.due(now, scene.speed) {
            return;
        }
        self.last_step = Some(now);

        self.advance();

        leds.fill(Rgb::default());

        let color = hsv2rgb(Hsv {
            hue: scene.hue,
            sat: 255,
            val: 255,
        });

        let count = scene.layout.len().min(leds.len());
        for (i, led) in leds.iter_mut().enumerate().take(count) {
            if scene.layout.coord(i) == self.cursor {
                *led = color;
            }
        }
    }

    fn reset(&mut self) {
        self.cursor = Coord { x: 0, y: 0 };
        self.last_step = None;
    }
}
