//! Frame scheduling and timing utilities.
//!
//! Provides portable frame pacing without async/await or platform-specific
//! timers. The caller is responsible for sleeping between frames.

use embassy_time::{Duration, Instant};

use crate::{OutputDriver, Renderer};

/// Default target frame rate.
pub const DEFAULT_FPS: u32 = 60;

/// Default frame duration based on target FPS.
pub const DEFAULT_FRAME_DURATION: Duration = Duration::from_millis(1000 / DEFAULT_FPS as u64);

/// Result of a frame tick operation.
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    /// The deadline for the next frame.
    pub next_deadline: Instant,
    /// How long to wait until the next frame (zero if behind schedule).
    pub sleep_duration: Duration,
}

/// Frame pacer driving one renderer into one output.
///
/// Tracks frame deadlines with drift correction: falling behind by more
/// than two frame periods skips the backlog instead of bursting to catch
/// up.
///
/// # Usage
///
/// ```ignore
/// let mut scheduler = FrameScheduler::new(renderer, driver);
///
/// loop {
///     let result = scheduler.tick(Instant::now());
///     // Platform-specific sleep
///     sleep(result.sleep_duration);
/// }
/// ```
pub struct FrameScheduler<'a, O, const MAX_LEDS: usize, const CONTROL_CHANNEL_SIZE: usize>
where
    O: OutputDriver,
{
    output: O,
    renderer: Renderer<'a, MAX_LEDS, CONTROL_CHANNEL_SIZE>,
    next_frame: Instant,
    frame_duration: Duration,
}

impl<'a, O, const MAX_LEDS: usize, const CONTROL_CHANNEL_SIZE: usize>
    FrameScheduler<'a, O, MAX_LEDS, CONTROL_CHANNEL_SIZE>
where
    O: OutputDriver,
{
    /// Create a new frame scheduler at the default frame rate.
    pub fn new(renderer: Renderer<'a, MAX_LEDS, CONTROL_CHANNEL_SIZE>, driver: O) -> Self {
        Self::with_frame_duration(renderer, driver, DEFAULT_FRAME_DURATION)
    }

    /// Create a new frame scheduler with custom frame duration.
    pub fn with_frame_duration(
        renderer: Renderer<'a, MAX_LEDS, CONTROL_CHANNEL_SIZE>,
        driver: O,
        frame_duration: Duration,
    ) -> Self {
        Self {
            output: driver,
            renderer,
            next_frame: Instant::from_millis(0),
            frame_duration,
        }
    }

    /// Render one frame, write it out, and compute the next deadline.
    pub fn tick(&mut self, now: Instant) -> FrameResult {
        // Skip the backlog entirely after a long stall.
        let max_drift_ms = self.frame_duration.as_millis() * 2;
        if now.as_millis() > self.next_frame.as_millis() + max_drift_ms {
            self.next_frame = now;
        }

        let frame = self.renderer.render(now);
        self.output.write(frame);

        self.next_frame += self.frame_duration;

        let sleep_duration = if self.next_frame.as_millis() > now.as_millis() {
            Duration::from_millis(self.next_frame.as_millis() - now.as_millis())
        } else {
            Duration::from_millis(0)
        };

        FrameResult {
            next_deadline: self.next_frame,
            sleep_duration,
        }
    }

    /// Get a reference to the renderer.
    pub const fn renderer(&self) -> &Renderer<'a, MAX_LEDS, CONTROL_CHANNEL_SIZE> {
        &self.renderer
    }

    /// Get a mutable reference to the renderer.
    pub const fn renderer_mut(&mut self) -> &mut Renderer<'a, MAX_LEDS, CONTROL_CHANNEL_SIZE> {
        &mut self.renderer
    }
}
