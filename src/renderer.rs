use embassy_time::{Duration, Instant};

use crate::color::Rgb;
use crate::control::{ControlIntent, ControlReceiver};
use crate::effect::{EffectId, EffectSlot, Scene};
use crate::layout::GlyphLayout;
use crate::math8::scale8;
use crate::palette::{GRADIENTS, GradientPalette, PALETTES, Palette16};

/// Milliseconds between global hue increments.
const HUE_STEP_MS: u64 = 15;

/// How long each gradient target stays active before rotating.
const GRADIENT_ROTATE: Duration = Duration::from_secs(10);

/// Initial renderer state.
#[derive(Debug, Clone, Copy)]
pub struct ComposerConfig {
    pub effect: EffectId,
    /// Animation speed (0-255).
    pub speed: u8,
    /// Global brightness scale (0-255).
    pub brightness: u8,
    /// Index into the discrete palette bank.
    pub palette: usize,
}

impl Default for ComposerConfig {
    fn default() -> Self {
        Self {
            effect: EffectId::XPalette,
            speed: 30,
            brightness: 255,
            palette: 0,
        }
    }
}

/// Per-frame orchestrator.
///
/// Owns the frame buffers and all animation state: the active effect,
/// the selected palette, the blending gradient palette, the global hue
/// byte and the speed/brightness settings. One `render` call produces
/// one complete frame; invocation is strictly serial.
///
/// Effects paint into a persistent frame buffer and may rely on its
/// contents surviving between calls; brightness is applied to a separate
/// output buffer on the way out.
pub struct Renderer<'a, const MAX_LEDS: usize, const CONTROL_CHANNEL_SIZE: usize> {
    controls: ControlReceiver<'a, CONTROL_CHANNEL_SIZE>,
    layout: GlyphLayout,

    effect: EffectSlot,
    speed: u8,
    brightness: u8,
    palette_index: usize,

    gradient: GradientPalette,
    gradient_index: usize,
    gradient_rotated: Instant,

    hue: u8,
    hue_updated: Instant,

    frame_buffer: [Rgb; MAX_LEDS],
    output_buffer: [Rgb; MAX_LEDS],
}

impl<'a, const MAX_LEDS: usize, const CONTROL_CHANNEL_SIZE: usize>
    Renderer<'a, MAX_LEDS, CONTROL_CHANNEL_SIZE>
{
    /// Create a new renderer for the given layout.
    ///
    /// `MAX_LEDS` must be at least `layout.len()`; extra buffer entries
    /// are never written or returned. `now` anchors the hue and gradient
    /// rotation clocks so the first frames start from a clean slate even
    /// when the device has been up for a while.
    pub fn new(
        layout: GlyphLayout,
        controls: ControlReceiver<'a, CONTROL_CHANNEL_SIZE>,
        config: &ComposerConfig,
        now: Instant,
    ) -> Self {
        Self {
            controls,
            layout,
            effect: config.effect.to_slot(),
            speed: config.speed,
            brightness: config.brightness,
            palette_index: config.palette % PALETTES.len(),
            gradient: GradientPalette::new(Palette16::from_gradient(GRADIENTS[0])),
            gradient_index: 0,
            gradient_rotated: now,
            hue: 0,
            hue_updated: now,
            frame_buffer: [Rgb::default(); MAX_LEDS],
            output_buffer: [Rgb::default(); MAX_LEDS],
        }
    }

    /// Process one frame
    ///
    /// This is the main render loop step. Call this continuously.
    pub fn render(&mut self, now: Instant) -> &[Rgb] {
        self.process_intents(now);
        self.advance_hue(now);
        self.rotate_gradient(now);
        self.gradient.tick();

        let count = self.layout.len().min(MAX_LEDS);

        let scene = Scene {
            layout: self.layout,
            palette: &PALETTES[self.palette_index],
            gradient: self.gradient.palette(),
            speed: self.speed,
            hue: self.hue,
        };
        self.effect
            .render(now, &scene, &mut self.frame_buffer[..count]);

        // Gated effects hold their last frame in the frame buffer, so
        // brightness must not scale it in place.
        let out = &mut self.output_buffer[..count];
        out.copy_from_slice(&self.frame_buffer[..count]);
        if self.brightness < 255 {
            for led in out.iter_mut() {
                led.r = scale8(led.r, self.brightness);
                led.g = scale8(led.g, self.brightness);
                led.b = scale8(led.b, self.brightness);
            }
        }

        out
    }

    /// Id of the active effect.
    pub const fn effect_id(&self) -> EffectId {
        self.effect.id()
    }

    pub const fn speed(&self) -> u8 {
        self.speed
    }

    pub const fn brightness(&self) -> u8 {
        self.brightness
    }

    /// Drain pending control intents (non-blocking).
    fn process_intents(&mut self, now: Instant) {
        while let Some(intent) = self.controls.try_receive() {
            self.apply_intent(intent, now);
        }
    }

    fn apply_intent(&mut self, intent: ControlIntent, now: Instant) {
        if let Some(id) = intent.effect {
            if id != self.effect.id() {
                self.effect = id.to_slot();
                self.effect.reset();
            }
        }

        if let Some(speed) = intent.speed {
            self.speed = speed;
        }

        if let Some(brightness) = intent.brightness {
            self.brightness = brightness;
        }

        if let Some(index) = intent.palette {
            self.palette_index = index % PALETTES.len();
        }

        if let Some(index) = intent.gradient {
            self.set_gradient_target(index);
            // An explicit selection restarts the rotation period.
            self.gradient_rotated = now;
        }
    }

    /// Advance the global hue byte, one step per `HUE_STEP_MS` elapsed.
    #[allow(clippy::cast_possible_truncation)]
    fn advance_hue(&mut self, now: Instant) {
        let elapsed = now.duration_since(self.hue_updated).as_millis();
        let steps = elapsed / HUE_STEP_MS;
        if steps == 0 {
            return;
        }
        self.hue = self.hue.wrapping_add((steps % 256) as u8);
        self.hue_updated += Duration::from_millis(steps * HUE_STEP_MS);
    }

    /// Move to the next gradient target once the rotation period elapses.
    fn rotate_gradient(&mut self, now: Instant) {
        if now.duration_since(self.gradient_rotated) < GRADIENT_ROTATE {
            return;
        }
        self.gradient_rotated = now;
        self.set_gradient_target(self.gradient_index + 1);
    }

    fn set_gradient_target(&mut self, index: usize) {
        self.gradient_index = index % GRADIENTS.len();
        self.gradient
            .set_target(Palette16::from_gradient(GRADIENTS[self.gradient_index]));
    }
}
