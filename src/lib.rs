#![no_std]

pub mod color;
pub mod control;
pub mod effect;
pub mod frame_scheduler;
pub mod layout;
pub mod math8;
pub mod palette;
pub mod renderer;

pub use color::{Hsv, Rgb};
pub use control::{ControlChannel, ControlIntent, ControlOverflow, ControlReceiver, ControlSender};
pub use effect::{Effect, EffectId, EffectSlot, Scene};
pub use frame_scheduler::{FrameResult, FrameScheduler};
pub use layout::{CLOCK_LAYOUT, Coord, GlyphLayout, Segment};
pub use palette::{GradientPalette, GradientStop, PALETTES, Palette16};
pub use renderer::{ComposerConfig, Renderer};

pub use embassy_time::{Duration, Instant};

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// The frame scheduler is generic over this trait.
pub trait OutputDriver {
    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb]);
}
