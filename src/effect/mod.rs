//! Effect system with compile-time known effect variants
//!
//! All effects are stored in an enum to avoid heap allocations.
//! Each effect implements the [`Effect`] trait and renders one full frame
//! from the glyph layout, the animation phase and a palette source.

mod scan;
mod wave;

use embassy_time::Instant;
pub use scan::ScanEffect;
pub use wave::{PaletteSource, PaletteWaveEffect, WaveAxis};

use crate::{color::Rgb, layout::GlyphLayout, palette::Palette16};

const EFFECT_NAME_SCAN: &str = "scan";
const EFFECT_NAME_X_PALETTE: &str = "x_palette";
const EFFECT_NAME_Y_PALETTE: &str = "y_palette";
const EFFECT_NAME_XY_PALETTE: &str = "xy_palette";
const EFFECT_NAME_X_GRADIENT: &str = "x_gradient";
const EFFECT_NAME_Y_GRADIENT: &str = "y_gradient";
const EFFECT_NAME_XY_GRADIENT: &str = "xy_gradient";

const EFFECT_ID_SCAN: u8 = 0;
const EFFECT_ID_X_PALETTE: u8 = 1;
const EFFECT_ID_Y_PALETTE: u8 = 2;
const EFFECT_ID_XY_PALETTE: u8 = 3;
const EFFECT_ID_X_GRADIENT: u8 = 4;
const EFFECT_ID_Y_GRADIENT: u8 = 5;
const EFFECT_ID_XY_GRADIENT: u8 = 6;

/// Per-frame inputs shared by every effect.
///
/// Effects read from the scene and write to the frame buffer; the
/// renderer owns all of this state between frames.
pub struct Scene<'a> {
    /// Strip-index to grid-coordinate mapping.
    pub layout: GlyphLayout,
    /// Currently selected discrete palette.
    pub palette: &'a Palette16,
    /// Currently active interpolated gradient palette.
    pub gradient: &'a Palette16,
    /// Animation speed (0-255).
    pub speed: u8,
    /// Slowly advancing global hue byte.
    pub hue: u8,
}

pub trait Effect {
    /// Render a single frame
    fn render(&mut self, now: Instant, scene: &Scene<'_>, leds: &mut [Rgb]);

    /// Reset effect state
    fn reset(&mut self) {}
}

/// Effect slot - enum containing all possible effects
#[derive(Debug, Clone)]
pub enum EffectSlot {
    /// Raster scan walking every grid coordinate
    Scan(ScanEffect),
    /// Horizontal wave over the selected palette
    XPalette(PaletteWaveEffect),
    /// Vertical wave over the selected palette
    YPalette(PaletteWaveEffect),
    /// Diagonal wave over the selected palette
    XyPalette(PaletteWaveEffect),
    /// Horizontal wave over the gradient palette
    XGradient(PaletteWaveEffect),
    /// Vertical wave over the gradient palette
    YGradient(PaletteWaveEffect),
    /// Diagonal wave over the gradient palette
    XyGradient(PaletteWaveEffect),
}

/// Known effect ids that can be requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum EffectId {
    Scan = EFFECT_ID_SCAN,
    XPalette = EFFECT_ID_X_PALETTE,
    YPalette = EFFECT_ID_Y_PALETTE,
    XyPalette = EFFECT_ID_XY_PALETTE,
    XGradient = EFFECT_ID_X_GRADIENT,
    YGradient = EFFECT_ID_Y_GRADIENT,
    XyGradient = EFFECT_ID_XY_GRADIENT,
}

impl Default for EffectSlot {
    fn default() -> Self {
        EffectId::XPalette.to_slot()
    }
}

impl EffectId {
    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            EFFECT_ID_SCAN => Self::Scan,
            EFFECT_ID_X_PALETTE => Self::XPalette,
            EFFECT_ID_Y_PALETTE => Self::YPalette,
            EFFECT_ID_XY_PALETTE => Self::XyPalette,
            EFFECT_ID_X_GRADIENT => Self::XGradient,
            EFFECT_ID_Y_GRADIENT => Self::YGradient,
            EFFECT_ID_XY_GRADIENT => Self::XyGradient,
            _ => return None,
        })
    }

    pub fn to_slot(self) -> EffectSlot {
        match self {
            Self::Scan => EffectSlot::Scan(ScanEffect::new()),
            Self::XPalette => EffectSlot::XPalette(PaletteWaveEffect::new(
                WaveAxis::X,
                PaletteSource::Selected,
            )),
            Self::YPalette => EffectSlot::YPalette(PaletteWaveEffect::new(
                WaveAxis::Y,
                PaletteSource::Selected,
            )),
            Self::XyPalette => EffectSlot::XyPalette(PaletteWaveEffect::new(
                WaveAxis::Diagonal,
                PaletteSource::Selected,
            )),
            Self::XGradient => EffectSlot::XGradient(PaletteWaveEffect::new(
                WaveAxis::X,
                PaletteSource::Gradient,
            )),
            Self::YGradient => EffectSlot::YGradient(PaletteWaveEffect::new(
                WaveAxis::Y,
                PaletteSource::Gradient,
            )),
            Self::XyGradient => EffectSlot::XyGradient(PaletteWaveEffect::new(
                WaveAxis::Diagonal,
                PaletteSource::Gradient,
            )),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Scan => EFFECT_NAME_SCAN,
            Self::XPalette => EFFECT_NAME_X_PALETTE,
            Self::YPalette => EFFECT_NAME_Y_PALETTE,
            Self::XyPalette => EFFECT_NAME_XY_PALETTE,
            Self::XGradient => EFFECT_NAME_X_GRADIENT,
            Self::YGradient => EFFECT_NAME_Y_GRADIENT,
            Self::XyGradient => EFFECT_NAME_XY_GRADIENT,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            EFFECT_NAME_SCAN => Some(Self::Scan),
            EFFECT_NAME_X_PALETTE => Some(Self::XPalette),
            EFFECT_NAME_Y_PALETTE => Some(Self::YPalette),
            EFFECT_NAME_XY_PALETTE => Some(Self::XyPalette),
            EFFECT_NAME_X_GRADIENT => Some(Self::XGradient),
            EFFECT_NAME_Y_GRADIENT => Some(Self::YGradient),
            EFFECT_NAME_XY_GRADIENT => Some(Self::XyGradient),
            _ => None,
        }
    }
}

impl EffectSlot {
    /// Render the current effect
    pub fn render(&mut self, now: Instant, scene: &Scene<'_>, leds: &mut [Rgb]) {
        match self {
            Self::Scan(effect) => effect.render(now, scene, leds),
            Self::XPalette(effect)
            | Self::YPalette(effect)
            | Self::XyPalette(effect)
            | Self::XGradient(effect)
            | Self::YGradient(effect)
            | Self::XyGradient(effect) => effect.render(now, scene, leds),
        }
    }

    /// Reset the effect state
    pub fn reset(&mut self) {
        match self {
            Self::Scan(effect) => Effect::reset(effect),
            Self::XPalette(effect)
            | Self::YPalette(effect)
            | Self::XyPalette(effect)
            | Self::XGradient(effect)
            | Self::YGradient(effect)
            | Self::XyGradient(effect) => Effect::reset(effect),
        }
    }

    /// Get the effect ID for external observation
    pub const fn id(&self) -> EffectId {
        match self {
            Self::Scan(_) => EffectId::Scan,
            Self::XPalette(_) => EffectId::XPalette,
            Self::YPalette(_) => EffectId::YPalette,
            Self::XyPalette(_) => EffectId::XyPalette,
            Self::XGradient(_) => EffectId::XGradient,
            Self::YGradient(_) => EffectId::YGradient,
            Self::XyGradient(_) => EffectId::XyGradient,
        }
    }
}
