//! 8-bit fixed-point math helpers used throughout the renderer.

use embassy_time::Instant;

/// Scale an 8-bit value by a factor (0-255 = 0.0-1.0)
///
/// Uses integer math for efficiency on embedded systems.
#[inline]
#[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
pub const fn scale8(value: u8, scale: u8) -> u8 {
    ((value as u16 * (1 + scale as u16)) >> 8) as u8
}

/// Blend two 8-bit values
#[inline]
#[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
pub const fn blend8(a: u8, b: u8, amount_of_b: u8) -> u8 {
    let delta = b as i16 - a as i16;

    let mut partial: u32 = (a as u32) << 16; // a * 65536
    partial = partial.wrapping_add(
        (delta as u32)
            .wrapping_mul(amount_of_b as u32)
            .wrapping_mul(257),
    ); // (b - a) * amount_of_b * 257
    partial = partial.wrapping_add(0x8000); // + 32768 for rounding

    (partial >> 16) as u8
}

/// Byte sawtooth advancing with elapsed time at `bpm` beats per minute.
///
/// One beat is one full 0-255 sweep, so `beat8(60, now)` wraps once per
/// second. This is the animation phase source for the palette wave
/// effects; wrapping is intentional.
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn beat8(bpm: u8, now: Instant) -> u8 {
    // 280 / 65536 ~= 256 / 60000, i.e. beats-per-minute to phase-per-ms.
    ((now.as_millis().wrapping_mul(bpm as u64 * 280)) >> 16) as u8
}
