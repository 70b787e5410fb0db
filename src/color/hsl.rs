//! Fixed-point HSL to RGB conversion
//!
//! Uses the chroma / hue-sector method with integer math only, so results are
//! identical on every target and pinned to the truncation below.

use super::pack;

/// Largest saturation and luminance accepted by [`hsl_to_rgb`]
const SL_MAX: i32 = 99;

/// A hue / saturation / luminance triple
///
/// Hue is in degrees and wraps modulo 360. Saturation and luminance are
/// percentages clamped to `0..=99` on conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hsl {
    pub hue: i32,
    pub saturation: i32,
    pub luminance: i32,
}

impl Hsl {
    pub const fn new(hue: i32, saturation: i32, luminance: i32) -> Self {
        Self {
            hue,
            saturation,
            luminance,
        }
    }

    /// Convert to a packed `0xRRGGBB` color
    pub fn to_rgb(self) -> u32 {
        hsl_to_rgb(self.hue, self.saturation, self.luminance)
    }
}

/// Converts a hue saturation luminosity value into a packed RGB color
///
/// # Arguments
/// * `h` - Hue in degrees, any value (wrapped into `0..360`)
/// * `s` - Saturation, clamped to `0..=99`
/// * `l` - Luminosity, clamped to `0..=99`
pub fn hsl_to_rgb(h: i32, s: i32, l: i32) -> u32 {
    let h = h.rem_euclid(360);
    let s = s.clamp(0, SL_MAX);
    let l = l.clamp(0, SL_MAX);

    // chroma, [0,255]
    let c = (((100 - (2 * l - 100).abs()) * s) << 8) / 10_000;
    // hue sector [0,5] and position inside it [0,255]
    let sector = h / 60;
    let fraction = (h - sector * 60) * 256 / 60;
    let distance = (((sector % 2) << 8) + fraction - 256).abs();
    // second largest component
    let x = (c * (256 - distance)) >> 8;

    let (r, g, b) = match sector {
        0 => (c, x, 0),
        1 => (x, c, 0),
        2 => (0, c, x),
        3 => (0, x, c),
        4 => (x, 0, c),
        _ => (c, 0, x),
    };

    let m = (((l * 2) << 8) / 100 - c) / 2;
    pack(r + m, g + m, b + m)
}
