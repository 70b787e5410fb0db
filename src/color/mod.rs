//! Color model
//!
//! Colors travel through the crate as packed `0xRRGGBB` values stored in a `u32`.
//! Channels are masked to 8 bits on both pack and unpack, so out-of-range
//! input is truncated instead of rejected.

mod hsl;
mod palette;

use smart_leds::RGB8;

pub use hsl::{Hsl, hsl_to_rgb};
pub use palette::{NamedColor, colors};

pub type Rgb = RGB8;

/// Pack red, green and blue channels into a `0xRRGGBB` color
#[inline]
#[allow(clippy::cast_sign_loss)]
pub const fn pack(r: i32, g: i32, b: i32) -> u32 {
    (((r & 0xFF) << 16) | ((g & 0xFF) << 8) | (b & 0xFF)) as u32
}

/// Converts red, green, blue channels into a packed color
///
/// Channels are expected in `0..=255`; anything else is truncated to 8 bits.
#[inline]
pub const fn rgb(red: i32, green: i32, blue: i32) -> u32 {
    pack(red, green, blue)
}

/// Red channel of a packed color
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn unpack_r(rgb: u32) -> u8 {
    ((rgb >> 16) & 0xFF) as u8
}

/// Green channel of a packed color
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn unpack_g(rgb: u32) -> u8 {
    ((rgb >> 8) & 0xFF) as u8
}

/// Blue channel of a packed color
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn unpack_b(rgb: u32) -> u8 {
    (rgb & 0xFF) as u8
}

/// Create an RGB color from a u32 value (0xRRGGBB format)
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: unpack_r(color),
        g: unpack_g(color),
        b: unpack_b(color),
    }
}

/// Pack an RGB color back into a u32 value (0xRRGGBB format)
pub const fn rgb_to_u32(color: Rgb) -> u32 {
    pack(color.r as i32, color.g as i32, color.b as i32)
}
