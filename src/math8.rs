/// Scale an 8-bit value by a factor (0-255 = 0.0-1.0)
///
/// Uses integer math for efficiency on embedded systems.
/// A factor of 255 still loses one step (`255 * 255 >> 8 == 254`), which is
/// why callers skip scaling entirely at full brightness.
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn scale8(value: u8, scale: u8) -> u8 {
    ((value as u16 * scale as u16) >> 8) as u8
}

/// Scale every byte of a pixel by the same factor
#[inline]
pub fn scale_pixel<const STRIDE: usize>(pixel: &mut [u8; STRIDE], scale: u8) {
    for channel in pixel.iter_mut() {
        *channel = scale8(*channel, scale);
    }
}
