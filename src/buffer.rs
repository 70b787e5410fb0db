//! Transmission buffer
//!
//! Holds the exact bytes sent down the chain: `N` pixels of `STRIDE` bytes each,
//! in R, G, B (, W) order. All pixel operations work inside a window
//! `[start, start + length)` of the backing buffer, which lets one buffer drive
//! a sub-range of a longer physical chain.
//!
//! Brightness is applied when a color is written, never retroactively, with the
//! exception of [`FrameBuffer::ease_brightness`].

use crate::color::{Rgb, pack, rgb_from_u32};
use crate::config;
use crate::mapping::VOXEL_COUNT;
use crate::math8::{scale_pixel, scale8};

/// Buffer sized for the whole cube, RGB
pub type CubeBuffer = FrameBuffer<VOXEL_COUNT, 3>;

/// Fixed-capacity pixel buffer with a movable window
#[derive(Clone)]
pub struct FrameBuffer<const N: usize, const STRIDE: usize = 3> {
    /// Backing storage, one entry per pixel
    pixels: [[u8; STRIDE]; N],
    /// First pixel of the window
    start: usize,
    /// Number of pixels in the window
    length: usize,
    /// Scale applied to subsequent color writes (0-255)
    brightness: u8,
}

impl<const N: usize, const STRIDE: usize> Default for FrameBuffer<N, STRIDE> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize, const STRIDE: usize> FrameBuffer<N, STRIDE> {
    const VALID_STRIDE: () = assert!(STRIDE == 3 || STRIDE == 4, "stride must be 3 (RGB) or 4 (RGBW)");

    /// Create a zeroed buffer whose window covers every pixel
    pub const fn new() -> Self {
        let () = Self::VALID_STRIDE;
        Self {
            pixels: [[0; STRIDE]; N],
            start: 0,
            length: N,
            brightness: config::CUBE.default_brightness,
        }
    }

    /// Number of pixels the backing buffer can hold
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Bytes per pixel
    pub const fn stride(&self) -> usize {
        STRIDE
    }

    /// First pixel of the window
    pub const fn start(&self) -> usize {
        self.start
    }

    /// Gets the number of pixels in the window
    pub const fn length(&self) -> usize {
        self.length
    }

    /// Move the window
    ///
    /// Values are clamped so the window always fits in the backing buffer.
    pub fn set_window(&mut self, start: usize, length: usize) {
        self.start = start.min(N);
        self.length = length.min(N - self.start);
    }

    /// Pixels inside the window
    pub fn window(&self) -> &[[u8; STRIDE]] {
        &self.pixels[self.start..self.start + self.length]
    }

    fn window_mut(&mut self) -> &mut [[u8; STRIDE]] {
        &mut self.pixels[self.start..self.start + self.length]
    }

    /// The whole backing buffer as raw bytes, ready for transmission
    pub fn as_bytes(&self) -> &[u8] {
        self.pixels.as_flattened()
    }

    pub const fn brightness(&self) -> u8 {
        self.brightness
    }

    /// Set the brightness for future color writes
    ///
    /// Only the low byte of `brightness` is kept.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn set_brightness(&mut self, brightness: i32) {
        self.brightness = (brightness & 0xFF) as u8;
    }

    /// Set a window pixel to a packed color
    ///
    /// Offsets outside `0..length` are ignored.
    pub fn set_pixel(&mut self, offset: i32, rgb: u32) {
        let Some(index) = self.index_of(offset) else {
            return;
        };
        let color = self.scaled(rgb);
        write_rgb(&mut self.pixels[index], color);
    }

    /// Packed color of a window pixel, W byte excluded
    pub fn pixel(&self, offset: i32) -> Option<u32> {
        let pixel = &self.pixels[self.index_of(offset)?];
        Some(pack(
            i32::from(pixel[0]),
            i32::from(pixel[1]),
            i32::from(pixel[2]),
        ))
    }

    /// Set every window pixel to a packed color
    pub fn set_all(&mut self, rgb: u32) {
        let color = self.scaled(rgb);
        for pixel in self.window_mut() {
            write_rgb(pixel, color);
        }
    }

    /// Turn off every window pixel
    pub fn clear(&mut self) {
        self.window_mut().fill([0; STRIDE]);
    }

    /// Apply a parabolic brightness curve to the colors already written
    ///
    /// Pixels fade from black at both window edges up to the written color at
    /// the middle. Destructive: calling it twice darkens twice.
    pub fn ease_brightness(&mut self) {
        let length = self.length;
        let mid = length / 2;
        let mid_squared = mid * mid;

        for (k, pixel) in self.window_mut().iter_mut().enumerate() {
            let distance = if k > mid { length - 1 - k } else { k };
            let br = if mid_squared == 0 {
                0
            } else {
                255 * distance * distance / mid_squared
            };
            log::trace!("{}:{}", k, br);
            scale_pixel(pixel, u8::try_from(br).unwrap_or(u8::MAX));
        }
    }

    /// Shift window pixels forward and clear with zeros
    ///
    /// Positive offsets move pixels toward the end of the window, negative
    /// ones toward the start.
    pub fn shift(&mut self, offset: i32) {
        let window = self.window_mut();
        let len = window.len();
        let distance = usize::try_from(offset.unsigned_abs()).unwrap_or(usize::MAX);

        if distance >= len {
            window.fill([0; STRIDE]);
            return;
        }

        if offset > 0 {
            window.copy_within(..len - distance, distance);
            window[..distance].fill([0; STRIDE]);
        } else if offset < 0 {
            window.copy_within(distance.., 0);
            window[len - distance..].fill([0; STRIDE]);
        }
    }

    /// Rotate window pixels forward
    ///
    /// Same direction as [`Self::shift`], pixels pushed past one end come back
    /// in at the other.
    pub fn rotate(&mut self, offset: i32) {
        let window = self.window_mut();
        let len = window.len();
        if len == 0 {
            return;
        }

        let distance = usize::try_from(offset.unsigned_abs()).unwrap_or(usize::MAX) % len;
        if offset > 0 {
            window.rotate_right(distance);
        } else {
            window.rotate_left(distance);
        }
    }

    fn index_of(&self, offset: i32) -> Option<usize> {
        let offset = usize::try_from(offset).ok()?;
        (offset < self.length).then_some(self.start + offset)
    }

    fn scaled(&self, rgb: u32) -> Rgb {
        let mut color = rgb_from_u32(rgb);
        let br = self.brightness;
        if br < 255 {
            color.r = scale8(color.r, br);
            color.g = scale8(color.g, br);
            color.b = scale8(color.b, br);
        }
        color
    }
}

/// Write the color channels, leaving a W byte untouched
#[inline]
fn write_rgb<const STRIDE: usize>(pixel: &mut [u8; STRIDE], color: Rgb) {
    pixel[0] = color.r;
    pixel[1] = color.g;
    pixel[2] = color.b;
}
