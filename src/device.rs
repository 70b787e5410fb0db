//! Cube device - orchestrator
//!
//! The Device owns the transmission buffer and the LED driver:
//! - Pixel writes by chain offset or by cube coordinate
//! - Buffer transforms (clear, shift, rotate, brightness easing)
//! - Effects (solid color, rainbow) that end with a flush
//! - Power estimate of the current frame
//!
//! Nothing is sent to the LEDs until [`Device::flush`] (or an operation that
//! flushes on its own) is called.

use crate::buffer::CubeBuffer;
use crate::config;
use crate::driver::LedDriver;
use crate::effect::RainbowEffect;
use crate::mapping::pixel_offset;
use crate::processor::PowerEstimator;

/// One 8×8×8 cube on one data line
pub struct Device<D: LedDriver> {
    /// Hardware driver for LED output
    driver: D,
    /// Frame being composed
    buffer: CubeBuffer,
    /// Current draw model
    power: PowerEstimator,
}

impl<D: LedDriver> Device<D> {
    /// Create a new cube driver
    ///
    /// The buffer starts black at full brightness and the driver's output is
    /// configured once.
    pub fn new(mut driver: D) -> Self {
        driver.configure_output();
        let buffer = CubeBuffer::new();
        log::debug!(
            "cube: {} pixels, stride {}, brightness {}",
            buffer.capacity(),
            buffer.stride(),
            buffer.brightness()
        );
        Self {
            driver,
            buffer,
            power: PowerEstimator::default(),
        }
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }

    pub fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }

    pub fn buffer(&self) -> &CubeBuffer {
        &self.buffer
    }

    /// Direct buffer access, e.g. to move the window
    pub fn buffer_mut(&mut self) -> &mut CubeBuffer {
        &mut self.buffer
    }

    /// Shows all LEDs in a given color
    pub fn show_color(&mut self, rgb: u32) {
        self.buffer.set_all(rgb);
        self.flush();
    }

    /// Shows a clockwise rainbow from `start_hue` to `end_hue`
    pub fn show_rainbow(&mut self, start_hue: i32, end_hue: i32) {
        self.show_effect(&RainbowEffect::new(start_hue, end_hue));
    }

    /// Shows the full rainbow (hue 1 to 360)
    pub fn show_default_rainbow(&mut self) {
        self.show_rainbow(config::RAINBOW.start_hue, config::RAINBOW.end_hue);
    }

    /// Paint a configured rainbow and flush
    pub fn show_effect(&mut self, effect: &RainbowEffect) {
        if self.buffer.length() == 0 {
            return;
        }
        effect.fill(&mut self.buffer);
        self.flush();
    }

    /// Set the LED at a chain offset; call [`Self::flush`] to make it visible
    pub fn set_pixel_color(&mut self, offset: i32, rgb: u32) {
        self.buffer.set_pixel(offset, rgb);
    }

    /// Set the LED at (x, y, z); call [`Self::flush`] to make it visible
    pub fn set_pixel_at(&mut self, x: i32, y: i32, z: i32, rgb: u32) {
        self.buffer.set_pixel(pixel_offset(x, y, z), rgb);
    }

    /// Get the chain offset of the LED at (x, y, z)
    pub const fn pixel_offset(&self, x: i32, y: i32, z: i32) -> i32 {
        pixel_offset(x, y, z)
    }

    /// Turn off all LEDs; call [`Self::flush`] to make it visible
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Gets the number of pixels in the active window
    pub fn length(&self) -> usize {
        self.buffer.length()
    }

    /// Set the brightness (0-255) for future color writes
    pub fn set_brightness(&mut self, brightness: i32) {
        self.buffer.set_brightness(brightness);
    }

    pub fn brightness(&self) -> u8 {
        self.buffer.brightness()
    }

    /// Apply a quadratic easing curve to the colors already written
    pub fn ease_brightness(&mut self) {
        self.buffer.ease_brightness();
    }

    /// Shift LEDs forward and clear with zeros
    pub fn shift(&mut self, offset: i32) {
        self.buffer.shift(offset);
    }

    /// Rotate LEDs forward
    pub fn rotate(&mut self, offset: i32) {
        self.buffer.rotate(offset);
    }

    /// Estimates the current (mA) drawn by the current frame
    pub fn power(&self) -> u32 {
        self.power.estimate(&self.buffer)
    }

    /// Send the whole buffer to the LED chain
    pub fn flush(&mut self) {
        let frame = self.buffer.as_bytes();
        log::trace!("cube: flushing {} bytes", frame.len());
        self.driver.write(frame);
    }

    /// Send all the changes to the cube
    pub fn show(&mut self) {
        self.flush();
    }
}
