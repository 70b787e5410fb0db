//! Rainbow gradient effect
//!
//! Interpolates the hue across the buffer window using a ×100 fixed-point step,
//! then converts each sample with the fixed-point HSL conversion.

use crate::buffer::FrameBuffer;
use crate::color::hsl_to_rgb;
use crate::config;

/// Extra precision for the per-pixel hue step
const HUE_SCALE: i32 = 100;

/// Direction to walk around the hue circle
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HueDirection {
    /// Increasing hue
    #[default]
    Clockwise,
    /// Decreasing hue
    CounterClockwise,
    /// Whichever way is shorter, clockwise on a tie
    Shortest,
}

/// Rainbow effect painting a hue gradient over the window
#[derive(Clone, Debug)]
pub struct RainbowEffect {
    /// Hue of the first pixel
    start_hue: i32,
    /// Hue of the last pixel
    end_hue: i32,
    /// Saturation (0-99)
    saturation: i32,
    /// Luminance (0-99)
    luminance: i32,
    /// Hue interpolation direction
    direction: HueDirection,
}

impl Default for RainbowEffect {
    fn default() -> Self {
        Self::new(config::RAINBOW.start_hue, config::RAINBOW.end_hue)
    }
}

impl RainbowEffect {
    /// Create a clockwise rainbow between two hues
    pub const fn new(start_hue: i32, end_hue: i32) -> Self {
        Self {
            start_hue,
            end_hue,
            saturation: config::RAINBOW.saturation,
            luminance: config::RAINBOW.luminance,
            direction: HueDirection::Clockwise,
        }
    }

    /// Set the hue direction
    #[must_use]
    pub const fn with_direction(mut self, direction: HueDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Set the saturation
    #[must_use]
    pub const fn with_saturation(mut self, saturation: i32) -> Self {
        self.saturation = saturation;
        self
    }

    /// Set the luminance
    #[must_use]
    pub const fn with_luminance(mut self, luminance: i32) -> Self {
        self.luminance = luminance;
        self
    }

    /// Per-pixel hue step, scaled by [`HUE_SCALE`]
    ///
    /// Both hues must already be wrapped into `0..360`.
    fn hue_step(&self, start_hue: i32, end_hue: i32, steps: i32) -> i32 {
        let distance_cw = (end_hue + 360 - start_hue) % 360;
        let distance_ccw = (start_hue + 360 - end_hue) % 360;
        let step_cw = distance_cw * HUE_SCALE / steps;
        let step_ccw = -(distance_ccw * HUE_SCALE) / steps;

        match self.direction {
            HueDirection::Clockwise => step_cw,
            HueDirection::CounterClockwise => step_ccw,
            HueDirection::Shortest => {
                if distance_cw < distance_ccw {
                    step_cw
                } else {
                    step_ccw
                }
            }
        }
    }

    /// Paint the gradient into the buffer window
    ///
    /// The first and last pixels get the exact end hues. A single-pixel window
    /// gets one raw step past the start hue instead.
    pub fn fill<const N: usize, const STRIDE: usize>(&self, buffer: &mut FrameBuffer<N, STRIDE>) {
        let steps = i32::try_from(buffer.length()).unwrap_or(i32::MAX);
        if steps <= 0 {
            return;
        }

        // Hues of any size wrap, which keeps the fixed-point math in range
        let start_hue = self.start_hue.rem_euclid(360);
        let end_hue = self.end_hue.rem_euclid(360);
        let hue_step = self.hue_step(start_hue, end_hue, steps);
        let (s, l) = (self.saturation, self.luminance);

        if steps == 1 {
            buffer.set_pixel(0, hsl_to_rgb(start_hue + hue_step, s, l));
            return;
        }

        buffer.set_pixel(0, hsl_to_rgb(start_hue, s, l));
        let start_hue_scaled = start_hue * HUE_SCALE;
        for i in 1..steps - 1 {
            let hue = (start_hue_scaled + i * hue_step) / HUE_SCALE + 360;
            buffer.set_pixel(i, hsl_to_rgb(hue, s, l));
        }
        buffer.set_pixel(steps - 1, hsl_to_rgb(end_hue, s, l));
    }
}

/// Fill the window with a clockwise rainbow from `start_hue` to `end_hue`
pub fn fill_rainbow<const N: usize, const STRIDE: usize>(
    buffer: &mut FrameBuffer<N, STRIDE>,
    start_hue: i32,
    end_hue: i32,
) {
    RainbowEffect::new(start_hue, end_hue).fill(buffer);
}
