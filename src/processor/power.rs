//! Current draw estimate
//!
//! WS2812 pixels draw a small constant current even when dark, plus roughly
//! linear current per channel step. The model is coarse but cheap enough to
//! run before every flush.

use crate::buffer::FrameBuffer;
use crate::config;

/// Estimates the current (mA) a frame will draw
#[derive(Clone, Copy, Debug)]
pub struct PowerEstimator {
    /// Pixels per mA of idle draw
    idle_divisor: u32,
    /// mA per channel step, numerator
    channel_numerator: u32,
    /// mA per channel step, denominator
    channel_denominator: u32,
}

impl Default for PowerEstimator {
    fn default() -> Self {
        Self {
            idle_divisor: config::POWER.idle_divisor,
            channel_numerator: config::POWER.channel_numerator,
            channel_denominator: config::POWER.channel_denominator,
        }
    }
}

impl PowerEstimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sum of every channel byte in the buffer window
    pub fn channel_sum<const N: usize, const STRIDE: usize>(
        buffer: &FrameBuffer<N, STRIDE>,
    ) -> u32 {
        buffer
            .window()
            .as_flattened()
            .iter()
            .fold(0, |sum: u32, &byte| sum.saturating_add(u32::from(byte)))
    }

    /// Estimated draw in mA for the buffer window
    ///
    /// `length / 2 + sum * 433 / 10000` with the default constants, saturating
    /// at `u32::MAX` for very long strips.
    pub fn estimate<const N: usize, const STRIDE: usize>(
        &self,
        buffer: &FrameBuffer<N, STRIDE>,
    ) -> u32 {
        let length = u64::try_from(buffer.length()).unwrap_or(u64::MAX);
        let sum = u64::from(Self::channel_sum(buffer));
        let idle = length / u64::from(self.idle_divisor);
        let lit = sum * u64::from(self.channel_numerator) / u64::from(self.channel_denominator);
        u32::try_from(idle.saturating_add(lit)).unwrap_or(u32::MAX)
    }
}
