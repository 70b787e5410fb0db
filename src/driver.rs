//! LED Driver abstraction layer
//!
//! Provides a trait-based abstraction for the chain transmitter,
//! allowing the cube device to be hardware-agnostic.

use core::fmt::Debug;

use smart_leds::{RGB8, SmartLedsWrite};

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// The device is generic over this trait. Transmission is fire-and-forget:
/// implementations swallow their own errors.
pub trait LedDriver {
    /// Prepare the data line
    ///
    /// Called once when the device is built. Implementations should leave the
    /// line driven low.
    fn configure_output(&mut self) {}

    /// Write the raw frame bytes to the chain
    fn write(&mut self, frame: &[u8]);
}

impl<T: LedDriver + ?Sized> LedDriver for &mut T {
    fn configure_output(&mut self) {
        (**self).configure_output();
    }

    fn write(&mut self, frame: &[u8]) {
        (**self).write(frame);
    }
}

/// Adapter for any `smart-leds` RGB writer
///
/// Decodes a stride-3 frame into [`RGB8`] pixels in chain order.
pub struct SmartLedsDriver<W> {
    writer: W,
}

impl<W> SmartLedsDriver<W> {
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Get the wrapped writer
    pub fn inner(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W> LedDriver for SmartLedsDriver<W>
where
    W: SmartLedsWrite<Color = RGB8>,
    W::Error: Debug,
{
    fn configure_output(&mut self) {
        // An empty write latches the line low
        if let Err(err) = self.writer.write(core::iter::empty::<RGB8>()) {
            log::warn!("led driver: configure failed: {:?}", err);
        }
    }

    fn write(&mut self, frame: &[u8]) {
        let pixels = frame
            .chunks_exact(3)
            .map(|channels| RGB8::new(channels[0], channels[1], channels[2]));
        if let Err(err) = self.writer.write(pixels) {
            log::warn!("led driver: write failed: {:?}", err);
        }
    }
}
