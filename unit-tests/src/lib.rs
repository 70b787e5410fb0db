//! Host-side fixtures shared by the cube integration tests

use cubert::LedDriver;
use smart_leds::{RGB8, SmartLedsWrite};

/// Driver that keeps a copy of every frame it is asked to send
#[derive(Default)]
pub struct RecordingDriver {
    /// How many times the output was configured
    pub configured: usize,
    /// Frames in send order
    pub frames: Vec<Vec<u8>>,
}

impl RecordingDriver {
    pub fn last_frame(&self) -> Option<&[u8]> {
        self.frames.last().map(Vec::as_slice)
    }
}

impl LedDriver for RecordingDriver {
    fn configure_output(&mut self) {
        self.configured += 1;
    }

    fn write(&mut self, frame: &[u8]) {
        self.frames.push(frame.to_vec());
    }
}

#[derive(Debug)]
pub struct SinkError;

/// `smart-leds` writer collecting the pixels of every write
#[derive(Default)]
pub struct PixelSink {
    pub writes: Vec<Vec<RGB8>>,
    /// Reject every write when set
    pub fail: bool,
}

impl SmartLedsWrite for PixelSink {
    type Error = SinkError;
    type Color = RGB8;

    fn write<T, I>(&mut self, iterator: T) -> Result<(), Self::Error>
    where
        T: IntoIterator<Item = I>,
        I: Into<Self::Color>,
    {
        let pixels: Vec<RGB8> = iterator.into_iter().map(Into::into).collect();
        if self.fail {
            return Err(SinkError);
        }
        self.writes.push(pixels);
        Ok(())
    }
}

/// Split a packed color into its channels
pub fn channels(rgb: u32) -> (u8, u8, u8) {
    (
        cubert::unpack_r(rgb),
        cubert::unpack_g(rgb),
        cubert::unpack_b(rgb),
    )
}
