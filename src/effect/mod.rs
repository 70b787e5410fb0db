//! Effects that paint the frame buffer
//!
//! Effects write through the buffer's pixel API, so the current brightness
//! and window apply to them like to any other color write.

mod rainbow;

pub use rainbow::{HueDirection, RainbowEffect, fill_rainbow};
