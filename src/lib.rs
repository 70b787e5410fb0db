#![no_std]

//! Cubert - 8×8×8 LED cube driver core
//!
//! Architecture layers:
//! - `color` - Packed `0xRRGGBB` colors, fixed-point HSL conversion and the named palette
//! - `mapping` - Cube coordinate to chain offset mapping (serpentine wiring)
//! - `buffer` - Transmission buffer with a movable window and brightness
//! - `effect` - Effects that fill the buffer (hue gradients)
//! - `processor` - Read-only analysis of the buffer (power estimate)
//! - `driver` - Hardware abstraction ([`LedDriver`] trait + adapters)
//! - `device` - Orchestrator owning one buffer and one driver
//!
//! Nothing in this crate reports errors. Invalid offsets are ignored and
//! out-of-range color components are wrapped, clamped or masked.

pub mod buffer;
pub mod color;
pub mod config;
pub mod device;
pub mod driver;
pub mod effect;
pub mod mapping;
pub mod math8;
pub mod processor;

// Buffer exports
pub use buffer::{CubeBuffer, FrameBuffer};

// Color exports
pub use color::{Hsl, NamedColor, Rgb, colors, hsl_to_rgb, pack, rgb, unpack_b, unpack_g, unpack_r};

// Device exports
pub use device::Device;

// Driver exports
pub use driver::{LedDriver, SmartLedsDriver};

// Effect exports
pub use effect::{HueDirection, RainbowEffect, fill_rainbow};

// Mapping exports
pub use mapping::{CUBE_SIZE, VOXEL_COUNT, pixel_offset};

// Processor exports
pub use processor::PowerEstimator;
