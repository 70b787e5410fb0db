use crate::mapping::{CUBE_SIZE, VOXEL_COUNT};

pub struct CubeConfig {
    pub size: i32,
    pub capacity: usize,
    pub stride: usize,
    pub default_brightness: u8,
}

pub struct RainbowConfig {
    pub start_hue: i32,
    pub end_hue: i32,
    pub saturation: i32,
    pub luminance: i32,
}

pub struct PowerConfig {
    /// Every pixel draws `1 / idle_divisor` mA while dark
    pub idle_divisor: u32,
    pub channel_numerator: u32,
    pub channel_denominator: u32,
}

pub const CUBE: CubeConfig = CubeConfig {
    size: CUBE_SIZE,
    capacity: VOXEL_COUNT,
    stride: 3,
    default_brightness: 255,
};

pub const RAINBOW: RainbowConfig = RainbowConfig {
    start_hue: 1,
    end_hue: 360,
    saturation: 100,
    luminance: 50,
};

// ~0.5mA per idle pixel, rough approximation per lit channel step
pub const POWER: PowerConfig = PowerConfig {
    idle_divisor: 2,
    channel_numerator: 433,
    channel_denominator: 10_000,
};
