pub(crate) struct LightConfig {
    /// Brightness applied to every color write (0-255)
    pub(crate) brightness: i32,
    /// Delay between animation frames
    pub(crate) frame_ms: u64,
    /// Dim the cube when the estimated draw goes above this
    pub(crate) max_current_ma: u32,
}

#[cfg(feature = "desk")]
pub(crate) const LIGHT: LightConfig = LightConfig {
    brightness: 48,
    frame_ms: 80,
    max_current_ma: 1_000,
};
#[cfg(not(feature = "desk"))]
pub(crate) const LIGHT: LightConfig = LightConfig {
    brightness: 128,
    frame_ms: 40,
    max_current_ma: 4_000,
};

#[macro_export]
macro_rules! led_gpio {
    ($p:expr) => {
        $p.GPIO25
    };
}
