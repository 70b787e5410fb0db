use esp_hal::xtensa_lx::interrupt;
use esp_hal::{gpio::interconnect::PeripheralOutput, peripherals::RMT, rmt::Rmt, time::Rate};
use esp_hal_smartled::{SmartLedsAdapter, buffer_size, smart_led_buffer};
use static_cell::make_static;

use cubert::{LedDriver, SmartLedsDriver, VOXEL_COUNT};

type CubeAdapter<'a> = SmartLedsAdapter<'a, { buffer_size(VOXEL_COUNT) }>;

/// ESP-specific LED driver using RMT peripheral
///
/// This driver uses the ESP32's RMT (Remote Control) peripheral
/// to generate the precise timing signals required by WS2812B LEDs.
pub(crate) struct EspLedDriver<'a> {
    inner: SmartLedsDriver<CubeAdapter<'a>>,
}

impl<'a> EspLedDriver<'a> {
    /// Create a new ESP LED driver
    ///
    /// # Arguments
    /// * `rmt` - RMT peripheral
    /// * `pin` - GPIO pin connected to the cube data line
    pub(crate) fn new<O>(rmt: RMT<'a>, pin: O) -> Self
    where
        O: PeripheralOutput<'a>,
    {
        let rmt = Rmt::new(rmt, Rate::from_mhz(80)).expect("rmt: peripheral init failed");

        // The RMT buffer has to outlive the adapter, so it is leaked into a static
        let rmt_buffer = make_static!(smart_led_buffer!(VOXEL_COUNT));
        let adapter = SmartLedsAdapter::new(rmt.channel0, pin, rmt_buffer);

        Self {
            inner: SmartLedsDriver::new(adapter),
        }
    }
}

impl LedDriver for EspLedDriver<'static> {
    fn configure_output(&mut self) {
        interrupt::free(|| self.inner.configure_output());
    }

    fn write(&mut self, frame: &[u8]) {
        // WS2812 timing must not be interrupted mid-frame
        interrupt::free(|| self.inner.write(frame));
    }
}
