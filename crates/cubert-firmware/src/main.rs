#![no_std]
#![no_main]
#![feature(type_alias_impl_trait)]

mod config;
mod drivers;
mod tasks;

use embassy_executor::Spawner;
use embassy_time::Duration;

use esp_backtrace as _;
use esp_hal::{clock::CpuClock, timer::timg::TimerGroup};

use crate::drivers::EspLedDriver;
use crate::tasks::cube_demo_task;

esp_bootloader_esp_idf::esp_app_desc!();

#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    esp_println::logger::init_logger_from_env();

    // Initialize hardware
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    // Start rtos
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    esp_rtos::start(timg0.timer0);

    // Build the cube driver and hand it to the demo task
    let driver = EspLedDriver::new(peripherals.RMT, led_gpio!(peripherals));
    log::info!("cube: driver ready");
    spawner.spawn(cube_demo_task(driver)).ok();

    loop {
        embassy_time::Timer::after(Duration::from_secs(5)).await;
    }
}
