use embassy_time::{Duration, Timer};

use cubert::{CUBE_SIZE, Device, NamedColor, hsl_to_rgb};

use crate::config;
use crate::drivers::EspLedDriver;

type CubeDevice = Device<EspLedDriver<'static>>;

const ROTATE_FRAMES: i32 = 512;

/// Task cycling through the demo scenes forever
#[embassy_executor::task]
pub(crate) async fn cube_demo_task(driver: EspLedDriver<'static>) {
    let mut cube = Device::new(driver);
    cube.set_brightness(config::LIGHT.brightness);
    cube.clear();
    cube.flush();

    loop {
        palette_scene(&mut cube).await;
        rainbow_scene(&mut cube).await;
        layer_scene(&mut cube).await;
        eased_scene(&mut cube).await;
    }
}

async fn frame_delay() {
    Timer::after(Duration::from_millis(config::LIGHT.frame_ms)).await;
}

/// Dim future writes when the last frame was over budget
fn limit_power(cube: &mut CubeDevice) {
    let draw = cube.power();
    if draw > config::LIGHT.max_current_ma {
        let brightness = i32::from(cube.brightness()) * 3 / 4;
        log::warn!("cube: {} mA over budget, brightness -> {}", draw, brightness);
        cube.set_brightness(brightness);
    }
}

async fn palette_scene(cube: &mut CubeDevice) {
    for color in NamedColor::ALL {
        log::info!("cube: showing {}", color.as_str());
        cube.show_color(color.rgb());
        limit_power(cube);
        Timer::after(Duration::from_millis(config::LIGHT.frame_ms * 10)).await;
    }
}

async fn rainbow_scene(cube: &mut CubeDevice) {
    cube.show_default_rainbow();
    limit_power(cube);
    for _ in 0..ROTATE_FRAMES {
        cube.rotate(1);
        cube.flush();
        frame_delay().await;
    }
}

async fn layer_scene(cube: &mut CubeDevice) {
    for z in 0..CUBE_SIZE {
        cube.clear();
        let color = hsl_to_rgb(z * 45, 99, 50);
        for x in 0..CUBE_SIZE {
            for y in 0..CUBE_SIZE {
                cube.set_pixel_at(x, y, z, color);
            }
        }
        cube.flush();
        Timer::after(Duration::from_millis(config::LIGHT.frame_ms * 4)).await;
    }
}

async fn eased_scene(cube: &mut CubeDevice) {
    cube.show_color(NamedColor::White.rgb());
    cube.ease_brightness();
    cube.flush();
    log::info!("cube: eased frame draws ~{} mA", cube.power());
    for _ in 0..CUBE_SIZE {
        cube.shift(64);
        cube.flush();
        Timer::after(Duration::from_millis(config::LIGHT.frame_ms * 4)).await;
    }
}
