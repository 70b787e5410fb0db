//! Integration tests for the `smart-leds` driver adapter.

use cubert::{Device, LedDriver, SmartLedsDriver};
use smart_leds::RGB8;
use tests::PixelSink;

#[test]
fn configure_sends_an_empty_write() {
    let mut driver = SmartLedsDriver::new(PixelSink::default());
    driver.configure_output();
    assert_eq!(driver.inner().writes, vec![Vec::<RGB8>::new()]);
}

#[test]
fn frame_bytes_decode_to_pixels() {
    let mut driver = SmartLedsDriver::new(PixelSink::default());
    driver.write(&[1, 2, 3, 4, 5, 6]);

    let sink = driver.into_inner();
    assert_eq!(sink.writes, vec![vec![RGB8::new(1, 2, 3), RGB8::new(4, 5, 6)]]);
}

#[test]
fn trailing_partial_pixel_is_dropped() {
    let mut driver = SmartLedsDriver::new(PixelSink::default());
    driver.write(&[9, 8, 7, 6]);
    assert_eq!(driver.inner().writes[0], vec![RGB8::new(9, 8, 7)]);
}

#[test]
fn writer_errors_are_swallowed() {
    let sink = PixelSink {
        fail: true,
        ..PixelSink::default()
    };
    let mut driver = SmartLedsDriver::new(sink);
    driver.configure_output();
    driver.write(&[1, 2, 3]);
    assert!(driver.inner().writes.is_empty());
}

#[test]
fn device_frames_reach_the_writer() {
    let mut cube = Device::new(SmartLedsDriver::new(PixelSink::default()));
    cube.show_color(0x0001_0203);

    let writes = &cube.driver().inner().writes;
    assert_eq!(writes.len(), 2);
    assert!(writes[0].is_empty());
    assert_eq!(writes[1].len(), 512);
    assert!(writes[1].iter().all(|&pixel| pixel == RGB8::new(1, 2, 3)));
}
