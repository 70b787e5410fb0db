mod led;

pub(crate) use led::EspLedDriver;
