#[cfg(feature = "board+adafruit_clue")]
pub mod nrf52;
