//! Functions of the combined proximity, color and gesture sensor.
//!
//! Each function is switched on explicitly before it is read.

use crate::domain::{color::ColorReading, motion::Gesture};

pub trait ProximitySensor {
    type Error;
    async fn enable_proximity(&mut self, enable: bool) -> Result<(), Self::Error>;
    /// Relative proximity, 0 (far) to 255 (close).
    async fn proximity(&mut self) -> Result<u8, Self::Error>;
}

pub trait ColorSensor {
    type Error;
    async fn enable_color(&mut self, enable: bool) -> Result<(), Self::Error>;
    async fn color(&mut self) -> Result<ColorReading, Self::Error>;
}

pub trait GestureSensor {
    type Error;
    async fn enable_gesture(&mut self, enable: bool) -> Result<(), Self::Error>;
    async fn gesture(&mut self) -> Result<Gesture, Self::Error>;
}
