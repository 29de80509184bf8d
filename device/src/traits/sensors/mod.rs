pub mod environment;
pub mod light;
pub mod motion;
pub mod temperature;

pub use environment::{HumiditySensor, PressureSensor};
pub use light::{ColorSensor, GestureSensor, ProximitySensor};
pub use motion::{Accelerometer, Gyroscope, Magnetometer};
pub use temperature::TemperatureSensor;
