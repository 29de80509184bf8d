pub mod audio;
pub mod color;
pub mod motion;
pub mod pressure;
pub mod temperature;
