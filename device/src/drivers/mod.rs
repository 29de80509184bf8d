pub mod audio;
pub mod button;
pub mod display;
pub mod led;
