use crate::domain::color::Rgb8;

pub trait Led {
    type Error;
    fn set(&mut self, on: bool) -> Result<(), Self::Error>;
    fn state(&self) -> Result<bool, Self::Error>;

    fn on(&mut self) -> Result<(), Self::Error> {
        self.set(true)
    }

    fn off(&mut self) -> Result<(), Self::Error> {
        self.set(false)
    }
}

/// A single addressable RGB LED.
pub trait Pixel {
    type Error;
    async fn fill(&mut self, color: Rgb8) -> Result<(), Self::Error>;
    fn color(&self) -> Rgb8;
}
