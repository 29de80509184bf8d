use crate::domain::pressure::Pressure;

pub trait HumiditySensor {
    type Error;
    /// Relative humidity in percent.
    async fn relative_humidity(&mut self) -> Result<f32, Self::Error>;
}

pub trait PressureSensor {
    type Error;
    async fn pressure(&mut self) -> Result<Pressure, Self::Error>;
}
