use crate::domain::motion::Vector3;

/// Linear acceleration in m/s².
pub trait Accelerometer {
    type Error;
    async fn acceleration(&mut self) -> Result<Vector3, Self::Error>;
}

/// Angular rate in degrees per second.
pub trait Gyroscope {
    type Error;
    async fn gyro(&mut self) -> Result<Vector3, Self::Error>;
}

/// Magnetic field in microteslas.
pub trait Magnetometer {
    type Error;
    async fn magnetic(&mut self) -> Result<Vector3, Self::Error>;
}
