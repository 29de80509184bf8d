//! Barometric pressure and the altitude derived from it.

use core::fmt::{Display, Formatter};

/// Standard atmosphere at sea level, in hectopascals.
pub const DEFAULT_SEA_LEVEL_PRESSURE: f32 = 1013.25;

/// A pressure in hectopascals.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
pub struct Pressure(f32);

impl Pressure {
    pub const fn from_hpa(hpa: f32) -> Self {
        Self(hpa)
    }

    pub fn hpa(&self) -> f32 {
        self.0
    }

    /// Altitude in meters above the level where the pressure is `sea_level`.
    ///
    /// Uses the BMP280 datasheet approximation of the barometric formula.
    pub fn altitude(&self, sea_level: Pressure) -> f32 {
        44330.0 * (1.0 - libm::powf(self.0 / sea_level.0, 0.1903))
    }
}

impl From<f32> for Pressure {
    fn from(hpa: f32) -> Self {
        Self(hpa)
    }
}

impl Display for Pressure {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        Display::fmt(&self.0, f)?;
        f.write_str(" hPa")
    }
}
