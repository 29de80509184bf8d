//! Three-axis readings from the motion and magnetic sensors.

/// An `x, y, z` reading. Units depend on the source: m/s² for acceleration,
/// degrees per second for angular rate and µT for the magnetic field.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vector3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn magnitude(&self) -> f32 {
        libm::sqrtf(self.x * self.x + self.y * self.y + self.z * self.z)
    }
}

impl From<(f32, f32, f32)> for Vector3 {
    fn from((x, y, z): (f32, f32, f32)) -> Self {
        Self::new(x, y, z)
    }
}

/// Gesture reported by the proximity/gesture sensor.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Gesture {
    None = 0,
    Up = 1,
    Down = 2,
    Left = 3,
    Right = 4,
}

impl From<u8> for Gesture {
    fn from(code: u8) -> Self {
        match code {
            1 => Gesture::Up,
            2 => Gesture::Down,
            3 => Gesture::Left,
            4 => Gesture::Right,
            _ => Gesture::None,
        }
    }
}

impl From<Gesture> for u8 {
    fn from(gesture: Gesture) -> u8 {
        gesture as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_gesture_codes() {
        assert_eq!(Gesture::from(3), Gesture::Left);
        assert_eq!(Gesture::from(0xFF), Gesture::None);
        assert_eq!(u8::from(Gesture::Right), 4);
    }

    #[test]
    fn magnitude() {
        assert_eq!(Vector3::new(3.0, 4.0, 0.0).magnitude(), 5.0);
    }
}
