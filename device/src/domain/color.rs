//! Colors for the NeoPixel, the display and the light sensor.

use core::ops::Add;

pub const BLACK: Rgb8 = Rgb8::new(0x00, 0x00, 0x00);
pub const WHITE: Rgb8 = Rgb8::new(0xFF, 0xFF, 0xFF);
pub const RED: Rgb8 = Rgb8::new(0xFF, 0x00, 0x00);
pub const GREEN: Rgb8 = Rgb8::new(0x00, 0xFF, 0x00);
pub const BLUE: Rgb8 = Rgb8::new(0x00, 0x00, 0xFF);

#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Packed `0xRRGGBB` form.
    pub const fn to_u32(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }
}

impl From<u32> for Rgb8 {
    fn from(rgb: u32) -> Self {
        Self::new((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
    }
}

impl From<(u8, u8, u8)> for Rgb8 {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl Add for Rgb8 {
    type Output = Rgb8;

    fn add(self, rhs: Self) -> Self::Output {
        Self::Output {
            r: self.r.saturating_add(rhs.r),
            g: self.g.saturating_add(rhs.g),
            b: self.b.saturating_add(rhs.b),
        }
    }
}

/// Raw red, green, blue and clear channel counts from the light sensor.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ColorReading {
    pub r: u16,
    pub g: u16,
    pub b: u16,
    pub c: u16,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packed_form() {
        let c = Rgb8::from(0x12_34_56);
        assert_eq!(c, Rgb8::new(0x12, 0x34, 0x56));
        assert_eq!(c.to_u32(), 0x12_34_56);
    }

    #[test]
    fn add_saturates() {
        assert_eq!(RED + Rgb8::new(1, 2, 3), Rgb8::new(0xFF, 2, 3));
        assert_eq!(WHITE + WHITE, WHITE);
    }
}
