//! Thin wrappers exposing the CLUE peripherals as simple readings.
//!
//! Each wrapper owns only the devices it reads, so an application links and
//! borrows just what it uses. The board module hands the devices out; the
//! wrappers work with any implementation of the traits in [`crate::traits`].

use crate::domain::color::{ColorReading, Rgb8};
use crate::domain::motion::{Gesture, Vector3};
use crate::domain::pressure::{Pressure, DEFAULT_SEA_LEVEL_PRESSURE};
use crate::domain::temperature::{Celsius, Temperature};
use crate::drivers::button::{Button, ButtonId, ButtonSet, GamePad};
use crate::traits::button::Button as _;
use crate::traits::led::{Led, Pixel};
use crate::traits::sensors::*;
use embassy_futures::select::{select, Either};
use embedded_hal::digital::InputPin;
use embedded_hal_async::digital::Wait;

#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorError<E> {
    Device(E),
    /// The function was read before being enabled.
    NotEnabled,
}

impl<E> From<E> for SensorError<E> {
    fn from(e: E) -> Self {
        SensorError::Device(e)
    }
}

/// Buttons A and B.
pub struct Buttons<A: InputPin, B: InputPin<Error = A::Error>> {
    gamepad: GamePad<A, B>,
}

impl<A: InputPin, B: InputPin<Error = A::Error>> Buttons<A, B> {
    pub fn new(a: A, b: B) -> Self {
        Self {
            gamepad: GamePad::new(Button::new(a), Button::new(b)),
        }
    }

    /// `true` while button A is held down.
    pub fn button_a(&mut self) -> Result<bool, A::Error> {
        self.gamepad.button_a().is_pressed()
    }

    /// `true` while button B is held down.
    pub fn button_b(&mut self) -> Result<bool, A::Error> {
        self.gamepad.button_b().is_pressed()
    }

    /// Buttons pressed since the last call.
    pub fn were_pressed(&mut self) -> Result<ButtonSet, A::Error> {
        self.gamepad.get_pressed()
    }

    /// Sample the buttons so short presses between two `were_pressed` calls are kept.
    pub fn poll(&mut self) -> Result<(), A::Error> {
        self.gamepad.poll()
    }
}

impl<A, B> Buttons<A, B>
where
    A: InputPin + Wait,
    B: InputPin<Error = A::Error> + Wait,
{
    /// Wait for either button to go down. A button already held counts at once.
    pub async fn wait_any_pressed(&mut self) -> Result<ButtonId, A::Error> {
        let (a, b) = self.gamepad.buttons();
        match select(a.wait_pressed(), b.wait_pressed()).await {
            Either::First(result) => result.map(|_| ButtonId::A),
            Either::Second(result) => result.map(|_| ButtonId::B),
        }
    }
}

/// The white front LEDs, the red status LED and the NeoPixel.
pub struct Leds<W: Led, R: Led, P: Pixel> {
    white: W,
    red: R,
    pixel: P,
}

impl<W: Led, R: Led, P: Pixel> Leds<W, R, P> {
    pub fn new(white: W, red: R, pixel: P) -> Self {
        Self { white, red, pixel }
    }

    pub fn white_leds(&self) -> Result<bool, W::Error> {
        self.white.state()
    }

    pub fn set_white_leds(&mut self, on: bool) -> Result<(), W::Error> {
        self.white.set(on)
    }

    pub fn red_led(&self) -> Result<bool, R::Error> {
        self.red.state()
    }

    pub fn set_red_led(&mut self, on: bool) -> Result<(), R::Error> {
        self.red.set(on)
    }

    pub fn pixel(&self) -> Rgb8 {
        self.pixel.color()
    }

    pub async fn set_pixel(&mut self, color: Rgb8) -> Result<(), P::Error> {
        self.pixel.fill(color).await
    }
}

/// Accelerometer and gyroscope.
pub struct Motion<S> {
    sensor: S,
}

impl<S, E> Motion<S>
where
    S: Accelerometer<Error = E> + Gyroscope<Error = E>,
{
    pub fn new(sensor: S) -> Self {
        Self { sensor }
    }

    /// Acceleration on the x, y and z axes in m/s².
    pub async fn acceleration(&mut self) -> Result<Vector3, E> {
        self.sensor.acceleration().await
    }

    /// Angular velocity on the x, y and z axes in degrees per second.
    pub async fn gyro(&mut self) -> Result<Vector3, E> {
        self.sensor.gyro().await
    }
}

/// Magnetometer.
pub struct Compass<S: Magnetometer> {
    sensor: S,
}

impl<S: Magnetometer> Compass<S> {
    pub fn new(sensor: S) -> Self {
        Self { sensor }
    }

    /// Magnetic field on the x, y and z axes in microteslas.
    pub async fn magnetic(&mut self) -> Result<Vector3, S::Error> {
        self.sensor.magnetic().await
    }
}

const PROXIMITY: u8 = 0x01;
const COLOR: u8 = 0x02;
const GESTURE: u8 = 0x04;

/// Proximity, color and gesture sensor. Every function is enabled before it is read.
pub struct Light<S> {
    sensor: S,
    enabled: u8,
}

impl<S, E> Light<S>
where
    S: ProximitySensor<Error = E> + ColorSensor<Error = E> + GestureSensor<Error = E>,
{
    pub fn new(sensor: S) -> Self {
        Self { sensor, enabled: 0 }
    }

    pub async fn enable_proximity(&mut self) -> Result<(), SensorError<E>> {
        self.sensor.enable_proximity(true).await?;
        self.enabled |= PROXIMITY;
        Ok(())
    }

    /// Relative proximity, from 0 when nothing is near to 255 when covered.
    pub async fn proximity(&mut self) -> Result<u8, SensorError<E>> {
        self.check(PROXIMITY)?;
        Ok(self.sensor.proximity().await?)
    }

    pub async fn enable_color(&mut self) -> Result<(), SensorError<E>> {
        self.sensor.enable_color(true).await?;
        self.enabled |= COLOR;
        Ok(())
    }

    /// Raw red, green, blue and clear light values.
    pub async fn color(&mut self) -> Result<ColorReading, SensorError<E>> {
        self.check(COLOR)?;
        Ok(self.sensor.color().await?)
    }

    pub async fn enable_gesture(&mut self) -> Result<(), SensorError<E>> {
        self.sensor.enable_gesture(true).await?;
        self.enabled |= GESTURE;
        Ok(())
    }

    /// The last gesture seen, or [`Gesture::None`].
    pub async fn gesture(&mut self) -> Result<Gesture, SensorError<E>> {
        self.check(GESTURE)?;
        Ok(self.sensor.gesture().await?)
    }

    fn check(&self, function: u8) -> Result<(), SensorError<E>> {
        if self.enabled & function == 0 {
            Err(SensorError::NotEnabled)
        } else {
            Ok(())
        }
    }
}

/// Humidity and barometric pressure sensors.
pub struct Environment<H, P> {
    humidity: H,
    pressure: P,
    sea_level: Pressure,
}

impl<H, P, E> Environment<H, P>
where
    H: HumiditySensor,
    P: PressureSensor<Error = E> + TemperatureSensor<Celsius, Error = E>,
{
    pub fn new(humidity: H, pressure: P) -> Self {
        Self {
            humidity,
            pressure,
            sea_level: Pressure::from_hpa(DEFAULT_SEA_LEVEL_PRESSURE),
        }
    }

    /// Relative humidity in percent.
    pub async fn humidity(&mut self) -> Result<f32, H::Error> {
        self.humidity.relative_humidity().await
    }

    pub async fn pressure(&mut self) -> Result<Pressure, E> {
        self.pressure.pressure().await
    }

    pub async fn temperature(&mut self) -> Result<Temperature<Celsius>, E> {
        self.pressure.temperature().await
    }

    /// Altitude in meters, relative to [`Environment::sea_level_pressure`].
    pub async fn altitude(&mut self) -> Result<f32, E> {
        let pressure = self.pressure.pressure().await?;
        Ok(pressure.altitude(self.sea_level))
    }

    pub fn sea_level_pressure(&self) -> Pressure {
        self.sea_level
    }

    /// Set the local sea level pressure before reading the altitude for an accurate value.
    pub fn set_sea_level_pressure(&mut self, pressure: Pressure) {
        self.sea_level = pressure;
    }
}
