//! Host-side doubles for the device traits, used by the tests.

use crate::domain::audio::RawSample;
use crate::domain::color::{ColorReading, Rgb8, BLACK};
use crate::domain::motion::{Gesture, Vector3};
use crate::domain::pressure::Pressure;
use crate::domain::temperature::{Celsius, Temperature};
use crate::traits::audio::{AudioOut, Microphone};
use crate::traits::display::TextTarget;
use crate::traits::led::Pixel;
use crate::traits::sensors::*;
use core::cell::RefCell;
use core::convert::Infallible;
use core::sync::atomic::{AtomicBool, Ordering};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use embassy_time::Duration;
use embedded_hal::digital::{ErrorType, InputPin, OutputPin};
use embedded_hal_async::delay::DelayNs;
use embedded_hal_async::digital::Wait;
use std::collections::VecDeque;
use std::rc::Rc;
use std::sync::Arc;

/// Error raised by the doubles when told to fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestError;

/// One call to [`AudioOut::play`].
#[derive(Debug, Clone, PartialEq)]
pub struct PlayRecord {
    pub samples: Vec<u16>,
    pub sample_rate: u32,
    pub looping: bool,
}

/// Everything a [`TestAudioOut`] was asked to do.
#[derive(Debug, Default)]
pub struct OutputLog {
    pub opens: usize,
    pub closes: usize,
    pub stops: usize,
    pub plays: Vec<PlayRecord>,
    pub open: bool,
    pub playing: bool,
}

/// An audio output recording its calls, optionally failing some of them.
///
/// The log is shared, so it stays readable after the output is moved into
/// (and dropped with) a player.
#[derive(Default)]
pub struct TestAudioOut {
    log: Rc<RefCell<OutputLog>>,
    fail_open: bool,
    fail_play: bool,
    fail_stop: bool,
}

impl TestAudioOut {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_open(mut self) -> Self {
        self.fail_open = true;
        self
    }

    pub fn failing_play(mut self) -> Self {
        self.fail_play = true;
        self
    }

    pub fn failing_stop(mut self) -> Self {
        self.fail_stop = true;
        self
    }

    pub fn log(&self) -> Rc<RefCell<OutputLog>> {
        self.log.clone()
    }
}

impl AudioOut for TestAudioOut {
    type Error = TestError;

    fn open(&mut self) -> Result<(), TestError> {
        let mut log = self.log.borrow_mut();
        if self.fail_open || log.open {
            return Err(TestError);
        }
        log.opens += 1;
        log.open = true;
        Ok(())
    }

    fn play(&mut self, sample: &RawSample, looping: bool) -> Result<(), TestError> {
        let mut log = self.log.borrow_mut();
        if self.fail_play || !log.open {
            return Err(TestError);
        }
        log.plays.push(PlayRecord {
            samples: sample.samples().to_vec(),
            sample_rate: sample.sample_rate(),
            looping,
        });
        log.playing = true;
        Ok(())
    }

    fn stop(&mut self) -> Result<(), TestError> {
        let mut log = self.log.borrow_mut();
        log.stops += 1;
        log.playing = false;
        if self.fail_stop {
            Err(TestError)
        } else {
            Ok(())
        }
    }

    fn close(&mut self) {
        let mut log = self.log.borrow_mut();
        log.closes += 1;
        log.open = false;
        log.playing = false;
    }

    fn is_playing(&self) -> bool {
        self.log.borrow().playing
    }
}

/// A microphone replaying queued captures.
///
/// Each `record` consumes one queued capture, repeating it to fill the buffer.
/// With nothing queued the buffer is filled with silence (`0x8000`).
#[derive(Default)]
pub struct TestMicrophone {
    captures: VecDeque<Vec<u16>>,
    fail: bool,
    pub records: usize,
}

impl TestMicrophone {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn push(&mut self, capture: &[u16]) {
        self.captures.push_back(capture.to_vec());
    }
}

impl Microphone for TestMicrophone {
    type Error = TestError;

    async fn record(&mut self, buffer: &mut [u16]) -> Result<(), TestError> {
        self.records += 1;
        if self.fail {
            return Err(TestError);
        }
        match self.captures.pop_front() {
            Some(capture) if !capture.is_empty() => {
                for (dst, src) in buffer.iter_mut().zip(capture.iter().cycle()) {
                    *dst = *src;
                }
            }
            _ => buffer.fill(0x8000),
        }
        Ok(())
    }
}

/// A pin whose level is driven by the test. Clones share the level.
#[derive(Clone)]
pub struct TestPin {
    inner: Arc<InnerPin>,
}

struct InnerPin {
    value: AtomicBool,
    signal: Signal<CriticalSectionRawMutex, ()>,
}

impl TestPin {
    pub fn new(initial: bool) -> Self {
        Self {
            inner: Arc::new(InnerPin {
                value: AtomicBool::new(initial),
                signal: Signal::new(),
            }),
        }
    }

    pub fn set(&self, value: bool) {
        self.inner.value.store(value, Ordering::SeqCst);
        self.inner.signal.signal(());
    }

    pub fn get(&self) -> bool {
        self.inner.value.load(Ordering::SeqCst)
    }

    async fn wait_for(&self, value: bool) {
        loop {
            self.inner.signal.reset();
            if self.get() == value {
                return;
            }
            self.inner.signal.wait().await;
        }
    }
}

impl ErrorType for TestPin {
    type Error = Infallible;
}

impl InputPin for TestPin {
    fn is_high(&mut self) -> Result<bool, Infallible> {
        Ok(self.get())
    }

    fn is_low(&mut self) -> Result<bool, Infallible> {
        Ok(!self.get())
    }
}

impl OutputPin for TestPin {
    fn set_low(&mut self) -> Result<(), Infallible> {
        self.set(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Infallible> {
        self.set(true);
        Ok(())
    }
}

impl Wait for TestPin {
    async fn wait_for_high(&mut self) -> Result<(), Infallible> {
        self.wait_for(true).await;
        Ok(())
    }

    async fn wait_for_low(&mut self) -> Result<(), Infallible> {
        self.wait_for(false).await;
        Ok(())
    }

    async fn wait_for_rising_edge(&mut self) -> Result<(), Infallible> {
        self.wait_for(false).await;
        self.wait_for(true).await;
        Ok(())
    }

    async fn wait_for_falling_edge(&mut self) -> Result<(), Infallible> {
        self.wait_for(true).await;
        self.wait_for(false).await;
        Ok(())
    }

    async fn wait_for_any_edge(&mut self) -> Result<(), Infallible> {
        let level = self.get();
        self.wait_for(!level).await;
        Ok(())
    }
}

/// A delay returning at once, adding up the time it was asked to wait.
#[derive(Default)]
pub struct TestDelay {
    elapsed_ns: u64,
    pub calls: usize,
}

impl TestDelay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn elapsed(&self) -> Duration {
        Duration::from_micros(self.elapsed_ns / 1000)
    }
}

impl DelayNs for TestDelay {
    async fn delay_ns(&mut self, ns: u32) {
        self.calls += 1;
        self.elapsed_ns += ns as u64;
    }

    async fn delay_us(&mut self, us: u32) {
        self.calls += 1;
        self.elapsed_ns += us as u64 * 1000;
    }
}

/// A pixel remembering every color written.
#[derive(Default)]
pub struct TestPixel {
    pub fills: Vec<Rgb8>,
    pub fail: bool,
}

impl Pixel for TestPixel {
    type Error = TestError;

    async fn fill(&mut self, color: Rgb8) -> Result<(), TestError> {
        if self.fail {
            return Err(TestError);
        }
        self.fills.push(color);
        Ok(())
    }

    fn color(&self) -> Rgb8 {
        self.fills.last().copied().unwrap_or(BLACK)
    }
}

/// Fixed readings for every on-board sensor.
pub struct TestSensors {
    pub acceleration: Vector3,
    pub gyro: Vector3,
    pub magnetic: Vector3,
    pub proximity: u8,
    pub color: ColorReading,
    pub gesture: Gesture,
    pub humidity: f32,
    pub pressure: Pressure,
    pub temperature: f32,
    /// Proximity, color and gesture enable flags as last written.
    pub enabled: (bool, bool, bool),
    pub fail: bool,
}

impl Default for TestSensors {
    fn default() -> Self {
        Self {
            acceleration: Vector3::new(0.0, 0.0, 9.81),
            gyro: Vector3::default(),
            magnetic: Vector3::new(20.0, -5.0, 40.0),
            proximity: 0,
            color: ColorReading::default(),
            gesture: Gesture::None,
            humidity: 45.0,
            pressure: Pressure::from_hpa(1013.25),
            temperature: 21.5,
            enabled: (false, false, false),
            fail: false,
        }
    }
}

impl TestSensors {
    fn read<T>(&self, value: T) -> Result<T, TestError> {
        if self.fail {
            Err(TestError)
        } else {
            Ok(value)
        }
    }
}

impl Accelerometer for TestSensors {
    type Error = TestError;
    async fn acceleration(&mut self) -> Result<Vector3, TestError> {
        self.read(self.acceleration)
    }
}

impl Gyroscope for TestSensors {
    type Error = TestError;
    async fn gyro(&mut self) -> Result<Vector3, TestError> {
        self.read(self.gyro)
    }
}

impl Magnetometer for TestSensors {
    type Error = TestError;
    async fn magnetic(&mut self) -> Result<Vector3, TestError> {
        self.read(self.magnetic)
    }
}

impl ProximitySensor for TestSensors {
    type Error = TestError;
    async fn enable_proximity(&mut self, enable: bool) -> Result<(), TestError> {
        self.read(())?;
        self.enabled.0 = enable;
        Ok(())
    }
    async fn proximity(&mut self) -> Result<u8, TestError> {
        self.read(self.proximity)
    }
}

impl ColorSensor for TestSensors {
    type Error = TestError;
    async fn enable_color(&mut self, enable: bool) -> Result<(), TestError> {
        self.read(())?;
        self.enabled.1 = enable;
        Ok(())
    }
    async fn color(&mut self) -> Result<ColorReading, TestError> {
        self.read(self.color)
    }
}

impl GestureSensor for TestSensors {
    type Error = TestError;
    async fn enable_gesture(&mut self, enable: bool) -> Result<(), TestError> {
        self.read(())?;
        self.enabled.2 = enable;
        Ok(())
    }
    async fn gesture(&mut self) -> Result<Gesture, TestError> {
        self.read(self.gesture)
    }
}

impl HumiditySensor for TestSensors {
    type Error = TestError;
    async fn relative_humidity(&mut self) -> Result<f32, TestError> {
        self.read(self.humidity)
    }
}

impl PressureSensor for TestSensors {
    type Error = TestError;
    async fn pressure(&mut self) -> Result<Pressure, TestError> {
        self.read(self.pressure)
    }
}

impl TemperatureSensor<Celsius> for TestSensors {
    type Error = TestError;
    async fn temperature(&mut self) -> Result<Temperature<Celsius>, TestError> {
        self.read(Temperature::new(self.temperature))
    }
}

/// One call to [`TextTarget::draw_text`].
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCall {
    pub x: i32,
    pub y: i32,
    pub text: String,
    pub color: Rgb8,
    pub scale: u8,
}

/// A screen recording what was drawn since the last clear.
#[derive(Default)]
pub struct TestTarget {
    pub draws: Vec<DrawCall>,
    pub clears: usize,
    pub released: bool,
}

impl TextTarget for TestTarget {
    type Error = TestError;

    fn clear(&mut self) -> Result<(), TestError> {
        self.clears += 1;
        self.released = false;
        self.draws.clear();
        Ok(())
    }

    fn draw_text(
        &mut self,
        x: i32,
        y: i32,
        text: &str,
        color: Rgb8,
        scale: u8,
    ) -> Result<(), TestError> {
        self.draws.push(DrawCall {
            x,
            y,
            text: text.to_string(),
            color,
            scale,
        });
        Ok(())
    }

    fn release(&mut self) -> Result<(), TestError> {
        self.released = true;
        Ok(())
    }
}
