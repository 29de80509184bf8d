//! Adafruit CLUE (nRF52840).
//!
//! Buttons A/B on P1_02/P1_10, red LED on P1_01, white LEDs on P0_10, the
//! NeoPixel on P0_16, the speaker on P1_00, the PDM microphone on
//! P0_01 (clock) / P0_00 (data) and the sensor bus on P0_24 (SDA) / P0_25 (SCL).

use crate::bsp::Board;
use crate::domain::audio::{RawSample, DEFAULT_TABLE_LENGTH};
use crate::domain::color::{Rgb8, BLACK};
use crate::drivers::audio::SAMPLE_COUNT;
use crate::drivers::led::GpioLed;
use crate::traits::audio::{AudioOut, Microphone};
use crate::traits::led::Pixel;
use embassy_embedded_hal::shared_bus::asynch::i2c::I2cDevice;
use embassy_nrf::gpio::{AnyPin, Input, Level, Output, OutputDrive, Pin, Pull};
use embassy_nrf::peripherals::{PDM, PWM0, PWM1, TWISPI0};
use embassy_nrf::pwm::{
    Config as PwmConfig, Prescaler, SequenceConfig, SequenceLoad, SequencePwm,
    SingleSequenceMode, SingleSequencer,
};
use embassy_nrf::{bind_interrupts, pdm, peripherals, pwm, twim, Peripheral};
use embassy_sync::blocking_mutex::raw::NoopRawMutex;
use embassy_sync::mutex::Mutex;
use embassy_time::{Duration, Timer};
use static_cell::StaticCell;

pub use embassy_nrf::config::Config;

bind_interrupts!(struct Irqs {
    PDM => pdm::InterruptHandler<peripherals::PDM>;
    SPIM0_SPIS0_TWIM0_TWIS0_SPI0_TWI0 => twim::InterruptHandler<peripherals::TWISPI0>;
});

/// LSM6DS33 accelerometer and gyroscope.
pub const ACCELEROMETER_ADDR: u8 = 0x6A;
/// LIS3MDL magnetometer.
pub const MAGNETOMETER_ADDR: u8 = 0x1C;
/// APDS9960 proximity, color and gesture sensor.
pub const LIGHT_ADDR: u8 = 0x39;
/// SHT31-D humidity sensor.
pub const HUMIDITY_ADDR: u8 = 0x44;
/// BMP280 pressure and temperature sensor.
pub const PRESSURE_ADDR: u8 = 0x77;

pub type I2cBus = Mutex<NoopRawMutex, twim::Twim<'static, TWISPI0>>;
pub type SensorI2c = I2cDevice<'static, NoopRawMutex, twim::Twim<'static, TWISPI0>>;

pub type ButtonPin = Input<'static>;
pub type LedPin = Output<'static>;
pub type RedLed = GpioLed<LedPin>;
pub type WhiteLeds = GpioLed<LedPin>;

pub struct AdafruitClue {
    pub button_a: ButtonPin,
    pub button_b: ButtonPin,
    pub red_led: RedLed,
    pub white_leds: WhiteLeds,
    pub pixel: NeoPixel,
    pub speaker: PwmAudioOut,
    pub microphone: PdmMicrophone,
    /// Bus shared by the five on-board sensors.
    pub i2c: &'static I2cBus,
}

impl AdafruitClue {
    pub fn init(config: Config) -> Self {
        Self::new(embassy_nrf::init(config))
    }

    /// A bus handle for one sensor driver.
    pub fn sensor_i2c(&self) -> SensorI2c {
        I2cDevice::new(self.i2c)
    }
}

impl Board for AdafruitClue {
    type Peripherals = embassy_nrf::Peripherals;

    fn new(p: Self::Peripherals) -> Self {
        static I2C_BUS: StaticCell<I2cBus> = StaticCell::new();
        static AUDIO_WORDS: StaticCell<[u16; DEFAULT_TABLE_LENGTH]> = StaticCell::new();

        let mut mic_config = pdm::Config::default();
        // 1.28 MHz / 80 = 16 kHz
        mic_config.frequency = pdm::Frequency::_1280K;
        mic_config.ratio = pdm::Ratio::RATIO80;

        let twim = twim::Twim::new(p.TWISPI0, Irqs, p.P0_24, p.P0_25, twim::Config::default());

        Self {
            button_a: Input::new(p.P1_02, Pull::Up),
            button_b: Input::new(p.P1_10, Pull::Up),
            red_led: GpioLed::new(output_pin(p.P1_01.degrade())),
            white_leds: GpioLed::new(output_pin(p.P0_10.degrade())),
            pixel: NeoPixel::new(p.PWM0, p.P0_16.degrade()),
            speaker: PwmAudioOut::new(
                p.PWM1,
                p.P1_00.degrade(),
                AUDIO_WORDS.init([0; DEFAULT_TABLE_LENGTH]),
            ),
            microphone: PdmMicrophone::new(pdm::Pdm::new(
                p.PDM, Irqs, p.P0_01, p.P0_00, mic_config,
            )),
            i2c: I2C_BUS.init(Mutex::new(twim)),
        }
    }
}

fn output_pin(pin: AnyPin) -> Output<'static> {
    Output::new(pin, Level::Low, OutputDrive::Standard)
}

const PWM_CLOCK: u32 = 16_000_000;

#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug)]
pub enum SpeakerError {
    /// `play` outside an open session.
    NotOpen,
    /// Empty table or zero playback rate.
    InvalidSample,
    Pwm(pwm::Error),
}

impl From<pwm::Error> for SpeakerError {
    fn from(e: pwm::Error) -> Self {
        SpeakerError::Pwm(e)
    }
}

/// Speaker output playing raw samples as PWM duty cycles, one PWM period per sample.
pub struct PwmAudioOut {
    pwm: PWM1,
    pin: AnyPin,
    words: &'static mut [u16; DEFAULT_TABLE_LENGTH],
    seq: Option<SequencePwm<'static, PWM1>>,
    bound: bool,
}

impl PwmAudioOut {
    fn new(pwm: PWM1, pin: AnyPin, words: &'static mut [u16; DEFAULT_TABLE_LENGTH]) -> Self {
        Self {
            pwm,
            pin,
            words,
            seq: None,
            bound: false,
        }
    }
}

impl AudioOut for PwmAudioOut {
    type Error = SpeakerError;

    fn open(&mut self) -> Result<(), Self::Error> {
        self.bound = true;
        Ok(())
    }

    fn play(&mut self, sample: &RawSample, looping: bool) -> Result<(), Self::Error> {
        if !self.bound {
            return Err(SpeakerError::NotOpen);
        }
        if sample.is_empty() || sample.sample_rate() == 0 {
            return Err(SpeakerError::InvalidSample);
        }
        // The running sequence reads from `words` until its driver is dropped.
        self.seq = None;

        let top = (PWM_CLOCK / sample.sample_rate()).clamp(2, 0x7FFF);
        for (word, value) in self.words.iter_mut().zip(sample.samples()) {
            *word = ((*value as u32 * top) >> 16) as u16;
        }

        let mut config = PwmConfig::default();
        config.prescaler = Prescaler::Div1;
        config.max_duty = top as u16;

        // SAFETY: the driver previously holding PWM1 and the pin was dropped above.
        let (pwm, pin) = unsafe { (self.pwm.clone_unchecked(), self.pin.clone_unchecked()) };
        let seq = self.seq.insert(SequencePwm::new_1ch(pwm, pin, config)?);

        let mut seq_config = SequenceConfig::default();
        seq_config.refresh = 0;
        seq_config.end_delay = 0;
        let sequencer = SingleSequencer::new(seq, &self.words[..sample.len()], seq_config);
        let mode = if looping {
            SingleSequenceMode::Infinite
        } else {
            SingleSequenceMode::Times(1)
        };
        sequencer.start(mode)?;
        // The sequencer stops playback on drop; dropping `seq` in `stop` ends it instead.
        core::mem::forget(sequencer);
        Ok(())
    }

    fn stop(&mut self) -> Result<(), Self::Error> {
        self.seq = None;
        Ok(())
    }

    fn close(&mut self) {
        self.seq = None;
        self.bound = false;
    }

    fn is_playing(&self) -> bool {
        self.seq.is_some()
    }
}

/// PDM microphone at 16 kHz, reporting unsigned samples centered on `0x8000`.
pub struct PdmMicrophone {
    pdm: pdm::Pdm<'static, PDM>,
}

impl PdmMicrophone {
    fn new(pdm: pdm::Pdm<'static, PDM>) -> Self {
        Self { pdm }
    }
}

impl Microphone for PdmMicrophone {
    type Error = pdm::Error;

    async fn record(&mut self, buffer: &mut [u16]) -> Result<(), Self::Error> {
        let mut raw = [0i16; SAMPLE_COUNT];
        self.pdm.start().await;
        let mut result = Ok(());
        for chunk in buffer.chunks_mut(SAMPLE_COUNT) {
            let raw = &mut raw[..chunk.len()];
            if let Err(e) = self.pdm.sample(raw).await {
                result = Err(e);
                break;
            }
            for (dst, src) in chunk.iter_mut().zip(raw.iter()) {
                *dst = (*src as u16) ^ 0x8000;
            }
        }
        self.pdm.stop().await;
        result
    }
}

const ONE: u16 = 0x8000 | 13;
// Duty = 13/20 ticks (0.8us/1.25us) for a 1
const ZERO: u16 = 0x8000 | 7;
// Duty 7/20 ticks (0.4us/1.25us) for a 0
const RES: u16 = 0x8000;

/// The single on-board WS2812 pixel, clocked out with PWM0.
pub struct NeoPixel {
    pwm: PWM0,
    pin: AnyPin,
    color: Rgb8,
}

impl NeoPixel {
    fn new(pwm: PWM0, pin: AnyPin) -> Self {
        Self {
            pwm,
            pin,
            color: BLACK,
        }
    }
}

impl Pixel for NeoPixel {
    type Error = pwm::Error;

    async fn fill(&mut self, color: Rgb8) -> Result<(), Self::Error> {
        let mut words = [RES; 24 + 40];
        for (i, byte) in [color.g, color.r, color.b].iter().enumerate() {
            for bit in 0..8 {
                words[i * 8 + bit] = if byte & (0x80 >> bit) != 0 { ONE } else { ZERO };
            }
        }

        let mut config = PwmConfig::default();
        config.sequence_load = SequenceLoad::Common;
        config.prescaler = Prescaler::Div1;
        config.max_duty = 20; // 1.25us (1s / 16Mhz * 20)

        // SAFETY: the driver created by the previous fill was dropped at its end.
        let (pwm, pin) = unsafe { (self.pwm.clone_unchecked(), self.pin.clone_unchecked()) };
        let mut seq = SequencePwm::new_1ch(pwm, pin, config)?;

        let mut seq_config = SequenceConfig::default();
        seq_config.end_delay = 799;
        let sequencer = SingleSequencer::new(&mut seq, &words, seq_config);
        sequencer.start(SingleSequenceMode::Times(1))?;
        Timer::after(Duration::from_micros(30 * 41 + 100)).await;

        self.color = color;
        Ok(())
    }

    fn color(&self) -> Rgb8 {
        self.color
    }
}
