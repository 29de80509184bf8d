//! Tone synthesis on the speaker and loudness estimation on the microphone.

pub mod level;
pub mod tone;
pub mod waveform;

pub use level::{normalized_rms, SoundLevel, DEFAULT_LOUD_THRESHOLD, SAMPLE_COUNT};
pub use tone::{TonePlayer, ToneState};
pub use waveform::{generate, sine_table, table_length, InvalidLength, SineWave};

/// Errors raised by the audio drivers, wrapping the error of the underlying device.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioError<E> {
    /// A frequency, duration or table length out of range.
    InvalidArgument,
    /// The output could not be bound to its pin.
    DeviceUnavailable(E),
    /// Capture or playback failed once the device was running.
    DeviceIo(E),
}

impl<E> From<InvalidLength> for AudioError<E> {
    fn from(_: InvalidLength) -> Self {
        AudioError::InvalidArgument
    }
}
