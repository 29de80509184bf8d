//! Sample data handed to an audio output.

/// Longest waveform table the tone player builds.
pub const DEFAULT_TABLE_LENGTH: usize = 100;

/// Highest playback rate, in samples per second, the speaker output supports.
pub const MAX_SAMPLE_RATE: u32 = 350_000;

/// One cycle of a waveform in unsigned 16-bit fixed point (silence is `0x8000`).
pub type WaveformTable = heapless::Vec<u16, DEFAULT_TABLE_LENGTH>;

/// A waveform table bound to the rate it is played back at.
///
/// Looping the table at `sample_rate` samples per second reproduces a tone of
/// `sample_rate / len` Hz, whatever the table length is.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RawSample {
    table: WaveformTable,
    sample_rate: u32,
}

impl RawSample {
    pub fn new(table: WaveformTable) -> Self {
        Self {
            table,
            sample_rate: 0,
        }
    }

    pub fn samples(&self) -> &[u16] {
        &self.table
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn set_sample_rate(&mut self, sample_rate: u32) {
        self.sample_rate = sample_rate;
    }

    /// Frequency, in Hz, produced when the table is looped at the current rate.
    pub fn frequency(&self) -> u32 {
        match self.table.len() as u32 {
            0 => 0,
            len => self.sample_rate / len,
        }
    }
}
