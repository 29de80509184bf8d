use crate::domain::audio::{WaveformTable, DEFAULT_TABLE_LENGTH, MAX_SAMPLE_RATE};
use core::f64::consts::PI;

const TONE_VOLUME: f64 = ((1 << 15) - 1) as f64;
const SHIFT: f64 = (1 << 15) as f64;

/// A waveform length of zero, or one that does not fit a [`WaveformTable`].
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidLength;

/// Table length to use for `frequency`, keeping `length * frequency` within
/// [`MAX_SAMPLE_RATE`] and the table no longer than [`DEFAULT_TABLE_LENGTH`].
pub fn table_length(frequency: u32) -> usize {
    MAX_SAMPLE_RATE
        .checked_div(frequency)
        .map_or(DEFAULT_TABLE_LENGTH, |bound| {
            (bound as usize).clamp(1, DEFAULT_TABLE_LENGTH)
        })
}

/// One cycle of a sine wave, `length` samples long.
pub fn generate(length: usize) -> Result<SineWave, InvalidLength> {
    if length == 0 {
        return Err(InvalidLength);
    }
    Ok(SineWave { length, index: 0 })
}

/// Collect one sine cycle into a table.
pub fn sine_table(length: usize) -> Result<WaveformTable, InvalidLength> {
    if length > DEFAULT_TABLE_LENGTH {
        return Err(InvalidLength);
    }
    Ok(generate(length)?.collect())
}

/// Lazily computed sine cycle. Cloning an unstarted wave gives an identical sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SineWave {
    length: usize,
    index: usize,
}

impl SineWave {
    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Value of sample `index` in a cycle of `length` samples.
    pub fn sample(index: usize, length: usize) -> u16 {
        let phase = 2.0 * PI * (index as f64 / length as f64);
        // Peak is 2^16 - 1 and the trough 1, so the cast never saturates.
        libm::round(TONE_VOLUME * libm::sin(phase) + SHIFT) as u16
    }
}

impl Iterator for SineWave {
    type Item = u16;

    fn next(&mut self) -> Option<u16> {
        if self.index >= self.length {
            return None;
        }
        let value = Self::sample(self.index, self.length);
        self.index += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.length - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for SineWave {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quarter_points() {
        let wave: WaveformTable = sine_table(4).unwrap();
        assert_eq!(&wave[..], &[32768, 65535, 32768, 1]);
    }

    #[test]
    fn generation_is_repeatable() {
        let first: WaveformTable = generate(100).unwrap().collect();
        let second: WaveformTable = generate(100).unwrap().collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 100);

        let wave = generate(100).unwrap();
        assert_eq!(ExactSizeIterator::len(&wave), 100);
        let copy: WaveformTable = wave.clone().collect();
        let original: WaveformTable = wave.collect();
        assert_eq!(copy, original);
        assert_eq!(original, first);
    }

    #[test]
    fn rejects_empty_and_oversized() {
        assert_eq!(generate(0), Err(InvalidLength));
        assert_eq!(sine_table(DEFAULT_TABLE_LENGTH + 1), Err(InvalidLength));
    }

    #[test]
    fn length_for_high_frequencies() {
        assert_eq!(table_length(440), 100);
        assert_eq!(table_length(3500), 100);
        assert_eq!(table_length(3501), 99);
        assert_eq!(table_length(350_000), 1);
        assert_eq!(table_length(1_000_000), 1);
    }
}
