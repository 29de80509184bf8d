use super::AudioError;
use crate::traits::audio::Microphone;

/// Number of samples captured per sound level reading (10 ms at 16 kHz).
pub const SAMPLE_COUNT: usize = 160;

/// Level above which a sound counts as loud.
pub const DEFAULT_LOUD_THRESHOLD: f32 = 200.0;

/// Estimates ambient loudness from short microphone captures.
pub struct SoundLevel<M: Microphone> {
    mic: M,
    samples: [u16; SAMPLE_COUNT],
}

impl<M: Microphone> SoundLevel<M> {
    pub fn new(mic: M) -> Self {
        Self {
            mic,
            samples: [0; SAMPLE_COUNT],
        }
    }

    /// Capture a buffer and return its RMS deviation from the mean.
    ///
    /// The value has no unit; silence is close to 0 and a clap reaches several hundred.
    pub async fn sample_level(&mut self) -> Result<f32, AudioError<M::Error>> {
        if let Err(e) = self.mic.record(&mut self.samples).await {
            warn!("microphone capture failed");
            return Err(AudioError::DeviceIo(e));
        }
        let level = normalized_rms(&self.samples);
        trace!("sound level {}", level);
        Ok(level)
    }

    /// Whether the sound level is strictly above `threshold`.
    pub async fn is_loud(&mut self, threshold: f32) -> Result<bool, AudioError<M::Error>> {
        Ok(self.sample_level().await? > threshold)
    }

    /// [`SoundLevel::is_loud`] with [`DEFAULT_LOUD_THRESHOLD`].
    pub async fn is_loud_default(&mut self) -> Result<bool, AudioError<M::Error>> {
        self.is_loud(DEFAULT_LOUD_THRESHOLD).await
    }

    /// Samples from the most recent capture.
    pub fn samples(&self) -> &[u16] {
        &self.samples
    }

    pub fn microphone(&mut self) -> &mut M {
        &mut self.mic
    }
}

/// Root mean square of `values` around their mean.
///
/// The mean is truncated to an integer before the deviations are taken,
/// which keeps readings comparable with recorded reference levels.
pub fn normalized_rms(values: &[u16]) -> f32 {
    if values.is_empty() {
        return 0.0;
    }
    let count = values.len() as u64;
    let sum: u64 = values.iter().map(|&v| v as u64).sum();
    let mean = (sum / count) as i64;
    let squares: f64 = values
        .iter()
        .map(|&v| {
            let deviation = (v as i64 - mean) as f64;
            deviation * deviation
        })
        .sum();
    libm::sqrt(squares / count as f64) as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_signal_is_silent() {
        assert_eq!(normalized_rms(&[1234; SAMPLE_COUNT]), 0.0);
        assert_eq!(normalized_rms(&[]), 0.0);
    }

    #[test]
    fn square_wave() {
        // mean 150, every sample 50 away from it
        assert_eq!(normalized_rms(&[100, 200, 100, 200]), 50.0);
    }

    #[test]
    fn mean_is_truncated() {
        // mean 0.5 truncates to 0, so the deviations are 0 and 1
        let level = normalized_rms(&[0, 1]);
        assert!((level - libm::sqrtf(0.5)).abs() < 1e-6);
    }
}
