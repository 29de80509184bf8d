use super::waveform::{sine_table, table_length};
use super::AudioError;
use crate::domain::audio::{RawSample, MAX_SAMPLE_RATE};
use crate::traits::audio::AudioOut;
use embassy_time::Duration;
use embedded_hal_async::delay::DelayNs;

#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToneState {
    Idle,
    Playing,
}

/// Plays a continuous sine tone by looping a short waveform table on an audio output.
///
/// The table is built either explicitly through [`TonePlayer::initialize`] or
/// by [`TonePlayer::start`], sized for the requested frequency. It lives as
/// long as the tone: [`TonePlayer::stop`] drops it, so the next tone gets a
/// table of its own length. An initialized table is rebuilt shorter when the
/// frequency would push the playback rate above [`MAX_SAMPLE_RATE`].
pub struct TonePlayer<A: AudioOut> {
    output: A,
    sample: Option<RawSample>,
    playing: bool,
}

impl<A: AudioOut> TonePlayer<A> {
    pub fn new(output: A) -> Self {
        Self {
            output,
            sample: None,
            playing: false,
        }
    }

    /// Build the waveform table with `length` samples. Does nothing if a table exists.
    pub fn initialize(&mut self, length: usize) -> Result<(), AudioError<A::Error>> {
        if self.sample.is_none() {
            self.sample.replace(RawSample::new(sine_table(length)?));
            debug!("waveform table built with {} samples", length);
        }
        Ok(())
    }

    /// Start a tone of `frequency` Hz, looping until [`TonePlayer::stop`].
    ///
    /// Has no effect while a tone is already playing; stop it first to change the pitch.
    /// Frequencies of 0 or above [`MAX_SAMPLE_RATE`] fail with [`AudioError::InvalidArgument`].
    pub fn start(&mut self, frequency: u32) -> Result<(), AudioError<A::Error>> {
        if frequency == 0 || frequency > MAX_SAMPLE_RATE {
            return Err(AudioError::InvalidArgument);
        }
        if self.playing {
            trace!("tone already playing, ignoring start at {} Hz", frequency);
            return Ok(());
        }

        let sample = match self.sample.take() {
            Some(sample) if !exceeds_max_rate(sample.len(), frequency) => {
                self.sample.insert(sample)
            }
            _ => {
                let length = table_length(frequency);
                debug!("waveform table built with {} samples", length);
                self.sample.insert(RawSample::new(sine_table(length)?))
            }
        };
        sample.set_sample_rate(sample.len() as u32 * frequency);

        let session = OutputSession::open(&mut self.output)?;
        session
            .output
            .play(sample, true)
            .map_err(AudioError::DeviceIo)?;
        session.keep();
        self.playing = true;
        trace!(
            "tone started at {} Hz ({} samples/s)",
            frequency,
            sample.sample_rate()
        );
        Ok(())
    }

    /// Stop the current tone, release the output and drop the waveform table.
    /// Does nothing when idle.
    ///
    /// The output is released even when halting playback fails.
    pub fn stop(&mut self) -> Result<(), AudioError<A::Error>> {
        if !self.playing {
            return Ok(());
        }
        self.playing = false;
        self.sample = None;
        let session = OutputSession::resume(&mut self.output);
        let result = session.output.stop().map_err(AudioError::DeviceIo);
        trace!("tone stopped");
        result
    }

    /// Play a tone of `frequency` Hz for `duration`, then stop it.
    ///
    /// A zero duration starts and stops the output without waiting.
    pub async fn play_for<D: DelayNs>(
        &mut self,
        delay: &mut D,
        frequency: u32,
        duration: Duration,
    ) -> Result<(), AudioError<A::Error>> {
        self.start(frequency)?;
        let mut remaining = duration.as_micros();
        while remaining > 0 {
            let step = remaining.min(u32::MAX as u64) as u32;
            delay.delay_us(step).await;
            remaining -= step as u64;
        }
        self.stop()
    }

    pub fn state(&self) -> ToneState {
        if self.playing {
            ToneState::Playing
        } else {
            ToneState::Idle
        }
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn is_initialized(&self) -> bool {
        self.sample.is_some()
    }

    /// The waveform and playback rate of the current tone, or of the table
    /// built by [`TonePlayer::initialize`].
    pub fn sample(&self) -> Option<&RawSample> {
        self.sample.as_ref()
    }

    pub fn table_len(&self) -> Option<usize> {
        self.sample.as_ref().map(RawSample::len)
    }

    pub fn output(&self) -> &A {
        &self.output
    }
}

impl<A: AudioOut> Drop for TonePlayer<A> {
    fn drop(&mut self) {
        if self.playing {
            let _ = self.output.stop();
            self.output.close();
        }
    }
}

fn exceeds_max_rate(length: usize, frequency: u32) -> bool {
    length as u64 * frequency as u64 > MAX_SAMPLE_RATE as u64
}

/// An open output session, closed when dropped unless kept by the player.
struct OutputSession<'a, A: AudioOut> {
    output: &'a mut A,
    keep: bool,
}

impl<'a, A: AudioOut> OutputSession<'a, A> {
    fn open(output: &'a mut A) -> Result<Self, AudioError<A::Error>> {
        output.open().map_err(AudioError::DeviceUnavailable)?;
        Ok(Self {
            output,
            keep: false,
        })
    }

    /// Take over a session left open by an earlier `keep`.
    fn resume(output: &'a mut A) -> Self {
        Self {
            output,
            keep: false,
        }
    }

    fn keep(mut self) {
        self.keep = true;
    }
}

impl<'a, A: AudioOut> Drop for OutputSession<'a, A> {
    fn drop(&mut self) {
        if !self.keep {
            self.output.close();
        }
    }
}
