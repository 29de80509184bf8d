use crate::domain::audio::RawSample;

/// An audio output session bound to the speaker pin.
///
/// At most one session is open at a time: `open` binds the output, `close`
/// releases it. `play` and `stop` are only valid between the two.
pub trait AudioOut {
    type Error;

    fn open(&mut self) -> Result<(), Self::Error>;

    fn play(&mut self, sample: &RawSample, looping: bool) -> Result<(), Self::Error>;

    fn stop(&mut self) -> Result<(), Self::Error>;

    /// Release the output. Must be safe to call on a session that failed half way.
    fn close(&mut self);

    fn is_playing(&self) -> bool;
}

/// A microphone stream capturing unsigned 16-bit samples at a fixed rate.
pub trait Microphone {
    type Error;

    /// Sample rate the stream is configured for, in Hz.
    const SAMPLE_RATE: u32 = 16_000;

    /// Fill `buffer` completely, returning once the last sample is captured.
    async fn record(&mut self, buffer: &mut [u16]) -> Result<(), Self::Error>;
}
