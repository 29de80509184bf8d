#[cfg(feature = "std")]
mod tests {
    use clue_device::drivers::audio::*;
    use clue_device::testutil::*;
    use futures::executor::block_on;

    #[test]
    fn silence_is_not_loud() {
        let mut level = SoundLevel::new(TestMicrophone::new());

        assert_eq!(block_on(level.sample_level()), Ok(0.0));
        assert_eq!(block_on(level.is_loud_default()), Ok(false));
        assert_eq!(level.microphone().records, 2);
    }

    #[test]
    fn single_spike() {
        let mut capture = [0u16; SAMPLE_COUNT];
        capture[SAMPLE_COUNT - 1] = 65535;
        let mut mic = TestMicrophone::new();
        mic.push(&capture);
        let mut level = SoundLevel::new(mic);

        let value = block_on(level.sample_level()).unwrap();

        // 65535 / 160 truncates to a mean of 409
        let expected = ((159.0 * 409f64 * 409.0 + 65126f64 * 65126.0) / 160.0).sqrt();
        assert!((value as f64 - expected).abs() < 0.01);
        assert_eq!(level.samples(), &capture[..]);
    }

    #[test]
    fn threshold_is_exclusive() {
        let mut mic = TestMicrophone::new();
        mic.push(&[100, 200]);
        mic.push(&[100, 200]);
        mic.push(&[100, 200]);
        let mut level = SoundLevel::new(mic);

        assert_eq!(block_on(level.sample_level()), Ok(50.0));
        assert_eq!(block_on(level.is_loud(50.0)), Ok(false));
        assert_eq!(block_on(level.is_loud(49.9)), Ok(true));
    }

    #[test]
    fn default_threshold() {
        let mut mic = TestMicrophone::new();
        mic.push(&[0x8000 - 300, 0x8000 + 300]);
        mic.push(&[0x8000 - 150, 0x8000 + 150]);
        let mut level = SoundLevel::new(mic);

        assert_eq!(block_on(level.is_loud_default()), Ok(true));
        assert_eq!(block_on(level.is_loud_default()), Ok(false));
    }

    #[test]
    fn capture_failure_is_reported() {
        let mut level = SoundLevel::new(TestMicrophone::failing());

        assert_eq!(
            block_on(level.sample_level()),
            Err(AudioError::DeviceIo(TestError))
        );
        assert_eq!(
            block_on(level.is_loud_default()),
            Err(AudioError::DeviceIo(TestError))
        );
    }

    #[test]
    fn rms_of_constant_offset_is_zero() {
        assert_eq!(normalized_rms(&[0x8000; SAMPLE_COUNT]), 0.0);
        assert_eq!(normalized_rms(&[u16::MAX; 3]), 0.0);
    }
}
