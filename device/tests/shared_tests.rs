#[cfg(feature = "std")]
mod tests {
    use clue_device::drivers::audio::{SoundLevel, TonePlayer, ToneState};
    use clue_device::testutil::*;
    use clue_device::Shared;
    use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
    use futures::executor::block_on;

    #[test]
    fn handles_share_one_player() {
        let shared: Shared<CriticalSectionRawMutex, TonePlayer<TestAudioOut>> = Shared::new();
        let out = TestAudioOut::new();
        let log = out.log();

        let first = shared.initialize(TonePlayer::new(out)).ok().unwrap();
        let second = first;

        block_on(async {
            first.lock().await.start(440).unwrap();
            assert_eq!(second.lock().await.state(), ToneState::Playing);
            second.lock().await.stop().unwrap();
            assert_eq!(first.lock().await.state(), ToneState::Idle);
        });
        assert_eq!(log.borrow().opens, 1);
        assert_eq!(log.borrow().closes, 1);
    }

    #[test]
    fn initialize_once() {
        let shared: Shared<CriticalSectionRawMutex, SoundLevel<TestMicrophone>> = Shared::new();

        assert!(shared.initialize(SoundLevel::new(TestMicrophone::new())).is_ok());
        assert!(shared
            .initialize(SoundLevel::new(TestMicrophone::new()))
            .is_err());
    }

    #[test]
    fn try_lock_while_held() {
        let shared: Shared<CriticalSectionRawMutex, SoundLevel<TestMicrophone>> = Shared::new();
        let handle = shared
            .initialize(SoundLevel::new(TestMicrophone::new()))
            .ok()
            .unwrap();

        let guard = handle.try_lock().ok().unwrap();
        assert!(handle.try_lock().is_err());
        drop(guard);

        let mut guard = handle.try_lock().ok().unwrap();
        assert_eq!(block_on(guard.sample_level()), Ok(0.0));
    }
}
