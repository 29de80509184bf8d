#[cfg(feature = "std")]
mod tests {
    use clue_device::clue::*;
    use clue_device::domain::color::{ColorReading, Rgb8, RED};
    use clue_device::domain::motion::{Gesture, Vector3};
    use clue_device::domain::pressure::Pressure;
    use clue_device::drivers::button::{Button, ButtonId};
    use clue_device::drivers::led::{ActiveHigh, ActiveLow, GpioLed};
    use clue_device::testutil::*;
    use clue_device::traits::button::Button as _;
    use futures::executor::block_on;

    const RELEASED: bool = true;
    const PRESSED: bool = false;

    #[test]
    fn buttons_read_active_low() {
        let a = TestPin::new(RELEASED);
        let b = TestPin::new(RELEASED);
        let mut buttons = Buttons::new(a.clone(), b.clone());

        assert_eq!(buttons.button_a(), Ok(false));
        a.set(PRESSED);
        assert_eq!(buttons.button_a(), Ok(true));
        assert_eq!(buttons.button_b(), Ok(false));
    }

    #[test]
    fn presses_latch_until_read() {
        let a = TestPin::new(RELEASED);
        let b = TestPin::new(RELEASED);
        let mut buttons = Buttons::new(a.clone(), b.clone());

        b.set(PRESSED);
        buttons.poll().unwrap();
        b.set(RELEASED);

        let pressed = buttons.were_pressed().unwrap();
        assert!(pressed.contains(ButtonId::B));
        assert!(!pressed.contains(ButtonId::A));
        assert_eq!(pressed.len(), 1);
        assert!(buttons.were_pressed().unwrap().is_empty());

        a.set(PRESSED);
        b.set(PRESSED);
        let pressed = buttons.were_pressed().unwrap();
        assert_eq!(pressed.mask(), 0x03);
        assert_eq!(pressed.iter().collect::<Vec<_>>(), [ButtonId::A, ButtonId::B]);
    }

    #[test]
    fn wait_for_either_button() {
        let a = TestPin::new(RELEASED);
        let b = TestPin::new(PRESSED);
        let mut buttons = Buttons::new(a.clone(), b.clone());

        assert_eq!(block_on(buttons.wait_any_pressed()), Ok(ButtonId::B));

        b.set(RELEASED);
        a.set(PRESSED);
        assert_eq!(block_on(buttons.wait_any_pressed()), Ok(ButtonId::A));
    }

    #[test]
    fn wait_for_press() {
        let pin = TestPin::new(PRESSED);
        let mut button = Button::new(pin.clone());

        block_on(button.wait_pressed()).unwrap();
        pin.set(RELEASED);
        block_on(button.wait_released()).unwrap();
    }

    #[test]
    fn leds() {
        let white = TestPin::new(false);
        let red = TestPin::new(true);
        let mut leds = Leds::new(
            GpioLed::<_, ActiveHigh>::new(white.clone()),
            GpioLed::<_, ActiveLow>::new(red.clone()),
            TestPixel::default(),
        );

        leds.set_white_leds(true).unwrap();
        assert!(white.get());
        assert_eq!(leds.white_leds(), Ok(true));

        leds.set_red_led(true).unwrap();
        assert!(!red.get());
        assert_eq!(leds.red_led(), Ok(true));

        assert_eq!(leds.pixel(), Rgb8::default());
        block_on(leds.set_pixel(RED)).unwrap();
        assert_eq!(leds.pixel(), RED);
    }

    #[test]
    fn motion_and_compass() {
        let sensors = TestSensors {
            gyro: Vector3::new(1.0, 2.0, 3.0),
            ..Default::default()
        };
        let mut motion = Motion::new(sensors);
        assert_eq!(
            block_on(motion.acceleration()),
            Ok(Vector3::new(0.0, 0.0, 9.81))
        );
        assert_eq!(block_on(motion.gyro()), Ok(Vector3::new(1.0, 2.0, 3.0)));

        let mut compass = Compass::new(TestSensors {
            fail: true,
            ..Default::default()
        });
        assert_eq!(block_on(compass.magnetic()), Err(TestError));
    }

    #[test]
    fn light_functions_must_be_enabled() {
        let mut light = Light::new(TestSensors {
            proximity: 12,
            color: ColorReading {
                r: 10,
                g: 20,
                b: 30,
                c: 70,
            },
            gesture: Gesture::Left,
            ..Default::default()
        });

        assert_eq!(block_on(light.proximity()), Err(SensorError::NotEnabled));
        assert_eq!(block_on(light.color()), Err(SensorError::NotEnabled));
        assert_eq!(block_on(light.gesture()), Err(SensorError::NotEnabled));

        block_on(light.enable_proximity()).unwrap();
        assert_eq!(block_on(light.proximity()), Ok(12));
        assert_eq!(block_on(light.color()), Err(SensorError::NotEnabled));

        block_on(light.enable_color()).unwrap();
        block_on(light.enable_gesture()).unwrap();
        assert_eq!(block_on(light.color()).unwrap().c, 70);
        assert_eq!(block_on(light.gesture()), Ok(Gesture::Left));
    }

    #[test]
    fn failed_enable_keeps_function_disabled() {
        let mut light = Light::new(TestSensors {
            fail: true,
            ..Default::default()
        });

        assert_eq!(
            block_on(light.enable_proximity()),
            Err(SensorError::Device(TestError))
        );
        assert_eq!(block_on(light.proximity()), Err(SensorError::NotEnabled));
    }

    #[test]
    fn environment() {
        let mut env = Environment::new(
            TestSensors::default(),
            TestSensors {
                pressure: Pressure::from_hpa(1000.0),
                ..Default::default()
            },
        );

        assert_eq!(block_on(env.humidity()), Ok(45.0));
        assert_eq!(block_on(env.pressure()), Ok(Pressure::from_hpa(1000.0)));
        assert_eq!(block_on(env.temperature()).unwrap().raw_value(), 21.5);
        assert_eq!(env.sea_level_pressure(), Pressure::from_hpa(1013.25));

        let altitude = block_on(env.altitude()).unwrap();
        assert!((altitude - 110.9).abs() < 0.5, "altitude {}", altitude);

        env.set_sea_level_pressure(Pressure::from_hpa(1000.0));
        assert!(block_on(env.altitude()).unwrap().abs() < 1e-3);
    }
}
