#[cfg(feature = "std")]
mod tests {
    use clue_device::domain::color::{Rgb8, GREEN, WHITE};
    use clue_device::drivers::display::*;
    use clue_device::testutil::*;
    use core::fmt::Write;

    #[test]
    fn default_layout() {
        let display = SensorDisplay::new(SensorDisplayConfig::default()).unwrap();

        assert_eq!(display.title().text(), "Clue Sensor Data");
        assert_eq!(display.title().color(), WHITE);
        assert_eq!(display.title().y(), 8);
        assert_eq!(display.len(), 1);
        assert_eq!(display[0].y(), 28);
        assert_eq!(display[0].color(), DEFAULT_COLORS[0]);
        assert_eq!(display[0].text(), "");
    }

    #[test]
    fn lines_are_spaced_and_colors_cycle() {
        let display = SensorDisplay::new(SensorDisplayConfig {
            num_sensors: 12,
            ..Default::default()
        })
        .unwrap();

        assert_eq!(display.len(), 12);
        for i in 0..12 {
            assert_eq!(display[i].y(), 28 + 13 * i as i32);
            assert_eq!(display[i].color(), DEFAULT_COLORS[i % DEFAULT_COLORS.len()]);
        }
    }

    #[test]
    fn group_holds_nineteen_lines() {
        let mut display = SensorDisplay::new(SensorDisplayConfig {
            num_sensors: MAX_ITEMS - 1,
            ..Default::default()
        })
        .unwrap();
        assert!(matches!(
            display.add_text_line(GREEN),
            Err(LayoutError::Full)
        ));

        let result = SensorDisplay::new(SensorDisplayConfig {
            num_sensors: MAX_ITEMS,
            ..Default::default()
        });
        assert!(matches!(result, Err(LayoutError::Full)));
    }

    #[test]
    fn text_length_is_bounded() {
        let mut display = SensorDisplay::new(SensorDisplayConfig::default()).unwrap();
        let long = "x".repeat(MAX_LINE_LEN + 1);

        display[0].set_text("Temp: 21.5").unwrap();
        assert_eq!(display[0].set_text(&long), Err(LayoutError::InvalidArgument));
        assert_eq!(display[0].text(), "Temp: 21.5");

        let title = "t".repeat(MAX_TITLE_LEN + 1);
        let result = SensorDisplay::new(SensorDisplayConfig {
            title: &title,
            ..Default::default()
        });
        assert!(matches!(result, Err(LayoutError::InvalidArgument)));
    }

    #[test]
    fn show_draws_filled_lines() {
        let mut display = SensorDisplay::new(SensorDisplayConfig {
            num_sensors: 3,
            ..Default::default()
        })
        .unwrap();
        write!(display[0], "Humidity: {:.1}%", 45.0).unwrap();
        display[2].set_text("Proximity: 3").unwrap();
        let line = display.add_text_line(Rgb8::new(1, 2, 3)).unwrap();
        line.set_text("extra").unwrap();
        assert_eq!(line.y(), 28 + 3 * 13);

        let mut target = TestTarget::default();
        display.show(&mut target).unwrap();

        assert_eq!(target.clears, 1);
        let texts: Vec<&str> = target.draws.iter().map(|d| d.text.as_str()).collect();
        assert_eq!(
            texts,
            ["Clue Sensor Data", "Humidity: 45.0%", "Proximity: 3", "extra"]
        );
        assert_eq!(target.draws[2].y, 54);
        assert_eq!(target.draws[3].color, Rgb8::new(1, 2, 3));

        display.show_terminal(&mut target).unwrap();
        assert!(target.released);
    }

    #[test]
    fn group_scale_applies_to_positions() {
        let mut display = SensorDisplay::new(SensorDisplayConfig {
            title_scale: 2,
            sensor_scale: 2,
            ..Default::default()
        })
        .unwrap();
        display[0].set_text("Pressure: 1013.2 hPa").unwrap();

        let mut target = TestTarget::default();
        display.show(&mut target).unwrap();

        assert_eq!(target.draws[0].y, 16);
        assert_eq!(target.draws[0].scale, 4);
        assert_eq!(target.draws[1].y, 56);
        assert_eq!(target.draws[1].scale, 2);
    }
}
