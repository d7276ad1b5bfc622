mod tests {
    use automatrix::codec::{RegisterBytes, decode};
    use automatrix::controller::{
        ActiveLevel, Automatrix, AutomatrixConfig, ControllerError, Program,
    };
    use automatrix::geometry::{dpc_patterns, focus_pattern};
    use automatrix::{Duration, Instant, OutputDriver};

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Event {
        Write(RegisterBytes),
        Trigger(bool),
    }

    #[derive(Default)]
    struct RecordingDriver {
        events: Vec<Event>,
        fail: bool,
    }

    impl OutputDriver for RecordingDriver {
        type Error = &'static str;

        fn write(&mut self, pattern: &RegisterBytes) -> Result<(), Self::Error> {
            if self.fail {
                return Err("spi write failed");
            }
            self.events.push(Event::Write(*pattern));
            Ok(())
        }

        fn set_trigger(&mut self, high: bool) -> Result<(), Self::Error> {
            if self.fail {
                return Err("gpio write failed");
            }
            self.events.push(Event::Trigger(high));
            Ok(())
        }
    }

    fn configured() -> Automatrix<RecordingDriver> {
        let mut matrix = Automatrix::new(RecordingDriver::default(), AutomatrixConfig::default());
        matrix.configure().unwrap();
        matrix
    }

    #[test]
    fn test_configure_builds_programs() {
        let matrix = configured();
        assert_eq!(matrix.focus().len(), 1);
        assert_eq!(matrix.dpc().len(), 4);
        assert_eq!(matrix.focus().as_masks()[0], focus_pattern(4.0, 3.0));
        assert_eq!(
            matrix.dpc().as_masks().as_slice(),
            &dpc_patterns(4.0, 3.0).to_array()
        );
        // Trigger deactivated (active low) before programming
        assert_eq!(matrix.driver().events, vec![Event::Trigger(true)]);
    }

    #[test]
    fn test_configure_replaces_programs() {
        let mut matrix = configured();
        matrix.set_radii(6.0, 2.0);
        matrix.configure().unwrap();
        assert_eq!(matrix.dpc().len(), 4);
        assert_eq!(decode(&matrix.program(Program::Focus)[0]), focus_pattern(6.0, 2.0));
        assert_eq!(matrix.config().outer_radius, 6.0);
    }

    #[test]
    fn test_configure_wide_ring() {
        let mut matrix = configured();
        matrix.set_radii(20.0, 0.0);
        matrix.configure().unwrap();
        // Half of the grid, still inside the power budget
        for mask in matrix.dpc().as_masks() {
            assert_eq!(mask.lit_count(), 128);
        }
    }

    #[test]
    fn test_trigger_levels() {
        assert!(ActiveLevel::High.pin_level(true));
        assert!(!ActiveLevel::High.pin_level(false));
        assert!(!ActiveLevel::Low.pin_level(true));
        assert!(ActiveLevel::Low.pin_level(false));

        let config = AutomatrixConfig {
            trigger_level: ActiveLevel::High,
            ..AutomatrixConfig::default()
        };
        let mut matrix = Automatrix::new(RecordingDriver::default(), config);
        matrix.enable(true).unwrap();
        matrix.enable(false).unwrap();
        assert_eq!(
            matrix.driver().events,
            vec![Event::Trigger(true), Event::Trigger(false)]
        );
    }

    #[test]
    fn test_load_pattern() {
        let mut matrix = configured();
        let pattern = matrix.program(Program::Dpc)[2];
        matrix.load_pattern(&pattern).unwrap();
        assert_eq!(matrix.driver().events.last(), Some(&Event::Write(pattern)));
    }

    #[test]
    fn test_driver_error() {
        let driver = RecordingDriver {
            fail: true,
            ..RecordingDriver::default()
        };
        let mut matrix = Automatrix::new(driver, AutomatrixConfig::default());
        assert_eq!(
            matrix.configure(),
            Err(ControllerError::Driver("gpio write failed"))
        );
        assert!(matrix.dpc().is_empty());
    }

    #[test]
    fn test_step_plays_dpc_program() {
        let mut matrix = configured();
        matrix.driver_mut().events.clear();
        let dpc: Vec<RegisterBytes> = matrix.program(Program::Dpc).to_vec();
        let mut player = matrix.player();
        assert_eq!(player.dwell(), Duration::from_secs(1));

        let mut now = Instant::from_millis(0);
        for round in 0..2 {
            for (index, pattern) in dpc.iter().enumerate() {
                let step = matrix.step(&mut player, Program::Dpc, now).unwrap();
                assert_eq!(step.pattern_index, Some(index), "round {round}");
                assert_eq!(step.sleep_duration, Duration::from_secs(1));
                assert_eq!(
                    matrix.driver().events[matrix.driver().events.len() - 2..],
                    [Event::Write(*pattern), Event::Trigger(true)]
                );

                now += step.sleep_duration;
                let step = matrix.step(&mut player, Program::Dpc, now).unwrap();
                assert_eq!(step.sleep_duration, Duration::from_millis(0));
                assert_eq!(matrix.driver().events.last(), Some(&Event::Trigger(false)));
            }
        }
        assert_eq!(matrix.driver().events.len(), 2 * 4 * 3);
    }
}
