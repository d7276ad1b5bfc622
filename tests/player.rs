mod tests {
    use std::convert::Infallible;

    use automatrix::codec::RegisterBytes;
    use automatrix::controller::ActiveLevel;
    use automatrix::player::PatternPlayer;
    use automatrix::{Duration, Instant, OutputDriver};

    #[derive(Default)]
    struct CountingDriver {
        writes: Vec<RegisterBytes>,
        triggers: Vec<bool>,
    }

    impl OutputDriver for CountingDriver {
        type Error = Infallible;

        fn write(&mut self, pattern: &RegisterBytes) -> Result<(), Self::Error> {
            self.writes.push(*pattern);
            Ok(())
        }

        fn set_trigger(&mut self, high: bool) -> Result<(), Self::Error> {
            self.triggers.push(high);
            Ok(())
        }
    }

    fn patterns() -> [RegisterBytes; 2] {
        [[1; 32], [2; 32]]
    }

    #[test]
    fn test_hold_before_deadline() {
        let mut player = PatternPlayer::new(Duration::from_millis(100), ActiveLevel::High);
        let mut driver = CountingDriver::default();
        let patterns = patterns();

        let step = player.tick(&patterns, &mut driver, Instant::from_millis(0)).unwrap();
        assert_eq!(step.next_deadline, Instant::from_millis(100));
        assert_eq!(driver.writes.len(), 1);
        assert_eq!(driver.triggers, vec![false]);

        let step = player.tick(&patterns, &mut driver, Instant::from_millis(40)).unwrap();
        assert_eq!(step.sleep_duration, Duration::from_millis(60));
        assert_eq!(step.pattern_index, Some(0));
        assert_eq!(driver.writes.len(), 1);
        assert_eq!(driver.triggers, vec![false]);

        let step = player.tick(&patterns, &mut driver, Instant::from_millis(120)).unwrap();
        assert_eq!(step.pattern_index, Some(0));
        assert_eq!(step.sleep_duration, Duration::from_millis(0));
        assert_eq!(driver.triggers, vec![false, true]);
        assert_eq!(player.current_index(), 1);
    }

    #[test]
    fn test_wraps_around() {
        let mut player = PatternPlayer::new(Duration::from_millis(10), ActiveLevel::High);
        let mut driver = CountingDriver::default();
        let patterns = patterns();

        let mut now = Instant::from_millis(0);
        for _ in 0..6 {
            let step = player.tick(&patterns, &mut driver, now).unwrap();
            now += step.sleep_duration;
        }
        assert_eq!(driver.writes, vec![[1; 32], [2; 32], [1; 32]]);
        assert_eq!(player.current_index(), 1);
    }

    #[test]
    fn test_empty_program() {
        let mut player = PatternPlayer::new(Duration::from_millis(250), ActiveLevel::Low);
        let mut driver = CountingDriver::default();

        let step = player.tick(&[], &mut driver, Instant::from_millis(1000)).unwrap();
        assert_eq!(step.pattern_index, None);
        assert_eq!(step.sleep_duration, Duration::from_millis(250));
        assert_eq!(step.next_deadline, Instant::from_millis(1250));
        assert!(driver.writes.is_empty());
        assert!(driver.triggers.is_empty());
    }

    #[test]
    fn test_reset_and_shrunk_program() {
        let mut player = PatternPlayer::new(Duration::from_millis(10), ActiveLevel::High);
        let mut driver = CountingDriver::default();
        let patterns = patterns();

        player.tick(&patterns, &mut driver, Instant::from_millis(0)).unwrap();
        player.tick(&patterns, &mut driver, Instant::from_millis(10)).unwrap();
        assert_eq!(player.current_index(), 1);

        // Program shrank below the cursor
        let step = player.tick(&patterns[..1], &mut driver, Instant::from_millis(20)).unwrap();
        assert_eq!(step.pattern_index, Some(0));
        assert_eq!(driver.writes.last(), Some(&[1; 32]));

        player.reset();
        assert_eq!(player.current_index(), 0);
        let step = player.tick(&patterns, &mut driver, Instant::from_millis(30)).unwrap();
        assert_eq!(step.pattern_index, Some(0));
        assert_eq!(driver.writes.len(), 3);
    }
}
