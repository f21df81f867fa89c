mod tests {
    use embassy_time::Instant;
    use sevenseg_light_composer::math8::{beat8, blend8, scale8};

    #[test]
    fn test_scale8() {
        assert_eq!(scale8(255, 128), 128);
        assert_eq!(scale8(0, 128), 0);
        assert_eq!(scale8(128, 128), 64);
        assert_eq!(scale8(128, 255), 128);
        assert_eq!(scale8(128, 0), 0);
    }

    #[test]
    fn test_blend8() {
        assert_eq!(blend8(255, 128, 128), 191);
        assert_eq!(blend8(0, 128, 255), 128);
        assert_eq!(blend8(255, 0, 128), 127);
        assert_eq!(blend8(255, 128, 0), 255);
    }

    #[test]
    fn test_beat8_starts_at_zero() {
        assert_eq!(beat8(60, Instant::from_millis(0)), 0);
        assert_eq!(beat8(255, Instant::from_millis(0)), 0);
    }

    #[test]
    fn test_beat8_sixty_bpm_cycles_once_per_second() {
        assert_eq!(beat8(60, Instant::from_millis(500)), 128);
        // A full second wraps back around to the start of the cycle.
        assert_eq!(beat8(60, Instant::from_millis(1000)), 0);
    }

    #[test]
    fn test_beat8_scales_with_speed() {
        let now = Instant::from_millis(100);
        assert!(beat8(200, now) > beat8(50, now));
    }
}
