mod tests {
    use embassy_time::Instant;
    use sevenseg_light_composer::effect::{
        Effect, PaletteSource, PaletteWaveEffect, Scene, WaveAxis,
    };
    use sevenseg_light_composer::layout::CLOCK_LAYOUT;
    use sevenseg_light_composer::palette::{HEAT, OCEAN, PARTY, Palette16, RAINBOW};
    use sevenseg_light_composer::Rgb;

    const OFF: Rgb = Rgb { r: 0, g: 0, b: 0 };

    fn render(
        axis: WaveAxis,
        source: PaletteSource,
        palette: &Palette16,
        gradient: &Palette16,
        now: Instant,
    ) -> [Rgb; 86] {
        let mut effect = PaletteWaveEffect::new(axis, source);
        let scene = Scene {
            layout: CLOCK_LAYOUT,
            palette,
            gradient,
            speed: 255,
            hue: 0,
        };
        let mut leds = [OFF; 86];
        effect.render(now, &scene, &mut leds);
        leds
    }

    #[test]
    fn test_phase_subtraction_wraps() {
        // Speed 255 at t=2ms yields base phase 2. Pixel 24 sits at x=10,
        // so its phase is 2 - 80 wrapped to 178, never a clamped zero.
        let now = Instant::from_millis(2);
        let leds = render(
            WaveAxis::X,
            PaletteSource::Selected,
            &RAINBOW,
            &HEAT,
            now,
        );

        assert_eq!(CLOCK_LAYOUT.coord(24).x, 10);
        assert_eq!(leds[24], RAINBOW.color_at(178));
        assert_ne!(leds[24], RAINBOW.color_at(0));
    }

    #[test]
    fn test_same_x_pixels_match_in_x_wave() {
        let now = Instant::from_millis(97);
        let leds = render(
            WaveAxis::X,
            PaletteSource::Selected,
            &RAINBOW,
            &HEAT,
            now,
        );

        // Pixels 3, 4, 5 all sit at x=4 on different rows.
        assert_eq!(leds[3], leds[4]);
        assert_eq!(leds[4], leds[5]);

        for (i, a) in CLOCK_LAYOUT.iter() {
            for (j, b) in CLOCK_LAYOUT.iter().skip(i + 1) {
                if a.x == b.x {
                    assert_eq!(leds[i], leds[j], "pixels {i} and {j} share x={}", a.x);
                }
            }
        }
    }

    #[test]
    fn test_same_y_pixels_match_in_y_wave() {
        let now = Instant::from_millis(97);
        let leds = render(
            WaveAxis::Y,
            PaletteSource::Selected,
            &RAINBOW,
            &HEAT,
            now,
        );

        for (i, a) in CLOCK_LAYOUT.iter() {
            for (j, b) in CLOCK_LAYOUT.iter().skip(i + 1) {
                if a.y == b.y {
                    assert_eq!(leds[i], leds[j], "pixels {i} and {j} share y={}", a.y);
                }
            }
        }
    }

    #[test]
    fn test_diagonal_wave_uses_coordinate_sum() {
        let now = Instant::from_millis(97);
        let leds = render(
            WaveAxis::Diagonal,
            PaletteSource::Selected,
            &RAINBOW,
            &HEAT,
            now,
        );

        for (i, a) in CLOCK_LAYOUT.iter() {
            for (j, b) in CLOCK_LAYOUT.iter().skip(i + 1) {
                if a.x + a.y == b.x + b.y {
                    assert_eq!(leds[i], leds[j]);
                }
            }
        }
    }

    #[test]
    fn test_selected_wave_ignores_gradient() {
        let now = Instant::from_millis(42);
        let with_heat = render(WaveAxis::X, PaletteSource::Selected, &RAINBOW, &HEAT, now);
        let with_ocean = render(WaveAxis::X, PaletteSource::Selected, &RAINBOW, &OCEAN, now);

        assert_eq!(with_heat, with_ocean);
    }

    #[test]
    fn test_gradient_wave_ignores_selected_palette() {
        let now = Instant::from_millis(42);
        let with_rainbow = render(WaveAxis::X, PaletteSource::Gradient, &RAINBOW, &HEAT, now);
        let with_party = render(WaveAxis::X, PaletteSource::Gradient, &PARTY, &HEAT, now);

        assert_eq!(with_rainbow, with_party);
    }

    #[test]
    fn test_gradient_wave_follows_gradient_swap() {
        let now = Instant::from_millis(42);
        let with_heat = render(WaveAxis::X, PaletteSource::Gradient, &RAINBOW, &HEAT, now);
        let with_ocean = render(WaveAxis::X, PaletteSource::Gradient, &RAINBOW, &OCEAN, now);

        assert_ne!(with_heat, with_ocean);
    }

    #[test]
    fn test_sources_sample_their_own_palette() {
        let now = Instant::from_millis(42);
        let selected = render(WaveAxis::X, PaletteSource::Selected, &RAINBOW, &HEAT, now);
        let gradient = render(WaveAxis::X, PaletteSource::Gradient, &RAINBOW, &HEAT, now);

        assert_ne!(selected, gradient);
    }
}
