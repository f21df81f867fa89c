mod tests {
    use sevenseg_light_composer::layout::{
        CLOCK_LAYOUT, Coord, GLYPH_COUNT, MAX_X, MAX_Y, PIXEL_COUNT, PIXELS_PER_GLYPH,
        PIXELS_PER_SEGMENT, Segment,
    };

    #[test]
    fn test_pixel_count() {
        assert_eq!(PIXEL_COUNT, 86);
        assert_eq!(CLOCK_LAYOUT.len(), 86);
        assert_eq!(GLYPH_COUNT * PIXELS_PER_GLYPH, 84);
    }

    #[test]
    fn test_lookup_is_stable() {
        for i in 0..CLOCK_LAYOUT.len() {
            assert_eq!(CLOCK_LAYOUT.coord(i), CLOCK_LAYOUT.coord(i));
        }
        let collected: Vec<_> = CLOCK_LAYOUT.iter().collect();
        for (i, coord) in collected {
            assert_eq!(CLOCK_LAYOUT.coord(i), coord);
        }
    }

    #[test]
    fn test_coords_within_grid() {
        for (_, coord) in CLOCK_LAYOUT.iter() {
            assert!(coord.x <= MAX_X);
            assert!(coord.y <= MAX_Y);
        }
    }

    #[test]
    fn test_glyph_one_segment_a() {
        assert_eq!(PIXELS_PER_SEGMENT, 3);

        let range = CLOCK_LAYOUT.segment_pixels(0, Segment::A);
        assert_eq!(range, 0..3);

        assert_eq!(CLOCK_LAYOUT.coord(0), Coord { x: 1, y: 0 });
        assert_eq!(CLOCK_LAYOUT.coord(1), Coord { x: 2, y: 0 });
        assert_eq!(CLOCK_LAYOUT.coord(2), Coord { x: 3, y: 0 });
    }

    #[test]
    fn test_segment_ranges_tile_the_glyphs() {
        // 7 segments x 4 glyphs cover indices 0..84 without overlap.
        let mut seen = [false; 84];
        for glyph in 0..GLYPH_COUNT {
            for segment in [
                Segment::A,
                Segment::B,
                Segment::C,
                Segment::D,
                Segment::E,
                Segment::F,
                Segment::G,
            ] {
                for i in CLOCK_LAYOUT.segment_pixels(glyph, segment) {
                    assert!(!seen[i], "index {i} covered twice");
                    seen[i] = true;
                }
            }
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_second_glyph_segment_a_row() {
        // Glyph 2's top stroke sits on row 0 at columns 7..=9.
        for (offset, i) in CLOCK_LAYOUT.segment_pixels(1, Segment::A).enumerate() {
            let coord = CLOCK_LAYOUT.coord(i);
            assert_eq!(coord.y, 0);
            assert_eq!(usize::from(coord.x), 7 + offset);
        }
    }

    #[test]
    fn test_colon_pixels() {
        let range = CLOCK_LAYOUT.colon_pixels();
        assert_eq!(range, 84..86);

        assert_eq!(CLOCK_LAYOUT.coord(84), Coord { x: 12, y: 3 });
        assert_eq!(CLOCK_LAYOUT.coord(85), Coord { x: 12, y: 5 });
    }

    #[test]
    fn test_colon_column_outside_glyphs() {
        // No glyph pixel shares the colon's column.
        for i in 0..84 {
            assert_ne!(CLOCK_LAYOUT.coord(i).x, 12);
        }
    }
}
