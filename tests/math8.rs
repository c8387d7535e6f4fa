mod tests {
    use myrtio_lamp::Rgb;
    use myrtio_lamp::math8::{scale_color, scale8};

    #[test]
    fn test_scale8() {
        assert_eq!(scale8(255, 128), 128);
        assert_eq!(scale8(0, 128), 0);
        assert_eq!(scale8(128, 128), 64);
        assert_eq!(scale8(128, 255), 128);
        assert_eq!(scale8(128, 0), 0);
    }

    #[test]
    fn test_scale8_full_scale_is_identity() {
        for value in 0..=255u8 {
            assert_eq!(scale8(value, 255), value);
            assert_eq!(scale8(value, 0), 0);
        }
    }

    #[test]
    fn test_scale_color() {
        let color = Rgb::new(255, 128, 0);
        assert_eq!(scale_color(color, 255), color);
        assert_eq!(scale_color(color, 128), Rgb::new(128, 64, 0));
        assert_eq!(scale_color(color, 0), Rgb::new(0, 0, 0));
    }
}
