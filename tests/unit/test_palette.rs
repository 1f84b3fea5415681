//! Unit tests for 8-bit palette resolution

use sgrstyle::ansi::resolve_8bit;
use sgrstyle::models::Rgb;

#[test]
fn test_color_cube_matches_formula() {
    for r in 0..6u32 {
        for g in 0..6u32 {
            for b in 0..6u32 {
                let index = 16 + 36 * r + 6 * g + b;
                let expected = Rgb::new((r * 51) as u8, (g * 51) as u8, (b * 51) as u8);
                assert_eq!(resolve_8bit(index), Some(expected), "index {}", index);
            }
        }
    }
}

#[test]
fn test_grayscale_ramp_matches_formula() {
    for index in 232..=255u32 {
        let gray = ((index - 232) as f64 / 23.0 * 255.0).round() as u8;
        assert_eq!(resolve_8bit(index), Some(Rgb::new(gray, gray, gray)), "index {}", index);
    }
}

#[test]
fn test_known_grayscale_values() {
    assert_eq!(resolve_8bit(233), Some(Rgb::new(11, 11, 11)));
    assert_eq!(resolve_8bit(254), Some(Rgb::new(244, 244, 244)));
}

#[test]
fn test_not_applicable_outside_range() {
    for index in (0..16).chain([256, 300, 1000, u32::MAX]) {
        assert_eq!(resolve_8bit(index), None, "index {}", index);
    }
}
