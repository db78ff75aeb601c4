//! Ray tints and the fixed palette.

use lumen_math::Vec3;

/// Linear RGB color, components in [0, 1].
pub type Color = Vec3;

pub const BACKGROUND: Color = Color::ZERO;
pub const OBSTACLE: Color = Color::new(0.55, 0.55, 0.6);
pub const LIGHT: Color = Color::new(1.0, 1.0, 0.0);

/// Fully saturated, full-value color for a hue in degrees.
///
/// The hue wraps, so 360 and 0 give the same red.
pub fn hue_to_rgb(hue: f32) -> Color {
    let h = hue.rem_euclid(360.0) / 60.0;
    let x = 1.0 - (h % 2.0 - 1.0).abs();

    match h as u32 {
        0 => Color::new(1.0, x, 0.0),
        1 => Color::new(x, 1.0, 0.0),
        2 => Color::new(0.0, 1.0, x),
        3 => Color::new(0.0, x, 1.0),
        4 => Color::new(x, 0.0, 1.0),
        _ => Color::new(1.0, 0.0, x),
    }
}

/// Color of ray `index` out of `count`, sweeping the hue wheel once.
pub fn hue_sweep(index: u32, count: u32) -> Color {
    if count == 0 {
        return hue_to_rgb(0.0);
    }
    hue_to_rgb(360.0 * index as f32 / count as f32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_hues() {
        assert_eq!(hue_to_rgb(0.0), Color::new(1.0, 0.0, 0.0));
        assert_eq!(hue_to_rgb(120.0), Color::new(0.0, 1.0, 0.0));
        assert_eq!(hue_to_rgb(240.0), Color::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_secondary_hues() {
        assert_eq!(hue_to_rgb(60.0), Color::new(1.0, 1.0, 0.0));
        assert_eq!(hue_to_rgb(180.0), Color::new(0.0, 1.0, 1.0));
        assert_eq!(hue_to_rgb(300.0), Color::new(1.0, 0.0, 1.0));
    }

    #[test]
    fn test_hue_wraps() {
        assert_eq!(hue_to_rgb(360.0), hue_to_rgb(0.0));
        assert_eq!(hue_to_rgb(-120.0), hue_to_rgb(240.0));
    }

    #[test]
    fn test_hue_sweep() {
        assert_eq!(hue_sweep(0, 6), Color::new(1.0, 0.0, 0.0));
        assert_eq!(hue_sweep(2, 6), Color::new(0.0, 1.0, 0.0));
        assert_eq!(hue_sweep(3, 6), Color::new(0.0, 1.0, 1.0));

        // Every component stays in range along the sweep
        for i in 0..64 {
            let c = hue_sweep(i, 64);
            assert!(c.min_element() >= 0.0 && c.max_element() <= 1.0);
        }
    }
}
