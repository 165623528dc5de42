//! Saturation and brightness transforms on normalized colors.
//!
//! Both build their result from r, g and b only, so the output is always
//! fully opaque whatever the input alpha was.

use crate::color::{Color, ColorFloat};
use crate::traits::float::lerp;

/// Factor that leaves a color unchanged.
pub const DEFAULT_FACTOR: ColorFloat = 1.0;

/// Push each channel away from (`factor > 1`) or towards (`factor < 1`) the
/// gray of the color's own brightness.
#[must_use]
pub fn saturate(color: Color, factor: ColorFloat) -> Color {
    let br = color.brightness();
    Color::from_channels(
        lerp(br, color.red(), factor),
        lerp(br, color.green(), factor),
        lerp(br, color.blue(), factor),
    )
}

/// Scale r, g and b by `factor`.
#[must_use]
pub fn scale_brightness(color: Color, factor: ColorFloat) -> Color {
    Color::from_channels(
        color.red() * factor,
        color.green() * factor,
        color.blue() * factor,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn zero_saturation_is_brightness_gray() {
        let c = Color::rgb(200, 40, 90);
        assert_eq!(saturate(c, 0.0), Color::rgb(200, 200, 200));
    }

    #[test]
    fn oversaturation_clamps() {
        let c = Color::rgb(250, 10, 128);
        assert_eq!(saturate(c, 3.0), Color::rgb(250, 0, 0));
    }

    #[test]
    fn zero_brightness_is_black() {
        assert_eq!(scale_brightness(Color::rgb(12, 200, 255), 0.0), Color::BLACK);
    }

    #[test]
    fn brightening_saturates_at_white() {
        assert_eq!(
            scale_brightness(Color::rgb(200, 100, 20), 2.0),
            Color::rgb(255, 200, 40)
        );
    }

    #[test]
    fn alpha_is_dropped() {
        let c = Color::rgba(10, 20, 30, 40);
        assert!(saturate(c, DEFAULT_FACTOR).is_opaque());
        assert!(scale_brightness(c, DEFAULT_FACTOR).is_opaque());
    }

    proptest! {
        #[test]
        fn unit_factor_is_identity(r in 0u8..=255, g in 0u8..=255, b in 0u8..=255) {
            let c = Color::rgb(r, g, b);
            prop_assert_eq!(saturate(c, DEFAULT_FACTOR), c);
            prop_assert_eq!(scale_brightness(c, DEFAULT_FACTOR), c);
        }

        #[test]
        fn desaturating_never_raises_brightness(
            r in 0u8..=255,
            g in 0u8..=255,
            b in 0u8..=255,
            factor in 0.0f32..1.0,
        ) {
            let c = Color::rgb(r, g, b);
            prop_assert!(saturate(c, factor as ColorFloat).brightness() <= c.brightness());
        }
    }
}
