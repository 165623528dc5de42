use crate::color::{Color, ColorFloat};
use crate::palette::adjust::{saturate, scale_brightness};

/// Factors used to turn a palette pick into the foreground/background pair.
///
/// The background is the pick made more saturated and then darker, the
/// foreground is the pick made less saturated and then brighter.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DerivationConfig {
    pub bg_saturation: ColorFloat,
    pub bg_brightness: ColorFloat,
    pub fg_saturation: ColorFloat,
    pub fg_brightness: ColorFloat,
}

impl Default for DerivationConfig {
    fn default() -> Self {
        Self {
            bg_saturation: 1.5,
            bg_brightness: 0.5,
            fg_saturation: 0.75,
            fg_brightness: 1.25,
        }
    }
}

impl DerivationConfig {
    /// Derive `(fg, bg)` from a single pick. Both come from the unadjusted
    /// `pick`, never from each other.
    pub fn derive(&self, pick: Color) -> (Color, Color) {
        let bg = scale_brightness(saturate(pick, self.bg_saturation), self.bg_brightness);
        let fg = scale_brightness(saturate(pick, self.fg_saturation), self.fg_brightness);
        (fg, bg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bg_is_darker_than_fg() {
        let pick = Color::rgb(0x83, 0x86, 0xf5);
        let (fg, bg) = DerivationConfig::default().derive(pick);
        assert!(bg.brightness() < pick.brightness());
        assert!(fg.brightness() > bg.brightness());
        assert!(fg.is_opaque() && bg.is_opaque());
    }

    #[test]
    fn unit_factors_keep_the_pick() {
        let unit = DerivationConfig {
            bg_saturation: 1.0,
            bg_brightness: 1.0,
            fg_saturation: 1.0,
            fg_brightness: 1.0,
        };
        let pick = Color::rgb(0xff, 0x12, 0x4f);
        assert_eq!(unit.derive(pick), (pick, pick));
    }

    #[test]
    fn derive_known_values() {
        // br = 245, sat 1.5 -> (74, 78.5 -> 79, 245), bright 0.5 -> (37, 39.5 -> 40, 122.5 -> 123)
        let pick = Color::rgb(0x83, 0x86, 0xf5);
        let (_, bg) = DerivationConfig::default().derive(pick);
        assert_eq!(bg, Color::rgb(37, 40, 123));
    }
}
