// Special note from Gavin: if you call it "colour", you are WRONG,
// which is why we will have ZERO cross-compatibility with that name.

use std::fmt;

use crate::color::ColorFloat;
use crate::color::mode::{ColorMode, color_mode};
use crate::traits::float::{Float, clamp_generic};

/// An 8 bit RGBA color with straight alpha.
///
/// This is the normalized form every palette entry ends up in. Fractional
/// channel values produced by blending or scaling are rounded to the nearest
/// integer and saturated to `0..=255` when a `Color` is built from them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Default for Color {
    fn default() -> Self {
        Self {
            r: 0,
            g: 0,
            b: 0,
            a: 255,
        }
    }
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub fn from_rgb(rgb: [u8; 3]) -> Self {
        Self::rgb(rgb[0], rgb[1], rgb[2])
    }

    #[inline]
    pub fn from_rgba(rgba: [u8; 4]) -> Self {
        Self::rgba(rgba[0], rgba[1], rgba[2], rgba[3])
    }

    /// Build an opaque color from a packed `0xRRGGBB` integer.
    ///
    /// Bits above the low 24 are ignored; `Color::from_packed_checked`
    /// rejects them instead.
    #[inline]
    pub const fn from_packed(packed: u32) -> Self {
        Self::rgb(
            ((packed >> 16) & 0xff) as u8,
            ((packed >> 8) & 0xff) as u8,
            (packed & 0xff) as u8,
        )
    }

    /// Build an opaque color from fractional RGB channels on the 0..255 scale.
    #[must_use]
    #[inline]
    pub fn from_channels(r: ColorFloat, g: ColorFloat, b: ColorFloat) -> Self {
        Self::rgb(r.to_channel(), g.to_channel(), b.to_channel())
    }

    /// Build a color from three channel values interpreted in the current
    /// ambient [`ColorMode`].
    ///
    /// In `Rgb` mode the triple is red/green/blue on 0..255. In `Hsb` mode it
    /// is hue in degrees, saturation and brightness in percent.
    #[must_use]
    pub fn from_triple(c1: ColorFloat, c2: ColorFloat, c3: ColorFloat) -> Self {
        match color_mode() {
            ColorMode::Rgb => Self::from_channels(c1, c2, c3),
            ColorMode::Hsb => Self::from_hsb(c1, c2, c3),
        }
    }

    fn from_hsb(h: ColorFloat, s: ColorFloat, v: ColorFloat) -> Self {
        let h = h.to_f64().rem_euclid(360.0);
        let s = clamp_generic(s.to_f64() / 100.0, 0.0, 1.0);
        let v = clamp_generic(v.to_f64() / 100.0, 0.0, 1.0);

        let c = v * s;
        let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
        let m = v - c;

        let (r, g, b) = match (h / 60.0) as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        Self::rgb(
            ((r + m) * 255.0).to_channel(),
            ((g + m) * 255.0).to_channel(),
            ((b + m) * 255.0).to_channel(),
        )
    }

    #[must_use]
    #[inline]
    pub fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    #[must_use]
    #[inline]
    pub fn into_rgb(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    #[must_use]
    #[inline]
    pub fn into_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    // channel readers, all on the 0..255 scale

    #[inline]
    pub fn red(self) -> ColorFloat {
        ColorFloat::from_u8(self.r)
    }

    #[inline]
    pub fn green(self) -> ColorFloat {
        ColorFloat::from_u8(self.g)
    }

    #[inline]
    pub fn blue(self) -> ColorFloat {
        ColorFloat::from_u8(self.b)
    }

    #[inline]
    pub fn alpha(self) -> ColorFloat {
        ColorFloat::from_u8(self.a)
    }

    #[inline]
    pub fn is_opaque(self) -> bool {
        self.a == 255
    }

    /// HSB brightness (the largest of r, g and b) on the 0..255 channel scale.
    #[must_use]
    #[inline]
    pub fn brightness(self) -> ColorFloat {
        ColorFloat::from_u8(self.r.max(self.g).max(self.b))
    }

    /// Linear interpolation of all four channels in sRGB space.
    ///
    /// `t` is clamped to `0..=1`.
    #[must_use]
    #[inline]
    pub fn lerp(self, other: Color, t: ColorFloat) -> Color {
        let t = t.clamp01();
        let lerp8 = |a: u8, b: u8| -> u8 {
            crate::traits::float::lerp(ColorFloat::from_u8(a), ColorFloat::from_u8(b), t)
                .to_channel()
        };

        Color {
            r: lerp8(self.r, other.r),
            g: lerp8(self.g, other.g),
            b: lerp8(self.b, other.b),
            a: lerp8(self.a, other.a),
        }
    }

    /// `#RRGGBB`, or `#RRGGBBAA` when the color is not fully opaque.
    #[must_use]
    pub fn to_hex_string(self) -> String {
        if self.is_opaque() {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            format!(
                "#{:02X}{:02X}{:02X}{:02X}",
                self.r, self.g, self.b, self.a
            )
        }
    }
}

impl From<[u8; 3]> for Color {
    fn from(rgb: [u8; 3]) -> Self {
        Self::from_rgb(rgb)
    }
}

impl From<[u8; 4]> for Color {
    fn from(rgba: [u8; 4]) -> Self {
        Self::from_rgba(rgba)
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::rgb(r, g, b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex_string())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Color {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Color {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
