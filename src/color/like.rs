use crate::color::model::Color;
use crate::color::parse::{ColorParseError, parse_color};

/// Anything a palette entry or a color argument may be written as.
///
/// [`resolve_color`] is the one place these get turned into a [`Color`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum ColorLike {
    /// `#RRGGBB` and friends, see [`parse_color`]
    Hex(String),
    /// packed `0xRRGGBB`
    Packed(u32),
    Color(Color),
}

impl From<&str> for ColorLike {
    fn from(value: &str) -> Self {
        ColorLike::Hex(value.to_owned())
    }
}

impl From<String> for ColorLike {
    fn from(value: String) -> Self {
        ColorLike::Hex(value)
    }
}

impl From<&String> for ColorLike {
    fn from(value: &String) -> Self {
        ColorLike::Hex(value.clone())
    }
}

impl From<u32> for ColorLike {
    fn from(value: u32) -> Self {
        ColorLike::Packed(value)
    }
}

impl From<Color> for ColorLike {
    fn from(value: Color) -> Self {
        ColorLike::Color(value)
    }
}

impl From<&Color> for ColorLike {
    fn from(value: &Color) -> Self {
        ColorLike::Color(*value)
    }
}

impl From<&ColorLike> for ColorLike {
    fn from(value: &ColorLike) -> Self {
        value.clone()
    }
}

impl ColorLike {
    /// Normalize without touching alpha.
    pub fn resolve(&self) -> Result<Color, ColorParseError> {
        match self {
            ColorLike::Hex(s) => parse_color(s),
            ColorLike::Packed(p) => Color::from_packed_checked(*p),
            ColorLike::Color(c) => Ok(*c),
        }
    }
}

/// Normalize a color-like value, optionally overwriting its alpha.
///
/// Colors pass through unchanged; hex strings and packed integers are parsed.
/// When `alpha` is `Some`, it replaces whatever alpha the value carried.
pub fn resolve_color(
    value: impl Into<ColorLike>,
    alpha: Option<u8>,
) -> Result<Color, ColorParseError> {
    let color = value.into().resolve()?;
    Ok(match alpha {
        Some(a) => color.with_alpha(a),
        None => color,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_form_normalizes() {
        let expected = Color::rgb(0x3d, 0x43, 0xb4);
        assert_eq!(resolve_color("#3d43b4", None), Ok(expected));
        assert_eq!(resolve_color(0x3d43b4u32, None), Ok(expected));
        assert_eq!(resolve_color(expected, None), Ok(expected));
        assert_eq!(resolve_color(String::from("#3D43B4"), None), Ok(expected));
    }

    #[test]
    fn alpha_overrides() {
        assert_eq!(
            resolve_color("#ff000040", Some(200)),
            Ok(Color::rgba(255, 0, 0, 200))
        );
        assert_eq!(
            resolve_color(Color::rgba(1, 2, 3, 4), Some(255)),
            Ok(Color::rgb(1, 2, 3))
        );
        assert_eq!(
            resolve_color("#ff000040", None),
            Ok(Color::rgba(255, 0, 0, 0x40))
        );
    }

    #[test]
    fn malformed_values_propagate() {
        assert_eq!(
            resolve_color("#nothex", None),
            Err(ColorParseError::InvalidHex)
        );
        assert_eq!(
            resolve_color(0x1_000_000u32, None),
            Err(ColorParseError::OutOfRange)
        );
    }
}
