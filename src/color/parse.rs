use thiserror::Error;

use crate::color::model::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("empty color string")]
    Empty,
    #[error("invalid hex length")]
    InvalidLength,
    #[error("invalid hex digits")]
    InvalidHex,
    #[error("packed color out of range (expected 0x000000..=0xFFFFFF)")]
    OutOfRange,
}

/// Parse a hex color from its digits (no leading `#`).
///
/// The allowed formats are:
/// * RGB
/// * RGBA
/// * RRGGBB
/// * RRGGBBAA
fn parse_hex(hex: &str) -> Result<Color, ColorParseError> {
    use ColorParseError::*;

    let nibble = |c: u8| -> Result<u8, ColorParseError> {
        match c {
            b'0'..=b'9' => Ok(c - b'0'),
            b'a'..=b'f' => Ok(c - b'a' + 10),
            b'A'..=b'F' => Ok(c - b'A' + 10),
            _ => Err(InvalidHex),
        }
    };
    let short = |c: u8| nibble(c).map(|n| n * 17);
    let pair = |hi: u8, lo: u8| -> Result<u8, ColorParseError> {
        Ok(nibble(hi)? << 4 | nibble(lo)?)
    };

    let bytes = hex.as_bytes();
    let rgba = match bytes.len() {
        3 => [short(bytes[0])?, short(bytes[1])?, short(bytes[2])?, 255],
        4 => [
            short(bytes[0])?,
            short(bytes[1])?,
            short(bytes[2])?,
            short(bytes[3])?,
        ],
        6 => [
            pair(bytes[0], bytes[1])?,
            pair(bytes[2], bytes[3])?,
            pair(bytes[4], bytes[5])?,
            255,
        ],
        8 => [
            pair(bytes[0], bytes[1])?,
            pair(bytes[2], bytes[3])?,
            pair(bytes[4], bytes[5])?,
            pair(bytes[6], bytes[7])?,
        ],
        _ => return Err(InvalidLength),
    };

    Ok(Color::from_rgba(rgba))
}

/// Parse a hex color string, with or without the leading `#`.
pub fn parse_color(s: &str) -> Result<Color, ColorParseError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(ColorParseError::Empty);
    }

    parse_hex(s.strip_prefix('#').unwrap_or(s).trim())
}

impl Color {
    /// Strict form of [`Color::from_packed`]: anything above `0xFFFFFF` is an error.
    pub fn from_packed_checked(packed: u32) -> Result<Color, ColorParseError> {
        if packed > 0xFF_FFFF {
            return Err(ColorParseError::OutOfRange);
        }
        Ok(Color::from_packed(packed))
    }
}

impl core::str::FromStr for Color {
    type Err = ColorParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_color(s)
    }
}

impl TryFrom<&str> for Color {
    type Error = ColorParseError;
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        parse_color(value)
    }
}
