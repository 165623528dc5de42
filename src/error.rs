use thiserror::Error;

use crate::color::ColorParseError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaletteError {
    #[error("invalid palette color: {0}")]
    Parse(#[from] ColorParseError),
    #[error("palette has no colors")]
    EmptyPalette,
}

pub type Result<T, E = PaletteError> = std::result::Result<T, E>;
