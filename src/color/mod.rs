pub mod like;
pub mod mode;
pub mod model;
pub mod parse;

pub use like::{ColorLike, resolve_color};
pub use mode::{ColorMode, ColorModeGuard, color_mode, set_color_mode};
pub use model::Color;
pub use parse::ColorParseError;

#[cfg(feature = "color_double_precision")]
pub type ColorFloat = f64;
#[cfg(not(feature = "color_double_precision"))]
pub type ColorFloat = f32;
