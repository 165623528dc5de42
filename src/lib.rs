//! Curated color palettes for generative sketches.
//!
//! A [`PaletteManager`] holds a set of palettes, picks one at random and
//! derives a foreground/background pair from it. On top of that it offers a
//! handful of color helpers: random picks, cyclic interpolation across a
//! palette, saturation and brightness adjustment, the palette average and
//! hex formatting.
//!
//! ```no_run
//! use epicolors::PaletteManager;
//!
//! let mut colors = PaletteManager::builder().seed(2024).build()?;
//! let stroke = colors.pick_random_color();
//! let gradient_mid = colors.lerp_from_palette(0.5, None)?;
//! println!("{} on {} ({stroke}, {gradient_mid})", colors.fg(), colors.bg());
//! colors.select_random_palette(true)?;
//! # Ok::<(), epicolors::PaletteError>(())
//! ```

pub mod color;
pub mod error;
pub mod palette;
pub mod traits;

pub use color::{Color, ColorLike, ColorMode, ColorModeGuard, ColorParseError, resolve_color};
pub use error::PaletteError;
pub use palette::{DerivationConfig, PaletteManager, PaletteManagerBuilder};
