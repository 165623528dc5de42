pub mod adjust;
pub mod builtin;
pub mod config;
pub mod manager;

pub use adjust::DEFAULT_FACTOR;
pub use builtin::{BUILTIN_PALETTES, default_palettes};
pub use config::DerivationConfig;
pub use manager::{DEFAULT_AVERAGE_LIMIT, PaletteManager, PaletteManagerBuilder};
