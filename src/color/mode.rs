//! Ambient color-interpretation mode.
//!
//! Raw channel triples passed to [`Color::from_triple`](crate::color::Color::from_triple)
//! are read according to the current mode. The mode is per thread and starts
//! out as [`ColorMode::Rgb`]. Code that needs a specific interpretation for a
//! moment should take a [`ColorModeGuard`] instead of calling
//! [`set_color_mode`] directly, so the previous mode comes back on every exit
//! path, unwinding included.

use std::cell::Cell;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ColorMode {
    /// red, green, blue on 0..255
    #[default]
    Rgb,
    /// hue in degrees, saturation and brightness in percent
    Hsb,
}

thread_local! {
    static CURRENT_MODE: Cell<ColorMode> = const { Cell::new(ColorMode::Rgb) };
}

/// The color mode currently in effect on this thread.
#[inline]
pub fn color_mode() -> ColorMode {
    CURRENT_MODE.with(Cell::get)
}

/// Replace the color mode on this thread, returning the previous one.
pub fn set_color_mode(mode: ColorMode) -> ColorMode {
    CURRENT_MODE.with(|cell| cell.replace(mode))
}

/// Scoped override of the ambient color mode.
///
/// Restores the mode that was active when the guard was pushed once it is
/// dropped. Guards nest like a stack.
#[derive(Debug)]
#[must_use = "the previous color mode is restored as soon as the guard is dropped"]
pub struct ColorModeGuard {
    previous: ColorMode,
}

impl ColorModeGuard {
    pub fn push(mode: ColorMode) -> Self {
        let previous = set_color_mode(mode);
        log::trace!("color mode push {:?} (was {:?})", mode, previous);
        Self { previous }
    }

    /// The mode that will be restored on drop.
    pub fn previous(&self) -> ColorMode {
        self.previous
    }
}

impl Drop for ColorModeGuard {
    fn drop(&mut self) {
        let popped = set_color_mode(self.previous);
        log::trace!("color mode pop {:?} (back to {:?})", popped, self.previous);
    }
}
