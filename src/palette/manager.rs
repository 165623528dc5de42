use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::color::{Color, ColorFloat, ColorLike, ColorMode, ColorModeGuard, ColorParseError};
use crate::error::{PaletteError, Result};
use crate::palette::adjust::{saturate, scale_brightness};
use crate::palette::builtin::default_palettes;
use crate::palette::config::DerivationConfig;

/// Default peak channel for [`PaletteManager::average_color`].
pub const DEFAULT_AVERAGE_LIMIT: ColorFloat = 255.0;

/// Holds a set of palettes, the currently selected one and the
/// foreground/background pair derived from it.
///
/// The manager is fully initialized once constructed: a palette has been
/// selected and `fg`/`bg` derived. [`select_random_palette`] swaps all three
/// at once.
///
/// [`select_random_palette`]: PaletteManager::select_random_palette
#[derive(Clone, Debug)]
pub struct PaletteManager<R = StdRng> {
    palettes: Vec<Vec<ColorLike>>,
    palette: Vec<Color>,
    fg: Color,
    bg: Color,
    config: DerivationConfig,
    rng: R,
}

impl PaletteManager<StdRng> {
    /// A manager over the built-in palettes, seeded from the OS.
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    /// A manager over `palettes`, seeded from the OS. An empty set falls back
    /// to the built-in palettes.
    pub fn with_palettes<P, C>(palettes: impl IntoIterator<Item = P>) -> Result<Self>
    where
        P: IntoIterator<Item = C>,
        C: Into<ColorLike>,
    {
        Self::builder().palettes(palettes).build()
    }

    pub fn builder() -> PaletteManagerBuilder<StdRng> {
        PaletteManagerBuilder::new()
    }
}

impl<R: Rng> PaletteManager<R> {
    /// A manager over `palettes` drawing from `rng`. An empty set falls back
    /// to the built-in palettes.
    pub fn with_rng<P, C>(palettes: impl IntoIterator<Item = P>, rng: R) -> Result<Self>
    where
        P: IntoIterator<Item = C>,
        C: Into<ColorLike>,
    {
        PaletteManagerBuilder {
            palettes: Vec::new(),
            config: DerivationConfig::default(),
            randomize: false,
            rng,
        }
        .palettes(palettes)
        .build()
    }

    /// Select a palette from the set at random, normalize it and derive the
    /// foreground/background pair from one of its colors.
    ///
    /// With `randomize` the normalized palette is shuffled before the pick.
    /// On error the current palette, `fg` and `bg` are left as they were.
    pub fn select_random_palette(&mut self, randomize: bool) -> Result<()> {
        let index = self.rng.gen_range(0..self.palettes.len());
        let mut palette = self.palettes[index]
            .iter()
            .map(ColorLike::resolve)
            .collect::<std::result::Result<Vec<_>, _>>()?;
        if randomize {
            palette.shuffle(&mut self.rng);
        }

        let pick = *palette
            .choose(&mut self.rng)
            .ok_or(PaletteError::EmptyPalette)?;
        let (fg, bg) = self.config.derive(pick);

        log::debug!(
            "selected palette {}/{} ({} colors, randomized: {})",
            index,
            self.palettes.len(),
            palette.len(),
            randomize
        );
        log::trace!("pick {} -> fg {} bg {}", pick, fg, bg);

        self.palette = palette;
        self.fg = fg;
        self.bg = bg;
        Ok(())
    }

    /// Shuffle the current palette in place. `fg` and `bg` are kept.
    pub fn shuffle_palette(&mut self) {
        self.palette.shuffle(&mut self.rng);
    }

    /// A color from the current palette, chosen uniformly.
    pub fn pick_random_color(&mut self) -> Color {
        // the palette is never empty once constructed, fg is unreachable
        *self.palette.choose(&mut self.rng).unwrap_or(&self.fg)
    }
}

impl<R> PaletteManager<R> {
    /// Every palette this manager can select from, as supplied.
    pub fn palettes(&self) -> &[Vec<ColorLike>] {
        &self.palettes
    }

    /// The currently selected palette.
    pub fn palette(&self) -> &[Color] {
        &self.palette
    }

    pub fn fg(&self) -> Color {
        self.fg
    }

    pub fn bg(&self) -> Color {
        self.bg
    }

    pub fn config(&self) -> &DerivationConfig {
        &self.config
    }

    /// See [`resolve_color`](crate::color::resolve_color).
    pub fn resolve_color(
        &self,
        value: impl Into<ColorLike>,
        alpha: Option<u8>,
    ) -> std::result::Result<Color, ColorParseError> {
        crate::color::resolve_color(value, alpha)
    }

    /// Uppercase `#RRGGBB`, with the alpha byte appended when it is below 255.
    pub fn to_hex_string(
        &self,
        clr: impl Into<ColorLike>,
    ) -> std::result::Result<String, ColorParseError> {
        Ok(clr.into().resolve()?.to_hex_string())
    }

    /// Sample a palette as a closed loop.
    ///
    /// `f` in `0..1` walks once around the palette, blending each color into
    /// the next and the last one back into the first. Any other finite `f`
    /// wraps around; a non-finite `f` samples position 0. Uses the current
    /// palette unless `palette_override` is given.
    pub fn lerp_from_palette(
        &self,
        f: ColorFloat,
        palette_override: Option<&[ColorLike]>,
    ) -> Result<Color> {
        match palette_override {
            Some(colors) => lerp_cyclic(colors.len(), f, |i| colors[i].resolve()),
            None => lerp_cyclic(self.palette.len(), f, |i| Ok(self.palette[i])),
        }
    }

    /// More (`factor > 1`) or less (`factor < 1`) saturated version of `clr`.
    /// The result is opaque.
    pub fn adjust_saturation(
        &self,
        clr: impl Into<ColorLike>,
        factor: ColorFloat,
    ) -> std::result::Result<Color, ColorParseError> {
        Ok(saturate(clr.into().resolve()?, factor))
    }

    /// `clr` with r, g and b scaled by `factor`. The result is opaque.
    pub fn adjust_brightness(
        &self,
        clr: impl Into<ColorLike>,
        factor: ColorFloat,
    ) -> std::result::Result<Color, ColorParseError> {
        Ok(scale_brightness(clr.into().resolve()?, factor))
    }

    /// Mean r, g and b of the current palette, scaled down proportionally
    /// when the brightest mean channel exceeds `limit`.
    pub fn average_color(&self, limit: ColorFloat) -> Color {
        let n = self.palette.len() as ColorFloat;
        let (r, g, b) = self
            .palette
            .iter()
            .fold((0.0, 0.0, 0.0), |(r, g, b): (ColorFloat, ColorFloat, ColorFloat), c| {
                (r + c.red(), g + c.green(), b + c.blue())
            });
        let (mut r, mut g, mut b) = (r / n, g / n, b / n);

        // channels are rounded half up on construction, so cap against the
        // rounded peak and scale to a whole channel value
        let peak = r.max(g).max(b);
        if (peak + 0.5).floor() > limit {
            let k = limit.floor() / peak;
            r *= k;
            g *= k;
            b *= k;
        }

        let _rgb = ColorModeGuard::push(ColorMode::Rgb);
        Color::from_triple(r, g, b)
    }
}

fn lerp_cyclic(
    len: usize,
    f: ColorFloat,
    color_at: impl Fn(usize) -> std::result::Result<Color, ColorParseError>,
) -> Result<Color> {
    if len == 0 {
        return Err(PaletteError::EmptyPalette);
    }

    let f = if f.is_finite() { f as f64 } else { 0.0 };
    let pos = f * len as f64;
    let base = pos.floor();
    let i1 = base.rem_euclid(len as f64) as usize % len;
    let i2 = (i1 + 1) % len;

    let t = (pos - base) as ColorFloat;
    Ok(color_at(i1)?.lerp(color_at(i2)?, t))
}

/// Configures a [`PaletteManager`] before its first selection.
#[derive(Debug)]
pub struct PaletteManagerBuilder<R = StdRng> {
    palettes: Vec<Vec<ColorLike>>,
    config: DerivationConfig,
    randomize: bool,
    rng: R,
}

impl Default for PaletteManagerBuilder<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl PaletteManagerBuilder<StdRng> {
    pub fn new() -> Self {
        Self {
            palettes: Vec::new(),
            config: DerivationConfig::default(),
            randomize: false,
            rng: StdRng::from_entropy(),
        }
    }
}

impl<R> PaletteManagerBuilder<R> {
    /// Palettes to select from. Leaving this empty means the built-in set.
    pub fn palettes<P, C>(mut self, palettes: impl IntoIterator<Item = P>) -> Self
    where
        P: IntoIterator<Item = C>,
        C: Into<ColorLike>,
    {
        self.palettes = palettes
            .into_iter()
            .map(|p| p.into_iter().map(Into::into).collect())
            .collect();
        self
    }

    pub fn config(mut self, config: DerivationConfig) -> Self {
        self.config = config;
        self
    }

    /// Shuffle the palette picked at construction.
    pub fn randomize(mut self, randomize: bool) -> Self {
        self.randomize = randomize;
        self
    }

    pub fn rng<R2>(self, rng: R2) -> PaletteManagerBuilder<R2> {
        PaletteManagerBuilder {
            palettes: self.palettes,
            config: self.config,
            randomize: self.randomize,
            rng,
        }
    }

    /// Seed the generator for reproducible sketches.
    pub fn seed(self, seed: u64) -> PaletteManagerBuilder<StdRng> {
        self.rng(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> PaletteManagerBuilder<R> {
    pub fn build(self) -> Result<PaletteManager<R>> {
        let PaletteManagerBuilder {
            palettes,
            config,
            randomize,
            rng,
        } = self;

        let palettes = if palettes.is_empty() {
            log::debug!("no palettes supplied, using the built-in set");
            default_palettes()
        } else {
            palettes
        };

        let mut manager = PaletteManager {
            palettes,
            palette: Vec::new(),
            fg: Color::default(),
            bg: Color::default(),
            config,
            rng,
        };
        manager.select_random_palette(randomize)?;
        Ok(manager)
    }
}
