/// Clamp a generic value between two other values.
#[inline(always)]
pub fn clamp_generic<T: PartialOrd>(x: T, lo: T, hi: T) -> T {
    if x < lo {
        lo
    } else if x > hi {
        hi
    } else {
        x
    }
}

/// Unclamped linear interpolation, `a` at `t = 0` and `b` at `t = 1`.
///
/// Values of `t` outside `0..=1` extrapolate past either end.
#[inline(always)]
pub fn lerp<T: Float>(a: T, b: T, t: T) -> T {
    a.add(b.sub(a).mul(t))
}

/// A floating point trait that can be used synonymously
/// for f32 and f64 so channel math follows `ColorFloat`.
pub trait Float: Copy + PartialOrd {
    const ZERO: Self;
    const ONE: Self;
    /// Upper bound of an 8 bit channel.
    const CHANNEL_MAX: Self;

    fn from_f32(x: f32) -> Self;
    fn from_u8(x: u8) -> Self;
    fn to_f32(self) -> f32;
    fn to_f64(self) -> f64;

    fn add(self, rhs: Self) -> Self;
    fn sub(self, rhs: Self) -> Self;
    fn mul(self, rhs: Self) -> Self;

    fn floor(self) -> Self;
    fn is_finite(self) -> bool;

    /// Clamp this Float between 0.0 and 1.0
    fn clamp01(self) -> Self {
        clamp_generic(self, Self::ZERO, Self::ONE)
    }

    /// Round to the nearest 8 bit channel value, saturating at 0 and 255.
    fn to_channel(self) -> u8 {
        let v = clamp_generic(self, Self::ZERO, Self::CHANNEL_MAX);
        // NaN fails both comparisons above
        if !v.is_finite() {
            return 0;
        }
        v.add(Self::from_f32(0.5)).floor().to_f32() as u8
    }
}

impl Float for f32 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
    const CHANNEL_MAX: Self = 255.0;

    #[inline]
    fn from_f32(x: f32) -> Self {
        x
    }
    #[inline]
    fn from_u8(x: u8) -> Self {
        x as f32
    }
    #[inline]
    fn to_f32(self) -> f32 {
        self
    }
    #[inline]
    fn to_f64(self) -> f64 {
        self as f64
    }

    #[inline]
    fn add(self, rhs: Self) -> Self {
        self + rhs
    }
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self - rhs
    }
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self * rhs
    }

    #[inline]
    fn floor(self) -> Self {
        f32::floor(self)
    }
    #[inline]
    fn is_finite(self) -> bool {
        f32::is_finite(self)
    }
}

impl Float for f64 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
    const CHANNEL_MAX: Self = 255.0;

    #[inline]
    fn from_f32(x: f32) -> Self {
        x as f64
    }
    #[inline]
    fn from_u8(x: u8) -> Self {
        x as f64
    }
    #[inline]
    fn to_f32(self) -> f32 {
        self as f32
    }
    #[inline]
    fn to_f64(self) -> f64 {
        self
    }

    #[inline]
    fn add(self, rhs: Self) -> Self {
        self + rhs
    }
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self - rhs
    }
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self * rhs
    }

    #[inline]
    fn floor(self) -> Self {
        f64::floor(self)
    }
    #[inline]
    fn is_finite(self) -> bool {
        f64::is_finite(self)
    }
}
