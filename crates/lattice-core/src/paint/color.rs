use core::fmt;
use core::ops::{Add, Mul, Sub};

use super::Channel;

/// Straight-alpha RGBA color.
///
/// Invariant:
/// - every channel lies in `[T::ZERO, T::MAX]`, i.e. `[0, 1]` for floating
///   channels and `[0, 255]` for integral ones.
///
/// Out-of-range input is clamped silently by every constructor and setter;
/// no color operation fails.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Color<T: Channel> {
    r: T,
    g: T,
    b: T,
    a: T,
}

impl<T: Channel> Color<T> {
    pub const BLACK: Self = Self::opaque(T::ZERO, T::ZERO, T::ZERO);
    pub const WHITE: Self = Self::opaque(T::MAX, T::MAX, T::MAX);
    pub const RED: Self = Self::opaque(T::MAX, T::ZERO, T::ZERO);
    pub const GREEN: Self = Self::opaque(T::ZERO, T::MAX, T::ZERO);
    pub const BLUE: Self = Self::opaque(T::ZERO, T::ZERO, T::MAX);
    pub const YELLOW: Self = Self::opaque(T::MAX, T::MAX, T::ZERO);
    pub const CYAN: Self = Self::opaque(T::ZERO, T::MAX, T::MAX);
    pub const MAGENTA: Self = Self::opaque(T::MAX, T::ZERO, T::MAX);
    pub const TRANSPARENT: Self = Self {
        r: T::ZERO,
        g: T::ZERO,
        b: T::ZERO,
        a: T::ZERO,
    };

    // Callers guarantee the channels are in range.
    #[inline]
    const fn opaque(r: T, g: T, b: T) -> Self {
        Self { r, g, b, a: T::MAX }
    }

    #[inline]
    pub fn new(r: T, g: T, b: T, a: T) -> Self {
        Self {
            r: r.clamp_channel(),
            g: g.clamp_channel(),
            b: b.clamp_channel(),
            a: a.clamp_channel(),
        }
    }

    /// Fully opaque color.
    #[inline]
    pub fn rgb(r: T, g: T, b: T) -> Self {
        Self::new(r, g, b, T::MAX)
    }

    #[inline]
    pub fn red(&self) -> T {
        self.r
    }

    #[inline]
    pub fn green(&self) -> T {
        self.g
    }

    #[inline]
    pub fn blue(&self) -> T {
        self.b
    }

    #[inline]
    pub fn alpha(&self) -> T {
        self.a
    }

    pub fn set_red(&mut self, r: T) {
        self.r = r.clamp_channel();
    }

    pub fn set_green(&mut self, g: T) {
        self.g = g.clamp_channel();
    }

    pub fn set_blue(&mut self, b: T) {
        self.b = b.clamp_channel();
    }

    pub fn set_alpha(&mut self, a: T) {
        self.a = a.clamp_channel();
    }

    pub fn set_rgba(&mut self, r: T, g: T, b: T, a: T) {
        *self = Self::new(r, g, b, a);
    }

    /// Gray of equal perceived brightness (0.299 R + 0.587 G + 0.114 B).
    ///
    /// Alpha is preserved.
    pub fn grayscale(&self) -> Self {
        let l = T::luminance(self.r, self.g, self.b);
        Self { r: l, g: l, b: l, a: self.a }
    }

    /// RGB complement; alpha is preserved.
    pub fn inverted(&self) -> Self {
        Self {
            r: self.r.complement(),
            g: self.g.complement(),
            b: self.b.complement(),
            a: self.a,
        }
    }

    /// Linear interpolation towards `other`, alpha included.
    ///
    /// `t` is clamped into channel range first, so for integral colors `t = 255`
    /// yields `other`.
    pub fn lerp(&self, other: &Self, t: T) -> Self {
        let t = t.clamp_channel();
        Self {
            r: T::lerp(self.r, other.r, t),
            g: T::lerp(self.g, other.g, t),
            b: T::lerp(self.b, other.b, t),
            a: T::lerp(self.a, other.a, t),
        }
    }

    /// Porter-Duff "over": composites this color on top of `background`.
    pub fn blend_over(&self, background: &Self) -> Self {
        let a = self.a;
        Self {
            r: T::over(self.r, background.r, a),
            g: T::over(self.g, background.g, a),
            b: T::over(self.b, background.b, a),
            a: T::over_alpha(a, background.a),
        }
    }

    /// Moves towards white by `factor`, keeping the current alpha.
    pub fn lighter(&self, factor: T) -> Self {
        let white = Self { a: self.a, ..Self::WHITE };
        self.lerp(&white, factor)
    }

    /// Moves towards black by `factor`, keeping the current alpha.
    pub fn darker(&self, factor: T) -> Self {
        let black = Self { a: self.a, ..Self::BLACK };
        self.lerp(&black, factor)
    }
}

impl<T: Channel> Default for Color<T> {
    /// Opaque black.
    fn default() -> Self {
        Self::BLACK
    }
}

// Arithmetic keeps the left operand's alpha.
impl<T: Channel> Add for Color<T> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self {
            r: self.r.add_clamped(rhs.r),
            g: self.g.add_clamped(rhs.g),
            b: self.b.add_clamped(rhs.b),
            a: self.a,
        }
    }
}

impl<T: Channel> Sub for Color<T> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self {
            r: self.r.sub_clamped(rhs.r),
            g: self.g.sub_clamped(rhs.g),
            b: self.b.sub_clamped(rhs.b),
            a: self.a,
        }
    }
}

impl<T: Channel> Mul<T> for Color<T> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: T) -> Self {
        Self {
            r: self.r.mul_clamped(rhs),
            g: self.g.mul_clamped(rhs),
            b: self.b.mul_clamped(rhs),
            a: self.a,
        }
    }
}

impl<T: Channel> fmt::Display for Color<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RGBA({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}
