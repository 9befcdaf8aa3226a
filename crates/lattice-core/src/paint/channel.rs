use core::fmt::{Debug, Display};

/// Numeric domain of a [`Color`](super::Color) channel.
///
/// Floating channels live in `[0, 1]`, integral channels in `[0, 255]`.
/// The blending helpers assume their inputs are already in range and return
/// clamped results.
///
/// Integral channels compute in `i64` and truncate toward zero on division;
/// every operand is non-negative at that point so the result does not depend
/// on the platform's signed division rules.
pub trait Channel: Copy + PartialEq + PartialOrd + Debug + Display {
    /// Lowest channel value (no intensity, fully transparent).
    const ZERO: Self;
    /// Highest channel value (full intensity, fully opaque).
    const MAX: Self;

    /// Clamps an arbitrary value into `[ZERO, MAX]`.
    fn clamp_channel(self) -> Self;

    fn add_clamped(self, rhs: Self) -> Self;

    fn sub_clamped(self, rhs: Self) -> Self;

    fn mul_clamped(self, factor: Self) -> Self;

    /// `MAX - self`.
    fn complement(self) -> Self;

    /// Rec. 601 luma of an RGB triple.
    fn luminance(r: Self, g: Self, b: Self) -> Self;

    /// `(1 - t) * from + t * to`, with `t` expressed in channel units.
    fn lerp(from: Self, to: Self, t: Self) -> Self;

    /// `alpha * fg + (1 - alpha) * bg` for a color channel.
    fn over(fg: Self, bg: Self, alpha: Self) -> Self;

    /// `alpha + (1 - alpha) * bg_alpha` for the alpha channel.
    fn over_alpha(alpha: Self, bg_alpha: Self) -> Self;
}

macro_rules! impl_float_channel {
    ($($t:ty),* $(,)?) => {$(
        impl Channel for $t {
            const ZERO: Self = 0.0;
            const MAX: Self = 1.0;

            #[inline]
            fn clamp_channel(self) -> Self {
                self.max(0.0).min(1.0)
            }

            #[inline]
            fn add_clamped(self, rhs: Self) -> Self {
                (self + rhs).clamp_channel()
            }

            #[inline]
            fn sub_clamped(self, rhs: Self) -> Self {
                (self - rhs).clamp_channel()
            }

            #[inline]
            fn mul_clamped(self, factor: Self) -> Self {
                (self * factor).clamp_channel()
            }

            #[inline]
            fn complement(self) -> Self {
                1.0 - self
            }

            #[inline]
            fn luminance(r: Self, g: Self, b: Self) -> Self {
                (0.299 * r + 0.587 * g + 0.114 * b).clamp_channel()
            }

            #[inline]
            fn lerp(from: Self, to: Self, t: Self) -> Self {
                ((1.0 - t) * from + t * to).clamp_channel()
            }

            #[inline]
            fn over(fg: Self, bg: Self, alpha: Self) -> Self {
                (alpha * fg + (1.0 - alpha) * bg).clamp_channel()
            }

            #[inline]
            fn over_alpha(alpha: Self, bg_alpha: Self) -> Self {
                (alpha + (1.0 - alpha) * bg_alpha).clamp_channel()
            }
        }
    )*};
}

const INT_MAX: i64 = 255;

#[inline]
fn clamp_wide(value: i64) -> i64 {
    value.clamp(0, INT_MAX)
}

macro_rules! impl_int_channel {
    ($($t:ty),* $(,)?) => {$(
        impl Channel for $t {
            const ZERO: Self = 0;
            const MAX: Self = 255;

            #[inline]
            fn clamp_channel(self) -> Self {
                clamp_wide(self as i64) as $t
            }

            #[inline]
            fn add_clamped(self, rhs: Self) -> Self {
                clamp_wide(self as i64 + rhs as i64) as $t
            }

            #[inline]
            fn sub_clamped(self, rhs: Self) -> Self {
                clamp_wide(self as i64 - rhs as i64) as $t
            }

            #[inline]
            fn mul_clamped(self, factor: Self) -> Self {
                clamp_wide((self as i64).saturating_mul(factor as i64)) as $t
            }

            #[inline]
            fn complement(self) -> Self {
                (INT_MAX - self as i64) as $t
            }

            #[inline]
            fn luminance(r: Self, g: Self, b: Self) -> Self {
                let weighted = 299 * r as i64 + 587 * g as i64 + 114 * b as i64;
                clamp_wide(weighted / 1000) as $t
            }

            #[inline]
            fn lerp(from: Self, to: Self, t: Self) -> Self {
                let t = t as i64;
                let blended = (INT_MAX - t) * from as i64 + t * to as i64;
                clamp_wide(blended / INT_MAX) as $t
            }

            #[inline]
            fn over(fg: Self, bg: Self, alpha: Self) -> Self {
                let a = alpha as i64;
                let blended = a * fg as i64 + (INT_MAX - a) * bg as i64;
                clamp_wide(blended / INT_MAX) as $t
            }

            #[inline]
            fn over_alpha(alpha: Self, bg_alpha: Self) -> Self {
                let a = alpha as i64;
                let blended = a * INT_MAX + (INT_MAX - a) * bg_alpha as i64;
                clamp_wide(blended / INT_MAX) as $t
            }
        }
    )*};
}

impl_float_channel!(f32, f64);
impl_int_channel!(u8, u16, u32, i16, i32, i64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_channel_per_domain() {
        assert_eq!(1.5_f32.clamp_channel(), 1.0);
        assert_eq!((-0.5_f64).clamp_channel(), 0.0);
        assert_eq!(300_i32.clamp_channel(), 255);
        assert_eq!((-7_i16).clamp_channel(), 0);
        assert_eq!(128_u32.clamp_channel(), 128);
    }

    #[test]
    fn narrow_integers_do_not_overflow() {
        assert_eq!(200_u8.add_clamped(100), 255);
        assert_eq!(10_u8.sub_clamped(20), 0);
        assert_eq!(200_u8.mul_clamped(2), 255);
    }

    #[test]
    fn integer_lerp_truncates() {
        assert_eq!(<u8 as Channel>::lerp(0, 255, 127), 127);
        assert_eq!(<i32 as Channel>::lerp(10, 10, 200), 10);
        assert_eq!(<i32 as Channel>::lerp(0, 255, 255), 255);
    }

    #[test]
    fn integer_over_alpha_is_normalized() {
        assert_eq!(<u8 as Channel>::over_alpha(255, 0), 255);
        assert_eq!(<u8 as Channel>::over_alpha(0, 200), 200);
        assert_eq!(<i32 as Channel>::over_alpha(128, 255), 255);
    }
}
