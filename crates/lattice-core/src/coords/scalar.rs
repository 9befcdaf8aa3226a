use core::fmt::{Debug, Display};

use num_traits::Num;

/// Numeric component type usable in [`Vector`](super::Vector) and the shapes built on it.
///
/// Implemented for the primitive integer and floating-point types. Integer
/// square roots are computed in `f64` and truncated back to the integer type.
pub trait Scalar: Num + Copy + PartialOrd + Debug + Display {
    fn sqrt(self) -> Self;

    /// `self + rhs`, `None` when the result does not fit. Never `None` for floats.
    fn checked_add(self, rhs: Self) -> Option<Self>;

    /// `self - rhs`, `None` when the result does not fit (e.g. below zero for
    /// unsigned types). Never `None` for floats.
    fn checked_sub(self, rhs: Self) -> Option<Self>;

    /// `self * rhs`, `None` when the result does not fit. Never `None` for floats.
    fn checked_mul(self, rhs: Self) -> Option<Self>;

    #[inline]
    fn two() -> Self {
        Self::one() + Self::one()
    }
}

macro_rules! impl_float_scalar {
    ($($t:ty),* $(,)?) => {$(
        impl Scalar for $t {
            #[inline]
            fn sqrt(self) -> Self {
                <$t>::sqrt(self)
            }

            #[inline]
            fn checked_add(self, rhs: Self) -> Option<Self> {
                Some(self + rhs)
            }

            #[inline]
            fn checked_sub(self, rhs: Self) -> Option<Self> {
                Some(self - rhs)
            }

            #[inline]
            fn checked_mul(self, rhs: Self) -> Option<Self> {
                Some(self * rhs)
            }
        }
    )*};
}

macro_rules! impl_int_scalar {
    ($($t:ty),* $(,)?) => {$(
        impl Scalar for $t {
            #[inline]
            fn sqrt(self) -> Self {
                (self as f64).sqrt() as $t
            }

            #[inline]
            fn checked_add(self, rhs: Self) -> Option<Self> {
                <$t>::checked_add(self, rhs)
            }

            #[inline]
            fn checked_sub(self, rhs: Self) -> Option<Self> {
                <$t>::checked_sub(self, rhs)
            }

            #[inline]
            fn checked_mul(self, rhs: Self) -> Option<Self> {
                <$t>::checked_mul(self, rhs)
            }
        }
    )*};
}

impl_float_scalar!(f32, f64);
impl_int_scalar!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_sqrt_truncates() {
        assert_eq!(Scalar::sqrt(25_i32), 5);
        assert_eq!(Scalar::sqrt(2_i32), 1);
        assert_eq!(Scalar::sqrt(99_u64), 9);
    }

    #[test]
    fn float_sqrt_is_exact_on_squares() {
        assert_eq!(Scalar::sqrt(49.0_f64), 7.0);
        assert_eq!(Scalar::sqrt(0.25_f32), 0.5);
    }

    #[test]
    fn checked_ops_detect_integer_overflow() {
        assert_eq!(Scalar::checked_sub(3_u32, 5), None);
        assert_eq!(Scalar::checked_sub(5_u32, 3), Some(2));
        assert_eq!(Scalar::checked_mul(100_i8, 2), None);
        assert_eq!(Scalar::checked_add(i64::MAX, 1), None);
    }

    #[test]
    fn checked_ops_never_fail_for_floats() {
        assert_eq!(Scalar::checked_sub(3.0_f64, 5.0), Some(-2.0));
        assert_eq!(Scalar::checked_mul(f32::MAX, 2.0), Some(f32::INFINITY));
    }

    #[test]
    fn two_is_one_plus_one() {
        assert_eq!(<i32 as Scalar>::two(), 2);
        assert_eq!(<f32 as Scalar>::two(), 2.0);
    }
}
