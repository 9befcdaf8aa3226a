use core::fmt;
use core::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use super::Scalar;
use crate::error::{MathError, Result};

/// Fixed-size arithmetic vector with `N` components of type `T`.
///
/// The dimension is part of the type, so `cross` only exists on `Vector<T, 3>`.
/// Equality is exact component-wise comparison.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Vector<T, const N: usize> {
    components: [T; N],
}

/// Two-component vector.
pub type Vec2<T> = Vector<T, 2>;

/// Three-component vector.
pub type Vec3<T> = Vector<T, 3>;

impl<T: Scalar, const N: usize> Vector<T, N> {
    #[inline]
    pub const fn new(components: [T; N]) -> Self {
        Self { components }
    }

    #[inline]
    pub fn zero() -> Self {
        Self::splat(T::zero())
    }

    /// Vector with every component set to `value`.
    #[inline]
    pub fn splat(value: T) -> Self {
        Self {
            components: [value; N],
        }
    }

    /// Builds a vector from a slice holding exactly `N` values.
    pub fn from_slice(values: &[T]) -> Result<Self> {
        let components = <[T; N]>::try_from(values).map_err(|_| {
            MathError::InvalidArgument("component count must match vector dimension")
        })?;
        Ok(Self { components })
    }

    /// Number of components, fixed by the type.
    #[inline]
    #[allow(clippy::len_without_is_empty)]
    pub const fn len(&self) -> usize {
        N
    }

    #[inline]
    pub fn get(&self, index: usize) -> Result<T> {
        self.components
            .get(index)
            .copied()
            .ok_or(MathError::OutOfRange { index, dimension: N })
    }

    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        self.components
            .get_mut(index)
            .ok_or(MathError::OutOfRange { index, dimension: N })
    }

    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        *self.get_mut(index)? = value;
        Ok(())
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.components
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.components
    }

    #[inline]
    pub fn as_array(&self) -> &[T; N] {
        &self.components
    }

    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.components.iter()
    }

    /// Applies `f` to every component.
    #[inline]
    pub fn map(self, f: impl FnMut(T) -> T) -> Self {
        Self {
            components: self.components.map(f),
        }
    }

    #[inline]
    fn zip_with(self, rhs: Self, mut f: impl FnMut(T, T) -> T) -> Self {
        Self {
            components: core::array::from_fn(|i| f(self.components[i], rhs.components[i])),
        }
    }

    /// Sum of the component-wise products.
    ///
    /// # Panics
    /// Integer vectors overflow like the underlying integer arithmetic: a panic
    /// in debug builds, wrapping in release. `Vector::<i8, 2>::new([100, 100])`
    /// already overflows in `magnitude`. Use [`checked_dot`](Self::checked_dot)
    /// when components may be large.
    pub fn dot(&self, other: &Self) -> T {
        self.components
            .iter()
            .zip(other.components.iter())
            .fold(T::zero(), |acc, (&a, &b)| acc + a * b)
    }

    /// [`dot`](Self::dot) that reports integer overflow instead of panicking.
    pub fn checked_dot(&self, other: &Self) -> Result<T> {
        self.components
            .iter()
            .zip(other.components.iter())
            .try_fold(T::zero(), |acc, (&a, &b)| {
                a.checked_mul(b).and_then(|product| acc.checked_add(product))
            })
            .ok_or(MathError::Runtime("dot product overflows the component type"))
    }

    /// Squared euclidean length; avoids the square root when only comparing lengths.
    ///
    /// # Panics
    /// Same overflow behavior as [`dot`](Self::dot).
    #[inline]
    pub fn magnitude_squared(&self) -> T {
        self.dot(self)
    }

    #[inline]
    pub fn checked_magnitude_squared(&self) -> Result<T> {
        self.checked_dot(self)
    }

    /// [`magnitude`](Self::magnitude) that reports integer overflow instead of panicking.
    pub fn checked_magnitude(&self) -> Result<T> {
        self.checked_magnitude_squared().map(Scalar::sqrt)
    }

    #[inline]
    pub fn magnitude(&self) -> T {
        self.magnitude_squared().sqrt()
    }

    /// Returns this vector scaled to unit length.
    ///
    /// Fails with [`MathError::Runtime`] when the magnitude is exactly zero.
    /// Tiny non-zero vectors are normalized as-is.
    pub fn normalized(&self) -> Result<Self> {
        let magnitude = self.magnitude();
        if magnitude == T::zero() {
            return Err(MathError::Runtime("cannot normalize a zero vector"));
        }
        self.checked_div(magnitude)
    }

    /// In-place [`normalized`](Self::normalized). The vector is left untouched on failure.
    pub fn normalize(&mut self) -> Result<()> {
        *self = self.normalized()?;
        Ok(())
    }

    #[inline]
    pub fn distance(&self, other: &Self) -> T {
        (*self - *other).magnitude()
    }

    #[inline]
    pub fn distance_squared(&self, other: &Self) -> T {
        (*self - *other).magnitude_squared()
    }

    /// Divides every component by `scalar`, rejecting an exact-zero divisor.
    pub fn checked_div(&self, scalar: T) -> Result<Self> {
        if scalar == T::zero() {
            return Err(MathError::InvalidArgument("division by zero"));
        }
        Ok(self.map(|c| c / scalar))
    }

    pub fn checked_div_assign(&mut self, scalar: T) -> Result<()> {
        *self = self.checked_div(scalar)?;
        Ok(())
    }
}

impl<T: Scalar> Vector<T, 2> {
    #[inline]
    pub fn x(&self) -> T {
        self.components[0]
    }

    #[inline]
    pub fn y(&self) -> T {
        self.components[1]
    }
}

impl<T: Scalar> Vector<T, 3> {
    #[inline]
    pub fn x(&self) -> T {
        self.components[0]
    }

    #[inline]
    pub fn y(&self) -> T {
        self.components[1]
    }

    #[inline]
    pub fn z(&self) -> T {
        self.components[2]
    }

    /// Right-handed cross product.
    pub fn cross(&self, other: &Self) -> Self {
        let [ax, ay, az] = self.components;
        let [bx, by, bz] = other.components;
        Self::new([ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx])
    }
}

impl<T: Scalar, const N: usize> Default for Vector<T, N> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Scalar, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(components: [T; N]) -> Self {
        Self::new(components)
    }
}

impl<T: Scalar, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline]
    fn from(vector: Vector<T, N>) -> Self {
        vector.components
    }
}

impl<T: Scalar, const N: usize> TryFrom<&[T]> for Vector<T, N> {
    type Error = MathError;

    fn try_from(values: &[T]) -> Result<Self> {
        Self::from_slice(values)
    }
}

// Indexing panics like slice indexing; `get`/`get_mut` are the fallible forms.
impl<T: Scalar, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.components.get(index) {
            Some(c) => c,
            None => panic!("{}", MathError::OutOfRange { index, dimension: N }),
        }
    }
}

impl<T: Scalar, const N: usize> IndexMut<usize> for Vector<T, N> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.components.get_mut(index) {
            Some(c) => c,
            None => panic!("{}", MathError::OutOfRange { index, dimension: N }),
        }
    }
}

impl<T: Scalar, const N: usize> Add for Vector<T, N> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        self.zip_with(rhs, |a, b| a + b)
    }
}

impl<T: Scalar, const N: usize> Sub for Vector<T, N> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self.zip_with(rhs, |a, b| a - b)
    }
}

impl<T: Scalar, const N: usize> Mul<T> for Vector<T, N> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: T) -> Self {
        self.map(|c| c * rhs)
    }
}

impl<T: Scalar, const N: usize> Div<T> for Vector<T, N> {
    type Output = Self;

    /// # Panics
    /// Panics when `rhs` is exactly zero. Use [`Vector::checked_div`] to handle that case.
    fn div(self, rhs: T) -> Self {
        match self.checked_div(rhs) {
            Ok(v) => v,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T: Scalar + Neg<Output = T>, const N: usize> Neg for Vector<T, N> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        self.map(|c| -c)
    }
}

impl<T: Scalar, const N: usize> AddAssign for Vector<T, N> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Scalar, const N: usize> SubAssign for Vector<T, N> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: Scalar, const N: usize> MulAssign<T> for Vector<T, N> {
    #[inline]
    fn mul_assign(&mut self, rhs: T) {
        *self = *self * rhs;
    }
}

impl<T: Scalar, const N: usize> DivAssign<T> for Vector<T, N> {
    /// # Panics
    /// Panics when `rhs` is exactly zero, leaving the vector unchanged.
    fn div_assign(&mut self, rhs: T) {
        *self = *self / rhs;
    }
}

// `scalar * vector` for the primitive scalars.
macro_rules! impl_scalar_lhs_mul {
    ($($t:ty),* $(,)?) => {$(
        impl<const N: usize> Mul<Vector<$t, N>> for $t {
            type Output = Vector<$t, N>;
            #[inline]
            fn mul(self, rhs: Vector<$t, N>) -> Vector<$t, N> {
                rhs * self
            }
        }
    )*};
}

impl_scalar_lhs_mul!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl<T: Scalar, const N: usize> fmt::Display for Vector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, c) in self.components.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{c}")?;
        }
        f.write_str(")")
    }
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;

    use super::*;

    // ── construction ──────────────────────────────────────────────────────

    #[test]
    fn default_is_all_zero() {
        let v: Vector<i32, 3> = Vector::default();
        assert_eq!(v.as_slice(), &[0, 0, 0]);
        let w: Vector<f64, 5> = Vector::default();
        assert!(w.iter().all(|&c| c == 0.0));
    }

    #[test]
    fn from_slice_with_matching_length() {
        let v = Vector::<f64, 3>::from_slice(&[1.0, 2.0, 3.0]).unwrap();
        assert_eq!(v, Vector::new([1.0, 2.0, 3.0]));
    }

    #[test]
    fn from_slice_with_wrong_length_is_invalid_argument() {
        let err = Vector::<i32, 3>::from_slice(&[1, 2]).unwrap_err();
        assert!(matches!(err, MathError::InvalidArgument(_)));
        let err = Vector::<i32, 2>::try_from(&[1, 2, 3][..]).unwrap_err();
        assert!(matches!(err, MathError::InvalidArgument(_)));
    }

    #[test]
    fn splat_fills_every_component() {
        assert_eq!(Vector::<u8, 4>::splat(7).as_array(), &[7, 7, 7, 7]);
    }

    // ── indexing ──────────────────────────────────────────────────────────

    #[test]
    fn get_and_set_within_bounds() {
        let mut v = Vector::new([1, 2]);
        v.set(1, 9).unwrap();
        *v.get_mut(0).unwrap() += 4;
        assert_eq!(v.get(0).unwrap(), 5);
        assert_eq!(v[1], 9);
        assert_eq!(v.len(), 2);
    }

    #[test]
    fn get_past_dimension_is_out_of_range() {
        let mut v = Vector::<i32, 2>::zero();
        assert_eq!(
            v.get(2),
            Err(MathError::OutOfRange { index: 2, dimension: 2 })
        );
        assert!(v.get_mut(2).is_err());
        assert!(v.set(5, 1).is_err());
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn index_past_dimension_panics() {
        let v = Vector::<i32, 2>::zero();
        let _ = v[2];
    }

    // ── arithmetic ────────────────────────────────────────────────────────

    #[test]
    fn componentwise_arithmetic() {
        let a = Vector::new([1, 2, 3]);
        let b = Vector::new([4, 5, 6]);
        assert_eq!(a + b, Vector::new([5, 7, 9]));
        assert_eq!(b - a, Vector::new([3, 3, 3]));
        assert_eq!(a * 2, Vector::new([2, 4, 6]));
        assert_eq!(3_i32 * a, Vector::new([3, 6, 9]));
        assert_eq!(-a, Vector::new([-1, -2, -3]));
        assert_eq!(b / 2, Vector::new([2, 2, 3]));
    }

    #[test]
    fn compound_assignment_mutates_in_place() {
        let mut v = Vector::new([1.0, 2.0]);
        v += Vector::new([1.0, 1.0]);
        v -= Vector::new([0.5, 0.5]);
        v *= 4.0;
        v /= 2.0;
        assert_eq!(v, Vector::new([3.0, 5.0]));
    }

    #[test]
    fn division_by_zero_is_invalid_argument() {
        let mut v = Vector::new([1.0, 2.0]);
        assert!(matches!(v.checked_div(0.0), Err(MathError::InvalidArgument(_))));
        assert!(v.checked_div_assign(0.0).is_err());
        assert_eq!(v, Vector::new([1.0, 2.0]));
    }

    #[test]
    #[should_panic(expected = "division by zero")]
    fn division_operator_panics_on_zero() {
        let _ = Vector::new([1, 2]) / 0;
    }

    // ── products and lengths ──────────────────────────────────────────────

    #[test]
    fn dot_and_magnitude() {
        let a = Vector::new([1.0_f64, 2.0, 3.0]);
        let b = Vector::new([4.0, -5.0, 6.0]);
        assert_eq!(a.dot(&b), 12.0);
        assert_eq!(a.magnitude_squared(), 14.0);
        assert_approx_eq!(a.magnitude(), 14.0_f64.sqrt(), 1e-12);
    }

    #[test]
    fn integer_magnitude_truncates() {
        assert_eq!(Vector::new([3, 4]).magnitude(), 5);
        assert_eq!(Vector::new([1, 1]).magnitude(), 1);
    }

    #[test]
    fn narrow_integer_overflow_is_reported() {
        let v = Vector::<i8, 2>::new([100, 100]);
        assert!(matches!(v.checked_magnitude(), Err(MathError::Runtime(_))));
        assert!(matches!(v.checked_dot(&v), Err(MathError::Runtime(_))));

        let w = Vector::<i8, 2>::new([6, 8]);
        assert_eq!(w.checked_magnitude_squared(), Ok(100));
        assert_eq!(w.checked_magnitude(), Ok(10));
    }

    #[test]
    fn checked_dot_matches_dot_for_floats() {
        let a = Vector::new([1.0_f64, 2.0, 3.0]);
        let b = Vector::new([4.0, -5.0, 6.0]);
        assert_eq!(a.checked_dot(&b), Ok(a.dot(&b)));
    }

    #[test]
    fn normalized_has_unit_length() {
        let mut v = Vector::new([3.0_f64, 0.0, 4.0]);
        assert_approx_eq!(v.normalized().unwrap().magnitude(), 1.0, 1e-12);

        v.normalize().unwrap();
        assert_approx_eq!(v.magnitude(), 1.0, 1e-12);
        assert_approx_eq!(v.x(), 0.6, 1e-12);
        assert_approx_eq!(v.z(), 0.8, 1e-12);
    }

    #[test]
    fn normalizing_zero_vector_fails() {
        let mut v = Vector::<f64, 3>::zero();
        assert!(matches!(v.normalized(), Err(MathError::Runtime(_))));
        assert!(matches!(v.normalize(), Err(MathError::Runtime(_))));
    }

    #[test]
    fn tiny_vector_still_normalizes() {
        let v = Vector::new([1e-30_f64, 0.0]);
        assert_approx_eq!(v.normalized().unwrap().x(), 1.0, 1e-12);
    }

    #[test]
    fn cross_of_unit_axes() {
        let x = Vector::new([1.0, 0.0, 0.0]);
        let y = Vector::new([0.0, 1.0, 0.0]);
        assert_eq!(x.cross(&y), Vector::new([0.0, 0.0, 1.0]));
        assert_eq!(y.cross(&x), Vector::new([0.0, 0.0, -1.0]));
    }

    #[test]
    fn cross_is_orthogonal_to_operands() {
        let a = Vector::new([1.5_f64, -2.0, 0.25]);
        let b = Vector::new([-3.0, 0.5, 4.0]);
        let c = a.cross(&b);
        assert_approx_eq!(c.dot(&a), 0.0, 1e-9);
        assert_approx_eq!(c.dot(&b), 0.0, 1e-9);
    }

    #[test]
    fn distance_between_points() {
        let a = Vector::new([3.0_f64, 0.0, 4.0]);
        let origin = Vector::zero();
        assert_approx_eq!(a.distance(&origin), 5.0, 1e-12);
        assert_eq!(a.distance_squared(&origin), 25.0);
    }

    // ── formatting ────────────────────────────────────────────────────────

    #[test]
    fn display_lists_components() {
        assert_eq!(Vector::new([1, 2, 3]).to_string(), "(1, 2, 3)");
        assert_eq!(Vector::new([0.5_f32, -1.0]).to_string(), "(0.5, -1)");
    }
}
