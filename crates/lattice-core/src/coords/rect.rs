use core::fmt;

use super::{Scalar, Vec2};
use crate::error::{MathError, Result};

/// Axis-aligned rectangle (top-left origin, +Y down).
///
/// Invariant: width and height are never negative. Every constructor and
/// setter that could break this returns [`MathError::InvalidArgument`] and
/// leaves the rectangle untouched.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Rectangle<T: Scalar> {
    position: Vec2<T>,
    size: Vec2<T>,
}

#[inline]
fn check_dimension<T: Scalar>(value: T, message: &'static str) -> Result<()> {
    if value < T::zero() {
        Err(MathError::InvalidArgument(message))
    } else {
        Ok(())
    }
}

#[inline]
fn check_size<T: Scalar>(size: &Vec2<T>) -> Result<()> {
    if size.x() < T::zero() || size.y() < T::zero() {
        Err(MathError::InvalidArgument(
            "rectangle width and height must be non-negative",
        ))
    } else {
        Ok(())
    }
}

impl<T: Scalar> Rectangle<T> {
    pub fn new(x: T, y: T, width: T, height: T) -> Result<Self> {
        Self::from_position_size(Vec2::new([x, y]), Vec2::new([width, height]))
    }

    pub fn from_position_size(position: Vec2<T>, size: Vec2<T>) -> Result<Self> {
        check_size(&size)?;
        Ok(Self { position, size })
    }

    #[inline]
    pub fn position(&self) -> Vec2<T> {
        self.position
    }

    #[inline]
    pub fn size(&self) -> Vec2<T> {
        self.size
    }

    #[inline]
    pub fn x(&self) -> T {
        self.position.x()
    }

    #[inline]
    pub fn y(&self) -> T {
        self.position.y()
    }

    #[inline]
    pub fn width(&self) -> T {
        self.size.x()
    }

    #[inline]
    pub fn height(&self) -> T {
        self.size.y()
    }

    pub fn set_position(&mut self, position: Vec2<T>) {
        self.position = position;
    }

    pub fn set_x(&mut self, x: T) {
        self.position[0] = x;
    }

    pub fn set_y(&mut self, y: T) {
        self.position[1] = y;
    }

    pub fn set_size(&mut self, size: Vec2<T>) -> Result<()> {
        check_size(&size)?;
        self.size = size;
        Ok(())
    }

    pub fn set_width(&mut self, width: T) -> Result<()> {
        check_dimension(width, "rectangle width must be non-negative")?;
        self.size[0] = width;
        Ok(())
    }

    pub fn set_height(&mut self, height: T) -> Result<()> {
        check_dimension(height, "rectangle height must be non-negative")?;
        self.size[1] = height;
        Ok(())
    }

    #[inline]
    pub fn right(&self) -> T {
        self.x() + self.width()
    }

    #[inline]
    pub fn bottom(&self) -> T {
        self.y() + self.height()
    }

    /// Horizontal center. Integer rectangles truncate the half width.
    #[inline]
    pub fn center_x(&self) -> T {
        self.x() + self.width() / T::two()
    }

    #[inline]
    pub fn center_y(&self) -> T {
        self.y() + self.height() / T::two()
    }

    #[inline]
    pub fn area(&self) -> T {
        self.width() * self.height()
    }

    #[inline]
    pub fn perimeter(&self) -> T {
        T::two() * (self.width() + self.height())
    }

    /// Closed containment: points on any edge are inside.
    pub fn contains(&self, point: Vec2<T>) -> bool {
        point.x() >= self.x()
            && point.x() <= self.right()
            && point.y() >= self.y()
            && point.y() <= self.bottom()
    }

    /// AABB overlap test. Rectangles sharing only an edge or corner intersect.
    pub fn intersects(&self, other: &Self) -> bool {
        !(self.x() > other.right()
            || self.right() < other.x()
            || self.y() > other.bottom()
            || self.bottom() < other.y())
    }

    /// Whether `other` lies entirely within this rectangle's closed bounds.
    pub fn contains_rectangle(&self, other: &Self) -> bool {
        other.x() >= self.x()
            && other.right() <= self.right()
            && other.y() >= self.y()
            && other.bottom() <= self.bottom()
    }

    pub fn translate(&mut self, dx: T, dy: T) {
        self.position += Vec2::new([dx, dy]);
    }

    #[must_use = "Rectangle::translated() does not act in place"]
    pub fn translated(&self, offset: Vec2<T>) -> Self {
        Self {
            position: self.position + offset,
            size: self.size,
        }
    }

    /// Scales width and height by `factor` around the current center.
    pub fn scale(&mut self, factor: T) -> Result<()> {
        *self = self.scaled(factor)?;
        Ok(())
    }

    /// Scaled copy; the center is computed from the old bounds and kept fixed.
    ///
    /// Fails with [`MathError::InvalidArgument`] when the new size or position
    /// does not fit in `T`, e.g. an unsigned rectangle growing past zero.
    pub fn scaled(&self, factor: T) -> Result<Self> {
        const UNREPRESENTABLE: MathError =
            MathError::InvalidArgument("scaled rectangle is not representable");

        check_dimension(factor, "scale factor must be non-negative")?;
        let width = self.width().checked_mul(factor).ok_or(UNREPRESENTABLE)?;
        let height = self.height().checked_mul(factor).ok_or(UNREPRESENTABLE)?;
        let x = self
            .center_x()
            .checked_sub(width / T::two())
            .ok_or(UNREPRESENTABLE)?;
        let y = self
            .center_y()
            .checked_sub(height / T::two())
            .ok_or(UNREPRESENTABLE)?;
        Ok(Self {
            position: Vec2::new([x, y]),
            size: Vec2::new([width, height]),
        })
    }
}

impl<T: Scalar> fmt::Display for Rectangle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Rectangle({}, {}, {}, {})",
            self.x(),
            self.y(),
            self.width(),
            self.height()
        )
    }
}
