use super::{Scalar, Vec3};

/// Axis-aligned box in 3D space.
///
/// `origin` is the local pivot relative to `position`. Unlike [`Rectangle`](super::Rectangle)
/// the dimensions are not validated.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Parallelepiped<T: Scalar> {
    position: Vec3<T>,
    origin: Vec3<T>,
    size: Vec3<T>,
}

impl<T: Scalar> Parallelepiped<T> {
    #[inline]
    pub const fn new(position: Vec3<T>, origin: Vec3<T>, size: Vec3<T>) -> Self {
        Self { position, origin, size }
    }

    #[inline]
    pub fn position(&self) -> Vec3<T> {
        self.position
    }

    pub fn set_position(&mut self, position: Vec3<T>) {
        self.position = position;
    }

    #[inline]
    pub fn origin(&self) -> Vec3<T> {
        self.origin
    }

    pub fn set_origin(&mut self, origin: Vec3<T>) {
        self.origin = origin;
    }

    /// `(width, height, depth)`.
    #[inline]
    pub fn size(&self) -> Vec3<T> {
        self.size
    }

    pub fn set_size(&mut self, size: Vec3<T>) {
        self.size = size;
    }
}
