//! Coordinate and geometry types.
//!
//! Canonical space:
//! - Origin top-left
//! - +X right, +Y down
//!
//! All shapes are built from [`Vector`] and share its scalar bound.

mod parallelepiped;
mod rect;
mod scalar;
mod vector;

pub use parallelepiped::Parallelepiped;
pub use rect::Rectangle;
pub use scalar::Scalar;
pub use vector::{Vec2, Vec3, Vector};
