//! Lattice core crate.
//!
//! Value types for graphics-adjacent code: a compile-time sized arithmetic
//! vector, an axis-aligned rectangle and box built on top of it, and an RGBA
//! color with clamped blending math.
//!
//! Geometry fails loudly (`MathError`) on invalid input, colors clamp silently.

pub mod coords;
pub mod error;
pub mod paint;

pub use coords::{Parallelepiped, Rectangle, Scalar, Vec2, Vec3, Vector};
pub use error::MathError;
pub use paint::{Channel, Color};
