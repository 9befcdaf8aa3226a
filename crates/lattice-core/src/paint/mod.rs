//! Color model.
//!
//! Scope:
//! - RGBA color with straight alpha
//! - channel domains (floating `[0, 1]`, integral `[0, 255]`)
//!
//! Geometry types remain in `coords`.

mod channel;
mod color;

pub use channel::Channel;
pub use color::Color;
