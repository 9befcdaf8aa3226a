//! Lattice utility crate.
//!
//! Runtime helpers shared by lattice applications: named loggers on top of
//! the `log` facade, type-keyed singletons, and keyboard/mouse event payloads.

pub mod input;
pub mod logging;
pub mod singleton;
