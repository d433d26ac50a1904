//! Engine drivers that sit between a frontend and the pure core.
//!
//! The core exposes a single `tick()` entry point and never reads a clock.
//! This crate owns the gravity schedule a frontend feeds with elapsed time.

pub mod clock;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use clock::GravityClock;
