//! blockfall (workspace facade crate).
//!
//! Re-exports the workspace crates under short names and hosts the pieces
//! owned by the binary: configuration, logging setup, and the [`app::App`]
//! that glues input, the gravity clock, and rendering together.

pub use blockfall_core as core;
pub use blockfall_engine as engine;
pub use blockfall_input as input;
pub use blockfall_term as term;
pub use blockfall_types as types;

pub mod app;
pub mod config;
pub mod logging;
