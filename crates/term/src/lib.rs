//! Terminal rendering for blockfall.
//!
//! Snapshots are drawn into a plain framebuffer of styled character cells,
//! which a small renderer then diffs and flushes to the terminal. Board cells
//! are two columns wide to compensate for glyph aspect ratio.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Overlay, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
