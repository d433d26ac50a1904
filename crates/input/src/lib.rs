//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]s and dialog
//! answers. Key repeat is left to the terminal: every press or auto-repeat
//! event is one command, like a browser `keydown`.

pub mod map;

pub use blockfall_types as types;

pub use map::{handle_key_event, is_exit_request, map_dialog_key, should_quit, DialogChoice};
