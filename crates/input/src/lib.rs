//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::Command`] and provides a
//! blocking [`TerminalInput`] that implements the engine's `InputSource`.
//! The game state machine never sees raw keys.

pub mod map;
pub mod source;

pub use term_2048_engine as engine;
pub use term_2048_types as types;

pub use map::{handle_key_event, should_quit};
pub use source::{command_from_event, TerminalInput};
