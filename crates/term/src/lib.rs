//! Terminal "game renderer" module.
//!
//! A small rendering layer for terminal play. Frames are drawn into a plain
//! framebuffer by [`GameView`] (pure, testable) and flushed to the terminal by
//! [`TerminalRenderer`], which also owns raw mode and the alternate screen.
//! [`TerminalDisplay`] ties the two together behind the engine's `Renderer` trait.

pub mod display;
pub mod fb;
pub mod game_view;
pub mod renderer;

pub use term_2048_core as core;
pub use term_2048_engine as engine;
pub use term_2048_types as types;

pub use display::TerminalDisplay;
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{cell_width, tile_color, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, restore_terminal, TerminalRenderer};
