//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, tests).
//!
//! # Board Dimensions
//!
//! The classic 2048 playfield is a 4x4 square. The algorithms in `core` are
//! generic over the side length; [`GRID_SIZE`] only picks the size the game
//! actually plays on.
//!
//! # Tile Spawning
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `START_TILES` | 2 | Tiles placed on a fresh board |
//! | `SPAWN_VALUES` | `[2, 2, 2, 4]` | Each entry equally likely: P(2)=0.75, P(4)=0.25 |
//! | `WIN_TILE` | 2048 | Highlighted by the renderer; play continues past it |
//!
//! # Examples
//!
//! ```
//! use term_2048_types::{Command, Direction, GRID_SIZE};
//!
//! // Parse a direction (case-insensitive)
//! assert_eq!(Direction::from_str("Up"), Some(Direction::Up));
//!
//! // Map a key character to a command
//! assert_eq!(Command::from_char('a'), Command::Move(Direction::Left));
//! assert_eq!(Command::from_char('Y'), Command::ConfirmYes);
//! assert_eq!(Command::from_char('?'), Command::Unknown);
//!
//! assert_eq!(GRID_SIZE, 4);
//! ```

/// Board side length in cells (4x4)
pub const GRID_SIZE: usize = 4;

/// Number of tiles spawned on a fresh board.
pub const START_TILES: usize = 2;

/// Tile values a spawn draws from, each entry equally likely.
pub const SPAWN_VALUES: [u32; 4] = [2, 2, 2, 4];

/// The tile the game is named after.
pub const WIN_TILE: u32 = 2048;


/// The four slide directions.
///
/// Every direction is executed by the same leftward row reduction; see
/// `term_2048_core::moves` for how each one is reduced to LEFT.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// All directions, in a fixed order.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// Parse a direction name (case-insensitive).
    ///
    /// Only full names are accepted; single letters are key bindings and go
    /// through [`Command::from_char`].
    ///
    /// # Examples
    ///
    /// ```
    /// use term_2048_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("LEFT"), Some(Direction::Left));
    /// assert_eq!(Direction::from_str("down"), Some(Direction::Down));
    /// assert_eq!(Direction::from_str("d"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "left" => Some(Direction::Left),
            "right" => Some(Direction::Right),
            "up" => Some(Direction::Up),
            "down" => Some(Direction::Down),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }
}

/// Logical commands produced by an input source.
///
/// Raw key handling lives in `term_2048_input`; the state machine only ever
/// sees these values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Slide the board.
    Move(Direction),
    /// Ask to leave the game (Q, Esc, Ctrl-C).
    Quit,
    /// Ask to start over while playing.
    Restart,
    /// Answer "yes" to the current prompt.
    ConfirmYes,
    /// Answer "no" to the current prompt.
    ConfirmNo,
    /// Anything unrecognised. Always ignored.
    Unknown,
}

impl Command {
    /// Map a typed character to a command (case-insensitive).
    ///
    /// Letters follow the usual layout: W/A/S/D plus vi-style h/j/k/l.
    pub fn from_char(ch: char) -> Self {
        match ch.to_ascii_lowercase() {
            'a' | 'h' => Command::Move(Direction::Left),
            'd' | 'l' => Command::Move(Direction::Right),
            'w' | 'k' => Command::Move(Direction::Up),
            's' | 'j' => Command::Move(Direction::Down),
            'q' => Command::Quit,
            'r' => Command::Restart,
            'y' => Command::ConfirmYes,
            'n' => Command::ConfirmNo,
            _ => Command::Unknown,
        }
    }
}
