//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the 2048 grid rules: sliding, merging, spawning and
//! the game-over check. It has **no dependencies** on terminals or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Every rule is a plain function over a `Copy` grid
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//! - **Allocation-free**: Grids are fixed-size arrays; moves return new values
//!
//! # Module Structure
//!
//! - [`grid`]: N x N grid of tile values, cells, transpose/reverse helpers
//! - [`reduce`]: leftward compress + merge of a single row
//! - [`moves`]: applies a direction to the whole grid via [`reduce`]
//! - [`spawn`]: random tile placement
//! - [`rng`]: injectable RNG and weighted tile-value distribution
//! - [`terminal`]: adjacency scan deciding whether any move remains
//! - [`snapshot`]: read-only copy handed to renderers
//!
//! # Game Rules
//!
//! - A move slides every tile as far as it goes in one direction.
//! - Two equal tiles that meet merge into one of double value; the merged
//!   value is added to the score. A tile merges at most once per move.
//! - A run of three equal tiles merges the pair nearest the wall only.
//! - After a move that changed the board, one tile (2 or 4) spawns.
//! - The game ends when no direction can change the board.
//!
//! # Example
//!
//! ```
//! use term_2048_core::{apply_move, can_move, spawn, Board, SimpleRng, TileDistribution};
//! use term_2048_types::Direction;
//!
//! let mut rng = SimpleRng::new(12345);
//! let dist = TileDistribution::default();
//!
//! let mut board = Board::from_rows([[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]]);
//! let result = apply_move(&board, Direction::Left);
//! assert!(result.moved);
//! assert_eq!(result.score_gain, 4);
//!
//! board = result.grid;
//! spawn(&mut board, &dist, &mut rng).unwrap();
//! assert_eq!(board.tile_count(), 2);
//! assert!(can_move(&board));
//! ```

pub mod grid;
pub mod moves;
pub mod reduce;
pub mod rng;
pub mod snapshot;
pub mod spawn;
pub mod terminal;

pub use term_2048_types as types;

// Re-export commonly used types for convenience
pub use grid::{Board, Cell, Grid};
pub use moves::{apply_move, move_down, move_left, move_right, move_up, MoveResult};
pub use reduce::{compress, merge_left, reduce_left, RowReduction};
pub use rng::{SimpleRng, TileDistribution, TileRng};
pub use snapshot::GameSnapshot;
pub use spawn::{spawn, SpawnError, Spawned};
pub use terminal::{can_move, legal_directions};
