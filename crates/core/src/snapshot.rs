//! Read-only view of a session handed to renderers.

use crate::grid::Board;
use crate::terminal::can_move;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: Board,
    pub score: u32,
    /// Highest score reached in this process (survives restarts, not exits).
    pub best: u32,
    /// Committed moves since the last (re)start.
    pub moves: u32,
    pub tile_sum: u64,
    pub max_tile: u32,
    pub can_move: bool,
}

impl GameSnapshot {
    pub fn new(board: Board, score: u32, best: u32, moves: u32) -> Self {
        Self {
            board,
            score,
            best,
            moves,
            tile_sum: board.tile_sum(),
            max_tile: board.max_tile(),
            can_move: can_move(&board),
        }
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self::new(Board::new(), 0, 0, 0)
    }
}
