//! Terminal condition - is any move left?

use arrayvec::ArrayVec;

use crate::grid::Grid;
use crate::moves::apply_move;
use crate::types::Direction;

/// True if at least one direction would change the board.
///
/// This is a direct adjacency scan: an empty cell, or two equal neighbours in
/// a row or column, means some slide or merge is possible. No move is
/// simulated.
pub fn can_move<const N: usize>(grid: &Grid<N>) -> bool {
    let rows = grid.rows();
    for r in 0..N {
        for c in 0..N {
            let v = rows[r][c];
            if v == 0 {
                return true;
            }
            if c + 1 < N && rows[r][c + 1] == v {
                return true;
            }
            if r + 1 < N && rows[r + 1][c] == v {
                return true;
            }
        }
    }
    false
}

/// Directions that would change the board, found by running the move engine.
///
/// Slower than [`can_move`]; used to cross-check it and by callers that want
/// to show which keys still do something.
pub fn legal_directions<const N: usize>(grid: &Grid<N>) -> ArrayVec<Direction, 4> {
    Direction::ALL
        .into_iter()
        .filter(|&dir| apply_move(grid, dir).moved)
        .collect()
}
