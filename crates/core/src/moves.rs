//! Move engine - apply a direction to the whole grid
//!
//! Every direction is reduced to LEFT so the merge tie-break is identical in
//! all four:
//!
//! - **Left**: reduce every row.
//! - **Right**: reverse rows, reduce left, reverse back.
//! - **Up**: transpose, reduce left, transpose back.
//! - **Down**: transpose, move right, transpose back.
//!
//! The input grid is never modified; callers decide whether to commit the
//! returned grid.

use crate::grid::Grid;
use crate::reduce::reduce_left;
use crate::types::Direction;

/// Outcome of applying one direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveResult<const N: usize> {
    pub grid: Grid<N>,
    /// True iff `grid` differs from the input.
    pub moved: bool,
    /// Sum of every tile created by a merge.
    pub score_gain: u32,
}

/// Apply `direction` to `grid`.
///
/// # Examples
///
/// ```
/// use term_2048_core::{apply_move, Grid};
/// use term_2048_types::Direction;
///
/// let grid = Grid::from_rows([[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]]);
/// let result = apply_move(&grid, Direction::Left);
/// assert_eq!(result.grid.rows()[0], [4, 0, 0, 0]);
/// assert!(result.moved);
/// assert_eq!(result.score_gain, 4);
/// ```
pub fn apply_move<const N: usize>(grid: &Grid<N>, direction: Direction) -> MoveResult<N> {
    let (next, score_gain) = match direction {
        Direction::Left => reduce_rows(grid),
        Direction::Right => reduce_rows_right(grid),
        Direction::Up => {
            let (t, gain) = reduce_rows(&grid.transpose());
            (t.transpose(), gain)
        }
        Direction::Down => {
            let (t, gain) = reduce_rows_right(&grid.transpose());
            (t.transpose(), gain)
        }
    };

    MoveResult {
        moved: next != *grid,
        grid: next,
        score_gain,
    }
}

pub fn move_left<const N: usize>(grid: &Grid<N>) -> MoveResult<N> {
    apply_move(grid, Direction::Left)
}

pub fn move_right<const N: usize>(grid: &Grid<N>) -> MoveResult<N> {
    apply_move(grid, Direction::Right)
}

pub fn move_up<const N: usize>(grid: &Grid<N>) -> MoveResult<N> {
    apply_move(grid, Direction::Up)
}

pub fn move_down<const N: usize>(grid: &Grid<N>) -> MoveResult<N> {
    apply_move(grid, Direction::Down)
}

fn reduce_rows<const N: usize>(grid: &Grid<N>) -> (Grid<N>, u32) {
    let mut out = *grid;
    let mut gain = 0u32;
    for row in out.rows_mut().iter_mut() {
        let reduced = reduce_left(row);
        *row = reduced.row;
        gain += reduced.gain;
    }
    (out, gain)
}

fn reduce_rows_right<const N: usize>(grid: &Grid<N>) -> (Grid<N>, u32) {
    let (reduced, gain) = reduce_rows(&grid.reverse_rows());
    (reduced.reverse_rows(), gain)
}
