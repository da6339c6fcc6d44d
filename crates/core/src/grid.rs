//! Grid module - the square board of tile values
//!
//! The grid is an N x N matrix of `u32` tile values where `0` marks an empty
//! cell and every other value is a power of two. Storage is a fixed-size array
//! so the grid is `Copy` and moves never allocate.
//! Coordinates: (row, col) where row ranges 0..N (top to bottom), col ranges
//! 0..N (left to right).

use crate::types::GRID_SIZE;

/// The board the game plays on (4x4).
pub type Board = Grid<GRID_SIZE>;

/// A (row, col) position on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// N x N grid of tile values. Dimensions are fixed by the type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Grid<const N: usize> {
    cells: [[u32; N]; N],
}

impl<const N: usize> Grid<N> {
    /// Create an empty grid (all zeros)
    pub fn new() -> Self {
        Self {
            cells: [[0; N]; N],
        }
    }

    /// Build a grid from explicit row values.
    pub fn from_rows(cells: [[u32; N]; N]) -> Self {
        Self { cells }
    }

    /// Side length of the grid
    pub const fn size(&self) -> usize {
        N
    }

    pub fn rows(&self) -> &[[u32; N]; N] {
        &self.cells
    }

    /// Get the value at (row, col)
    /// Returns None if out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<u32> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Set the value at (row, col)
    /// Returns false if out of bounds
    pub fn set(&mut self, row: usize, col: usize, value: u32) -> bool {
        match self.cells.get_mut(row).and_then(|r| r.get_mut(col)) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    /// Iterate over the empty cells in row-major order.
    ///
    /// The iterator is lazy and `Clone`, so callers can walk it once to count
    /// and again to pick without collecting into a buffer.
    pub fn empty_cells(&self) -> impl Iterator<Item = Cell> + Clone + '_ {
        self.cells.iter().enumerate().flat_map(|(row, values)| {
            values
                .iter()
                .enumerate()
                .filter(|&(_, &v)| v == 0)
                .map(move |(col, _)| Cell::new(row, col))
        })
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().flatten().filter(|&&v| v == 0).count()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|&v| v != 0)
    }

    /// Number of occupied cells
    pub fn tile_count(&self) -> usize {
        N * N - self.empty_count()
    }

    /// Largest tile on the board (0 for an empty board)
    pub fn max_tile(&self) -> u32 {
        self.cells.iter().flatten().copied().max().unwrap_or(0)
    }

    /// Sum of every tile on the board
    pub fn tile_sum(&self) -> u64 {
        self.cells.iter().flatten().map(|&v| v as u64).sum()
    }

    /// Swap rows and columns.
    pub fn transpose(&self) -> Self {
        let mut out = [[0; N]; N];
        for (r, row) in self.cells.iter().enumerate() {
            for (c, &v) in row.iter().enumerate() {
                out[c][r] = v;
            }
        }
        Self { cells: out }
    }

    /// Mirror every row left-to-right.
    pub fn reverse_rows(&self) -> Self {
        let mut out = self.cells;
        for row in out.iter_mut() {
            row.reverse();
        }
        Self { cells: out }
    }

    pub(crate) fn rows_mut(&mut self) -> &mut [[u32; N]; N] {
        &mut self.cells
    }
}

impl<const N: usize> Default for Grid<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> From<[[u32; N]; N]> for Grid<N> {
    fn from(cells: [[u32; N]; N]) -> Self {
        Self::from_rows(cells)
    }
}
