//! Spawner - place a new tile on a random empty cell

use log::debug;
use thiserror::Error;

use crate::grid::{Cell, Grid};
use crate::rng::{TileDistribution, TileRng};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SpawnError {
    #[error("no space to spawn a tile")]
    NoSpace,
}

/// A tile placed by [`spawn`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spawned {
    pub cell: Cell,
    pub value: u32,
}

/// Put one tile drawn from `dist` on an empty cell chosen uniformly at random.
///
/// On `Err(SpawnError::NoSpace)` the grid is left untouched.
pub fn spawn<const N: usize, R: TileRng + ?Sized>(
    grid: &mut Grid<N>,
    dist: &TileDistribution,
    rng: &mut R,
) -> Result<Spawned, SpawnError> {
    let cell = {
        let mut empty = grid.empty_cells();
        let count = empty.clone().count();
        if count == 0 {
            return Err(SpawnError::NoSpace);
        }
        let pick = rng.next_range(count as u32) as usize;
        empty.nth(pick).ok_or(SpawnError::NoSpace)?
    };
    let value = dist.sample(rng);
    grid.set(cell.row, cell.col, value);

    debug!("spawned {} at ({}, {})", value, cell.row, cell.col);
    Ok(Spawned { cell, value })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Board;
    use crate::rng::SimpleRng;

    #[test]
    fn spawn_fills_exactly_one_empty_cell() {
        let mut rng = SimpleRng::new(99);
        let dist = TileDistribution::default();
        let mut grid = Board::from_rows([[2, 0, 4, 0], [0, 8, 0, 0], [0; 4], [16, 0, 0, 2]]);
        let before = grid;

        let spawned = spawn(&mut grid, &dist, &mut rng).unwrap();

        assert_eq!(before.get(spawned.cell.row, spawned.cell.col), Some(0));
        assert_eq!(grid.get(spawned.cell.row, spawned.cell.col), Some(spawned.value));
        assert!(spawned.value == 2 || spawned.value == 4);
        assert_eq!(grid.empty_count(), before.empty_count() - 1);

        let changed = before
            .rows()
            .iter()
            .flatten()
            .zip(grid.rows().iter().flatten())
            .filter(|(a, b)| a != b)
            .count();
        assert_eq!(changed, 1);
    }

    #[test]
    fn spawn_on_full_grid_reports_no_space() {
        let mut rng = SimpleRng::new(1);
        let dist = TileDistribution::default();
        let mut grid = Board::from_rows([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]);
        let before = grid;

        assert_eq!(spawn(&mut grid, &dist, &mut rng), Err(SpawnError::NoSpace));
        assert_eq!(grid, before);
    }

    #[test]
    fn spawn_until_full() {
        let mut rng = SimpleRng::new(5);
        let dist = TileDistribution::default();
        let mut grid = Board::new();
        for _ in 0..16 {
            spawn(&mut grid, &dist, &mut rng).unwrap();
        }
        assert!(grid.is_full());
        assert_eq!(spawn(&mut grid, &dist, &mut rng), Err(SpawnError::NoSpace));
    }

    #[test]
    fn injected_distribution_is_used() {
        let mut rng = SimpleRng::new(3);
        let dist = TileDistribution::from_values(&[8]).unwrap();
        let mut grid = Board::new();
        let spawned = spawn(&mut grid, &dist, &mut rng).unwrap();
        assert_eq!(spawned.value, 8);
    }
}
