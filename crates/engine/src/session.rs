//! Session - the grid and score owned by one game
//!
//! A session holds everything that changes while playing: the board, the
//! score, the move counter and the RNG. The best score survives `start()` so
//! it spans restarts within one process.

use log::{debug, warn};

use crate::core::{
    apply_move, can_move, spawn, Board, GameSnapshot, SimpleRng, Spawned, TileDistribution,
    TileRng,
};
use crate::types::{Direction, START_TILES};

/// What a committed (or rejected) direction did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub moved: bool,
    pub score_gain: u32,
    /// Tile placed after the move; `None` if nothing moved or the board had no space.
    pub spawned: Option<Spawned>,
}

impl MoveOutcome {
    const NOOP: MoveOutcome = MoveOutcome {
        moved: false,
        score_gain: 0,
        spawned: None,
    };
}

#[derive(Debug, Clone)]
pub struct Session<R = SimpleRng> {
    board: Board,
    score: u32,
    best: u32,
    moves: u32,
    rng: R,
    dist: TileDistribution,
}

impl Session<SimpleRng> {
    /// Create a session with the classic spawn table and the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self::with_rng(SimpleRng::new(seed), TileDistribution::default())
    }
}

impl<R: TileRng> Session<R> {
    /// Create a session with an injected RNG and value distribution.
    ///
    /// The board starts empty; call [`Session::start`] to seed it.
    pub fn with_rng(rng: R, dist: TileDistribution) -> Self {
        Self {
            board: Board::new(),
            score: 0,
            best: 0,
            moves: 0,
            rng,
            dist,
        }
    }

    /// Reset to a fresh board with the starting tiles and a zero score.
    pub fn start(&mut self) {
        self.board = Board::new();
        self.score = 0;
        self.moves = 0;
        for _ in 0..START_TILES {
            if let Err(err) = spawn(&mut self.board, &self.dist, &mut self.rng) {
                warn!("starting tile skipped: {}", err);
            }
        }
        debug!("session started: {:?}", self.board.rows());
    }

    /// Apply a direction.
    ///
    /// A move that changes nothing leaves the session untouched. Otherwise the
    /// new board is committed, the gain added to the score and one tile spawned.
    pub fn apply(&mut self, direction: Direction) -> MoveOutcome {
        let result = apply_move(&self.board, direction);
        if !result.moved {
            debug!("{} does not change the board", direction.as_str());
            return MoveOutcome::NOOP;
        }

        self.board = result.grid;
        self.score = self.score.saturating_add(result.score_gain);
        self.best = self.best.max(self.score);
        self.moves += 1;

        let spawned = match spawn(&mut self.board, &self.dist, &mut self.rng) {
            Ok(tile) => Some(tile),
            Err(err) => {
                warn!("after {}: {}", direction.as_str(), err);
                None
            }
        };

        debug!(
            "{} gained {} (score {})",
            direction.as_str(),
            result.score_gain,
            self.score
        );
        MoveOutcome {
            moved: true,
            score_gain: result.score_gain,
            spawned,
        }
    }

    pub fn can_move(&self) -> bool {
        can_move(&self.board)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn best(&self) -> u32 {
        self.best
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::new(self.board, self.score, self.best, self.moves)
    }
}
