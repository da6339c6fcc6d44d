//! Game state machine
//!
//! ```text
//! AwaitingStart --Y--> Playing --Q--> AwaitingQuitConfirm --Y--> Ended(Quit)
//!       |                 |  ^                 |
//!       N                 |  +-------N---------+
//!       v                 |
//! Ended(Declined)         +--no move left / R--> AwaitingRestartConfirm
//!                                                  Y --> Playing (fresh board)
//!                                                  N --> Ended(GameOverDeclined) after game over,
//!                                                        Playing after a voluntary R
//! ```
//!
//! The machine never blocks and never touches a terminal: [`crate::run`]
//! feeds it one [`Command`] at a time.

use log::{debug, info};

use crate::core::{GameSnapshot, SimpleRng, TileRng};
use crate::session::Session;
use crate::types::Command;

/// Why a game ended. Picks the farewell line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    /// Said no at the welcome prompt.
    Declined,
    /// Quit while playing and confirmed.
    Quit,
    /// Declined to play again after a game over.
    GameOverDeclined,
}

impl EndReason {
    pub fn farewell(&self) -> &'static str {
        match self {
            EndReason::Declined => "Maybe next time!",
            EndReason::Quit | EndReason::GameOverDeclined => "Thanks for playing!",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitingStart,
    Playing,
    AwaitingQuitConfirm,
    /// `game_over` is true when no move was left; declining then ends the game.
    AwaitingRestartConfirm { game_over: bool },
    Ended(EndReason),
}

impl Phase {
    pub fn is_ended(&self) -> bool {
        matches!(self, Phase::Ended(_))
    }
}

/// A session plus the phase it is in.
#[derive(Debug, Clone)]
pub struct Game<R = SimpleRng> {
    session: Session<R>,
    phase: Phase,
}

impl Game<SimpleRng> {
    /// Create a new game with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self::with_session(Session::new(seed))
    }
}

impl<R: TileRng> Game<R> {
    /// Wrap a session. The game opens at the welcome prompt.
    pub fn with_session(session: Session<R>) -> Self {
        Self {
            session,
            phase: Phase::AwaitingStart,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn session(&self) -> &Session<R> {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session<R> {
        &mut self.session
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.session.snapshot()
    }

    /// Take the transition that needs no input: a stuck board while playing
    /// moves to the restart prompt.
    pub fn settle(&mut self) -> Phase {
        if self.phase == Phase::Playing && !self.session.can_move() {
            info!("game over with score {}", self.session.score());
            self.transition(Phase::AwaitingRestartConfirm { game_over: true });
        }
        self.phase
    }

    /// Feed one command and return the resulting phase.
    ///
    /// Commands that mean nothing in the current phase are ignored.
    pub fn step(&mut self, command: Command) -> Phase {
        let next = match (self.phase, command) {
            (Phase::AwaitingStart, Command::ConfirmYes) => {
                self.session.start();
                Some(Phase::Playing)
            }
            (Phase::AwaitingStart, Command::ConfirmNo | Command::Quit) => {
                Some(Phase::Ended(EndReason::Declined))
            }

            (Phase::Playing, Command::Move(direction)) => {
                self.session.apply(direction);
                None
            }
            (Phase::Playing, Command::Quit) => Some(Phase::AwaitingQuitConfirm),
            (Phase::Playing, Command::Restart) => {
                Some(Phase::AwaitingRestartConfirm { game_over: false })
            }

            (Phase::AwaitingQuitConfirm, Command::ConfirmYes) => {
                Some(Phase::Ended(EndReason::Quit))
            }
            (Phase::AwaitingQuitConfirm, Command::ConfirmNo) => Some(Phase::Playing),

            (Phase::AwaitingRestartConfirm { .. }, Command::ConfirmYes) => {
                self.session.start();
                Some(Phase::Playing)
            }
            (Phase::AwaitingRestartConfirm { game_over: true }, Command::ConfirmNo) => {
                Some(Phase::Ended(EndReason::GameOverDeclined))
            }
            (Phase::AwaitingRestartConfirm { game_over: false }, Command::ConfirmNo) => {
                Some(Phase::Playing)
            }

            (phase, command) => {
                debug!("ignoring {:?} in {:?}", command, phase);
                None
            }
        };

        if let Some(phase) = next {
            self.transition(phase);
        }
        self.phase
    }

    fn transition(&mut self, next: Phase) {
        if next != self.phase {
            info!("phase {:?} -> {:?}", self.phase, next);
            self.phase = next;
        }
    }
}
