//! Game engine - drives a 2048 session from commands to frames
//!
//! The engine owns the only mutable state in the program: a [`Session`]
//! (board, score, RNG) wrapped in a [`Game`] state machine. Input and output
//! are reached through the [`InputSource`] and [`Renderer`] traits, so the
//! loop is the same for a real terminal and for a scripted test.
//!
//! # Example
//!
//! ```
//! use term_2048_engine::{run, EndReason, Game, RecordingRenderer, ScriptedInput};
//! use term_2048_types::Command;
//!
//! let mut game = Game::new(7);
//! let mut input = ScriptedInput::new([Command::ConfirmYes, Command::Quit, Command::ConfirmYes]);
//! let mut frames = RecordingRenderer::default();
//!
//! let reason = run(&mut game, &mut input, &mut frames).unwrap();
//! assert_eq!(reason, EndReason::Quit);
//! ```

pub mod io;
pub mod machine;
pub mod session;

use anyhow::{Context, Result};

pub use term_2048_core as core;
pub use term_2048_types as types;

pub use io::{InputSource, RecordingRenderer, Renderer, ScriptedInput};
pub use machine::{EndReason, Game, Phase};
pub use session::{MoveOutcome, Session};

use crate::core::TileRng;

/// Run the game until it ends.
///
/// Each iteration renders the current state, then blocks for exactly one
/// command. The final (ended) state is rendered once before returning.
pub fn run<R, I, D>(game: &mut Game<R>, input: &mut I, renderer: &mut D) -> Result<EndReason>
where
    R: TileRng,
    I: InputSource + ?Sized,
    D: Renderer + ?Sized,
{
    loop {
        let phase = game.settle();
        renderer
            .render(&game.snapshot(), phase)
            .context("failed to render frame")?;

        if let Phase::Ended(reason) = phase {
            return Ok(reason);
        }

        let command = input.read_command().context("failed to read input")?;
        game.step(command);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Board;
    use crate::types::{Command, Direction};
    use test_log::test;

    #[test]
    fn decline_renders_welcome_then_end() {
        let mut game = Game::new(1);
        let mut input = ScriptedInput::new([Command::ConfirmNo]);
        let mut out = RecordingRenderer::default();

        let reason = run(&mut game, &mut input, &mut out).unwrap();

        assert_eq!(reason, EndReason::Declined);
        let phases: Vec<Phase> = out.frames.iter().map(|(_, p)| *p).collect();
        assert_eq!(
            phases,
            vec![Phase::AwaitingStart, Phase::Ended(EndReason::Declined)]
        );
    }

    #[test]
    fn exhausted_input_is_an_error() {
        let mut game = Game::new(1);
        let mut input = ScriptedInput::new([Command::ConfirmYes]);
        let mut out = RecordingRenderer::default();

        assert!(run(&mut game, &mut input, &mut out).is_err());
        assert_eq!(input.remaining(), 0);
    }

    #[test]
    fn stuck_board_goes_straight_to_prompt() {
        let mut game = Game::new(2);
        game.step(Command::ConfirmYes);
        *game.session_mut().board_mut() =
            Board::from_rows([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]);

        // The move is never read: the first frame is already the game-over prompt.
        let mut input = ScriptedInput::new([Command::ConfirmNo]);
        let mut out = RecordingRenderer::default();
        let reason = run(&mut game, &mut input, &mut out).unwrap();

        assert_eq!(reason, EndReason::GameOverDeclined);
        assert_eq!(
            out.frames[0].1,
            Phase::AwaitingRestartConfirm { game_over: true }
        );
        assert!(!out.frames[0].0.can_move);
    }

    #[test]
    fn unknown_and_blocked_moves_rerender_same_state() {
        let mut game = Game::new(3);
        game.step(Command::ConfirmYes);
        *game.session_mut().board_mut() =
            Board::from_rows([[2, 0, 0, 0], [0; 4], [0; 4], [0; 4]]);

        let mut input = ScriptedInput::new([
            Command::Unknown,
            Command::Move(Direction::Left),
            Command::Move(Direction::Up),
            Command::Quit,
            Command::ConfirmYes,
        ]);
        let mut out = RecordingRenderer::default();
        run(&mut game, &mut input, &mut out).unwrap();

        let boards: Vec<Board> = out.frames.iter().map(|(s, _)| s.board).collect();
        assert_eq!(boards[0], boards[1]);
        assert_eq!(boards[1], boards[2]);
        assert_eq!(boards[2], boards[3]);
        assert_eq!(game.session().moves(), 0);
    }
}
