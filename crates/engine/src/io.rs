//! Seams to the outside world: where commands come from and where frames go.

use std::collections::VecDeque;

use anyhow::{bail, Result};

use crate::core::GameSnapshot;
use crate::machine::Phase;
use crate::types::Command;

/// Blocking source of logical commands.
pub trait InputSource {
    /// Block until one command is available.
    fn read_command(&mut self) -> Result<Command>;
}

/// Consumer of read-only game snapshots.
pub trait Renderer {
    fn render(&mut self, snap: &GameSnapshot, phase: Phase) -> Result<()>;
}

/// Replays a fixed list of commands, then fails.
///
/// Handy for driving [`crate::run`] headless.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    queue: VecDeque<Command>,
}

impl ScriptedInput {
    pub fn new(commands: impl IntoIterator<Item = Command>) -> Self {
        Self {
            queue: commands.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl InputSource for ScriptedInput {
    fn read_command(&mut self) -> Result<Command> {
        match self.queue.pop_front() {
            Some(command) => Ok(command),
            None => bail!("scripted input exhausted"),
        }
    }
}

/// Keeps every frame it is handed.
#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
    pub frames: Vec<(GameSnapshot, Phase)>,
}

impl Renderer for RecordingRenderer {
    fn render(&mut self, snap: &GameSnapshot, phase: Phase) -> Result<()> {
        self.frames.push((*snap, phase));
        Ok(())
    }
}
