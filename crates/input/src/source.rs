//! Blocking terminal input source.

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

use crate::engine::InputSource;
use crate::map::handle_key_event;
use crate::types::Command;

/// Reads key presses from the terminal via crossterm.
///
/// crossterm decodes arrow-key escape sequences (and the Windows console
/// equivalents) itself, so this type is the same on every platform.
/// The terminal should already be in raw mode; see `term_2048_term::TerminalRenderer::enter`.
#[derive(Debug, Default)]
pub struct TerminalInput;

impl TerminalInput {
    pub fn new() -> Self {
        Self
    }
}

impl InputSource for TerminalInput {
    fn read_command(&mut self) -> Result<Command> {
        loop {
            if let Some(command) = command_from_event(event::read()?) {
                return Ok(command);
            }
        }
    }
}

/// Turn one terminal event into a command.
///
/// Only key presses count; releases, auto-repeats, resizes, mouse and focus
/// events yield `None` so the reader keeps waiting.
pub fn command_from_event(event: Event) -> Option<Command> {
    match event {
        Event::Key(key) => command_from_key(key),
        _ => None,
    }
}

fn command_from_key(key: KeyEvent) -> Option<Command> {
    match key.kind {
        KeyEventKind::Press => Some(handle_key_event(key)),
        KeyEventKind::Repeat | KeyEventKind::Release => None,
    }
}
