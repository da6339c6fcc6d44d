//! The terminal frontend: the engine's `Renderer` backed by a real terminal.

use anyhow::Result;

use crate::core::GameSnapshot;
use crate::engine::{Phase, Renderer};
use crate::fb::FrameBuffer;
use crate::game_view::{GameView, Viewport};
use crate::renderer::TerminalRenderer;

pub struct TerminalDisplay {
    term: TerminalRenderer,
    view: GameView,
    fb: FrameBuffer,
}

impl TerminalDisplay {
    pub fn new() -> Self {
        Self {
            term: TerminalRenderer::new(),
            view: GameView::new(),
            fb: FrameBuffer::new(0, 0),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        self.term.enter()
    }

    pub fn exit(&mut self) -> Result<()> {
        self.term.exit()
    }
}

impl Default for TerminalDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for TerminalDisplay {
    fn render(&mut self, snap: &GameSnapshot, phase: Phase) -> Result<()> {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        self.view
            .render_into(snap, phase, Viewport::new(w, h), &mut self.fb);
        self.term.draw_swap(&mut self.fb)
    }
}
