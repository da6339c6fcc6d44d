//! GameView: maps a `GameSnapshot` and the current phase into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout (top to bottom, centered in the viewport):
//!
//! ```text
//! 2048 - Console Version
//! Score: 12 | Best: 40 | Sum: 28
//!
//! +------+------+------+------+
//! |     2|     .|     .|     .|
//! +------+------+------+------+
//! ...
//!
//! Controls: W/A/S/D or Arrow Keys, R to restart, Q to quit
//! <prompt for the current phase>
//! ```

use crate::core::{Board, GameSnapshot};
use crate::engine::Phase;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{GRID_SIZE, WIN_TILE};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

const BACKGROUND: Rgb = Rgb::new(0, 0, 95);
const HEADER: Rgb = Rgb::new(255, 255, 0);
const PROMPT: Rgb = Rgb::new(0, 215, 255);
const TEXT: Rgb = Rgb::new(220, 220, 220);
const BLACK: Rgb = Rgb::new(0, 0, 0);
/// Colour for tiles past the end of the palette.
const HIGH_TILE: Rgb = Rgb::new(135, 175, 255);

/// Minimum tile width in columns.
const MIN_CELL_W: u16 = 6;

pub const CONTROLS: &str = "Controls: W/A/S/D or Arrow Keys, R to restart, Q to quit";

/// A lightweight terminal view for the 2048 board.
#[derive(Debug, Clone, Default)]
pub struct GameView;

impl GameView {
    pub fn new() -> Self {
        Self
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        phase: Phase,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.reset(viewport.width, viewport.height);

        match phase {
            Phase::AwaitingStart => self.draw_welcome(fb, viewport),
            _ => self.draw_game(fb, snap, phase, viewport),
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, phase: Phase, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, phase, viewport, &mut fb);
        fb
    }

    fn draw_welcome(&self, fb: &mut FrameBuffer, viewport: Viewport) {
        let lines: [(&str, CellStyle); 3] = [
            ("Welcome to 2048!", CellStyle::fg(HEADER, BLACK).bold()),
            (
                "Combine tiles with the same number to reach 2048.",
                CellStyle::fg(TEXT, BLACK),
            ),
            ("Do you want to play? (Y/N)", CellStyle::fg(PROMPT, BLACK).bold()),
        ];
        let w = lines
            .iter()
            .map(|(s, _)| s.chars().count() as u16)
            .max()
            .unwrap_or(0);
        let x = viewport.width.saturating_sub(w) / 2;
        let y = viewport.height.saturating_sub(lines.len() as u16) / 2;
        for (i, (text, style)) in lines.iter().enumerate() {
            fb.put_str(x, y + i as u16, text, *style);
        }
    }

    fn draw_game(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        phase: Phase,
        viewport: Viewport,
    ) {
        let cell_w = cell_width(snap.max_tile);
        let board_w = board_width(cell_w);
        let board_h = (GRID_SIZE as u16) * 2 + 1;
        let prompt = prompt_lines(phase);

        // header, status, blank, board, blank, controls, prompts
        let content_h = 3 + board_h + 2 + prompt.len() as u16;
        let content_w = board_w.max(CONTROLS.len() as u16);
        let x = viewport.width.saturating_sub(content_w) / 2;
        let mut y = viewport.height.saturating_sub(content_h) / 2;

        let header = CellStyle::fg(HEADER, BACKGROUND).bold();
        fb.put_str(x, y, "2048 - Console Version", header);
        y += 1;

        let status = format!(
            "Score: {} | Best: {} | Sum: {}",
            snap.score, snap.best, snap.tile_sum
        );
        fb.put_str(x, y, &status, header);
        y += 2;

        self.draw_board(fb, &snap.board, x, y, cell_w);
        y += board_h + 1;

        fb.put_str(x, y, CONTROLS, CellStyle::fg(TEXT, BLACK).dim());
        y += 1;

        for (text, style) in prompt {
            fb.put_str(x, y, text, style);
            y += 1;
        }
    }

    fn draw_board(&self, fb: &mut FrameBuffer, board: &Board, x: u16, y: u16, cell_w: u16) {
        let frame = CellStyle::fg(TEXT, BACKGROUND);
        let mut cy = y;
        for row in board.rows() {
            self.draw_separator(fb, x, cy, cell_w, frame);
            cy += 1;

            let mut cx = x;
            fb.put_char(cx, cy, '|', frame);
            cx += 1;
            for &value in row {
                if value == 0 {
                    let empty = CellStyle::fg(TEXT, BACKGROUND).dim();
                    fb.put_str_right(cx, cy, cell_w, ".", empty);
                } else {
                    let style = CellStyle::fg(tile_color(value), BACKGROUND).bold();
                    fb.put_str_right(cx, cy, cell_w, &value.to_string(), style);
                }
                cx += cell_w;
                fb.put_char(cx, cy, '|', frame);
                cx += 1;
            }
            cy += 1;
        }
        self.draw_separator(fb, x, cy, cell_w, frame);
    }

    fn draw_separator(&self, fb: &mut FrameBuffer, x: u16, y: u16, cell_w: u16, style: CellStyle) {
        let mut cx = x;
        fb.put_char(cx, y, '+', style);
        cx += 1;
        for _ in 0..GRID_SIZE {
            fb.fill_row(cx, y, cell_w, '-', style);
            cx += cell_w;
            fb.put_char(cx, y, '+', style);
            cx += 1;
        }
    }
}

/// Tile column width: wide enough for the largest tile plus two spaces.
pub fn cell_width(max_tile: u32) -> u16 {
    let digits = max_tile.max(1).to_string().len() as u16;
    MIN_CELL_W.max(digits + 2)
}

fn board_width(cell_w: u16) -> u16 {
    (GRID_SIZE as u16) * (cell_w + 1) + 1
}

/// Foreground colour for a tile value.
pub fn tile_color(value: u32) -> Rgb {
    match value {
        2 => Rgb::new(255, 255, 215),
        4 => Rgb::new(255, 215, 175),
        8 => Rgb::new(255, 175, 95),
        16 => Rgb::new(255, 135, 0),
        32 => Rgb::new(255, 95, 95),
        64 => Rgb::new(255, 0, 0),
        128 => Rgb::new(175, 95, 255),
        256 => Rgb::new(175, 0, 255),
        512 => Rgb::new(135, 0, 255),
        1024 => Rgb::new(135, 95, 255),
        WIN_TILE => Rgb::new(135, 135, 255),
        _ => HIGH_TILE,
    }
}

/// Prompt lines shown under the board.
fn prompt_lines(phase: Phase) -> Vec<(&'static str, CellStyle)> {
    let prompt = CellStyle::fg(PROMPT, BLACK).bold();
    let plain = CellStyle::fg(TEXT, BLACK);
    match phase {
        Phase::AwaitingStart | Phase::Playing => Vec::new(),
        Phase::AwaitingQuitConfirm => vec![("Do you want to quit? (Y/N)", prompt)],
        Phase::AwaitingRestartConfirm { game_over: true } => vec![
            ("Game over! No more moves available.", plain),
            ("Play again? (Y/N)", prompt),
        ],
        Phase::AwaitingRestartConfirm { game_over: false } => {
            vec![("Start a new game? (Y/N)", prompt)]
        }
        Phase::Ended(reason) => vec![(reason.farewell(), plain)],
    }
}
