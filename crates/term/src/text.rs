//! Plain text renderer for pipes, logs and dumb terminals.
//!
//! Each frame is a bordered board, one character per cell, followed by a blank
//! line. Full rows get a trailing `*`.
//!
//! ```text
//! +----------+
//! |....OO....|
//! |....OO....|
//! |IIIIIIIIII|*
//! +----------+
//! ```

use std::io::Write;

use anyhow::{Context, Result};

use blockfall_core::GameState;
use blockfall_engine::Renderer;

use crate::types::BOARD_WIDTH;

pub struct TextRenderer<W: Write> {
    out: W,
    frames: u64,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out, frames: 0 }
    }

    /// Frames written so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Text frame for one state, without the trailing blank line
pub fn frame_text(state: &GameState) -> String {
    let edge = format!("+{}+", "-".repeat(BOARD_WIDTH));
    let mut text = String::with_capacity((BOARD_WIDTH + 4) * 24);
    text.push_str(&edge);
    text.push('\n');

    for (y, row) in state.grid().rows().enumerate() {
        text.push('|');
        text.extend(row.iter().map(|cell| cell.map_or('.', |kind| kind.symbol())));
        text.push('|');
        if state.full_rows().contains(&y) {
            text.push('*');
        }
        text.push('\n');
    }

    text.push_str(&edge);
    if state.game_over() {
        text.push_str("\nGAME OVER");
    }
    text
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn render(&mut self, state: &GameState) -> Result<()> {
        writeln!(self.out, "{}\n", frame_text(state)).context("failed to write frame")?;
        self.out.flush().context("failed to flush frame")?;
        self.frames += 1;
        Ok(())
    }
}
