//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! Frames are diffed against the previous one so only changed runs of cells
//! are rewritten.

use std::io::{self, Write};
use std::time::Duration;

use anyhow::{Context, Result};

use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use blockfall_core::GameState;
use blockfall_engine::Renderer;

use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::game_view::{GameView, Viewport};

/// How long full rows stay on screen before they are removed
pub const DEFAULT_FLASH: Duration = Duration::from_millis(300);

pub struct TerminalRenderer {
    stdout: io::Stdout,
    view: GameView,
    frame: FrameBuffer,
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
    flash: Duration,
    entered: bool,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            view: GameView::default(),
            frame: FrameBuffer::new(0, 0),
            last: None,
            buf: Vec::with_capacity(64 * 1024),
            flash: DEFAULT_FLASH,
            entered: false,
        }
    }

    pub fn with_view(mut self, view: GameView) -> Self {
        self.view = view;
        self
    }

    /// Pause after drawing full rows; zero disables the pause
    pub fn with_flash(mut self, flash: Duration) -> Self {
        self.flash = flash;
        self
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode().context("failed to enable raw mode")?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()?;
        self.entered = true;
        self.invalidate();
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        if !self.entered {
            return Ok(());
        }
        self.entered = false;
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode().context("failed to disable raw mode")?;
        Ok(())
    }

    /// Force the next draw to be a full redraw.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Draw a framebuffer, swapping it into internal state.
    ///
    /// The renderer diffs against the previous frame and then swaps buffers so
    /// the caller can reuse the old one without cloning.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.buf.clear();
        let mut prev = match self.last.take() {
            Some(prev) if prev.width() == fb.width() && prev.height() == fb.height() => {
                encode_diff_into(&prev, fb, &mut self.buf)?;
                prev
            }
            Some(mut prev) => {
                encode_full_into(fb, &mut self.buf)?;
                prev.resize(fb.width(), fb.height());
                prev
            }
            None => {
                encode_full_into(fb, &mut self.buf)?;
                FrameBuffer::new(fb.width(), fb.height())
            }
        };
        self.flush_buf()?;

        std::mem::swap(&mut prev, fb);
        self.last = Some(prev);
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TerminalRenderer {
    fn drop(&mut self) {
        let _ = self.exit();
    }
}

impl Renderer for TerminalRenderer {
    fn render(&mut self, state: &GameState) -> Result<()> {
        let (width, height) = terminal::size().context("failed to read terminal size")?;
        let mut frame = std::mem::replace(&mut self.frame, FrameBuffer::new(0, 0));
        self.view
            .render_into(state, Viewport::new(width, height), &mut frame);
        let drawn = self.draw_swap(&mut frame);
        self.frame = frame;
        drawn?;

        if !state.full_rows().is_empty() && !self.flash.is_zero() {
            std::thread::sleep(self.flash);
        }
        Ok(())
    }
}

/// Encode a full-frame redraw into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    out.queue(cursor::MoveTo(0, 0))?;

    let mut current_style: Option<CellStyle> = None;
    for y in 0..fb.height() {
        for x in 0..fb.width() {
            let cell = fb.get(x, y).unwrap_or_default();
            if current_style != Some(cell.style) {
                apply_style_into(out, cell.style)?;
                current_style = Some(cell.style);
            }
            out.queue(Print(cell.ch))?;
        }
        if y + 1 < fb.height() {
            out.queue(Print("\r\n"))?;
        }
    }

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

/// Encode a diff redraw (changed runs) into `out`.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut current_style: Option<CellStyle> = None;

    for_each_changed_run(prev, next, |x, y, len| {
        out.queue(cursor::MoveTo(x, y))?;
        for dx in 0..len {
            let cell = next.get(x + dx, y).unwrap_or_default();
            if current_style != Some(cell.style) {
                apply_style_into(out, cell.style)?;
                current_style = Some(cell.style);
            }
            out.queue(Print(cell.ch))?;
        }
        Ok(())
    })?;

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

fn apply_style_into(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    out.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
    out.queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
    out.queue(SetAttribute(Attribute::Reset))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        out.queue(SetAttribute(Attribute::Dim))?;
    }
    if style.blink {
        out.queue(SetAttribute(Attribute::SlowBlink))?;
    }
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

fn for_each_changed_run(
    prev: &FrameBuffer,
    next: &FrameBuffer,
    mut f: impl FnMut(u16, u16, u16) -> Result<()>,
) -> Result<()> {
    if prev.width() != next.width() || prev.height() != next.height() {
        for y in 0..next.height() {
            f(0, y, next.width())?;
        }
        return Ok(());
    }

    let w = next.width();
    for y in 0..next.height() {
        let mut x = 0;
        while x < w {
            if prev.get(x, y) == next.get(x, y) {
                x += 1;
                continue;
            }
            let start = x;
            x += 1;
            while x < w && prev.get(x, y) != next.get(x, y) {
                x += 1;
            }
            f(start, y, x - start)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fb::Cell;

    #[test]
    fn changed_run_iterator_coalesces_adjacent_cells() {
        let style = CellStyle::default();
        let a = FrameBuffer::new(5, 1);
        let mut b = FrameBuffer::new(5, 1);
        for x in 1..=3 {
            b.set(x, 0, Cell { ch: 'X', style });
        }

        let mut runs = Vec::new();
        for_each_changed_run(&a, &b, |x, y, len| {
            runs.push((x, y, len));
            Ok(())
        })
        .unwrap();
        assert_eq!(runs, vec![(1, 0, 3)]);
    }

    #[test]
    fn identical_frames_encode_no_cells() {
        let a = FrameBuffer::new(4, 2);
        let mut out = Vec::new();
        encode_diff_into(&a, &a.clone(), &mut out).unwrap();

        let mut reset_only = Vec::new();
        reset_only.queue(ResetColor).unwrap();
        reset_only.queue(SetAttribute(Attribute::Reset)).unwrap();
        assert_eq!(out, reset_only);
    }

    #[test]
    fn blinking_cells_emit_slow_blink() {
        let mut fb = FrameBuffer::new(1, 1);
        fb.put_char(0, 0, '█', CellStyle::default().blink());
        let mut out = Vec::new();
        encode_full_into(&fb, &mut out).unwrap();

        let mut blink = Vec::new();
        blink.queue(SetAttribute(Attribute::SlowBlink)).unwrap();
        assert!(out.windows(blink.len()).any(|w| w == blink.as_slice()));
    }
}
