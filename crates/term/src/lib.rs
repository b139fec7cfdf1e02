//! Terminal rendering for blockfall.
//!
//! A small, game-oriented rendering layer: the board is drawn into a
//! framebuffer that is diffed and flushed to the terminal with crossterm. No
//! widget toolkit is involved.
//!
//! - [`GameView`] maps a `GameState` to a framebuffer (pure, testable)
//! - [`TerminalRenderer`] owns the terminal and implements the engine's `Renderer`
//! - [`TextRenderer`] writes plain text frames to any `io::Write`

pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod text;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer, DEFAULT_FLASH};
pub use text::{frame_text, TextRenderer};
