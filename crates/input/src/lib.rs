//! Input module (engine-facing).
//!
//! Everything here implements [`blockfall_engine::Player`]: a keyboard player
//! that maps `crossterm` key events to directions under the turn deadline, a
//! scripted player for replays and tests, and a seeded random player.

pub mod keyboard;
pub mod map;
pub mod random;
pub mod scripted;

pub use blockfall_types as types;

pub use keyboard::{KeySource, KeyboardPlayer, QueuedKeys, TerminalKeys};
pub use map::{handle_key_event, should_quit};
pub use random::RandomPlayer;
pub use scripted::ScriptedPlayer;
