//! Keyboard player: reads key presses until the turn deadline runs out.

use std::collections::VecDeque;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

use blockfall_core::{Block, GameState};
use blockfall_engine::{Player, PlayerInput, TurnDeadline};

use crate::map::{handle_key_event, should_quit};

/// Where key presses come from
pub trait KeySource {
    /// Wait up to `timeout` for the next key press
    fn next_key(&mut self, timeout: Duration) -> Result<Option<KeyEvent>>;
}

/// Real terminal keyboard via crossterm
#[derive(Debug, Default)]
pub struct TerminalKeys;

impl KeySource for TerminalKeys {
    fn next_key(&mut self, timeout: Duration) -> Result<Option<KeyEvent>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }
        match event::read()? {
            // Release events carry no new intent; terminal auto-repeat counts as a press.
            Event::Key(key) if key.kind != KeyEventKind::Release => Ok(Some(key)),
            _ => Ok(None),
        }
    }
}

/// Pre-recorded key presses (tests, demos)
#[derive(Debug, Default)]
pub struct QueuedKeys {
    keys: VecDeque<KeyEvent>,
}

impl QueuedKeys {
    pub fn new(keys: impl IntoIterator<Item = KeyEvent>) -> Self {
        Self {
            keys: keys.into_iter().collect(),
        }
    }
}

impl KeySource for QueuedKeys {
    fn next_key(&mut self, _timeout: Duration) -> Result<Option<KeyEvent>> {
        Ok(self.keys.pop_front())
    }
}

/// Human player at the keyboard
///
/// The first mapped key within the deadline decides the turn. Unmapped keys are
/// skipped, and keys already pending when the deadline runs out still count.
/// A quit key exhausts the player for the rest of the game.
#[derive(Debug, Default)]
pub struct KeyboardPlayer<K = TerminalKeys> {
    keys: K,
    quit: bool,
}

impl KeyboardPlayer<TerminalKeys> {
    pub fn new() -> Self {
        Self::with_keys(TerminalKeys)
    }
}

impl<K: KeySource> KeyboardPlayer<K> {
    pub fn with_keys(keys: K) -> Self {
        Self { keys, quit: false }
    }

    pub fn has_quit(&self) -> bool {
        self.quit
    }
}

impl<K: KeySource> Player for KeyboardPlayer<K> {
    fn get_move(
        &mut self,
        _state: &GameState,
        _block: &Block,
        deadline: &TurnDeadline,
    ) -> Result<PlayerInput> {
        if self.quit {
            return Ok(PlayerInput::Exhausted);
        }

        loop {
            let Some(key) = self.keys.next_key(deadline.remaining())? else {
                if deadline.expired() {
                    return Ok(PlayerInput::Idle);
                }
                continue;
            };

            if should_quit(key) {
                self.quit = true;
                return Ok(PlayerInput::Exhausted);
            }
            if let Some(direction) = handle_key_event(key) {
                return Ok(PlayerInput::Move(direction));
            }
        }
    }
}
