//! Scripted player: replays a fixed list of directions.
//!
//! Script format: directions separated by whitespace or commas, `#` starts a
//! comment, and `dir*N` repeats a direction N times (at most [`MAX_REPEAT`]).
//! A no-move turn is written `none` or `-`.
//!
//! ```text
//! # slide to the wall, then drop
//! left*4 down*18, none
//! ```

use std::collections::VecDeque;
use std::path::Path;

use anyhow::{bail, Context, Result};

use blockfall_core::{Block, GameState};
use blockfall_engine::{Player, PlayerInput, TurnDeadline};

use crate::types::Direction;

/// Largest accepted `dir*N` repeat count
pub const MAX_REPEAT: usize = 10_000;

#[derive(Debug, Clone, Default)]
pub struct ScriptedPlayer {
    moves: VecDeque<Direction>,
}

impl ScriptedPlayer {
    pub fn new(moves: impl IntoIterator<Item = Direction>) -> Self {
        Self {
            moves: moves.into_iter().collect(),
        }
    }

    /// Parse a script; errors name the offending line
    pub fn parse(script: &str) -> Result<Self> {
        let mut moves = VecDeque::new();
        for (line_no, line) in script.lines().enumerate() {
            let line = line.split('#').next().unwrap_or("");
            for token in line.split(|c: char| c.is_whitespace() || c == ',') {
                if token.is_empty() {
                    continue;
                }
                let (name, count) = match token.split_once('*') {
                    Some((name, n)) => {
                        let n: usize = n.parse().with_context(|| {
                            format!("line {}: bad repeat count {:?}", line_no + 1, n)
                        })?;
                        if n > MAX_REPEAT {
                            bail!("line {}: repeat count {} too large", line_no + 1, n);
                        }
                        (name, n)
                    }
                    None => (token, 1),
                };
                let Some(direction) = Direction::from_str(name) else {
                    bail!("line {}: unknown direction {:?}", line_no + 1, name);
                };
                moves.extend(std::iter::repeat(direction).take(count));
            }
        }
        Ok(Self { moves })
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read script {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("invalid script {}", path.display()))
    }

    /// Moves not yet played
    pub fn remaining(&self) -> usize {
        self.moves.len()
    }
}

impl Player for ScriptedPlayer {
    fn get_move(
        &mut self,
        _state: &GameState,
        _block: &Block,
        _deadline: &TurnDeadline,
    ) -> Result<PlayerInput> {
        Ok(match self.moves.pop_front() {
            Some(direction) => PlayerInput::Move(direction),
            None => PlayerInput::Exhausted,
        })
    }
}
