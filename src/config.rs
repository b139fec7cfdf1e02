//! Runtime settings: environment first, command-line flags on top.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use clap::ValueEnum;

use crate::journal::JournalConfig;
use crate::types::{DEFAULT_BOT_DELAY_MS, DEFAULT_TURN_MS};

/// Who plays the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum PlayerKind {
    #[default]
    Keyboard,
    Random,
    Script,
}

impl PlayerKind {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "keyboard" | "human" => Some(PlayerKind::Keyboard),
            "random" | "bot" => Some(PlayerKind::Random),
            "script" | "scripted" => Some(PlayerKind::Script),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PlayerKind::Keyboard => "keyboard",
            PlayerKind::Random => "random",
            PlayerKind::Script => "script",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub player: PlayerKind,
    pub seed: u32,
    pub turn_ms: u64,
    pub bot_delay_ms: u64,
    pub max_pieces: Option<u32>,
    pub script: Option<PathBuf>,
    pub journal: JournalConfig,
    pub plain: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            player: PlayerKind::Keyboard,
            seed: 1,
            turn_ms: DEFAULT_TURN_MS,
            bot_delay_ms: DEFAULT_BOT_DELAY_MS,
            max_pieces: None,
            script: None,
            journal: JournalConfig::default(),
            plain: false,
        }
    }
}

impl RunConfig {
    /// Read `BLOCKFALL_*` variables; unset or unparsable values keep their defaults
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let player = lookup("BLOCKFALL_PLAYER")
            .and_then(|s| PlayerKind::from_str(&s))
            .unwrap_or(defaults.player);
        let seed = lookup("BLOCKFALL_SEED")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.seed);
        let turn_ms = lookup("BLOCKFALL_TURN_MS")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.turn_ms);
        let bot_delay_ms = lookup("BLOCKFALL_BOT_DELAY_MS")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.bot_delay_ms);
        let max_pieces = lookup("BLOCKFALL_MAX_PIECES")
            .and_then(|s| s.trim().parse().ok())
            .filter(|n: &u32| *n > 0);
        let journal = JournalConfig::from_lookup(&lookup);

        Self {
            player,
            seed,
            turn_ms,
            bot_delay_ms,
            max_pieces,
            script: None,
            journal,
            plain: false,
        }
    }

    pub fn turn_budget(&self) -> Duration {
        Duration::from_millis(self.turn_ms)
    }

    pub fn bot_delay(&self) -> Duration {
        Duration::from_millis(self.bot_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_gives_defaults() {
        assert_eq!(RunConfig::from_lookup(lookup(&[])), RunConfig::default());
    }

    #[test]
    fn variables_are_read() {
        let config = RunConfig::from_lookup(lookup(&[
            ("BLOCKFALL_PLAYER", "Random"),
            ("BLOCKFALL_SEED", "99"),
            ("BLOCKFALL_TURN_MS", " 120 "),
            ("BLOCKFALL_BOT_DELAY_MS", "0"),
            ("BLOCKFALL_MAX_PIECES", "12"),
            ("BLOCKFALL_JOURNAL_PATH", "/tmp/game.jsonl"),
        ]));
        assert_eq!(config.player, PlayerKind::Random);
        assert_eq!(config.seed, 99);
        assert_eq!(config.turn_budget(), Duration::from_millis(120));
        assert_eq!(config.bot_delay(), Duration::ZERO);
        assert_eq!(config.max_pieces, Some(12));
        assert_eq!(config.journal.path, Some(PathBuf::from("/tmp/game.jsonl")));
    }

    #[test]
    fn bad_values_fall_back() {
        let config = RunConfig::from_lookup(lookup(&[
            ("BLOCKFALL_PLAYER", "robot"),
            ("BLOCKFALL_TURN_MS", "soon"),
            ("BLOCKFALL_MAX_PIECES", "0"),
            ("BLOCKFALL_JOURNAL_PATH", "   "),
        ]));
        assert_eq!(config, RunConfig::default());
    }
}
