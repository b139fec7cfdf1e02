//! blockfall runner (default binary).
//!
//! Plays one game with the chosen player, drawing either to the terminal's
//! alternate screen or as plain text frames on stdout, and optionally writes a
//! JSONL journal of every event.

use std::io;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;

use blockfall::config::{PlayerKind, RunConfig};
use blockfall::core::ShapePicker;
use blockfall::engine::{Game, GameOutcome, NoopObserver, Observer, Player, Renderer};
use blockfall::input::{KeyboardPlayer, RandomPlayer, ScriptedPlayer};
use blockfall::journal::Journal;
use blockfall::term::{TerminalRenderer, TextRenderer};

#[derive(Parser, Debug)]
#[command(name = "blockfall", version, about = "Falling-block puzzle in the terminal")]
struct Args {
    /// Who plays [env: BLOCKFALL_PLAYER]
    #[arg(long, value_enum)]
    player: Option<PlayerKind>,

    /// Shape sequence seed [env: BLOCKFALL_SEED]
    #[arg(long)]
    seed: Option<u32>,

    /// Milliseconds per turn before gravity applies [env: BLOCKFALL_TURN_MS]
    #[arg(long)]
    turn_ms: Option<u64>,

    /// Think time of the random player [env: BLOCKFALL_BOT_DELAY_MS]
    #[arg(long)]
    bot_delay_ms: Option<u64>,

    /// Stop after this many blocks [env: BLOCKFALL_MAX_PIECES]
    #[arg(long)]
    max_pieces: Option<u32>,

    /// Direction script to replay (implies --player script)
    #[arg(long)]
    script: Option<PathBuf>,

    /// Append a JSONL event journal here [env: BLOCKFALL_JOURNAL_PATH]
    #[arg(long)]
    journal: Option<PathBuf>,

    /// Print plain text frames instead of using the alternate screen
    #[arg(long)]
    plain: bool,
}

impl Args {
    fn apply(self, mut config: RunConfig) -> RunConfig {
        if let Some(player) = self.player {
            config.player = player;
        } else if self.script.is_some() {
            config.player = PlayerKind::Script;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(turn_ms) = self.turn_ms {
            config.turn_ms = turn_ms;
        }
        if let Some(delay) = self.bot_delay_ms {
            config.bot_delay_ms = delay;
        }
        if let Some(limit) = self.max_pieces.filter(|n| *n > 0) {
            config.max_pieces = Some(limit);
        }
        if self.journal.is_some() {
            config.journal.path = self.journal;
        }
        config.script = self.script;
        config.plain |= self.plain;
        config
    }
}

fn main() -> Result<()> {
    let config = Args::parse().apply(RunConfig::from_env());
    let player = build_player(&config)?;

    let mut journal = match &config.journal.path {
        Some(path) => {
            eprintln!("[blockfall] journal: {}", path.display());
            Some(Journal::open(path)?)
        }
        None => None,
    };

    let mut noop = NoopObserver;
    let observer: &mut dyn Observer = match journal.as_mut() {
        Some(journal) => journal,
        None => &mut noop,
    };
    let result = run(&config, player, observer);

    if let Some(journal) = journal {
        let written = journal.close()?;
        eprintln!("[blockfall] journal: {} entries written", written);
    }

    let outcome = result?;
    print_summary(&config, &outcome);
    Ok(())
}

fn build_player(config: &RunConfig) -> Result<Box<dyn Player>> {
    let player: Box<dyn Player> = match config.player {
        PlayerKind::Keyboard => {
            if config.plain {
                bail!("the keyboard player needs the terminal screen; drop --plain or pick another player");
            }
            Box::new(KeyboardPlayer::new())
        }
        PlayerKind::Random => {
            Box::new(RandomPlayer::new(config.seed).with_delay(config.bot_delay()))
        }
        PlayerKind::Script => {
            let Some(path) = &config.script else {
                bail!("--player script needs --script <FILE>");
            };
            Box::new(ScriptedPlayer::from_file(path)?)
        }
    };
    Ok(player)
}

fn run(
    config: &RunConfig,
    player: Box<dyn Player>,
    observer: &mut dyn Observer,
) -> Result<GameOutcome> {
    if config.plain {
        return play(config, player, TextRenderer::new(io::stdout()), observer);
    }

    let mut term = TerminalRenderer::new();
    term.enter().context("failed to set up terminal")?;
    let result = play(config, player, &mut term, observer);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn play<R: Renderer>(
    config: &RunConfig,
    player: Box<dyn Player>,
    renderer: R,
    observer: &mut dyn Observer,
) -> Result<GameOutcome> {
    let mut game = Game::new(player, renderer, ShapePicker::new(config.seed))
        .with_turn_budget(config.turn_budget());
    if let Some(limit) = config.max_pieces {
        game = game.with_piece_limit(limit);
    }
    game.play_observed(observer)
}

fn print_summary(config: &RunConfig, outcome: &GameOutcome) {
    if !config.plain {
        println!("{}", outcome.final_state.grid());
    }
    println!(
        "{}: {} pieces, {} rows cleared, {} turns ({} player, seed {})",
        outcome.reason.as_str().replace('_', " "),
        outcome.pieces,
        outcome.rows_cleared,
        outcome.turns,
        config.player.as_str(),
        config.seed,
    );
}
