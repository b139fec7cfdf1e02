//! Game driver: spawns blocks, takes turns, applies gravity, clears rows.
//!
//! Each turn the player gets one [`TurnDeadline`]. Its answer is applied, then
//! one gravity step pulls the block down. When a downward step is rejected the
//! block has landed: full rows are shown once, removed, and the next block
//! spawns. The game ends when a spawn is blocked, the player is exhausted, or an
//! optional piece limit is reached.

use std::time::Duration;

use anyhow::{Context, Result};

use blockfall_core::{GameState, Move, Phase, PhaseEvent, RowSet, ShapePicker, ShapeSource};

use crate::deadline::TurnDeadline;
use crate::error::PlayError;
use crate::ports::{EndReason, GameEvent, NoopObserver, Observer, Player, Renderer, StepSource};
use crate::types::{Direction, DEFAULT_TURN_MS};

/// Summary of a finished game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOutcome {
    pub reason: EndReason,
    /// Blocks that were spawned successfully
    pub pieces: u32,
    pub rows_cleared: u32,
    /// Player turns taken
    pub turns: u32,
    pub final_state: GameState,
}

pub struct Game<P, R, S = ShapePicker> {
    player: P,
    renderer: R,
    shapes: S,
    turn_budget: Duration,
    piece_limit: Option<u32>,
}

impl<P: Player, R: Renderer, S: ShapeSource> Game<P, R, S> {
    pub fn new(player: P, renderer: R, shapes: S) -> Self {
        Self {
            player,
            renderer,
            shapes,
            turn_budget: Duration::from_millis(DEFAULT_TURN_MS),
            piece_limit: None,
        }
    }

    /// How long the player may take per turn before it counts as idle
    pub fn with_turn_budget(mut self, budget: Duration) -> Self {
        self.turn_budget = budget;
        self
    }

    /// Stop after this many blocks have landed
    pub fn with_piece_limit(mut self, limit: u32) -> Self {
        self.piece_limit = Some(limit);
        self
    }

    pub fn turn_budget(&self) -> Duration {
        self.turn_budget
    }

    pub fn player(&self) -> &P {
        &self.player
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn into_parts(self) -> (P, R, S) {
        (self.player, self.renderer, self.shapes)
    }

    /// Play one game from an empty board
    pub fn play(&mut self) -> Result<GameOutcome> {
        self.play_observed(&mut NoopObserver)
    }

    /// Play one game, reporting every event to `observer`
    pub fn play_observed(&mut self, observer: &mut dyn Observer) -> Result<GameOutcome> {
        let mut state = GameState::new();
        let mut phase = Phase::Spawning;
        let mut pieces = 0u32;
        let mut rows_cleared = 0u32;
        let mut turns = 0u32;

        loop {
            self.renderer.render(&state).context("render failed")?;

            let shape = self.shapes.next_shape();
            let spawn = state.spawn(shape);
            phase = phase.advance(&spawn);
            observer.observe(&GameEvent::Spawned {
                piece: pieces + 1,
                mv: &spawn,
            });

            if phase.is_terminal() {
                let final_state = spawn.after;
                self.renderer.render(&final_state).context("render failed")?;
                return Ok(finish(
                    observer,
                    EndReason::GameOver,
                    pieces,
                    rows_cleared,
                    turns,
                    final_state,
                ));
            }
            pieces += 1;

            let mut mv = spawn;
            while phase == Phase::Falling {
                self.renderer.render(&mv.after).context("render failed")?;

                let deadline = TurnDeadline::start(self.turn_budget);
                let direction = match self.player.make_move(&mv.after, &mv.block, &deadline) {
                    Ok(direction) => direction,
                    Err(PlayError::NoMove) => {
                        return Ok(finish(
                            observer,
                            EndReason::NoMoves,
                            pieces,
                            rows_cleared,
                            turns,
                            mv.after,
                        ));
                    }
                    Err(PlayError::Input(e)) => return Err(e.context("player input failed")),
                };
                turns += 1;

                mv = step(&mv, direction, &mut phase);
                observer.observe(&GameEvent::Stepped {
                    piece: pieces,
                    turn: turns,
                    source: StepSource::Player,
                    mv: &mv,
                });

                if phase == Phase::Falling {
                    self.renderer.render(&mv.after).context("render failed")?;
                    mv = step(&mv, Direction::Down, &mut phase);
                    observer.observe(&GameEvent::Stepped {
                        piece: pieces,
                        turn: turns,
                        source: StepSource::Gravity,
                        mv: &mv,
                    });
                }
            }

            state = mv.after;
            observer.observe(&GameEvent::Landed {
                piece: pieces,
                block: &mv.block,
                state: &state,
            });

            if !state.full_rows().is_empty() {
                // Show the full rows once before they disappear.
                self.renderer.render(&state).context("render failed")?;
                let rows: RowSet = state.full_rows().iter().copied().collect();
                state = state.clear_rows(&rows);
                rows_cleared += rows.len() as u32;
                observer.observe(&GameEvent::RowsCleared {
                    rows: &rows,
                    state: &state,
                });
            }

            phase = phase.next(PhaseEvent::NextBlock);

            if self.piece_limit.is_some_and(|limit| pieces >= limit) {
                self.renderer.render(&state).context("render failed")?;
                return Ok(finish(
                    observer,
                    EndReason::PieceLimit,
                    pieces,
                    rows_cleared,
                    turns,
                    state,
                ));
            }
        }
    }
}

fn step(mv: &Move, direction: Direction, phase: &mut Phase) -> Move {
    let next = mv.after.apply(mv.block, direction);
    *phase = phase.advance(&next);
    next
}

fn finish(
    observer: &mut dyn Observer,
    reason: EndReason,
    pieces: u32,
    rows_cleared: u32,
    turns: u32,
    final_state: GameState,
) -> GameOutcome {
    observer.observe(&GameEvent::Finished {
        reason,
        pieces,
        rows_cleared,
    });
    GameOutcome {
        reason,
        pieces,
        rows_cleared,
        turns,
        final_state,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{NullRenderer, PlayerInput};
    use blockfall_core::{Block, ShapeCycle, ShapeKind};

    /// Always answers the same thing
    struct Constant(PlayerInput);

    impl Player for Constant {
        fn get_move(
            &mut self,
            _state: &GameState,
            _block: &Block,
            _deadline: &TurnDeadline,
        ) -> Result<PlayerInput> {
            Ok(self.0)
        }
    }

    struct Broken;

    impl Player for Broken {
        fn get_move(
            &mut self,
            _state: &GameState,
            _block: &Block,
            _deadline: &TurnDeadline,
        ) -> Result<PlayerInput> {
            anyhow::bail!("device unplugged")
        }
    }

    #[test]
    fn idle_player_stacks_until_game_over() {
        let mut game = Game::new(
            Constant(PlayerInput::Idle),
            NullRenderer,
            ShapeCycle::new([ShapeKind::O]),
        )
        .with_turn_budget(Duration::ZERO);

        let outcome = game.play().unwrap();
        assert_eq!(outcome.reason, EndReason::GameOver);
        // O blocks stack two rows each in columns 4-5: 10 fit in 20 rows.
        assert_eq!(outcome.pieces, 10);
        assert!(outcome.final_state.game_over());
        assert_eq!(outcome.final_state.grid().occupied_count(), 40);
    }

    #[test]
    fn exhausted_player_ends_with_no_moves() {
        let mut game = Game::new(
            Constant(PlayerInput::Exhausted),
            NullRenderer,
            ShapeCycle::new([ShapeKind::T]),
        );

        let outcome = game.play().unwrap();
        assert_eq!(outcome.reason, EndReason::NoMoves);
        assert_eq!(outcome.pieces, 1);
        assert_eq!(outcome.turns, 0);
    }

    #[test]
    fn input_failure_is_an_error() {
        let mut game = Game::new(Broken, NullRenderer, ShapeCycle::new([ShapeKind::T]));
        let err = game.play().unwrap_err();
        assert!(format!("{:#}", err).contains("device unplugged"));
    }

    #[test]
    fn piece_limit_stops_the_game() {
        let mut game = Game::new(
            Constant(PlayerInput::Move(Direction::Down)),
            NullRenderer,
            ShapeCycle::new([ShapeKind::I]),
        )
        .with_piece_limit(2);

        let outcome = game.play().unwrap();
        assert_eq!(outcome.reason, EndReason::PieceLimit);
        assert_eq!(outcome.pieces, 2);
        assert_eq!(outcome.final_state.grid().occupied_count(), 8);
    }
}
