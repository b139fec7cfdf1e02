//! Capability traits the driver talks to.
//!
//! Input devices implement [`Player`], screens implement [`Renderer`], and
//! anything that wants to record the game implements [`Observer`]. The driver
//! only ever sees these traits.

use blockfall_core::{Block, GameState, Move};

use crate::deadline::TurnDeadline;
use crate::error::PlayError;
use crate::types::Direction;

/// What a player produced for one turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerInput {
    Move(Direction),
    /// Nothing before the deadline; counts as `Direction::None`
    Idle,
    /// The player cannot produce any further move
    Exhausted,
}

pub trait Player {
    /// Produce this turn's input, waiting no longer than `deadline` allows
    fn get_move(
        &mut self,
        state: &GameState,
        block: &Block,
        deadline: &TurnDeadline,
    ) -> anyhow::Result<PlayerInput>;

    /// Resolve this turn to a direction
    ///
    /// `Idle` becomes `Direction::None`; `Exhausted` becomes [`PlayError::NoMove`].
    fn make_move(
        &mut self,
        state: &GameState,
        block: &Block,
        deadline: &TurnDeadline,
    ) -> Result<Direction, PlayError> {
        match self
            .get_move(state, block, deadline)
            .map_err(PlayError::Input)?
        {
            PlayerInput::Move(direction) => Ok(direction),
            PlayerInput::Idle => Ok(Direction::None),
            PlayerInput::Exhausted => Err(PlayError::NoMove),
        }
    }
}

impl<P: Player + ?Sized> Player for &mut P {
    fn get_move(
        &mut self,
        state: &GameState,
        block: &Block,
        deadline: &TurnDeadline,
    ) -> anyhow::Result<PlayerInput> {
        (**self).get_move(state, block, deadline)
    }
}

impl<P: Player + ?Sized> Player for Box<P> {
    fn get_move(
        &mut self,
        state: &GameState,
        block: &Block,
        deadline: &TurnDeadline,
    ) -> anyhow::Result<PlayerInput> {
        (**self).get_move(state, block, deadline)
    }
}

pub trait Renderer {
    /// Draw a state. Must not assume it will see every intermediate state.
    fn render(&mut self, state: &GameState) -> anyhow::Result<()>;
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn render(&mut self, state: &GameState) -> anyhow::Result<()> {
        (**self).render(state)
    }
}

impl<R: Renderer + ?Sized> Renderer for Box<R> {
    fn render(&mut self, state: &GameState) -> anyhow::Result<()> {
        (**self).render(state)
    }
}

/// Renderer that draws nothing (headless runs, benches)
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render(&mut self, _state: &GameState) -> anyhow::Result<()> {
        Ok(())
    }
}

/// Who asked for a step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepSource {
    Player,
    Gravity,
}

impl StepSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            StepSource::Player => "player",
            StepSource::Gravity => "gravity",
        }
    }
}

/// Why a game stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EndReason {
    /// A new block could not be placed
    GameOver,
    /// The player ran out of moves
    NoMoves,
    /// The configured piece limit was reached
    PieceLimit,
}

impl EndReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            EndReason::GameOver => "game_over",
            EndReason::NoMoves => "no_moves",
            EndReason::PieceLimit => "piece_limit",
        }
    }
}

/// Things that happen during a game, in order
#[derive(Debug, Clone, Copy)]
pub enum GameEvent<'a> {
    Spawned {
        piece: u32,
        mv: &'a Move,
    },
    Stepped {
        piece: u32,
        turn: u32,
        source: StepSource,
        mv: &'a Move,
    },
    Landed {
        piece: u32,
        block: &'a Block,
        state: &'a GameState,
    },
    RowsCleared {
        rows: &'a [usize],
        state: &'a GameState,
    },
    Finished {
        reason: EndReason,
        pieces: u32,
        rows_cleared: u32,
    },
}

pub trait Observer {
    fn observe(&mut self, event: &GameEvent<'_>);
}

impl<O: Observer + ?Sized> Observer for &mut O {
    fn observe(&mut self, event: &GameEvent<'_>) {
        (**self).observe(event)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl Observer for NoopObserver {
    fn observe(&mut self, _event: &GameEvent<'_>) {}
}
