//! Phase module - the game lifecycle state machine
//!
//! ```text
//! Spawning --spawned--> Falling --down rejected--> Landed --next block--> Spawning
//!     \                   ^   |
//!      \--blocked--> GameOver  \-- accepted / sideways rejected
//! ```
//!
//! `GameOver` is terminal. Events that make no sense in the current phase
//! leave it unchanged.

use crate::state::{Move, MoveCause};
use crate::types::Direction;

/// Game lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    #[default]
    Spawning,
    Falling,
    Landed,
    GameOver,
}

/// Input to the phase machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhaseEvent {
    Spawned { blocked: bool },
    Moved { direction: Direction, accepted: bool },
    NextBlock,
}

impl PhaseEvent {
    /// Event described by a transition record
    pub fn from_move(mv: &Move) -> Self {
        match mv.cause {
            MoveCause::Spawn => PhaseEvent::Spawned {
                blocked: mv.after.game_over(),
            },
            MoveCause::Step(direction) => PhaseEvent::Moved {
                direction,
                accepted: mv.accepted(),
            },
        }
    }
}

impl Phase {
    pub fn next(self, event: PhaseEvent) -> Phase {
        match (self, event) {
            (Phase::GameOver, _) => Phase::GameOver,
            (Phase::Spawning, PhaseEvent::Spawned { blocked: true }) => Phase::GameOver,
            (Phase::Spawning, PhaseEvent::Spawned { blocked: false }) => Phase::Falling,
            (
                Phase::Falling,
                PhaseEvent::Moved {
                    direction: Direction::Down,
                    accepted: false,
                },
            ) => Phase::Landed,
            (Phase::Falling, PhaseEvent::Moved { .. }) => Phase::Falling,
            (Phase::Landed, PhaseEvent::NextBlock) => Phase::Spawning,
            (phase, _) => phase,
        }
    }

    /// Advance by the event a transition record describes
    pub fn advance(self, mv: &Move) -> Phase {
        self.next(PhaseEvent::from_move(mv))
    }

    pub fn is_terminal(self) -> bool {
        self == Phase::GameOver
    }
}
