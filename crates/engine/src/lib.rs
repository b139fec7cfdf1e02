//! Game driver and the ports it drives.
//!
//! The core crate only knows how to compute the next state. This crate owns the
//! loop around it: turn-taking, the per-turn deadline, gravity, row clearing
//! and the end-of-game decision. Input devices, screens and recorders plug in
//! through the [`Player`], [`Renderer`] and [`Observer`] traits.

pub mod deadline;
pub mod driver;
pub mod error;
pub mod ports;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use deadline::TurnDeadline;
pub use driver::{Game, GameOutcome};
pub use error::PlayError;
pub use ports::{
    EndReason, GameEvent, NoopObserver, NullRenderer, Observer, Player, PlayerInput, Renderer,
    StepSource,
};
