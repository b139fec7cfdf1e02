//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the board model, the move validator and the row-clear
//! detector. It has **zero dependencies** on UI, input devices, timing or I/O:
//!
//! - **Immutable**: every transition returns a new [`GameState`]; nothing is patched in place
//! - **Deterministic**: same seed and same inputs produce the same game
//! - **Testable**: each rule lives in a small module with its own tests
//!
//! # Module Structure
//!
//! - [`grid`]: 10x20 flat cell grid, text form and matrix view
//! - [`shapes`]: fixed offset tables for the seven shapes
//! - [`block`]: the live falling block (shape + anchor + motion flag)
//! - [`validator`]: bounds and occupancy rules for candidate positions
//! - [`rows`]: full-row detection and compaction
//! - [`state`]: [`GameState`] snapshots and the `spawn` / `apply` transitions
//! - [`phase`]: spawning → falling → landed → game-over lifecycle
//! - [`rng`]: seeded uniform shape selection
//!
//! # Game Rules
//!
//! - Blocks spawn with their anchor at (4, 0) and never rotate
//! - Left, right and down move one cell; a rejected sideways move is simply dropped
//! - Only a rejected **down** move lands the block
//! - A spawn onto occupied cells ends the game
//!
//! # Example
//!
//! ```
//! use blockfall_core::{GameState, ShapeKind};
//! use blockfall_core::types::{Direction, Point};
//!
//! let state = GameState::new();
//! let spawn = state.spawn(ShapeKind::O);
//! assert_eq!(spawn.block.anchor, Point::new(4, 0));
//!
//! let step = spawn.after.apply(spawn.block, Direction::Left);
//! assert!(step.accepted());
//! assert_eq!(step.block.anchor, Point::new(3, 0));
//! assert!(state.is_pristine());
//! ```

pub mod block;
pub mod error;
pub mod grid;
pub mod phase;
pub mod rng;
pub mod rows;
pub mod shapes;
pub mod state;
pub mod validator;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use block::Block;
pub use error::GridError;
pub use grid::{Grid, Matrix};
pub use phase::{Phase, PhaseEvent};
pub use rng::{ShapeCycle, ShapePicker, ShapeSource, SimpleRng};
pub use rows::{clear_rows, full_rows, RowSet};
pub use state::{GameState, Move, MoveCause};
pub use types::{Cell, Direction, Point, ShapeKind};
pub use validator::{is_legal, Verdict};
