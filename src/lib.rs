//! blockfall (workspace facade crate).
//!
//! Re-exports the member crates under `crates/` so callers can depend on one
//! package: `blockfall::{core, engine, input, journal, term, types}`.

pub mod config;

pub use blockfall_core as core;
pub use blockfall_engine as engine;
pub use blockfall_input as input;
pub use blockfall_journal as journal;
pub use blockfall_term as term;
pub use blockfall_types as types;

pub use config::{PlayerKind, RunConfig};
