//! Game journal: every driver event as one line of JSON.
//!
//! [`Journal`] implements the engine's `Observer`, so it plugs straight into
//! `Game::play_observed`. Writing happens on a tokio task fed by an unbounded
//! channel.

pub mod config;
pub mod record;
pub mod writer;

pub use blockfall_types as types;

pub use config::JournalConfig;
pub use record::{Entry, Record};
pub use writer::{read_entries, Journal};
