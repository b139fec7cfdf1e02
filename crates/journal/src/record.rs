//! Journal records: one JSON object per line.
//!
//! ```text
//! {"seq":1,"type":"spawn","piece":1,"shape":"t","anchor":[4,0],"accepted":true}
//! {"seq":2,"type":"move","piece":1,"turn":1,"source":"player","direction":"left","verdict":"legal","anchor":[3,0],"landed":false}
//! ```

use serde::{Deserialize, Serialize};

use blockfall_core::{Move, MoveCause, Verdict};
use blockfall_engine::GameEvent;

use crate::types::{Direction, Point};

/// A record plus its position in the journal (1-based)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub seq: u64,
    #[serde(flatten)]
    pub record: Record,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Record {
    Spawn {
        piece: u32,
        shape: String,
        anchor: [i16; 2],
        accepted: bool,
    },
    Move {
        piece: u32,
        turn: u32,
        source: String,
        direction: String,
        verdict: String,
        anchor: [i16; 2],
        landed: bool,
    },
    Landed {
        piece: u32,
        shape: String,
        anchor: [i16; 2],
        occupied: usize,
        full_rows: Vec<usize>,
        /// Board rows top to bottom, `.` for empty
        board: Vec<String>,
    },
    RowsCleared {
        rows: Vec<usize>,
        occupied: usize,
    },
    /// Last record of a game, whatever ended it
    GameEnd {
        reason: String,
        pieces: u32,
        rows_cleared: u32,
    },
}

impl Record {
    pub fn from_event(event: &GameEvent<'_>) -> Self {
        match *event {
            GameEvent::Spawned { piece, mv } => Record::Spawn {
                piece,
                shape: mv.block.shape.as_str().to_string(),
                anchor: xy(mv.block.anchor),
                accepted: mv.accepted(),
            },
            GameEvent::Stepped {
                piece,
                turn,
                source,
                mv,
            } => Record::Move {
                piece,
                turn,
                source: source.as_str().to_string(),
                direction: step_direction(mv).as_str().to_string(),
                verdict: verdict_label(mv.verdict).to_string(),
                anchor: xy(mv.block.anchor),
                landed: mv.landed(),
            },
            GameEvent::Landed {
                piece,
                block,
                state,
            } => Record::Landed {
                piece,
                shape: block.shape.as_str().to_string(),
                anchor: xy(block.anchor),
                occupied: state.grid().occupied_count(),
                full_rows: state.full_rows().to_vec(),
                board: state.grid().to_string().lines().map(String::from).collect(),
            },
            GameEvent::RowsCleared { rows, state } => Record::RowsCleared {
                rows: rows.to_vec(),
                occupied: state.grid().occupied_count(),
            },
            GameEvent::Finished {
                reason,
                pieces,
                rows_cleared,
            } => Record::GameEnd {
                reason: reason.as_str().to_string(),
                pieces,
                rows_cleared,
            },
        }
    }

    /// The `type` tag this record serializes with
    pub fn kind(&self) -> &'static str {
        match self {
            Record::Spawn { .. } => "spawn",
            Record::Move { .. } => "move",
            Record::Landed { .. } => "landed",
            Record::RowsCleared { .. } => "rows_cleared",
            Record::GameEnd { .. } => "game_end",
        }
    }
}

fn xy(p: Point) -> [i16; 2] {
    [p.x, p.y]
}

fn step_direction(mv: &Move) -> Direction {
    match mv.cause {
        MoveCause::Step(direction) => direction,
        MoveCause::Spawn => Direction::None,
    }
}

fn verdict_label(verdict: Verdict) -> &'static str {
    match verdict {
        Verdict::Legal => "legal",
        Verdict::OutOfBounds(_) => "out_of_bounds",
        Verdict::Occupied(_) => "occupied",
    }
}
