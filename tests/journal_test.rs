//! Journal end to end: play a short game, read the JSONL back

use std::path::PathBuf;
use std::time::Duration;

use blockfall::core::ShapeCycle;
use blockfall::engine::{Game, NullRenderer};
use blockfall::input::ScriptedPlayer;
use blockfall::journal::{read_entries, Journal, Record};
use blockfall::types::ShapeKind;

fn temp_path(name: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "blockfall-{}-{}.jsonl",
        name,
        std::process::id()
    ));
    let _ = std::fs::remove_file(&path);
    path
}

#[test]
fn journal_records_a_short_game() {
    let path = temp_path("short-game");
    let mut journal = Journal::open(&path).unwrap();

    let player = ScriptedPlayer::parse("left*3 down*20").unwrap();
    let mut game = Game::new(player, NullRenderer, ShapeCycle::new([ShapeKind::O]))
        .with_turn_budget(Duration::ZERO);
    let outcome = game.play_observed(&mut journal).unwrap();

    let queued = journal.queued();
    let written = journal.close().unwrap();
    assert_eq!(written, queued);

    let entries = read_entries(&path).unwrap();
    assert_eq!(entries.len() as u64, written);
    for (i, entry) in entries.iter().enumerate() {
        assert_eq!(entry.seq, i as u64 + 1);
    }

    let first_line = std::fs::read_to_string(&path).unwrap();
    let first: serde_json::Value =
        serde_json::from_str(first_line.lines().next().unwrap()).unwrap();
    assert_eq!(first["seq"], 1);
    assert_eq!(first["type"], "spawn");
    assert_eq!(first["shape"], "o");

    let kinds: Vec<&str> = entries.iter().map(|e| e.record.kind()).collect();
    assert_eq!(kinds.first(), Some(&"spawn"));
    assert_eq!(kinds.last(), Some(&"game_end"));
    // Two blocks land; the third runs the script dry.
    assert_eq!(kinds.iter().filter(|k| **k == "landed").count(), 2);

    match &entries.last().unwrap().record {
        Record::GameEnd { reason, pieces, .. } => {
            assert_eq!(reason, "no_moves");
            assert_eq!(*pieces, outcome.pieces);
        }
        other => panic!("unexpected final record {:?}", other),
    }

    let landed = entries
        .iter()
        .find_map(|e| match &e.record {
            Record::Landed { anchor, board, .. } => Some((*anchor, board.clone())),
            _ => None,
        })
        .unwrap();
    assert_eq!(landed.0, [1, 18]);
    assert_eq!(landed.1.len(), 20);
    assert_eq!(landed.1[19], ".OO.......");

    let _ = std::fs::remove_file(&path);
}

#[test]
fn journal_appends_across_opens() {
    let path = temp_path("append");

    let mut first = Journal::open(&path).unwrap();
    first.record(Record::RowsCleared {
        rows: vec![19],
        occupied: 0,
    });
    assert_eq!(first.close().unwrap(), 1);

    let mut second = Journal::open(&path).unwrap();
    second.record(Record::GameEnd {
        reason: "game_over".to_string(),
        pieces: 3,
        rows_cleared: 1,
    });
    drop(second);

    let entries = read_entries(&path).unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].record.kind(), "rows_cleared");
    assert_eq!(entries[1].record.kind(), "game_end");

    let _ = std::fs::remove_file(&path);
}

#[test]
fn open_fails_for_missing_directory() {
    let path = std::env::temp_dir()
        .join("blockfall-no-such-dir")
        .join("nested")
        .join("journal.jsonl");
    let err = Journal::open(&path).err().unwrap();
    assert!(format!("{:#}", err).contains("failed to open journal"));
}
