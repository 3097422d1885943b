#![allow(dead_code)]

/// Shared test utilities for the rules-engine and reconciler suites
use sensorboard_chess::{
    constants::SETTLE_DELAY_MS,
    notation,
    position::Position,
    reconcile::Reconciliation,
    sensor::{self, SensorScan},
    session::GameSession,
    types::{Move, MoveList, Square},
};

pub fn square(text: &str) -> Square {
    Square::from_algebraic(text).expect(&format!("Invalid test square: {}", text))
}

pub fn position_from_fen(fen: &str) -> Position {
    Position::from_fen(fen).expect(&format!("Failed to load FEN: {}", fen))
}

pub fn scan_from_fen(fen: &str) -> SensorScan {
    sensor::capture_scan(&position_from_fen(fen))
}

pub fn move_pairs(moves: &MoveList) -> Vec<(Square, Square)> {
    moves.iter().map(|mv| (mv.from, mv.to)).collect()
}

/// Look up a legal move by coordinate text, panicking if it is not legal.
pub fn find_move(position: &mut Position, text: &str) -> Move {
    let (from, to, promote) =
        notation::parse_coordinate_move(text).expect(&format!("Invalid test move: {}", text));

    let moves = position.generate_moves();
    let mut mv = *moves
        .find(from, to)
        .expect(&format!("Move {} is not legal in {}", text, position.to_fen()));

    if promote.is_some() {
        mv.promote = promote;
    }

    mv
}

/// Apply a sequence of coordinate moves to a position.
pub fn play(position: &mut Position, moves: &[&str]) {
    for text in moves {
        let mv = find_move(position, text);
        position.make_move(&mv);
    }
}

/// The scan a perfect sensor pass would produce after `moves` from the
/// standard start.
pub fn scan_after(moves: &[&str]) -> SensorScan {
    let mut position = Position::new();
    play(&mut position, moves);
    sensor::capture_scan(&position)
}

/// Step a scan into the session twice: once to register the change, once
/// after the settle delay has elapsed. Returns the second outcome.
pub fn step_settled(session: &GameSession, scan: &SensorScan, clock_ms: &mut u64) -> Reconciliation {
    *clock_ms += 10;
    session.step_at(scan, *clock_ms);

    *clock_ms += SETTLE_DELAY_MS + 1;
    session.step_at(scan, *clock_ms)
}

/// Queue a move on the session and feed the matching scan, confirming it
/// without waiting out the settle delay. Panics unless it confirms.
pub fn play_queued(session: &GameSession, text: &str, clock_ms: &mut u64) {
    session
        .queue_move(text)
        .expect(&format!("Failed to queue move: {}", text));

    let mut scratch = position_from_fen(&session.fen());
    let mv = find_move(&mut scratch, text);
    scratch.make_move(&mv);

    let scan = sensor::capture_scan(&scratch);

    *clock_ms += 10;
    let outcome = session.step_at(&scan, *clock_ms);

    assert!(
        matches!(outcome, Reconciliation::Confirmed { .. }),
        "Queued move {} did not confirm: {:?}",
        text,
        outcome
    );
}
