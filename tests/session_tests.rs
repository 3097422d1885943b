/// Integration tests for the game session controller
mod test_utils;

use sensorboard_chess::{
    constants::START_FEN,
    sensor,
    session::{GameSession, SessionConfig},
    types::{PlacedPiece, Piece, Side},
};
use test_utils::*;

#[test]
fn new_session_is_ready_on_the_standard_start() {
    let session = GameSession::default();

    assert_eq!(session.fen(), START_FEN);
    assert_eq!(session.side_to_move(), Side::White);
    assert!(session.is_valid());
    assert_eq!(session.legal_move_texts().len(), 20);
    assert_eq!(session.move_list_text(), "");
    assert_eq!(session.last_move_text(), None);
}

#[test]
fn confirmed_moves_build_a_numbered_san_table() {
    let session = GameSession::default();
    let mut clock_ms = 1_000;

    play_queued(&session, "e2e4", &mut clock_ms);
    play_queued(&session, "e7e5", &mut clock_ms);
    play_queued(&session, "g1f3", &mut clock_ms);

    assert_eq!(session.move_list_text(), "1. e4 e5 2. Nf3");
    assert_eq!(session.last_move_text(), Some("g1f3".to_string()));
    assert_eq!(session.side_to_move(), Side::Black);
}

#[test]
fn checks_are_marked_on_the_san_ply() {
    let session = GameSession::default();
    let mut clock_ms = 1_000;

    for text in ["e2e4", "e7e5", "d1h5", "b8c6", "h5f7"] {
        play_queued(&session, text, &mut clock_ms);
    }

    assert!(session.move_list_text().ends_with("Qxf7+"));
    assert!(session.feedback().in_check);
}

#[test]
fn fools_mate_is_marked_on_the_final_ply() {
    let session = GameSession::default();
    let mut clock_ms = 1_000;

    for text in ["f2f3", "e7e5", "g2g4", "d8h4"] {
        play_queued(&session, text, &mut clock_ms);
    }

    assert_eq!(session.move_list_text(), "1. f3 e5 2. g4 Qh4#");
    assert!(session.feedback().in_check);
    assert!(session.legal_move_texts().is_empty());
}

#[test]
fn stalemate_appends_the_drawn_result() {
    let session = GameSession::default();
    session
        .start(&scan_from_fen("7k/8/8/8/8/8/6Q1/K7 w - - 0 1"))
        .unwrap();

    let mut clock_ms = 1_000;
    play_queued(&session, "g2g6", &mut clock_ms);

    assert_eq!(session.move_list_text(), "1. Qg6 1/2-1/2");
    assert!(!session.feedback().in_check);
    assert!(session.legal_move_texts().is_empty());
}

#[test]
fn custom_layout_starts_with_derived_castling_rights() {
    let session = GameSession::default();
    session
        .start(&scan_from_fen("r3k2r/8/8/8/8/8/8/R3K2R w - - 0 1"))
        .unwrap();

    // Kings and rooks are all home, so every right is granted regardless
    // of the FEN the scan was staged from.
    assert!(session.fen().contains("KQkq"));
    assert!(session.is_valid());
}

#[test]
fn questionable_layout_starts_leniently() {
    // Two white kings: a warning, not an error.
    let mut scan = scan_from_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1");
    scan[sensor::scan_index(square("a1"))] = Some(PlacedPiece::new(Side::White, Piece::King));

    let session = GameSession::default();
    assert!(session.start(&scan).is_ok());
    assert!(!session.is_valid());
    assert!(!session.legal_move_texts().is_empty());
}

#[test]
fn strict_validation_rejects_questionable_layouts() {
    let mut scan = scan_from_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1");
    scan[sensor::scan_index(square("a1"))] = Some(PlacedPiece::new(Side::White, Piece::King));

    let session = GameSession::new(SessionConfig {
        strict_validation: true,
        ..SessionConfig::default()
    });

    assert!(session.start(&scan).is_err());
}

#[test]
fn kingless_layout_never_starts() {
    let scan = [None; 64];
    let session = GameSession::default();

    assert!(session.start(&scan).is_err());
}

#[test]
fn take_back_rewinds_one_ply() {
    let session = GameSession::default();
    let mut clock_ms = 1_000;

    play_queued(&session, "e2e4", &mut clock_ms);
    play_queued(&session, "e7e5", &mut clock_ms);

    assert_eq!(session.take_back(), Some("e7e5".to_string()));
    assert_eq!(session.move_list_text(), "1. e4");
    assert_eq!(session.side_to_move(), Side::Black);

    assert_eq!(session.take_back(), Some("e2e4".to_string()));
    assert_eq!(session.fen(), START_FEN);
    assert_eq!(session.take_back(), None);
}

#[test]
fn feedback_reflects_the_session_state() {
    let session = GameSession::default();
    let mut clock_ms = 1_000;

    play_queued(&session, "e2e4", &mut clock_ms);

    // Announce the opponent's reply without feeding a scan yet.
    session.queue_move("e7e5").unwrap();

    let feedback = session.feedback();
    assert_eq!(feedback.side_to_move, Side::Black);
    assert_eq!(feedback.last_move, Some((square("e2"), square("e4"))));
    assert!(!feedback.in_check);
    assert_eq!(feedback.pending_move, Some((square("e7"), square("e5"))));
}

#[test]
fn queue_move_validates_its_input() {
    let session = GameSession::default();

    assert!(session.queue_move("e2e4").is_ok());
    assert!(session.queue_move("e9e4").is_err());
    assert!(session.queue_move("castle").is_err());
}
