/// Unit tests for SAN encoding and FEN round-trips
mod test_utils;

use sensorboard_chess::{constants::START_FEN, notation, position::Position, types::Piece};
use test_utils::*;

/// Encode a coordinate move as SAN in the given position.
fn san_in(fen: &str, text: &str) -> String {
    let mut position = position_from_fen(fen);
    let mv = find_move(&mut position, text);
    let moves = position.generate_moves();

    notation::move_to_san(&moves, &mv)
}

#[test]
fn start_position_fen_round_trips() {
    assert_eq!(Position::new().to_fen(), START_FEN);
    assert_eq!(position_from_fen(START_FEN).to_fen(), START_FEN);
}

#[test]
fn fen_records_the_en_passant_target() {
    let mut position = Position::new();
    play(&mut position, &["e2e4"]);

    let fen = position.to_fen();
    assert_eq!(
        fen,
        "rnbqkbnr/pppppppp/8/8/4P3/8/PPPPPPPP/RNBQKBNR b KQkq e3 0 1"
    );
    assert_eq!(position_from_fen(&fen).to_fen(), fen);
}

#[test]
fn fen_rejects_malformed_input() {
    assert!(Position::from_fen("only/seven/ranks/of/pieces/here/now w - -").is_err());
    assert!(Position::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR x KQkq - 0 1").is_err());
    assert!(Position::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w XQkq - 0 1").is_err());
    // No black king at all.
    assert!(Position::from_fen("8/8/8/8/8/8/8/K7 w - - 0 1").is_err());
}

#[test]
fn simple_pawn_and_piece_moves() {
    assert_eq!(san_in(START_FEN, "e2e4"), "e4");
    assert_eq!(san_in(START_FEN, "g1f3"), "Nf3");
}

#[test]
fn lone_pawn_capture_has_no_file_prefix() {
    // Only one pawn can take on d5, so no disambiguator is emitted.
    assert_eq!(
        san_in(
            "rnbqkbnr/ppp1pppp/8/3p4/4P3/8/PPPP1PPP/RNBQKBNR w KQkq - 0 2",
            "e4d5"
        ),
        "xd5"
    );
}

#[test]
fn competing_pawn_captures_get_their_source_file() {
    let fen = "rnbqkbnr/ppp1pppp/8/3p4/2P1P3/8/PP1P1PPP/RNBQKBNR w KQkq - 0 2";

    assert_eq!(san_in(fen, "e4d5"), "exd5");
    assert_eq!(san_in(fen, "c4d5"), "cxd5");
}

#[test]
fn knights_disambiguate_by_file_then_rank() {
    // Knights on b2 and f2 both reach d3.
    assert_eq!(san_in("k7/8/8/8/8/8/1N3N2/K7 w - - 0 1", "b2d3"), "Nbd3");

    // Knights on b2 and b6 both reach c4, so the file cannot separate them.
    assert_eq!(san_in("7k/8/1N6/8/8/8/1N6/K7 w - - 0 1", "b2c4"), "N2c4");
}

#[test]
fn lone_knight_needs_no_disambiguator() {
    assert_eq!(san_in(START_FEN, "b1c3"), "Nc3");
}

#[test]
fn castling_uses_letter_o_notation() {
    let fen = "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1";

    assert_eq!(san_in(fen, "e1g1"), "O-O");
    assert_eq!(san_in(fen, "e1c1"), "O-O-O");
}

#[test]
fn promotions_append_the_piece_letter() {
    let fen = "8/P6k/8/8/8/8/8/K7 w - - 0 1";

    assert_eq!(san_in(fen, "a7a8"), "a8=Q");
    assert_eq!(san_in(fen, "a7a8r"), "a8=R");
}

#[test]
fn promotion_letter_defaults_to_queen() {
    let mut position = position_from_fen("8/P6k/8/8/8/8/8/K7 w - - 0 1");
    let mut mv = find_move(&mut position, "a7a8");
    mv.promote = None;

    let moves = position.generate_moves();
    assert_eq!(notation::move_to_san(&moves, &mv), "a8=Q");
    assert_eq!(mv.promote.unwrap_or(Piece::Queen), Piece::Queen);
}
