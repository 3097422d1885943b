use crate::types::{FLAG_CASTLE_KINGSIDE, FLAG_CASTLE_QUEENSIDE, Move, MoveList, Piece, Square};

const fn file_char(square: Square) -> char {
    (square.file() + b'a') as char
}

const fn rank_char(square: Square) -> char {
    (square.rank() + b'1') as char
}

/// Encodes `mv` in standard algebraic notation against the legal moves of
/// the position it was generated from. Disambiguation consults only the
/// first other legal move of the same piece to the same destination, so a
/// three-way ambiguity gets a partial disambiguator. Check and mate
/// markers are the caller's responsibility, since they depend on the
/// position after the move.
pub fn move_to_san(legal_moves: &MoveList, mv: &Move) -> String {
    if mv.flags & FLAG_CASTLE_KINGSIDE != 0 {
        return "O-O".to_string();
    }

    if mv.flags & FLAG_CASTLE_QUEENSIDE != 0 {
        return "O-O-O".to_string();
    }

    let similar = legal_moves.iter().find(|other| {
        other.piece == mv.piece
            && other.side == mv.side
            && other.to == mv.to
            && other.from != mv.from
    });

    let mut san = String::new();

    if mv.piece == Piece::Pawn {
        // Two pawns can only reach the same square from different files.
        if similar.is_some() {
            san.push(file_char(mv.from));
        }

        if mv.is_capture() {
            san.push('x');
        }
    } else {
        san.push(mv.piece.letter());

        if let Some(other) = similar {
            if other.from.file() != mv.from.file() {
                san.push(file_char(mv.from));
            } else if other.from.rank() != mv.from.rank() {
                san.push(rank_char(mv.from));
            } else {
                san.push(file_char(mv.from));
                san.push(rank_char(mv.from));
            }
        }

        if mv.is_capture() {
            san.push('x');
        }
    }

    san.push_str(&mv.to.to_string());

    if mv.is_promotion() {
        san.push('=');
        san.push(mv.promote.unwrap_or(Piece::Queen).letter());
    }

    san
}

/// Parses coordinate move text like "e2e4" or "e7e8q" into origin,
/// destination and an optional promotion piece.
pub fn parse_coordinate_move(text: &str) -> Result<(Square, Square, Option<Piece>), String> {
    if !text.is_ascii() || text.len() < 4 || text.len() > 5 {
        return Err(format!("Invalid move string: {text}"));
    }

    let from = Square::from_algebraic(&text[0..2])?;
    let to = Square::from_algebraic(&text[2..4])?;

    let promote = match text.as_bytes().get(4) {
        None => None,
        Some(b'q') => Some(Piece::Queen),
        Some(b'r') => Some(Piece::Rook),
        Some(b'b') => Some(Piece::Bishop),
        Some(b'n') => Some(Piece::Knight),
        Some(&other) => {
            return Err(format!("Invalid promotion piece: {}", other as char));
        }
    };

    Ok((from, to, promote))
}

/// Renders SAN plies as a numbered move list, e.g. "1. e4 e5 2. Nf3".
pub fn numbered_move_list(plies: &[String]) -> String {
    let mut text = String::new();

    for (index, ply) in plies.iter().enumerate() {
        if index % 2 == 0 {
            if index > 0 {
                text.push(' ');
            }

            text.push_str(&format!("{}. ", index / 2 + 1));
        } else {
            text.push(' ');
        }

        text.push_str(ply);
    }

    text
}
