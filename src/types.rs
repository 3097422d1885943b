use std::fmt;

#[cfg(feature = "api")]
use serde::{Deserialize, Serialize};

#[repr(u8)]
#[cfg_attr(feature = "api", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Side {
    White = 0,
    Black = 1,
}

impl Side {
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn opponent(self) -> Self {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    /// Rank a pawn of this color starts on (0-indexed).
    pub const fn pawn_start_rank(self) -> u8 {
        match self {
            Side::White => 1,
            Side::Black => 6,
        }
    }

    /// Rank a pawn of this color promotes on (0-indexed).
    pub const fn promotion_rank(self) -> u8 {
        match self {
            Side::White => 7,
            Side::Black => 0,
        }
    }

    pub const fn home_rank(self) -> u8 {
        match self {
            Side::White => 0,
            Side::Black => 7,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::White => write!(f, "white"),
            Side::Black => write!(f, "black"),
        }
    }
}

#[repr(u8)]
#[cfg_attr(feature = "api", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Piece {
    Pawn = 0,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl Piece {
    /// Uppercase letter used in SAN and for white pieces in FEN.
    pub const fn letter(self) -> char {
        match self {
            Piece::Pawn => 'P',
            Piece::Knight => 'N',
            Piece::Bishop => 'B',
            Piece::Rook => 'R',
            Piece::Queen => 'Q',
            Piece::King => 'K',
        }
    }

    pub const fn fen_char(self, side: Side) -> char {
        match side {
            Side::White => self.letter(),
            Side::Black => self.letter().to_ascii_lowercase(),
        }
    }

    pub fn from_fen_char(c: char) -> Option<PlacedPiece> {
        let piece = match c.to_ascii_uppercase() {
            'P' => Piece::Pawn,
            'N' => Piece::Knight,
            'B' => Piece::Bishop,
            'R' => Piece::Rook,
            'Q' => Piece::Queen,
            'K' => Piece::King,
            _ => return None,
        };

        let side = if c.is_ascii_uppercase() {
            Side::White
        } else {
            Side::Black
        };

        Some(PlacedPiece::new(side, piece))
    }

    pub fn iter() -> impl Iterator<Item = Piece> {
        [
            Piece::Pawn,
            Piece::Knight,
            Piece::Bishop,
            Piece::Rook,
            Piece::Queen,
            Piece::King,
        ]
        .into_iter()
    }
}

impl TryFrom<u8> for Piece {
    type Error = &'static str;

    /// Converts from a number representing the piece
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value > 5 {
            return Err("Piece index out of range (must be 0-5)");
        }

        // SAFETY: We've verified value is in range 0-5, which matches our enum variants
        Ok(unsafe { std::mem::transmute::<u8, Piece>(value) })
    }
}

/// A piece together with its color. A board cell holds
/// `Option<PlacedPiece>`, so "empty" is a distinct value rather than a
/// sentinel piece.
#[cfg_attr(feature = "api", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PlacedPiece {
    pub side: Side,
    pub piece: Piece,
}

impl PlacedPiece {
    pub const fn new(side: Side, piece: Piece) -> Self {
        Self { side, piece }
    }
}

/// A 0x88 square index. The board array has 128 slots; an index is a real
/// square exactly when `index & 0x88 == 0`, which makes off-board detection
/// a single mask during ray walks.
#[cfg_attr(feature = "api", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Square(u8);

impl Square {
    pub const fn from_file_rank(file: u8, rank: u8) -> Self {
        Square((rank << 4) | file)
    }

    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// 0-indexed (0-7)
    pub const fn file(self) -> u8 {
        self.0 & 0x0f
    }

    /// 0-indexed (0-7)
    pub const fn rank(self) -> u8 {
        self.0 >> 4
    }

    /// Step by a 0x88 delta; `None` when the result leaves the board.
    pub fn offset(self, delta: i32) -> Option<Square> {
        let target = self.0 as i32 + delta;

        if (0..128).contains(&target) && target & 0x88 == 0 {
            Some(Square(target as u8))
        } else {
            None
        }
    }

    pub fn from_algebraic(text: &str) -> Result<Self, String> {
        let bytes = text.as_bytes();

        if bytes.len() != 2
            || !(b'a'..=b'h').contains(&bytes[0])
            || !(b'1'..=b'8').contains(&bytes[1])
        {
            return Err(format!("Invalid square: {text}"));
        }

        Ok(Square::from_file_rank(bytes[0] - b'a', bytes[1] - b'1'))
    }

    pub fn iter() -> impl Iterator<Item = Square> {
        (0..128u8).filter(|index| index & 0x88 == 0).map(Square)
    }
}

impl TryFrom<u8> for Square {
    type Error = &'static str;

    /// Converts from a raw 0x88 board index
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value & 0x88 != 0 {
            return Err("Square index is off the 0x88 board");
        }

        Ok(Square(value))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            (self.file() + b'a') as char,
            (self.rank() + b'1') as char
        )
    }
}

// Move flag bits. Capture and promotion can combine with each other and
// with en passant / double push; the castle flags stand alone.
pub const FLAG_CAPTURE: u8 = 1 << 0;
pub const FLAG_EN_PASSANT: u8 = 1 << 1;
pub const FLAG_DOUBLE_PUSH: u8 = 1 << 2;
pub const FLAG_CASTLE_KINGSIDE: u8 = 1 << 3;
pub const FLAG_CASTLE_QUEENSIDE: u8 = 1 << 4;
pub const FLAG_PROMOTION: u8 = 1 << 5;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub piece: Piece,
    pub side: Side,
    pub capture: Option<Piece>,
    pub flags: u8,
    /// Resolved after the fact from the piece physically placed on the
    /// promotion square. `None` means undetermined; applying such a move
    /// promotes to a queen.
    pub promote: Option<Piece>,
}

impl Move {
    pub const fn is_capture(&self) -> bool {
        self.flags & FLAG_CAPTURE != 0
    }

    pub const fn is_promotion(&self) -> bool {
        self.flags & FLAG_PROMOTION != 0
    }

    pub const fn is_castle(&self) -> bool {
        self.flags & (FLAG_CASTLE_KINGSIDE | FLAG_CASTLE_QUEENSIDE) != 0
    }

    /// Coordinate form, e.g. "e2e4" or "e7e8q".
    pub fn coordinate_text(&self) -> String {
        let mut text = format!("{}{}", self.from, self.to);

        if self.is_promotion() {
            text.push(
                self.promote
                    .unwrap_or(Piece::Queen)
                    .letter()
                    .to_ascii_lowercase(),
            );
        }

        text
    }
}

/// Pre-move state needed to invert one applied move. The board itself is
/// restored structurally from the move's flags, never from a snapshot.
#[derive(Copy, Clone, Debug)]
pub struct HistoryEntry {
    pub mv: Move,
    pub castle: u8,
    pub en_passant: Option<Square>,
    pub fifty: u8,
    pub fullmove: u16,
}

/// Owned move collection for one generation call. Uniqueness key is the
/// `(from, to)` pair: a second push with the same pair is a no-op, which
/// collapses the four promotion choices into a single entry.
#[derive(Debug, Default, Clone)]
pub struct MoveList {
    moves: Vec<Move>,
}

impl MoveList {
    pub fn new() -> Self {
        Self { moves: Vec::new() }
    }

    pub fn push(&mut self, mv: Move) {
        if self.find(mv.from, mv.to).is_some() {
            return;
        }

        self.moves.push(mv);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn find(&self, from: Square, to: Square) -> Option<&Move> {
        self.moves.iter().find(|mv| mv.from == from && mv.to == to)
    }

    pub fn destinations_from(&self, from: Square) -> Vec<Square> {
        self.moves
            .iter()
            .filter(|mv| mv.from == from)
            .map(|mv| mv.to)
            .collect()
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_roundtrip_and_offboard() {
        let e4 = Square::from_algebraic("e4").unwrap();
        assert_eq!(e4.file(), 4);
        assert_eq!(e4.rank(), 3);
        assert_eq!(e4.to_string(), "e4");

        let h1 = Square::from_algebraic("h1").unwrap();
        assert_eq!(h1.offset(1), None);
        assert_eq!(h1.offset(16), Some(Square::from_algebraic("h2").unwrap()));

        assert!(Square::from_algebraic("i3").is_err());
        assert!(Square::from_algebraic("a9").is_err());
        assert!(Square::from_algebraic("e44").is_err());
    }

    #[test]
    fn move_list_deduplicates_by_from_to() {
        let from = Square::from_algebraic("a7").unwrap();
        let to = Square::from_algebraic("a8").unwrap();

        let template = Move {
            from,
            to,
            piece: Piece::Pawn,
            side: Side::White,
            capture: None,
            flags: FLAG_PROMOTION,
            promote: None,
        };

        let mut list = MoveList::new();
        list.push(template);
        list.push(Move {
            promote: Some(Piece::Knight),
            ..template
        });

        assert_eq!(list.len(), 1);
        assert_eq!(list.find(from, to).unwrap().promote, None);
    }

    #[test]
    fn coordinate_text_includes_promotion_letter() {
        let mv = Move {
            from: Square::from_algebraic("e7").unwrap(),
            to: Square::from_algebraic("e8").unwrap(),
            piece: Piece::Pawn,
            side: Side::White,
            capture: None,
            flags: FLAG_PROMOTION,
            promote: Some(Piece::Rook),
        };

        assert_eq!(mv.coordinate_text(), "e7e8r");
    }
}
