use crate::constants::SCAN_SQUARES;
use crate::position::Position;
use crate::types::{PlacedPiece, Square};

/// One hardware snapshot of the 64 squares: what piece, if any, the sensors
/// report on each. Ordered a8..h8, a7..h7, down to a1..h1, matching the
/// scan order of the sensor matrix.
pub type SensorScan = [Option<PlacedPiece>; SCAN_SQUARES];

/// Scan slot for a board square.
pub fn scan_index(square: Square) -> usize {
    ((7 - square.rank()) * 8 + square.file()) as usize
}

/// Board square for a scan slot (0-63).
pub fn scan_square(index: usize) -> Square {
    debug_assert!(index < SCAN_SQUARES);
    Square::from_file_rank((index % 8) as u8, 7 - (index / 8) as u8)
}

/// What an ideal sensor pass over `position` would report.
pub fn capture_scan(position: &Position) -> SensorScan {
    let mut scan = [None; SCAN_SQUARES];

    for square in Square::iter() {
        scan[scan_index(square)] = position.board[square.index()];
    }

    scan
}

/// The standard starting layout as a scan.
pub fn standard_scan() -> SensorScan {
    capture_scan(&Position::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Piece, Side};

    #[test]
    fn scan_indexing_is_a8_first_row_major() {
        let a8 = Square::from_algebraic("a8").unwrap();
        let h1 = Square::from_algebraic("h1").unwrap();
        let e4 = Square::from_algebraic("e4").unwrap();

        assert_eq!(scan_index(a8), 0);
        assert_eq!(scan_index(h1), 63);
        assert_eq!(scan_square(scan_index(e4)), e4);
    }

    #[test]
    fn standard_scan_matches_start_layout() {
        let scan = standard_scan();

        assert_eq!(
            scan[0],
            Some(PlacedPiece::new(Side::Black, Piece::Rook)),
            "a8 holds the black queenside rook"
        );
        assert_eq!(
            scan[60],
            Some(PlacedPiece::new(Side::White, Piece::King)),
            "e1 holds the white king"
        );
        assert_eq!(scan[32], None, "a4 starts empty");
    }
}
