pub const BOARD_SLOTS: usize = 128;
pub const SCAN_SQUARES: usize = 64;
pub const NUM_SIDES: usize = 2;

pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// How long a changed sensor layout must hold steady before a matching
/// move is confirmed, in milliseconds.
pub const SETTLE_DELAY_MS: u64 = 780;

// 0x88 deltas. A rank is 16 slots wide, so "up one rank" is +16.
pub const KNIGHT_OFFSETS: [i32; 8] = [-33, -31, -18, -14, 14, 18, 31, 33];
pub const KING_OFFSETS: [i32; 8] = [-17, -16, -15, -1, 1, 15, 16, 17];
pub const BISHOP_DIRECTIONS: [i32; 4] = [-17, -15, 15, 17];
pub const ROOK_DIRECTIONS: [i32; 4] = [-16, -1, 1, 16];
pub const QUEEN_DIRECTIONS: [i32; 8] = [-17, -16, -15, -1, 1, 15, 16, 17];

/// Single push delta per side (index by `Side::index()`).
pub const PAWN_PUSH: [i32; NUM_SIDES] = [16, -16];
/// Diagonal capture deltas per side.
pub const PAWN_CAPTURE_OFFSETS: [[i32; 2]; NUM_SIDES] = [[15, 17], [-15, -17]];

// Attack lookup table geometry. Indexed by `to - from + ATTACK_TABLE_CENTER`
// where the 0x88 difference range is -119..=119.
pub const ATTACK_TABLE_SIZE: usize = 240;
pub const ATTACK_TABLE_CENTER: i32 = 0x77;

// Bit classes stored per table entry.
pub const ATTACK_PAWN: u8 = 1 << 0;
pub const ATTACK_KNIGHT: u8 = 1 << 1;
pub const ATTACK_BISHOP: u8 = 1 << 2;
pub const ATTACK_ROOK: u8 = 1 << 3;
pub const ATTACK_KING: u8 = 1 << 4;

// Castling permission bits.
pub const CASTLE_WHITE_KINGSIDE: u8 = 1;
pub const CASTLE_WHITE_QUEENSIDE: u8 = 2;
pub const CASTLE_BLACK_KINGSIDE: u8 = 4;
pub const CASTLE_BLACK_QUEENSIDE: u8 = 8;
pub const CASTLE_ALL: u8 = 15;

/// Rights surviving a move are `castle & CASTLE_MASK[from] & CASTLE_MASK[to]`,
/// so leaving or capturing on a king/rook home square clears the right
/// without tracking which piece moved. Rank 1 is the bottom row.
#[rustfmt::skip]
pub const CASTLE_MASK: [u8; BOARD_SLOTS] = [
    13, 15, 15, 15, 12, 15, 15, 14,   15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15,   15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15,   15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15,   15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15,   15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15,   15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15,   15, 15, 15, 15, 15, 15, 15, 15,
     7, 15, 15, 15,  3, 15, 15, 11,   15, 15, 15, 15, 15, 15, 15, 15,
];

/// Starting layout, piece codes per `Piece as u8` with 6 = empty. Rank 1 is
/// the bottom row; the right half of each row is the off-board gutter.
#[rustfmt::skip]
pub const INIT_BOARD: [u8; BOARD_SLOTS] = [
    3, 1, 2, 4, 5, 2, 1, 3,   6, 6, 6, 6, 6, 6, 6, 6,
    0, 0, 0, 0, 0, 0, 0, 0,   6, 6, 6, 6, 6, 6, 6, 6,
    6, 6, 6, 6, 6, 6, 6, 6,   6, 6, 6, 6, 6, 6, 6, 6,
    6, 6, 6, 6, 6, 6, 6, 6,   6, 6, 6, 6, 6, 6, 6, 6,
    6, 6, 6, 6, 6, 6, 6, 6,   6, 6, 6, 6, 6, 6, 6, 6,
    6, 6, 6, 6, 6, 6, 6, 6,   6, 6, 6, 6, 6, 6, 6, 6,
    0, 0, 0, 0, 0, 0, 0, 0,   6, 6, 6, 6, 6, 6, 6, 6,
    3, 1, 2, 4, 5, 2, 1, 3,   6, 6, 6, 6, 6, 6, 6, 6,
];

/// Starting colors, `Side as u8` with 2 = none.
#[rustfmt::skip]
pub const INIT_COLOR: [u8; BOARD_SLOTS] = [
    0, 0, 0, 0, 0, 0, 0, 0,   2, 2, 2, 2, 2, 2, 2, 2,
    0, 0, 0, 0, 0, 0, 0, 0,   2, 2, 2, 2, 2, 2, 2, 2,
    2, 2, 2, 2, 2, 2, 2, 2,   2, 2, 2, 2, 2, 2, 2, 2,
    2, 2, 2, 2, 2, 2, 2, 2,   2, 2, 2, 2, 2, 2, 2, 2,
    2, 2, 2, 2, 2, 2, 2, 2,   2, 2, 2, 2, 2, 2, 2, 2,
    2, 2, 2, 2, 2, 2, 2, 2,   2, 2, 2, 2, 2, 2, 2, 2,
    1, 1, 1, 1, 1, 1, 1, 1,   2, 2, 2, 2, 2, 2, 2, 2,
    1, 1, 1, 1, 1, 1, 1, 1,   2, 2, 2, 2, 2, 2, 2, 2,
];
