use crate::constants::{
    ATTACK_BISHOP, ATTACK_KING, ATTACK_KNIGHT, ATTACK_PAWN, ATTACK_ROOK, ATTACK_TABLE_CENTER,
    ATTACK_TABLE_SIZE, BISHOP_DIRECTIONS, BOARD_SLOTS, CASTLE_ALL, CASTLE_BLACK_KINGSIDE,
    CASTLE_BLACK_QUEENSIDE, CASTLE_MASK, CASTLE_WHITE_KINGSIDE, CASTLE_WHITE_QUEENSIDE,
    INIT_BOARD, INIT_COLOR, KING_OFFSETS, KNIGHT_OFFSETS, NUM_SIDES, PAWN_CAPTURE_OFFSETS,
    PAWN_PUSH, QUEEN_DIRECTIONS, ROOK_DIRECTIONS,
};
use crate::sensor::{self, SensorScan};
use crate::types::{
    FLAG_CAPTURE, FLAG_CASTLE_KINGSIDE, FLAG_CASTLE_QUEENSIDE, FLAG_DOUBLE_PUSH, FLAG_EN_PASSANT,
    FLAG_PROMOTION, HistoryEntry, Move, MoveList, Piece, PlacedPiece, Side, Square,
};

/// Canonical game state: a 0x88 mailbox plus the side to move, castling
/// rights, en-passant target, clocks and the undo history.
#[derive(Clone)]
pub struct Position {
    // DYNAMIC - game state that changes as moves are applied
    pub board: [Option<PlacedPiece>; BOARD_SLOTS],
    pub side: Side,
    /// Bit 1/2 = white kingside/queenside, bit 4/8 = black.
    pub castle: u8,
    /// Square a pawn would land on capturing en passant, set only for the
    /// single ply after a double push.
    pub en_passant: Option<Square>,
    pub fifty: u8,
    pub fullmove: u16,
    /// Whether the starting layout passed structural validation.
    pub valid: bool,
    king_square: [Square; NUM_SIDES],
    history: Vec<HistoryEntry>,

    // STATIC - lookup tables computed once at construction
    attack_table: [u8; ATTACK_TABLE_SIZE],
    ray_table: [i8; ATTACK_TABLE_SIZE],
}

impl Position {
    /// The standard starting position.
    pub fn new() -> Self {
        let mut board = [None; BOARD_SLOTS];

        for square in Square::iter() {
            let index = square.index();

            if INIT_COLOR[index] > 1 {
                continue;
            }

            let side = if INIT_COLOR[index] == 0 {
                Side::White
            } else {
                Side::Black
            };

            let piece =
                Piece::try_from(INIT_BOARD[index]).expect("starting layout piece code in range");

            board[index] = Some(PlacedPiece::new(side, piece));
        }

        let mut position = Self::with_board(board).expect("starting layout has both kings");
        position.castle = CASTLE_ALL;

        position
    }

    /// Builds a position from an arbitrary board. White to move, full
    /// rights, clocks reset; callers adjust the fields afterwards. Errors
    /// when a side has no king, since attack detection and the legality
    /// filter need a king square for each side.
    fn with_board(board: [Option<PlacedPiece>; BOARD_SLOTS]) -> Result<Self, String> {
        let mut kings: [Option<Square>; NUM_SIDES] = [None, None];

        for square in Square::iter() {
            if let Some(placed) = board[square.index()] {
                if placed.piece == Piece::King && kings[placed.side.index()].is_none() {
                    kings[placed.side.index()] = Some(square);
                }
            }
        }

        let king_square = [
            kings[Side::White.index()].ok_or("No white king on the board")?,
            kings[Side::Black.index()].ok_or("No black king on the board")?,
        ];

        let (attack_table, ray_table) = Self::build_attack_tables();

        Ok(Self {
            board,
            side: Side::White,
            castle: 0,
            en_passant: None,
            fifty: 0,
            fullmove: 1,
            valid: true,
            king_square,
            history: Vec::new(),
            attack_table,
            ray_table,
        })
    }

    /// Builds a position from a physical sensor snapshot. Castling rights
    /// are derived from home-square occupancy; the snapshot carries no
    /// side-to-move information, so White moves first.
    pub fn from_scan(scan: &SensorScan) -> Result<Self, String> {
        let mut board = [None; BOARD_SLOTS];

        for (index, sensed) in scan.iter().enumerate() {
            board[sensor::scan_square(index).index()] = *sensed;
        }

        let mut position = Self::with_board(board)?;
        position.derive_castling_rights();

        Ok(position)
    }

    pub fn from_fen(fen: &str) -> Result<Self, String> {
        let fields: Vec<&str> = fen.split_whitespace().collect();

        if fields.len() < 4 {
            return Err(format!("FEN must have at least 4 fields: {fen}"));
        }

        let ranks: Vec<&str> = fields[0].split('/').collect();

        if ranks.len() != 8 {
            return Err(format!("FEN board must have 8 ranks: {}", fields[0]));
        }

        let mut board = [None; BOARD_SLOTS];

        for (row, text) in ranks.iter().enumerate() {
            let rank = 7 - row as u8;
            let mut file = 0u8;

            for c in text.chars() {
                if let Some(skip) = c.to_digit(10) {
                    file += skip as u8;
                } else if let Some(placed) = Piece::from_fen_char(c) {
                    if file > 7 {
                        return Err(format!("FEN rank overflows 8 files: {text}"));
                    }

                    board[Square::from_file_rank(file, rank).index()] = Some(placed);
                    file += 1;
                } else {
                    return Err(format!("Invalid FEN piece character: {c}"));
                }
            }

            if file != 8 {
                return Err(format!("FEN rank does not cover 8 files: {text}"));
            }
        }

        let mut position = Self::with_board(board)?;

        position.side = match fields[1] {
            "w" => Side::White,
            "b" => Side::Black,
            other => return Err(format!("Invalid FEN side to move: {other}")),
        };

        if fields[2] != "-" {
            for c in fields[2].chars() {
                position.castle |= match c {
                    'K' => CASTLE_WHITE_KINGSIDE,
                    'Q' => CASTLE_WHITE_QUEENSIDE,
                    'k' => CASTLE_BLACK_KINGSIDE,
                    'q' => CASTLE_BLACK_QUEENSIDE,
                    other => return Err(format!("Invalid FEN castling character: {other}")),
                };
            }
        }

        position.en_passant = if fields[3] == "-" {
            None
        } else {
            Some(Square::from_algebraic(fields[3])?)
        };

        if let Some(text) = fields.get(4) {
            position.fifty = text
                .parse()
                .map_err(|_| format!("Invalid FEN half-move clock: {text}"))?;
        }

        if let Some(text) = fields.get(5) {
            position.fullmove = text
                .parse()
                .map_err(|_| format!("Invalid FEN full-move number: {text}"))?;
        }

        position.valid = position.validate().is_empty();

        Ok(position)
    }

    pub fn to_fen(&self) -> String {
        let mut fen = String::new();

        for rank in (0..8).rev() {
            let mut empty = 0;

            for file in 0..8 {
                match self.board[Square::from_file_rank(file, rank).index()] {
                    Some(placed) => {
                        if empty > 0 {
                            fen.push_str(&empty.to_string());
                            empty = 0;
                        }

                        fen.push(placed.piece.fen_char(placed.side));
                    }
                    None => empty += 1,
                }
            }

            if empty > 0 {
                fen.push_str(&empty.to_string());
            }

            if rank > 0 {
                fen.push('/');
            }
        }

        fen.push(' ');
        fen.push(match self.side {
            Side::White => 'w',
            Side::Black => 'b',
        });

        fen.push(' ');
        if self.castle == 0 {
            fen.push('-');
        } else {
            for (bit, c) in [
                (CASTLE_WHITE_KINGSIDE, 'K'),
                (CASTLE_WHITE_QUEENSIDE, 'Q'),
                (CASTLE_BLACK_KINGSIDE, 'k'),
                (CASTLE_BLACK_QUEENSIDE, 'q'),
            ] {
                if self.castle & bit != 0 {
                    fen.push(c);
                }
            }
        }

        fen.push(' ');
        match self.en_passant {
            Some(square) => fen.push_str(&square.to_string()),
            None => fen.push('-'),
        }

        fen.push_str(&format!(" {} {}", self.fifty, self.fullmove));

        fen
    }

    /// Structural checks on the current layout. Every finding is a warning,
    /// not an error: physical boards hold whatever the player set up.
    pub fn validate(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        for side in [Side::White, Side::Black] {
            let kings = Square::iter()
                .filter(|square| {
                    self.board[square.index()] == Some(PlacedPiece::new(side, Piece::King))
                })
                .count();

            if kings != 1 {
                warnings.push(format!("expected exactly one {side} king, found {kings}"));
            }
        }

        for square in Square::iter() {
            if let Some(placed) = self.board[square.index()] {
                if placed.piece == Piece::Pawn && (square.rank() == 0 || square.rank() == 7) {
                    warnings.push(format!("{} pawn on back rank at {square}", placed.side));
                }
            }
        }

        warnings
    }

    /// Grants each castling right iff the king and the matching rook sit on
    /// their home squares. Used for layouts with no move history, where
    /// whether they ever moved is unknowable.
    pub fn derive_castling_rights(&mut self) {
        self.castle = 0;

        for (side, kingside_bit, queenside_bit) in [
            (Side::White, CASTLE_WHITE_KINGSIDE, CASTLE_WHITE_QUEENSIDE),
            (Side::Black, CASTLE_BLACK_KINGSIDE, CASTLE_BLACK_QUEENSIDE),
        ] {
            let rank = side.home_rank();
            let king = Some(PlacedPiece::new(side, Piece::King));
            let rook = Some(PlacedPiece::new(side, Piece::Rook));

            if self.board[Square::from_file_rank(4, rank).index()] != king {
                continue;
            }

            if self.board[Square::from_file_rank(7, rank).index()] == rook {
                self.castle |= kingside_bit;
            }

            if self.board[Square::from_file_rank(0, rank).index()] == rook {
                self.castle |= queenside_bit;
            }
        }
    }

    pub fn king_square(&self, side: Side) -> Square {
        self.king_square[side.index()]
    }

    pub fn ply_count(&self) -> usize {
        self.history.len()
    }

    pub fn in_check(&self, side: Side) -> bool {
        self.is_square_attacked_by_side(side.opponent(), self.king_square[side.index()])
    }

    /// Whether any piece of `side` attacks `square`. Candidate attackers
    /// are screened through the difference table; only slider hits walk
    /// the ray for blockers.
    pub fn is_square_attacked_by_side(&self, side: Side, square: Square) -> bool {
        for from in Square::iter() {
            let Some(placed) = self.board[from.index()] else {
                continue;
            };

            if placed.side != side {
                continue;
            }

            let diff = square.index() as i32 - from.index() as i32;
            let entry = self.attack_table[(diff + ATTACK_TABLE_CENTER) as usize];

            if entry == 0 {
                continue;
            }

            let hit = match placed.piece {
                Piece::Pawn => {
                    // The table holds both colors' capture deltas; the sign
                    // of the difference selects the right color.
                    entry & ATTACK_PAWN != 0
                        && match side {
                            Side::White => diff > 0,
                            Side::Black => diff < 0,
                        }
                }
                Piece::Knight => entry & ATTACK_KNIGHT != 0,
                Piece::King => entry & ATTACK_KING != 0,
                Piece::Bishop => entry & ATTACK_BISHOP != 0 && self.ray_clear(from, square, diff),
                Piece::Rook => entry & ATTACK_ROOK != 0 && self.ray_clear(from, square, diff),
                Piece::Queen => {
                    entry & (ATTACK_BISHOP | ATTACK_ROOK) != 0
                        && self.ray_clear(from, square, diff)
                }
            };

            if hit {
                return true;
            }
        }

        false
    }

    /// Walks from `from` toward `to` along the unit direction for `diff`,
    /// returning whether every square strictly between them is empty.
    fn ray_clear(&self, from: Square, to: Square, diff: i32) -> bool {
        let step = self.ray_table[(diff + ATTACK_TABLE_CENTER) as usize] as i32;
        let mut current = from.offset(step);

        while let Some(square) = current {
            if square == to {
                return true;
            }

            if self.board[square.index()].is_some() {
                return false;
            }

            current = square.offset(step);
        }

        false
    }

    /// All strictly legal moves for the side to move. Pseudo-legal moves
    /// are filtered by applying each one and rejecting those that leave
    /// the mover's king attacked; there is no separate pin detector.
    pub fn generate_moves(&mut self) -> MoveList {
        let side = self.side;
        let mut pseudo = MoveList::new();

        for from in Square::iter() {
            let Some(placed) = self.board[from.index()] else {
                continue;
            };

            if placed.side != side {
                continue;
            }

            match placed.piece {
                Piece::Pawn => self.collect_pawn_moves(from, side, &mut pseudo),
                Piece::Knight => {
                    self.collect_leaper_moves(from, side, Piece::Knight, &KNIGHT_OFFSETS, &mut pseudo)
                }
                Piece::King => {
                    self.collect_leaper_moves(from, side, Piece::King, &KING_OFFSETS, &mut pseudo)
                }
                Piece::Bishop => self.collect_slider_moves(
                    from,
                    side,
                    Piece::Bishop,
                    &BISHOP_DIRECTIONS,
                    &mut pseudo,
                ),
                Piece::Rook => {
                    self.collect_slider_moves(from, side, Piece::Rook, &ROOK_DIRECTIONS, &mut pseudo)
                }
                Piece::Queen => self.collect_slider_moves(
                    from,
                    side,
                    Piece::Queen,
                    &QUEEN_DIRECTIONS,
                    &mut pseudo,
                ),
            }
        }

        self.collect_castle_moves(side, &mut pseudo);

        let mut legal = MoveList::new();

        for mv in pseudo.iter() {
            self.make_move(mv);

            let safe =
                !self.is_square_attacked_by_side(side.opponent(), self.king_square[side.index()]);

            self.take_back_move();

            if safe {
                legal.push(*mv);
            }
        }

        legal
    }

    fn collect_pawn_moves(&self, from: Square, side: Side, list: &mut MoveList) {
        let forward = PAWN_PUSH[side.index()];

        if let Some(to) = from.offset(forward) {
            if self.board[to.index()].is_none() {
                let flags = if to.rank() == side.promotion_rank() {
                    FLAG_PROMOTION
                } else {
                    0
                };

                list.push(Move {
                    from,
                    to,
                    piece: Piece::Pawn,
                    side,
                    capture: None,
                    flags,
                    promote: None,
                });

                if from.rank() == side.pawn_start_rank() {
                    if let Some(two) = to.offset(forward) {
                        if self.board[two.index()].is_none() {
                            list.push(Move {
                                from,
                                to: two,
                                piece: Piece::Pawn,
                                side,
                                capture: None,
                                flags: FLAG_DOUBLE_PUSH,
                                promote: None,
                            });
                        }
                    }
                }
            }
        }

        for delta in PAWN_CAPTURE_OFFSETS[side.index()] {
            let Some(to) = from.offset(delta) else {
                continue;
            };

            if let Some(target) = self.board[to.index()] {
                if target.side != side {
                    let mut flags = FLAG_CAPTURE;

                    if to.rank() == side.promotion_rank() {
                        flags |= FLAG_PROMOTION;
                    }

                    list.push(Move {
                        from,
                        to,
                        piece: Piece::Pawn,
                        side,
                        capture: Some(target.piece),
                        flags,
                        promote: None,
                    });
                }
            } else if self.en_passant == Some(to) {
                list.push(Move {
                    from,
                    to,
                    piece: Piece::Pawn,
                    side,
                    capture: Some(Piece::Pawn),
                    flags: FLAG_CAPTURE | FLAG_EN_PASSANT,
                    promote: None,
                });
            }
        }
    }

    fn collect_leaper_moves(
        &self,
        from: Square,
        side: Side,
        piece: Piece,
        offsets: &[i32],
        list: &mut MoveList,
    ) {
        for &delta in offsets {
            let Some(to) = from.offset(delta) else {
                continue;
            };

            match self.board[to.index()] {
                None => list.push(Move {
                    from,
                    to,
                    piece,
                    side,
                    capture: None,
                    flags: 0,
                    promote: None,
                }),
                Some(target) if target.side != side => list.push(Move {
                    from,
                    to,
                    piece,
                    side,
                    capture: Some(target.piece),
                    flags: FLAG_CAPTURE,
                    promote: None,
                }),
                Some(_) => {}
            }
        }
    }

    fn collect_slider_moves(
        &self,
        from: Square,
        side: Side,
        piece: Piece,
        directions: &[i32],
        list: &mut MoveList,
    ) {
        for &direction in directions {
            let mut current = from.offset(direction);

            while let Some(to) = current {
                match self.board[to.index()] {
                    None => {
                        list.push(Move {
                            from,
                            to,
                            piece,
                            side,
                            capture: None,
                            flags: 0,
                            promote: None,
                        });

                        current = to.offset(direction);
                    }
                    Some(target) => {
                        if target.side != side {
                            list.push(Move {
                                from,
                                to,
                                piece,
                                side,
                                capture: Some(target.piece),
                                flags: FLAG_CAPTURE,
                                promote: None,
                            });
                        }

                        break;
                    }
                }
            }
        }
    }

    fn collect_castle_moves(&self, side: Side, list: &mut MoveList) {
        let (kingside_bit, queenside_bit) = match side {
            Side::White => (CASTLE_WHITE_KINGSIDE, CASTLE_WHITE_QUEENSIDE),
            Side::Black => (CASTLE_BLACK_KINGSIDE, CASTLE_BLACK_QUEENSIDE),
        };

        let rank = side.home_rank();
        let king_from = Square::from_file_rank(4, rank);

        // Rights bits can come from an arbitrary FEN, so re-check the king
        // and the matching rook are actually home before trusting them.
        if self.board[king_from.index()] != Some(PlacedPiece::new(side, Piece::King)) {
            return;
        }

        let rook = Some(PlacedPiece::new(side, Piece::Rook));
        let opponent = side.opponent();

        if self.castle & kingside_bit != 0
            && self.board[Square::from_file_rank(7, rank).index()] == rook
        {
            let f_file = Square::from_file_rank(5, rank);
            let g_file = Square::from_file_rank(6, rank);

            if self.board[f_file.index()].is_none()
                && self.board[g_file.index()].is_none()
                && !self.is_square_attacked_by_side(opponent, king_from)
                && !self.is_square_attacked_by_side(opponent, f_file)
                && !self.is_square_attacked_by_side(opponent, g_file)
            {
                list.push(Move {
                    from: king_from,
                    to: g_file,
                    piece: Piece::King,
                    side,
                    capture: None,
                    flags: FLAG_CASTLE_KINGSIDE,
                    promote: None,
                });
            }
        }

        if self.castle & queenside_bit != 0
            && self.board[Square::from_file_rank(0, rank).index()] == rook
        {
            let b_file = Square::from_file_rank(1, rank);
            let c_file = Square::from_file_rank(2, rank);
            let d_file = Square::from_file_rank(3, rank);

            if self.board[b_file.index()].is_none()
                && self.board[c_file.index()].is_none()
                && self.board[d_file.index()].is_none()
                && !self.is_square_attacked_by_side(opponent, king_from)
                && !self.is_square_attacked_by_side(opponent, d_file)
                && !self.is_square_attacked_by_side(opponent, c_file)
            {
                list.push(Move {
                    from: king_from,
                    to: c_file,
                    piece: Piece::King,
                    side,
                    capture: None,
                    flags: FLAG_CASTLE_QUEENSIDE,
                    promote: None,
                });
            }
        }
    }

    /// Applies a move and records the pre-move state for `take_back_move`.
    /// The move must come from `generate_moves` on this position.
    pub fn make_move(&mut self, mv: &Move) {
        self.history.push(HistoryEntry {
            mv: *mv,
            castle: self.castle,
            en_passant: self.en_passant,
            fifty: self.fifty,
            fullmove: self.fullmove,
        });

        let arriving = if mv.is_promotion() {
            PlacedPiece::new(mv.side, mv.promote.unwrap_or(Piece::Queen))
        } else {
            PlacedPiece::new(mv.side, mv.piece)
        };

        self.board[mv.from.index()] = None;
        self.board[mv.to.index()] = Some(arriving);

        let forward = PAWN_PUSH[mv.side.index()];

        if mv.flags & FLAG_EN_PASSANT != 0 {
            if let Some(taken) = mv.to.offset(-forward) {
                self.board[taken.index()] = None;
            }
        }

        let rank = mv.side.home_rank();

        if mv.flags & FLAG_CASTLE_KINGSIDE != 0 {
            let rook = self.board[Square::from_file_rank(7, rank).index()].take();
            self.board[Square::from_file_rank(5, rank).index()] = rook;
        } else if mv.flags & FLAG_CASTLE_QUEENSIDE != 0 {
            let rook = self.board[Square::from_file_rank(0, rank).index()].take();
            self.board[Square::from_file_rank(3, rank).index()] = rook;
        }

        if mv.piece == Piece::King {
            self.king_square[mv.side.index()] = mv.to;
        }

        self.castle &= CASTLE_MASK[mv.from.index()] & CASTLE_MASK[mv.to.index()];

        self.en_passant = if mv.flags & FLAG_DOUBLE_PUSH != 0 {
            mv.from.offset(forward)
        } else {
            None
        };

        if mv.piece == Piece::Pawn || mv.is_capture() {
            self.fifty = 0;
        } else {
            self.fifty = self.fifty.saturating_add(1);
        }

        if mv.side == Side::Black {
            self.fullmove += 1;
        }

        self.side = mv.side.opponent();
    }

    /// Rewinds the most recent move, restoring the board structurally and
    /// the counters from the history record. `None` when there is nothing
    /// to undo.
    pub fn take_back_move(&mut self) -> Option<Move> {
        let entry = self.history.pop()?;
        let mv = entry.mv;

        self.castle = entry.castle;
        self.en_passant = entry.en_passant;
        self.fifty = entry.fifty;
        self.fullmove = entry.fullmove;
        self.side = mv.side;

        // A promoted pawn reverts to a pawn on its origin square.
        self.board[mv.from.index()] = Some(PlacedPiece::new(mv.side, mv.piece));
        self.board[mv.to.index()] = None;

        if mv.flags & FLAG_EN_PASSANT != 0 {
            // The captured pawn sat behind the arrival square, which itself
            // stays empty.
            if let Some(taken) = mv.to.offset(-PAWN_PUSH[mv.side.index()]) {
                self.board[taken.index()] =
                    Some(PlacedPiece::new(mv.side.opponent(), Piece::Pawn));
            }
        } else if let Some(captured) = mv.capture {
            self.board[mv.to.index()] = Some(PlacedPiece::new(mv.side.opponent(), captured));
        }

        let rank = mv.side.home_rank();

        if mv.flags & FLAG_CASTLE_KINGSIDE != 0 {
            let rook = self.board[Square::from_file_rank(5, rank).index()].take();
            self.board[Square::from_file_rank(7, rank).index()] = rook;
        } else if mv.flags & FLAG_CASTLE_QUEENSIDE != 0 {
            let rook = self.board[Square::from_file_rank(3, rank).index()].take();
            self.board[Square::from_file_rank(0, rank).index()] = rook;
        }

        if mv.piece == Piece::King {
            self.king_square[mv.side.index()] = mv.from;
        }

        Some(mv)
    }

    pub fn display_board(&self) {
        println!();

        for rank in (0..8).rev() {
            print!("{} ", rank + 1);

            for file in 0..8 {
                match self.board[Square::from_file_rank(file, rank).index()] {
                    Some(placed) => print!(" {}", placed.piece.fen_char(placed.side)),
                    None => print!(" ."),
                }
            }

            println!();
        }

        println!("\n   a b c d e f g h\n");
    }

    fn build_attack_tables() -> ([u8; ATTACK_TABLE_SIZE], [i8; ATTACK_TABLE_SIZE]) {
        let mut attack = [0u8; ATTACK_TABLE_SIZE];
        let mut ray = [0i8; ATTACK_TABLE_SIZE];

        // Both colors' capture deltas live in the same entries; lookups
        // sign-check the difference against the attacker's color.
        for delta in [15, 17, -15, -17] {
            attack[(delta + ATTACK_TABLE_CENTER) as usize] |= ATTACK_PAWN;
        }

        for delta in KNIGHT_OFFSETS {
            attack[(delta + ATTACK_TABLE_CENTER) as usize] |= ATTACK_KNIGHT;
        }

        for delta in KING_OFFSETS {
            attack[(delta + ATTACK_TABLE_CENTER) as usize] |= ATTACK_KING;
        }

        for direction in BISHOP_DIRECTIONS {
            for distance in 1..8 {
                let index = (direction * distance + ATTACK_TABLE_CENTER) as usize;
                attack[index] |= ATTACK_BISHOP;
                ray[index] = direction as i8;
            }
        }

        for direction in ROOK_DIRECTIONS {
            for distance in 1..8 {
                let index = (direction * distance + ATTACK_TABLE_CENTER) as usize;
                attack[index] |= ATTACK_ROOK;
                ray[index] = direction as i8;
            }
        }

        (attack, ray)
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new()
    }
}
