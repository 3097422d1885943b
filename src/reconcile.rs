use crate::constants::SCAN_SQUARES;
use crate::position::Position;
use crate::sensor::{self, SensorScan};
use crate::types::{Move, MoveList, Piece, Square};

/// Outcome of reconciling one sensor snapshot against the game state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reconciliation {
    /// The scan equals the last confirmed layout; nothing happened.
    Unchanged,
    /// The scan proves a legal move was completed. `rolled_back` marks a
    /// confirmation that replaced the previously applied ply.
    Confirmed { mv: Move, rolled_back: bool },
    /// Exactly one piece was picked up; `destinations` are its legal
    /// arrival squares (possibly none, for a pinned piece).
    LiftHint {
        from: Square,
        destinations: Vec<Square>,
    },
    /// The scan matches nothing actionable yet: a move still settling, a
    /// piece mid-air over a capture, or a layout the rules cannot explain.
    NoMatch,
}

/// Reconciles a sensor snapshot with the position. `confirmed_layout` is
/// the scan of the last confirmed state, `since_last_change_ms` how long
/// the snapshot has been stable, and `pending` an operator-announced
/// `(from, to)` that confirms without waiting out the settle delay.
///
/// The position is only mutated transiently; on every path it returns in
/// the state it was given, except a rolled-back confirmation, which leaves
/// the superseded ply undone so the caller can apply the replacement.
pub fn reconcile(
    position: &mut Position,
    confirmed_layout: &SensorScan,
    scan: &SensorScan,
    legal_moves: &MoveList,
    since_last_change_ms: u64,
    pending: Option<(Square, Square)>,
    settle_delay_ms: u64,
) -> Reconciliation {
    if scan == confirmed_layout {
        return Reconciliation::Unchanged;
    }

    let settled =
        |mv: &Move| since_last_change_ms >= settle_delay_ms || pending == Some((mv.from, mv.to));

    if let Some(mv) = find_matching_move(position, scan, legal_moves) {
        if settled(&mv) {
            return Reconciliation::Confirmed {
                mv,
                rolled_back: false,
            };
        }

        // A full match that has not settled is deliberately not reported
        // as a lift: the player may still be adjusting.
        return Reconciliation::NoMatch;
    }

    let current = sensor::capture_scan(position);
    let mut vacated = None;
    let mut vacated_count = 0;
    let mut other_diffs = 0;

    for index in 0..SCAN_SQUARES {
        match (current[index], scan[index]) {
            (Some(_), None) => {
                vacated = Some(sensor::scan_square(index));
                vacated_count += 1;
            }
            (was, now) if was != now => other_diffs += 1,
            _ => {}
        }
    }

    if vacated_count == 1 && other_diffs == 0 {
        if let Some(from) = vacated {
            return Reconciliation::LiftHint {
                from,
                destinations: legal_moves.destinations_from(from),
            };
        }
    }

    // The scan may reflect a move played from the *previous* position: the
    // last confirmation raced a piece still in motion. Rewind one ply and
    // retry; put the ply back if that explains nothing either.
    if let Some(undone) = position.take_back_move() {
        let earlier_moves = position.generate_moves();

        match find_matching_move(position, scan, &earlier_moves) {
            Some(mv) if settled(&mv) => {
                return Reconciliation::Confirmed {
                    mv,
                    rolled_back: true,
                };
            }
            // A revision of the previous move that is still settling.
            Some(_) => {
                position.make_move(&undone);
            }
            None => {
                position.make_move(&undone);
                eprintln!(
                    "warning: scan matches neither the current position nor a revision of the previous move"
                );
            }
        }
    }

    Reconciliation::NoMatch
}

/// Trial-applies each legal move and returns the one whose resulting board
/// equals the scan, with the promotion choice resolved from the sensed
/// piece. The position is unchanged on return.
fn find_matching_move(
    position: &mut Position,
    scan: &SensorScan,
    legal_moves: &MoveList,
) -> Option<Move> {
    for mv in legal_moves.iter() {
        position.make_move(mv);
        let matched = scan_matches(position, scan, mv);
        position.take_back_move();

        if let Some(promote) = matched {
            let mut confirmed = *mv;

            if confirmed.is_promotion() {
                confirmed.promote = Some(promote.unwrap_or(Piece::Queen));
            }

            return Some(confirmed);
        }
    }

    None
}

/// Compares the scan against the applied position. `Some(piece)` carries
/// the sensed piece on a promotion square; a promotion square accepts any
/// non-pawn piece of either color, since the generator collapsed the
/// choice of promotion piece and players stand in whatever spare piece is
/// at hand. The promoted piece always takes the mover's color.
fn scan_matches(position: &Position, scan: &SensorScan, mv: &Move) -> Option<Option<Piece>> {
    let mut promoted = None;

    for index in 0..SCAN_SQUARES {
        let square = sensor::scan_square(index);

        if mv.is_promotion() && square == mv.to {
            match scan[index] {
                Some(sensed) if sensed.piece != Piece::Pawn => {
                    promoted = Some(sensed.piece);
                }
                _ => return None,
            }
        } else if scan[index] != position.board[square.index()] {
            return None;
        }
    }

    Some(promoted)
}
