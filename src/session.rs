use std::sync::{Mutex, MutexGuard};
use std::time::{SystemTime, UNIX_EPOCH};

#[cfg(feature = "api")]
use serde::{Deserialize, Serialize};

use crate::constants::SETTLE_DELAY_MS;
use crate::notation;
use crate::position::Position;
use crate::reconcile::{Reconciliation, reconcile};
use crate::sensor::{self, SensorScan};
use crate::types::{Move, MoveList, Side, Square};

/// Milliseconds since the Unix epoch.
fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock before Unix epoch")
        .as_millis() as u64
}

#[derive(Clone, Copy, Debug)]
pub struct SessionConfig {
    /// How long a changed layout must hold steady before a matching move
    /// confirms.
    pub settle_delay_ms: u64,
    /// Reject layouts with validation warnings instead of starting anyway.
    pub strict_validation: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            settle_delay_ms: SETTLE_DELAY_MS,
            strict_validation: false,
        }
    }
}

/// Everything a renderer needs to reflect the session state.
#[cfg_attr(feature = "api", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoardFeedback {
    pub side_to_move: Side,
    pub in_check: bool,
    pub last_move: Option<(Square, Square)>,
    pub pending_move: Option<(Square, Square)>,
}

struct SessionState {
    position: Position,
    legal_moves: MoveList,
    last_scan: SensorScan,
    confirmed_layout: SensorScan,
    last_change_ms: u64,
    last_move: Option<Move>,
    pending: Option<(Square, Square)>,
    san_history: Vec<String>,
    in_check: bool,
    valid: bool,
}

/// One live game against the physical board. All mutable state sits behind
/// a single mutex, so the sensor poll loop, the UI and a remote move feed
/// can share one session.
pub struct GameSession {
    config: SessionConfig,
    state: Mutex<SessionState>,
}

impl GameSession {
    /// A session on the standard starting position, ready to step.
    pub fn new(config: SessionConfig) -> Self {
        let mut position = Position::new();
        let legal_moves = position.generate_moves();
        let layout = sensor::capture_scan(&position);

        Self {
            config,
            state: Mutex::new(SessionState {
                position,
                legal_moves,
                last_scan: layout,
                confirmed_layout: layout,
                last_change_ms: 0,
                last_move: None,
                pending: None,
                san_history: Vec::new(),
                in_check: false,
                valid: true,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().expect("session state lock poisoned")
    }

    /// Starts a fresh game from a physical layout, standard or not.
    /// Validation findings are warnings: the game starts regardless (and
    /// `is_valid` reports false) unless `strict_validation` is set. The
    /// one hard error is a side with no king at all.
    pub fn start(&self, layout: &SensorScan) -> Result<(), String> {
        let mut position = Position::from_scan(layout)?;
        let warnings = position.validate();

        for warning in &warnings {
            eprintln!("warning: {warning}");
        }

        if self.config.strict_validation && !warnings.is_empty() {
            return Err(format!("layout failed validation: {}", warnings.join("; ")));
        }

        position.valid = warnings.is_empty();

        let legal_moves = position.generate_moves();
        let in_check = position.in_check(position.side);

        let mut state = self.lock();

        state.valid = position.valid;
        state.in_check = in_check;
        state.position = position;
        state.legal_moves = legal_moves;
        state.confirmed_layout = *layout;
        state.last_scan = *layout;
        state.last_change_ms = now_ms();
        state.last_move = None;
        state.pending = None;
        state.san_history.clear();

        Ok(())
    }

    /// Feeds one sensor snapshot using the wall clock.
    pub fn step(&self, scan: &SensorScan) -> Reconciliation {
        self.step_at(scan, now_ms())
    }

    /// Feeds one sensor snapshot at an explicit time. On a confirmation
    /// the move is applied, classified against the follow-up position and
    /// recorded in the SAN history.
    pub fn step_at(&self, scan: &SensorScan, now_ms: u64) -> Reconciliation {
        let mut state = self.lock();
        let state = &mut *state;

        if *scan != state.last_scan {
            state.last_change_ms = now_ms;
            state.last_scan = *scan;
        }

        let elapsed = now_ms.saturating_sub(state.last_change_ms);

        let outcome = reconcile(
            &mut state.position,
            &state.confirmed_layout,
            scan,
            &state.legal_moves,
            elapsed,
            state.pending,
            self.config.settle_delay_ms,
        );

        if let Reconciliation::Confirmed { mv, rolled_back } = &outcome {
            commit_move(state, mv, *rolled_back);
        }

        outcome
    }

    /// Announces a move arriving from outside the board (a remote player
    /// or an engine). A matching scan then confirms without waiting out
    /// the settle delay.
    pub fn queue_move(&self, text: &str) -> Result<(), String> {
        let (from, to, _) = notation::parse_coordinate_move(text)?;
        self.lock().pending = Some((from, to));
        Ok(())
    }

    /// Rewinds one confirmed ply, returning it in coordinate form.
    pub fn take_back(&self) -> Option<String> {
        let mut state = self.lock();
        let state = &mut *state;

        let mv = state.position.take_back_move()?;

        state.san_history.pop();
        state.legal_moves = state.position.generate_moves();
        state.in_check = state.position.in_check(state.position.side);
        state.confirmed_layout = sensor::capture_scan(&state.position);
        state.last_scan = state.confirmed_layout;
        state.last_move = None;
        state.pending = None;

        Some(mv.coordinate_text())
    }

    pub fn fen(&self) -> String {
        self.lock().position.to_fen()
    }

    pub fn side_to_move(&self) -> Side {
        self.lock().position.side
    }

    pub fn is_valid(&self) -> bool {
        self.lock().valid
    }

    pub fn last_move_text(&self) -> Option<String> {
        self.lock().last_move.map(|mv| mv.coordinate_text())
    }

    /// The numbered SAN move list, e.g. "1. e4 e5 2. Nf3".
    pub fn move_list_text(&self) -> String {
        notation::numbered_move_list(&self.lock().san_history)
    }

    /// Legal moves in coordinate form, for drivers and remote consumers.
    pub fn legal_move_texts(&self) -> Vec<String> {
        self.lock()
            .legal_moves
            .iter()
            .map(Move::coordinate_text)
            .collect()
    }

    pub fn feedback(&self) -> BoardFeedback {
        let state = self.lock();

        BoardFeedback {
            side_to_move: state.position.side,
            in_check: state.in_check,
            last_move: state.last_move.map(|mv| (mv.from, mv.to)),
            pending_move: state.pending,
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

/// Applies a confirmed move and refreshes every piece of derived state.
/// A rolled-back confirmation arrives with the superseded ply already
/// undone, so its SAN entry is dropped and the move list regenerated for
/// the encoder.
fn commit_move(state: &mut SessionState, mv: &Move, rolled_back: bool) {
    let pre_move_list = if rolled_back {
        state.san_history.pop();
        state.position.generate_moves()
    } else {
        std::mem::take(&mut state.legal_moves)
    };

    state.position.make_move(mv);

    let next_moves = state.position.generate_moves();
    let in_check = state.position.in_check(state.position.side);

    let mut san = notation::move_to_san(&pre_move_list, mv);

    if next_moves.is_empty() {
        if in_check {
            san.push('#');
        } else {
            san.push_str(" 1/2-1/2");
        }
    } else if in_check {
        san.push('+');
    }

    state.san_history.push(san);
    state.last_move = Some(*mv);

    if state.pending == Some((mv.from, mv.to)) {
        state.pending = None;
    }

    state.confirmed_layout = sensor::capture_scan(&state.position);
    state.last_scan = state.confirmed_layout;
    state.legal_moves = next_moves;
    state.in_check = in_check;
}
