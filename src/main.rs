use std::io::{self, BufRead, Write};

use sensorboard_chess::constants::SETTLE_DELAY_MS;
use sensorboard_chess::notation;
use sensorboard_chess::position::Position;
use sensorboard_chess::reconcile::Reconciliation;
use sensorboard_chess::sensor;
use sensorboard_chess::session::{GameSession, SessionConfig};
use sensorboard_chess::types::Square;

/// Interactive driver that stands in for the physical board: typed moves
/// are turned into sensor scans and ticked through the session, including
/// the post-settle confirmation tick.
struct BoardDriver {
    session: GameSession,
    clock_ms: u64,
}

impl BoardDriver {
    fn new() -> Self {
        Self {
            session: GameSession::new(SessionConfig::default()),
            clock_ms: 0,
        }
    }

    fn position(&self) -> Result<Position, String> {
        Position::from_fen(&self.session.fen())
    }

    fn play_move(&mut self, text: &str) -> Result<(), String> {
        let (from, to, promote) = notation::parse_coordinate_move(text)?;
        let mut scratch = self.position()?;
        let moves = scratch.generate_moves();

        let mut mv = *moves
            .find(from, to)
            .ok_or_else(|| format!("Illegal move: {text}"))?;

        if promote.is_some() {
            mv.promote = promote;
        }

        scratch.make_move(&mv);
        let scan = sensor::capture_scan(&scratch);

        // First tick registers the layout change, second one lands after
        // the settle delay.
        self.clock_ms += 50;
        self.session.step_at(&scan, self.clock_ms);
        self.clock_ms += SETTLE_DELAY_MS + 1;

        match self.session.step_at(&scan, self.clock_ms) {
            Reconciliation::Confirmed { mv, .. } => {
                println!("confirmed {}", mv.coordinate_text());
                Ok(())
            }
            other => Err(format!("move not confirmed: {other:?}")),
        }
    }

    fn lift(&mut self, text: &str) -> Result<(), String> {
        let square = Square::from_algebraic(text)?;
        let scratch = self.position()?;
        let mut scan = sensor::capture_scan(&scratch);
        let index = sensor::scan_index(square);

        if scan[index].is_none() {
            return Err(format!("No piece on {square}"));
        }

        scan[index] = None;
        self.clock_ms += 50;

        match self.session.step_at(&scan, self.clock_ms) {
            Reconciliation::LiftHint { from, destinations } => {
                let targets: Vec<String> =
                    destinations.iter().map(ToString::to_string).collect();
                println!("{from} can reach: {}", targets.join(" "));
            }
            other => println!("no hint: {other:?}"),
        }

        // Put the piece back down.
        let restored = sensor::capture_scan(&scratch);
        self.clock_ms += 50;
        self.session.step_at(&restored, self.clock_ms);

        Ok(())
    }
}

fn show_help() {
    println!("Commands:");
    println!("  help          - show this help");
    println!("  board         - display the board");
    println!("  fen           - print the position as FEN");
    println!("  moves         - list legal moves in coordinate form");
    println!("  san           - print the numbered move list");
    println!("  move <m>      - place a move on the board, e.g. 'move e2e4' or 'move e7e8r'");
    println!("  queue <m>     - announce a remote move; the next matching scan confirms instantly");
    println!("  lift <square> - lift a piece and show where it may go");
    println!("  undo          - take back the last move");
    println!("  new           - start a fresh standard game");
    println!("  quit          - exit");
}

fn main() {
    let mut driver = BoardDriver::new();

    println!("sensorboard-chess driver; 'help' lists commands");

    let stdin = io::stdin();

    loop {
        print!("> ");
        io::stdout().flush().ok();

        let mut line = String::new();

        if stdin.lock().read_line(&mut line).unwrap_or(0) == 0 {
            break;
        }

        let mut parts = line.split_whitespace();

        let Some(command) = parts.next() else {
            continue;
        };

        let argument = parts.next();

        let result = match (command, argument) {
            ("help", _) => {
                show_help();
                Ok(())
            }
            ("board", _) => driver.position().map(|position| position.display_board()),
            ("fen", _) => {
                println!("{}", driver.session.fen());
                Ok(())
            }
            ("moves", _) => {
                println!("{}", driver.session.legal_move_texts().join(" "));
                Ok(())
            }
            ("san", _) => {
                println!("{}", driver.session.move_list_text());
                Ok(())
            }
            ("move", Some(text)) => driver.play_move(text),
            ("queue", Some(text)) => driver.session.queue_move(text),
            ("lift", Some(text)) => driver.lift(text),
            ("undo", _) => match driver.session.take_back() {
                Some(text) => {
                    println!("took back {text}");
                    Ok(())
                }
                None => Err("nothing to undo".to_string()),
            },
            ("new", _) => driver.session.start(&sensor::standard_scan()),
            ("quit" | "exit", _) => break,
            _ => Err(format!("Unknown command: {command}")),
        };

        if let Err(message) = result {
            eprintln!("error: {message}");
        }
    }
}
