use crate::engine::eval::evaluate;
use crate::engine::search::{select_move, SearchLimits};
use shakmaty::{fen::Fen, uci::UciMove, CastlingMode, Chess, Position};
use std::io::{self, BufRead, Write};
use vampirc_uci::uci::UciTimeControl;
use vampirc_uci::{parser, UciMessage};

pub struct UCI {
    pub board: Chess,
}

impl UCI {
    pub fn new() -> Self {
        UCI {
            board: Chess::default(),
        }
    }

    pub fn run(&mut self) {
        let stdin = io::stdin();
        let mut stdout = io::stdout();

        for line in stdin.lock().lines() {
            let line = match line {
                Ok(l) => l,
                Err(_) => break,
            };
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let msg = parser::parse_one(line);
            match msg {
                UciMessage::Uci => self.cmd_uci(&mut stdout),
                UciMessage::IsReady => writeln!(stdout, "readyok").unwrap(),
                UciMessage::UciNewGame => self.board = Chess::default(),
                UciMessage::Position {
                    startpos,
                    fen,
                    moves,
                } => {
                    let fen_str = fen.as_ref().map(|f| f.as_str());
                    let move_strs: Vec<String> = moves.iter().map(|m| m.to_string()).collect();
                    let refs: Vec<&str> = move_strs.iter().map(String::as_str).collect();
                    self.apply_position(startpos, fen_str, &refs);
                }
                UciMessage::Go { time_control, .. } => {
                    let limits = go_to_limits(time_control.as_ref());
                    self.do_go(&limits, &mut stdout);
                }
                // The search runs to completion on its own; nothing to stop.
                UciMessage::Stop => {}
                UciMessage::Quit => break,
                UciMessage::Unknown(ref s, _) => {
                    let parts: Vec<&str> = s.split_whitespace().collect();
                    if let Some(&first) = parts.first() {
                        match first {
                            "d" | "display" => self.cmd_display(&mut stdout),
                            "eval" => self.cmd_eval(&mut stdout),
                            _ => {}
                        }
                    }
                }
                _ => {}
            }
            stdout.flush().unwrap();
        }
    }

    fn cmd_uci(&self, stdout: &mut io::Stdout) {
        writeln!(stdout, "id name WunderChess 0.1.0").unwrap();
        writeln!(stdout, "id author WunderChess Team").unwrap();
        writeln!(stdout, "uciok").unwrap();
    }

    /// Apply position from parsed UCI.
    fn apply_position(&mut self, startpos: bool, fen: Option<&str>, move_strs: &[&str]) {
        if startpos {
            self.board = Chess::default();
        } else if let Some(fen_str) = fen {
            if let Ok(f) = fen_str.parse::<Fen>() {
                if let Ok(pos) = f.into_position::<Chess>(CastlingMode::Standard) {
                    self.board = pos;
                }
            }
        }

        for &s in move_strs {
            if let Some(mv) = self.parse_move(s) {
                self.board = self.board.clone().play(&mv).unwrap();
            }
        }
    }

    pub fn parse_move(&self, move_str: &str) -> Option<shakmaty::Move> {
        let uci: UciMove = move_str.parse().ok()?;
        let mv = uci.to_move(&self.board).ok()?;
        if self.board.is_legal(&mv) {
            Some(mv)
        } else {
            None
        }
    }

    /// Run the fixed-depth search and output bestmove.
    fn do_go(&mut self, limits: &SearchLimits, stdout: &mut io::Stdout) {
        if let Some(mv) = select_move(&self.board, limits) {
            writeln!(stdout, "bestmove {}", mv.to_uci(CastlingMode::Standard)).unwrap();
        } else {
            writeln!(stdout, "bestmove 0000").unwrap();
        }
    }

    fn cmd_display(&self, stdout: &mut io::Stdout) {
        writeln!(stdout, "\n{:?}", self.board).unwrap();
    }

    fn cmd_eval(&self, stdout: &mut io::Stdout) {
        let score = evaluate(&self.board);
        writeln!(stdout, "Evaluation: {} (positive favors Black)", score).unwrap();
    }
}

/// Build SearchLimits from a vampirc-parsed go command. Everything here is
/// informational to the engine; the search depth is fixed.
fn go_to_limits(time_control: Option<&UciTimeControl>) -> SearchLimits {
    let mut limits = SearchLimits::default();

    if let Some(tc) = time_control {
        match tc {
            UciTimeControl::Ponder => limits.ponder = true,
            UciTimeControl::Infinite => limits.infinite = true,
            UciTimeControl::MoveTime(d) => {
                limits.movetime = Some(duration_to_millis(d));
            }
            UciTimeControl::TimeLeft {
                white_time,
                black_time,
                white_increment,
                black_increment,
                ..
            } => {
                limits.wtime = white_time.as_ref().map(duration_to_millis);
                limits.btime = black_time.as_ref().map(duration_to_millis);
                limits.winc = white_increment.as_ref().map(duration_to_millis);
                limits.binc = black_increment.as_ref().map(duration_to_millis);
            }
        }
    }

    limits
}

fn duration_to_millis(d: &vampirc_uci::Duration) -> u64 {
    d.num_milliseconds().max(0) as u64
}

impl Default for UCI {
    fn default() -> Self {
        Self::new()
    }
}
