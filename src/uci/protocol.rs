use std::io::{self, BufRead, Write};
use std::time::Instant;

use shakmaty::{CastlingMode, Color, Role};
use tracing::{debug, error, info, warn};
use vampirc_uci::{parser, UciMessage};

use crate::core::{perft, Position};
use crate::engine::{captured_pieces, evaluate_detailed, Searcher};
use crate::game::{Difficulty, GameStatus};

pub struct UCI {
    pub position: Position,
    searcher: Searcher,
    /// Depth used by `go` without an explicit depth (UCI option Difficulty).
    difficulty: Difficulty,
}

impl UCI {
    pub fn new(difficulty: Difficulty) -> Self {
        UCI {
            position: Position::startpos(),
            searcher: Searcher::new(),
            difficulty,
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn run(&mut self) -> io::Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.run_with(stdin.lock(), stdout.lock())
    }

    /// Process commands from `input` until `quit` or end of input.
    pub fn run_with<R: BufRead, W: Write>(&mut self, input: R, mut out: W) -> io::Result<()> {
        for line in input.lines() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let keep_going = self.handle_line(line, &mut out)?;
            out.flush()?;
            if !keep_going {
                break;
            }
        }
        Ok(())
    }

    /// Handle one command line. Returns `false` on `quit`.
    pub fn handle_line<W: Write>(&mut self, line: &str, out: &mut W) -> io::Result<bool> {
        let parts: Vec<&str> = line.split_whitespace().collect();
        match parts.first().copied() {
            Some("d") | Some("display") => {
                self.cmd_display(out)?;
                return Ok(true);
            }
            Some("eval") => {
                self.cmd_eval(out)?;
                return Ok(true);
            }
            Some("captured") => {
                self.cmd_captured(out)?;
                return Ok(true);
            }
            Some("status") => {
                self.cmd_status(out)?;
                return Ok(true);
            }
            Some("perft") => {
                self.cmd_perft(&parts, out)?;
                return Ok(true);
            }
            _ => {}
        }

        match parser::parse_one(line) {
            UciMessage::Uci => self.cmd_uci(out)?,
            UciMessage::IsReady => writeln!(out, "readyok")?,
            UciMessage::SetOption { name, value } => {
                self.apply_setoption(name.trim(), value.as_deref());
            }
            UciMessage::UciNewGame => self.cmd_ucinewgame(),
            UciMessage::Position { startpos, fen, moves } => {
                let fen_str = fen.as_ref().map(|f| f.as_str());
                let move_strs: Vec<String> = moves.iter().map(|m| m.to_string()).collect();
                self.apply_position(startpos, fen_str, &move_strs);
            }
            UciMessage::Go { search_control, .. } => {
                let depth = search_control
                    .as_ref()
                    .and_then(|sc| sc.depth)
                    .map(u32::from)
                    .unwrap_or_else(|| self.difficulty.depth());
                self.do_go(depth, out)?;
            }
            // Searches are short and run to completion.
            UciMessage::Stop => {}
            UciMessage::Quit => return Ok(false),
            _ => debug!(line, "ignoring command"),
        }
        Ok(true)
    }

    fn cmd_uci<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "id name Terminal Chess {}", env!("CARGO_PKG_VERSION"))?;
        writeln!(out, "id author Terminal Chess Team")?;
        writeln!(out)?;
        write!(out, "option name Difficulty type combo default {}", Difficulty::default())?;
        for level in Difficulty::ALL {
            write!(out, " var {}", level)?;
        }
        writeln!(out)?;
        writeln!(out, "uciok")
    }

    fn apply_setoption(&mut self, name: &str, value: Option<&str>) {
        let opt = name.to_lowercase().replace([' ', '_'], "");
        let value = value.unwrap_or("").trim();
        if opt == "difficulty" {
            match value.parse::<Difficulty>() {
                Ok(level) => {
                    info!(%level, depth = level.depth(), "difficulty set");
                    self.difficulty = level;
                }
                Err(e) => warn!(error = %e, "ignoring setoption"),
            }
        } else {
            debug!(name, value, "unknown option");
        }
    }

    pub fn cmd_ucinewgame(&mut self) {
        self.position = Position::startpos();
    }

    /// Replace the current position. An invalid FEN keeps the old position;
    /// an illegal move ends the move list.
    fn apply_position(&mut self, startpos: bool, fen: Option<&str>, move_strs: &[String]) {
        let mut pos = if startpos {
            Position::startpos()
        } else if let Some(fen_str) = fen {
            match Position::from_fen(fen_str) {
                Ok(pos) => pos,
                Err(e) => {
                    warn!(error = %e, "rejecting position");
                    return;
                }
            }
        } else {
            return;
        };

        for s in move_strs {
            if let Err(e) = pos.play_uci(s) {
                warn!(mv = %s, error = %e, "stopping at illegal move");
                break;
            }
        }
        self.position = pos;
    }

    /// Search to `depth` and print `bestmove`.
    fn do_go<W: Write>(&mut self, depth: u32, out: &mut W) -> io::Result<()> {
        let start_time = Instant::now();
        let result = match self.searcher.search(&mut self.position, depth, &mut rand::rng()) {
            Ok(result) => result,
            Err(e) => {
                error!(error = %e, "search failed");
                return writeln!(out, "bestmove 0000");
            }
        };

        match (result.best_move, result.score) {
            (Some(mv), Some(score)) => {
                let score = if self.position.turn() == Color::White { score } else { -score };
                writeln!(
                    out,
                    "info depth {} score cp {} nodes {} time {}",
                    depth,
                    score,
                    result.stats.nodes,
                    start_time.elapsed().as_millis()
                )?;
                writeln!(out, "bestmove {}", mv.to_uci(CastlingMode::Standard))
            }
            _ => writeln!(out, "bestmove 0000"),
        }
    }

    fn cmd_display<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "\n{}", self.position)
    }

    fn cmd_eval<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let eval = evaluate_detailed(&self.position);
        writeln!(out, "Material:   {} cp", eval.material)?;
        writeln!(out, "Positional: {} cp", eval.positional)?;
        writeln!(out, "Mobility:   {} cp", eval.mobility)?;
        writeln!(out, "Evaluation: {} cp", eval.total)?;
        writeln!(out, "(Positive = White advantage)")
    }

    fn cmd_captured<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let captured = captured_pieces(&self.position);
        for (label, color) in [("White lost", Color::White), ("Black lost", Color::Black)] {
            let names: Vec<&str> = captured.lost_by(color).iter().map(|&r| role_name(r)).collect();
            writeln!(out, "{}: {}", label, names.join(" "))?;
        }
        writeln!(out, "Material advantage: {}", captured.material_advantage())
    }

    fn cmd_status<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let status = GameStatus::of(&self.position);
        if status == GameStatus::InProgress {
            writeln!(out, "In progress")
        } else {
            writeln!(out, "{}", status)
        }
    }

    fn cmd_perft<W: Write>(&mut self, parts: &[&str], out: &mut W) -> io::Result<()> {
        let depth: u32 = parts.get(1).and_then(|s| s.parse().ok()).unwrap_or(1);
        let start = Instant::now();
        let nodes = match perft(&mut self.position, depth) {
            Ok(nodes) => nodes,
            Err(e) => {
                error!(error = %e, "perft failed");
                return Ok(());
            }
        };
        let elapsed = start.elapsed();
        let nps = if elapsed.as_millis() > 0 {
            nodes as u128 * 1000 / elapsed.as_millis()
        } else {
            0
        };
        writeln!(out, "Nodes: {} ({} ms, {} nps)", nodes, elapsed.as_millis(), nps)
    }
}

fn role_name(role: Role) -> &'static str {
    match role {
        Role::Pawn => "Pawn",
        Role::Knight => "Knight",
        Role::Bishop => "Bishop",
        Role::Rook => "Rook",
        Role::Queen => "Queen",
        Role::King => "King",
    }
}

impl Default for UCI {
    fn default() -> Self {
        Self::new(Difficulty::default())
    }
}
