//! UCI text-protocol shim (§6, §10 C10).
//!
//! This is the "external collaborator" the spec keeps deliberately thin:
//! its only contract with the core is parsing `position`/`go` and printing
//! identification. Line reading, token dispatch, and the search stub all
//! live here; everything chess-specific is delegated to `board`/`fen`/
//! `movegen`/`perft`.

use std::io::{BufRead, Write};

use crate::board::{Board, MoveMode};
use crate::config::Config;
use crate::eval;
use crate::fen;
use crate::movegen::{MoveList, generate_pseudo_legal_moves};
use crate::moves::Move;
use crate::perft;
use crate::tables::Tables;
use crate::types::{PieceType, Square};

const STARTPOS_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// The engine's process-wide state for the lifetime of the UCI session:
/// the current position plus the read-only attack infrastructure.
pub struct Engine {
    config: Config,
    tables: Tables,
    board: Board,
}

impl Engine {
    pub fn new(config: Config) -> Self {
        Self { config, tables: Tables::new(), board: Board::startpos() }
    }

    /// Runs the UCI loop until `quit` or end of input (§6, §7: "Unknown
    /// input move string ... outer loop breaks out of the move-application
    /// sub-loop", not the whole session).
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> std::io::Result<()> {
        for line in input.lines() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            tracing::debug!(command = line, "uci: received");
            if !self.dispatch(line, &mut output)? {
                break;
            }
        }
        Ok(())
    }

    /// Handles one input line. Returns `false` iff the session should end.
    fn dispatch<W: Write>(&mut self, line: &str, output: &mut W) -> std::io::Result<bool> {
        let mut tokens = line.split_whitespace();
        match tokens.next() {
            Some("uci") => {
                writeln!(output, "id name {}", self.config.engine_name)?;
                writeln!(output, "id author {}", self.config.engine_author)?;
                writeln!(output, "uciok")?;
            }
            Some("isready") => writeln!(output, "readyok")?,
            Some("ucinewgame") => {
                self.board = Board::startpos();
            }
            Some("position") => self.handle_position(tokens.collect::<Vec<_>>().join(" ").as_str()),
            Some("go") => self.handle_go(output)?,
            Some("quit") => return Ok(false),
            _ => tracing::trace!(line, "uci: ignoring unrecognized command"),
        }
        Ok(true)
    }

    /// `position startpos [moves ...]` or `position fen <fen> [moves ...]` (§6).
    fn handle_position(&mut self, rest: &str) {
        let (setup, moves_part) = match rest.find("moves") {
            Some(idx) => (rest[..idx].trim(), Some(rest[idx + "moves".len()..].trim())),
            None => (rest.trim(), None),
        };

        let board = if let Some(fen_text) = setup.strip_prefix("fen").map(str::trim) {
            let mut b = Board::empty();
            match fen::parse_fen(&mut b, fen_text) {
                Ok(()) => b,
                Err(err) => {
                    tracing::warn!(%err, fen = fen_text, "uci: ill-formed FEN, board left unchanged");
                    return;
                }
            }
        } else {
            let mut b = Board::empty();
            fen::parse_fen(&mut b, STARTPOS_FEN).expect("startpos FEN is well-formed");
            b
        };
        self.board = board;

        if let Some(moves_text) = moves_part {
            for token in moves_text.split_whitespace() {
                match self.parse_move(token) {
                    Some(m) => {
                        self.board = self
                            .board
                            .make_move(&self.tables, m, MoveMode::AllMoves)
                            .expect("moves supplied by a GUI are assumed legal in the reached position");
                    }
                    None => {
                        // §7 "Unknown input move string": stop applying this
                        // move list, keep whatever position was reached.
                        tracing::warn!(token, "uci: unrecognized move, aborting move list");
                        break;
                    }
                }
            }
        }
    }

    /// `go [depth N]` (§6). The search is out of scope (§1); this emits the
    /// first pseudo-legal legal move as a stand-in `bestmove`.
    fn handle_go<W: Write>(&mut self, output: &mut W) -> std::io::Result<()> {
        let _ = eval::evaluate(&self.board);

        let mut moves = MoveList::new();
        generate_pseudo_legal_moves(&self.board, &self.tables, &mut moves);
        let best = moves.iter().find_map(|&m| self.board.make_move(&self.tables, m, MoveMode::AllMoves).map(|_| m));

        match best {
            Some(m) => writeln!(output, "bestmove {}", m.to_uci())?,
            None => writeln!(output, "bestmove 0000")?,
        }
        Ok(())
    }

    /// Walks the current position's pseudo-legal move list and returns the
    /// packed move whose source/target/promotion match `text` (§6), or
    /// `None` for no match (§7 "Unknown input move string").
    pub fn parse_move(&self, text: &str) -> Option<Move> {
        let bytes = text.as_bytes();
        if bytes.len() != 4 && bytes.len() != 5 {
            return None;
        }
        let from = Square::from_algebraic(&text[0..2])?;
        let to = Square::from_algebraic(&text[2..4])?;
        let promo = if bytes.len() == 5 { Some(PieceType::from_promotion_char(bytes[4] as char)?) } else { None };

        let mut moves = MoveList::new();
        generate_pseudo_legal_moves(&self.board, &self.tables, &mut moves);
        moves
            .iter()
            .find(|m| m.from() == from && m.to() == to && m.promotion_piece().map(|p| p.kind()) == promo)
            .copied()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn tables(&self) -> &Tables {
        &self.tables
    }

    /// Used by the `perft`/`bench` CLI subcommands, which bypass UCI entirely.
    pub fn run_perft(&self, depth: u32, divide: bool) {
        if divide {
            perft::print_divide(&self.board, &self.tables, depth);
        } else {
            let nodes = perft::perft(&self.board, &self.tables, depth);
            println!("perft({depth}): {nodes}");
        }
    }

    pub fn set_position_fen(&mut self, fen_text: &str) -> Result<(), crate::error::FenError> {
        let mut b = Board::empty();
        fen::parse_fen(&mut b, fen_text)?;
        self.board = b;
        Ok(())
    }
}
