//! Masca - a bitboard chess move-generation core, speaking UCI.
//!
//! # Overview
//! Legal move generation over bitboards, with a magic-bitboard sliding
//! attack lookup and a perft oracle, wrapped in a thin UCI shell.
//!
//! # Architecture
//! - `bitboard.rs`: low-level bitboard definition
//! - `types.rs`: `Color`/`PieceType`/`Piece`/`Square`
//! - `attack.rs`: leaper (pawn/knight/king) attack tables, built on startup
//! - `magics.rs`: sliding-piece (bishop/rook) magic-bitboard attack tables
//! - `tables.rs`: the read-only union of the two above, queried by square kind
//! - `board.rs`: chessboard representation, `make_move`/`unmake` via value copy
//! - `fen.rs`: FEN parsing and printing
//! - `moves.rs`: packed move representation
//! - `movegen.rs`: pseudo-legal move generation
//! - `perft.rs`: perft driver and divide/bench diagnostics
//! - `uci.rs`: UCI protocol loop
//! - `cli.rs`: command-line entry points (`uci`/`perft`/`bench`)
//! - `config.rs`: engine identification and search-budget knobs
//! - `error.rs`: FEN/move-parsing error types

use masca::cli;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    std::process::exit(cli::run());
}
