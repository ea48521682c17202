//! Command-line surface (SPEC_FULL ambient stack): a `clap`-derive front
//! door over the UCI engine and the perft/bench diagnostics. Nothing here
//! is chess logic; it only parses argv and hands off to `uci::Engine` and
//! `perft`.

use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::uci::Engine;

#[derive(Parser, Debug)]
#[command(name = "masca", about = "A bitboard chess move-generation core", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Speak UCI over stdin/stdout (the default with no subcommand).
    Uci,
    /// Count leaf nodes of the legal-move tree rooted at a position (§4.9).
    Perft {
        /// FEN of the position to search from; startpos if omitted.
        #[arg(long)]
        fen: Option<String>,
        /// Search depth in plies.
        #[arg(long)]
        depth: u32,
        /// Print the per-root-move breakdown instead of just the total.
        #[arg(long, default_value_t = false)]
        divide: bool,
    },
    /// Benchmark perft throughput at a fixed depth from the start position.
    Bench {
        #[arg(long, default_value_t = 5)]
        depth: u32,
    },
}

/// Parses argv and dispatches to the appropriate mode. Returns the process
/// exit code.
pub fn run() -> i32 {
    let cli = Cli::parse();
    let config = Config::default();

    match cli.command.unwrap_or(Command::Uci) {
        Command::Uci => {
            let mut engine = Engine::new(config);
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            if let Err(err) = engine.run(stdin.lock(), stdout.lock()) {
                tracing::error!(%err, "uci: I/O error, shutting down");
                return 1;
            }
            0
        }
        Command::Perft { fen, depth, divide } => {
            let mut engine = Engine::new(config);
            if let Some(fen_text) = fen {
                if let Err(err) = engine.set_position_fen(&fen_text) {
                    eprintln!("invalid FEN: {err}");
                    return 1;
                }
            }
            engine.run_perft(depth, divide);
            0
        }
        Command::Bench { depth } => {
            use crate::board::Board;
            use crate::perft::benchmark_perft;
            use crate::tables::Tables;

            let tables = Tables::new();
            let board = Board::startpos();
            benchmark_perft(&board, &tables, depth);
            0
        }
    }
}
