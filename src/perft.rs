//! Perft (performance test) driver (§4.9, §8).
//!
//! `perft(depth)` counts leaf nodes of the legal-move tree: the canonical
//! correctness oracle for a chess move generator (§8's literal node-count
//! table is what this module is built to reproduce). `perft_divide` is the
//! root-move breakdown used to bisect a mismatch against a reference engine.

use std::time::Instant;

use crate::board::{Board, MoveMode};
use crate::movegen::{MoveList, generate_pseudo_legal_moves};
use crate::tables::Tables;

/// Counts leaf nodes of the legal-move tree rooted at `board`, to `depth`
/// plies. Depth 0 is one node (the position itself).
pub fn perft(board: &Board, tables: &Tables, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }

    let mut moves = MoveList::new();
    generate_pseudo_legal_moves(board, tables, &mut moves);

    let mut nodes = 0;
    for &m in moves.iter() {
        if let Some(next) = board.make_move(tables, m, MoveMode::AllMoves) {
            nodes += perft(&next, tables, depth - 1);
        }
    }
    nodes
}

/// One root move's UCI string and its subtree node count (§4.9 divide mode).
pub struct DivideEntry {
    pub uci: String,
    pub nodes: u64,
}

/// Per-root-move node counts, for bisecting a perft mismatch against a
/// known-good reference (§4.9: "Used for bisection debugging").
pub fn perft_divide(board: &Board, tables: &Tables, depth: u32) -> Vec<DivideEntry> {
    let mut moves = MoveList::new();
    generate_pseudo_legal_moves(board, tables, &mut moves);

    let mut entries = Vec::with_capacity(moves.len());
    for &m in moves.iter() {
        if let Some(next) = board.make_move(tables, m, MoveMode::AllMoves) {
            let nodes = if depth == 0 { 1 } else { perft(&next, tables, depth - 1) };
            entries.push(DivideEntry { uci: m.to_uci(), nodes });
        }
    }
    entries
}

/// Prints the divide breakdown and the total, in the conventional perft
/// reference-engine format (used by `masca perft --divide`).
pub fn print_divide(board: &Board, tables: &Tables, depth: u32) {
    let entries = perft_divide(board, tables, depth);
    let mut total = 0u64;
    for entry in &entries {
        println!("{}: {}", entry.uci, entry.nodes);
        total += entry.nodes;
    }
    println!();
    println!("Nodes searched: {total}");
}

/// Runs `perft(depth)` a handful of times, discarding the fastest and
/// slowest run, and reports the trimmed-mean nodes-per-second (`masca bench`).
pub fn benchmark_perft(board: &Board, tables: &Tables, depth: u32) {
    const RUNS: usize = 5;

    let _ = perft(board, tables, depth); // warmup

    let mut times = Vec::with_capacity(RUNS);
    let mut nodes = 0u64;
    for _ in 0..RUNS {
        let start = Instant::now();
        nodes = perft(board, tables, depth);
        times.push(start.elapsed().as_secs_f64());
    }

    times.sort_by(|a, b| a.partial_cmp(b).unwrap());
    let trimmed = &times[1..RUNS - 1];
    let avg_time: f64 = trimmed.iter().sum::<f64>() / trimmed.len() as f64;
    let nps = if avg_time > 0.0 { nodes as f64 / avg_time } else { 0.0 };

    tracing::info!(depth, nodes, avg_time_s = avg_time, nps, "perft benchmark");
    println!("Depth: {depth}");
    println!("Nodes: {nodes}");
    println!("Avg Time: {avg_time:.6} s");
    println!("Avg NPS: {nps:.2} nodes/sec");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fen::parse_fen;

    const STARTPOS: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
    const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";

    fn board_from(fen: &str) -> Board {
        let mut b = Board::empty();
        parse_fen(&mut b, fen).unwrap();
        b
    }

    #[test]
    fn startpos_perft_depth_1_through_4() {
        let tables = Tables::new();
        let board = board_from(STARTPOS);
        assert_eq!(perft(&board, &tables, 1), 20);
        assert_eq!(perft(&board, &tables, 2), 400);
        assert_eq!(perft(&board, &tables, 3), 8_902);
        assert_eq!(perft(&board, &tables, 4), 197_281);
    }

    #[test]
    #[ignore = "several seconds in debug builds; run with --ignored for the full §8 oracle"]
    fn startpos_perft_depth_5() {
        let tables = Tables::new();
        let board = board_from(STARTPOS);
        assert_eq!(perft(&board, &tables, 5), 4_865_609);
    }

    #[test]
    fn kiwipete_perft_depth_1_through_3() {
        let tables = Tables::new();
        let board = board_from(KIWIPETE);
        assert_eq!(perft(&board, &tables, 1), 48);
        assert_eq!(perft(&board, &tables, 2), 2_039);
        assert_eq!(perft(&board, &tables, 3), 97_862);
    }

    #[test]
    #[ignore = "tens of seconds in debug builds; run with --ignored for the full §8 oracle"]
    fn kiwipete_perft_depth_4() {
        let tables = Tables::new();
        let board = board_from(KIWIPETE);
        assert_eq!(perft(&board, &tables, 4), 4_085_603);
    }

    #[test]
    fn divide_entries_sum_to_perft_total() {
        let tables = Tables::new();
        let board = board_from(STARTPOS);
        let entries = perft_divide(&board, &tables, 2);
        let sum: u64 = entries.iter().map(|e| e.nodes).sum();
        assert_eq!(sum, perft(&board, &tables, 2));
        assert_eq!(entries.len(), 20);
    }
}
