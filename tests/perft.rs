//! Integration-level perft oracle (§8): the literal published node counts
//! for the start position and "kiwipete" at several depths. These are the
//! numbers every legal chess move generator is checked against.

use masca::board::Board;
use masca::fen::parse_fen;
use masca::perft::perft;
use masca::tables::Tables;

const STARTPOS: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
const POSITION_3: &str = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1";

fn board_from(fen: &str) -> Board {
    let mut board = Board::empty();
    parse_fen(&mut board, fen).expect("fixture FEN is well-formed");
    board
}

#[test]
fn startpos_perft_matches_published_counts() {
    let tables = Tables::new();
    let board = board_from(STARTPOS);
    assert_eq!(perft(&board, &tables, 0), 1);
    assert_eq!(perft(&board, &tables, 1), 20);
    assert_eq!(perft(&board, &tables, 2), 400);
    assert_eq!(perft(&board, &tables, 3), 8_902);
    assert_eq!(perft(&board, &tables, 4), 197_281);
}

#[test]
#[ignore = "several seconds in debug builds; run with --ignored for the full oracle"]
fn startpos_perft_depth_5_matches_published_count() {
    let tables = Tables::new();
    let board = board_from(STARTPOS);
    assert_eq!(perft(&board, &tables, 5), 4_865_609);
}

#[test]
fn kiwipete_perft_matches_published_counts() {
    let tables = Tables::new();
    let board = board_from(KIWIPETE);
    assert_eq!(perft(&board, &tables, 1), 48);
    assert_eq!(perft(&board, &tables, 2), 2_039);
    assert_eq!(perft(&board, &tables, 3), 97_862);
}

#[test]
#[ignore = "tens of seconds in debug builds; run with --ignored for the full oracle"]
fn kiwipete_perft_depth_4_matches_published_count() {
    let tables = Tables::new();
    let board = board_from(KIWIPETE);
    assert_eq!(perft(&board, &tables, 4), 4_085_603);
}

/// Position 3 from the CPW perft results page: exercises en-passant
/// discovered checks and a king shut in a corner by its own rook.
#[test]
fn position_three_perft_matches_published_counts() {
    let tables = Tables::new();
    let board = board_from(POSITION_3);
    assert_eq!(perft(&board, &tables, 1), 14);
    assert_eq!(perft(&board, &tables, 2), 191);
    assert_eq!(perft(&board, &tables, 3), 2_812);
}
