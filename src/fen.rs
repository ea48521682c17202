//! Forsyth–Edwards Notation parsing and printing (§4.4, §6).
//!
//! `parse_fen` rebuilds a `Board` from a FEN record in place, following the
//! seven steps of §4.4 verbatim. `to_fen` is the supplemented inverse
//! (§8 R2: `parse_fen(to_fen(S)) == S` modulo the move-counter fields),
//! needed because the original's FEN handling is parse-only.

use crate::board::{BK, BQ, Board, WK, WQ};
use crate::error::FenError;
use crate::types::{Color, Piece, Square};

/// Rebuilds `board` from `text`, per §4.4 steps 1-7. Halfmove clock and
/// fullmove number are accepted but not retained (§4.4 step 6: "not used
/// by the core").
pub fn parse_fen(board: &mut Board, text: &str) -> Result<(), FenError> {
    let mut fields = text.trim().split_whitespace();

    let board_field = fields.next().ok_or(FenError::MissingField("piece placement"))?;
    let side_field = fields.next().ok_or(FenError::MissingField("side to move"))?;
    let castling_field = fields.next().unwrap_or("-");
    let enpassant_field = fields.next().unwrap_or("-");
    let _halfmove = fields.next();
    let _fullmove = fields.next();

    *board = Board::empty();

    // Step 2: rank-major, file-ascending piece placement.
    let ranks: Vec<&str> = board_field.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::InvalidRankLength(ranks.len()));
    }
    for (rank_idx, rank_text) in ranks.iter().enumerate() {
        let mut file = 0u8;
        for ch in rank_text.chars() {
            if let Some(skip) = ch.to_digit(10) {
                file += skip as u8;
            } else {
                let piece = Piece::from_char(ch).ok_or(FenError::InvalidPieceChar(ch))?;
                if file > 7 {
                    return Err(FenError::InvalidRankLength(rank_idx));
                }
                let sq = Square::from_rank_file(rank_idx as u8, file);
                board.put_piece(piece, sq);
                file += 1;
            }
        }
        if file != 8 {
            return Err(FenError::InvalidRankLength(rank_idx));
        }
    }

    // Step 3: side to move.
    let side = match side_field {
        "w" => Color::White,
        "b" => Color::Black,
        other => return Err(FenError::InvalidSideToMove(other.to_string())),
    };
    board.set_side(side);

    // Step 4: castling rights.
    let mut castle = 0u8;
    if castling_field != "-" {
        for ch in castling_field.chars() {
            castle |= match ch {
                'K' => WK,
                'Q' => WQ,
                'k' => BK,
                'q' => BQ,
                _ => return Err(FenError::InvalidCastlingRights(castling_field.to_string())),
            };
        }
    }
    board.set_castle_rights(castle);

    // Step 5: en-passant target square.
    let enpassant = if enpassant_field == "-" {
        Square::NULL
    } else {
        Square::from_algebraic(enpassant_field).ok_or_else(|| FenError::InvalidEnPassantSquare(enpassant_field.to_string()))?
    };
    board.set_enpassant(enpassant);

    Ok(())
}

/// Writes `board` back out as a FEN record. The halfmove clock and
/// fullmove number are not tracked by the core (§4.4 step 6), so `0 1`
/// is always emitted — matching the original's scope (R2 holds "modulo
/// the move-counter fields", per §8).
pub fn to_fen(board: &Board) -> String {
    let mut out = String::new();

    for rank in 0..8u8 {
        let mut empty_run = 0u8;
        for file in 0..8u8 {
            let sq = Square::from_rank_file(rank, file);
            match Piece::ALL.iter().find(|&&p| board.piece_bb(p).test(sq.index())) {
                Some(&piece) => {
                    if empty_run > 0 {
                        out.push((b'0' + empty_run) as char);
                        empty_run = 0;
                    }
                    out.push(piece.to_char());
                }
                None => empty_run += 1,
            }
        }
        if empty_run > 0 {
            out.push((b'0' + empty_run) as char);
        }
        if rank != 7 {
            out.push('/');
        }
    }

    out.push(' ');
    out.push(if board.side() == Color::White { 'w' } else { 'b' });

    out.push(' ');
    let castle = board.castle_rights();
    if castle == 0 {
        out.push('-');
    } else {
        if castle & WK != 0 {
            out.push('K');
        }
        if castle & WQ != 0 {
            out.push('Q');
        }
        if castle & BK != 0 {
            out.push('k');
        }
        if castle & BQ != 0 {
            out.push('q');
        }
    }

    out.push(' ');
    if board.enpassant().is_null() {
        out.push('-');
    } else {
        out.push_str(&board.enpassant().to_algebraic());
    }

    out.push_str(" 0 1");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const STARTPOS: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
    const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";

    #[test]
    fn startpos_round_trips() {
        let mut board = Board::empty();
        parse_fen(&mut board, STARTPOS).unwrap();
        assert_eq!(to_fen(&board), STARTPOS);
    }

    #[test]
    fn kiwipete_round_trips() {
        let mut board = Board::empty();
        parse_fen(&mut board, KIWIPETE).unwrap();
        assert_eq!(to_fen(&board), KIWIPETE);
    }

    #[test]
    fn en_passant_square_round_trips() {
        let fen = "rnbqkbnr/pppp1ppp/8/4p3/4P3/8/PPPP1PPP/RNBQKBNR w KQkq e6 0 1";
        let mut board = Board::empty();
        parse_fen(&mut board, fen).unwrap();
        assert_eq!(board.enpassant(), Square::from_algebraic("e6").unwrap());
        assert_eq!(to_fen(&board), fen);
    }

    #[test]
    fn missing_side_to_move_is_an_error() {
        let mut board = Board::empty();
        assert!(parse_fen(&mut board, "8/8/8/8/8/8/8/8").is_err());
    }

    #[test]
    fn bad_piece_char_is_an_error() {
        let mut board = Board::empty();
        assert_eq!(parse_fen(&mut board, "8/8/8/8/8/8/8/7X w - - 0 1"), Err(FenError::InvalidPieceChar('X')));
    }

    #[test]
    fn short_rank_is_an_error() {
        let mut board = Board::empty();
        assert!(parse_fen(&mut board, "7/8/8/8/8/8/8/8 w - - 0 1").is_err());
    }

    #[test]
    fn tolerant_of_trailing_whitespace() {
        let mut board = Board::empty();
        parse_fen(&mut board, &format!("{STARTPOS}   \n")).unwrap();
        assert_eq!(to_fen(&board), STARTPOS);
    }
}
