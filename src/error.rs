//! Error types for FEN parsing and move parsing.

use thiserror::Error;

/// Reasons a FEN string can fail to parse.
#[derive(Error, Debug, Eq, PartialEq)]
pub enum FenError {
    #[error("FEN is missing a field: {0}")]
    MissingField(&'static str),
    #[error("rank {0} does not sum to 8 files")]
    InvalidRankLength(usize),
    #[error("unrecognized piece character '{0}'")]
    InvalidPieceChar(char),
    #[error("invalid side to move '{0}', expected 'w' or 'b'")]
    InvalidSideToMove(String),
    #[error("invalid castling rights field '{0}'")]
    InvalidCastlingRights(String),
    #[error("invalid en passant square '{0}'")]
    InvalidEnPassantSquare(String),
    #[error("invalid halfmove clock '{0}'")]
    InvalidHalfmoveClock(String),
}

/// Reasons a UCI long-algebraic move string can fail to parse or resolve.
#[derive(Error, Debug, Eq, PartialEq)]
pub enum MoveParseError {
    #[error("move string '{0}' is not long algebraic notation")]
    Malformed(String),
    #[error("'{0}' is not a legal move in the current position")]
    NotFound(String),
}
