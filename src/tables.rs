//! Combined read-only attack infrastructure (§3 "single init phase").
//!
//! `Tables` bundles the leaper lookup tables (§4.2) with the slider magic
//! tables (§4.3) behind one query surface, so `board.rs` and `movegen.rs`
//! don't need to know which piece kinds are leapers and which are sliders.
//! Built once at startup and passed around by shared reference thereafter.

use crate::attack::AttackTables;
use crate::bitboard::Bitboard;
use crate::magics::MagicTables;
use crate::types::{Color, Square};

pub struct Tables {
    pub leapers: AttackTables,
    pub magics: MagicTables,
}

impl Tables {
    /// Builds every attack table using the hardcoded known-good magics
    /// (§4.3: "either hardcode the same constants or run the search").
    pub fn new() -> Self {
        Self { leapers: AttackTables::new(), magics: MagicTables::new() }
    }

    #[inline(always)]
    pub fn pawn_attacks(&self, color: Color, sq: Square) -> Bitboard {
        self.leapers.pawn_capture[color][sq]
    }

    #[inline(always)]
    pub fn knight_attacks(&self, sq: Square) -> Bitboard {
        self.leapers.knight[sq]
    }

    #[inline(always)]
    pub fn king_attacks(&self, sq: Square) -> Bitboard {
        self.leapers.king[sq]
    }

    #[inline(always)]
    pub fn bishop_attacks(&self, sq: Square, occupancy: Bitboard) -> Bitboard {
        self.magics.bishop_attacks(sq.index(), occupancy)
    }

    #[inline(always)]
    pub fn rook_attacks(&self, sq: Square, occupancy: Bitboard) -> Bitboard {
        self.magics.rook_attacks(sq.index(), occupancy)
    }

    /// The queen is the bitwise OR of bishop and rook queries at the same square (§4.3).
    #[inline(always)]
    pub fn queen_attacks(&self, sq: Square, occupancy: Bitboard) -> Bitboard {
        self.bishop_attacks(sq, occupancy) | self.rook_attacks(sq, occupancy)
    }
}

impl Default for Tables {
    fn default() -> Self {
        Self::new()
    }
}
