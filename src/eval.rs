//! Position evaluation — stub (§1 Non-goals: "no evaluation function").
//!
//! The core's `go` command needs something to call; this returns a
//! constant rather than a real score. Kept as a real function with the
//! signature a material evaluator would have, rather than deleted, so the
//! search stub in `uci.rs` has a stable thing to call when this is filled in.

use crate::board::Board;

/// Always 0: no evaluation function is in scope for this core (§1).
pub fn evaluate(_board: &Board) -> i32 {
    0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stub_evaluation_is_always_zero() {
        assert_eq!(evaluate(&Board::startpos()), 0);
    }
}
