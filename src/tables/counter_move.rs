//! Counter-move table: for each (piece, to) of a previous move, the reply
//! that refuted it last time.

use crate::core::masks::{PIECE_CNT, SQ_CNT};
use crate::core::piece_move::BitMove;
use crate::core::sq::SQ;
use crate::core::Piece;

/// Refuting replies indexed by `[prev piece][prev to]`.
pub struct CounterMoveHistory {
    a: [[BitMove; SQ_CNT]; PIECE_CNT],
}

impl CounterMoveHistory {
    pub fn new() -> Self {
        CounterMoveHistory {
            a: [[BitMove::null(); SQ_CNT]; PIECE_CNT],
        }
    }

    #[inline(always)]
    pub fn get(&self, piece: Piece, to: SQ) -> BitMove {
        self.a[piece as usize][to.0 as usize]
    }

    #[inline]
    pub fn set(&mut self, piece: Piece, to: SQ, m: BitMove) {
        self.a[piece as usize][to.0 as usize] = m;
    }

    pub fn clear(&mut self) {
        self.a = [[BitMove::null(); SQ_CNT]; PIECE_CNT];
    }
}

impl Default for CounterMoveHistory {
    fn default() -> Self {
        CounterMoveHistory::new()
    }
}
