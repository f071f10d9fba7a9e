//! The `BoardState` structure, preserving the expensive-to-recompute
//! information of a position.
//!
//! A new `BoardState` is created for each move applied to a [`Board`]; the
//! states form a persistent stack through their `prev` links, allowing moves
//! to be undone without recomputation.
//!
//! [`Board`]: ../struct.Board.html

use super::castle_rights::Castling;

use crate::core::bitboard::BitBoard;
use crate::core::masks::*;
use crate::core::piece_move::BitMove;
use crate::core::sq::{NO_SQ, SQ};
use crate::core::PieceType;

use std::sync::Arc;

/// Holds useful information concerning the current state of the [`Board`].
///
/// Computed on each move application; the `prev` links form a tree-like
/// persistent stack so cloned boards share history.
///
/// [`Board`]: ../struct.Board.html
#[derive(Clone)]
pub struct BoardState {
    // Copied from the previous state and modified
    /// The castling rights for the current board.
    pub castling: Castling,
    /// Half-moves since the last capture, pawn move, or castle.
    pub rule_50: i16,
    /// Plies played since the `Board` was created.
    pub ply: u16,
    /// If the last move was a double pawn push, the square behind the
    /// pushed pawn. `NO_SQ` otherwise.
    pub ep_square: SQ,

    // Recomputed after each move
    /// The Zobrist key of the board.
    pub zobrist: u64,
    /// The Zobrist-derived key of the current material configuration.
    pub material_key: u64,
    /// The last captured piece type, if any.
    pub captured_piece: Option<PieceType>,
    /// `BitBoard` of the pieces currently giving check.
    pub checkers_bb: BitBoard,
    /// Per player, pieces blocking an attack on that player's king. May
    /// contain pieces of either color: an enemy piece can shield the king
    /// from a more distant slider.
    pub blockers_king: [BitBoard; PLAYER_CNT],
    /// Per player, sliders of either color pinning something to that
    /// player's king.
    pub pinners_king: [BitBoard; PLAYER_CNT],
    /// Per piece type, the squares from which that piece would check the
    /// opposing king.
    pub check_sqs: [BitBoard; PIECE_TYPE_CNT],
    /// The previous move played, `BitMove::null()` if none.
    pub prev_move: BitMove,
    /// Previous state of the board, from one move ago.
    pub prev: Option<Arc<BoardState>>,
}

impl BoardState {
    /// Constructs a blank `BoardState`.
    pub fn blank() -> BoardState {
        BoardState {
            castling: Castling::empty_set(),
            rule_50: 0,
            ply: 0,
            ep_square: NO_SQ,
            zobrist: 0,
            material_key: 0,
            captured_piece: None,
            checkers_bb: BitBoard(0),
            blockers_king: [BitBoard(0); PLAYER_CNT],
            pinners_king: [BitBoard(0); PLAYER_CNT],
            check_sqs: [BitBoard(0); PIECE_TYPE_CNT],
            prev_move: BitMove::null(),
            prev: None,
        }
    }

    /// Constructs a partial clone of a `BoardState`.
    ///
    /// Castling, rule_50, ply, ep_square, and the keys carry over (to be
    /// incrementally modified); the rest must be regenerated.
    pub fn partial_clone(&self) -> BoardState {
        BoardState {
            castling: self.castling,
            rule_50: self.rule_50,
            ply: self.ply,
            ep_square: self.ep_square,
            zobrist: self.zobrist,
            material_key: self.material_key,
            captured_piece: None,
            checkers_bb: BitBoard(0),
            blockers_king: [BitBoard(0); PLAYER_CNT],
            pinners_king: [BitBoard(0); PLAYER_CNT],
            check_sqs: [BitBoard(0); PIECE_TYPE_CNT],
            prev_move: BitMove::null(),
            prev: self.prev.as_ref().cloned(),
        }
    }

    /// Return the previous `BoardState` from one move ago.
    #[inline]
    pub fn get_prev(&self) -> Option<Arc<BoardState>> {
        self.prev.as_ref().cloned()
    }
}

impl PartialEq for BoardState {
    fn eq(&self, other: &BoardState) -> bool {
        self.castling == other.castling
            && self.rule_50 == other.rule_50
            && self.ep_square == other.ep_square
            && self.zobrist == other.zobrist
            && self.captured_piece == other.captured_piece
            && self.checkers_bb == other.checkers_bb
            && self.blockers_king == other.blockers_king
            && self.pinners_king == other.pinners_king
            && self.check_sqs == other.check_sqs
    }
}
