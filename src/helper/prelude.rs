//! Freestanding functions for accessing the statically computed lookup
//! tables.
//!
//! Each table is a lazily-initialized immutable global; going through
//! [`init_statics`] before spawning search workers guarantees no worker ever
//! pays the initialization cost (or races on it).
//!
//! [`init_statics`]: fn.init_statics.html

use super::boards;
use super::magic;
use super::zobrist;

use crate::core::sq::SQ;
use crate::core::bitboard::BitBoard;
use crate::core::{File, Piece, PieceType, Player};

use std::sync::Once;

static INIT: Once = Once::new();

/// Initializes the static lookup structures. Only ever runs once.
#[cold]
pub fn init_statics() {
    INIT.call_once(|| {
        zobrist::init_zobrist();
        magic::init_magics();
        boards::init_boards();
        crate::bitbase::init_bitbase();
        crate::cuckoo::init_cuckoo();
    });
}

// MAGIC FUNCTIONS

/// Generates the Bishop attack `BitBoard` from a square and an occupancy.
/// Includes attacks on pieces of both sides; AND with the inverse of the
/// moving player's pieces to exclude self-captures.
#[inline(always)]
pub fn bishop_moves(occupied: BitBoard, sq: SQ) -> BitBoard {
    debug_assert!(sq.is_okay());
    BitBoard(magic::bishop_attacks(occupied.0, sq.0))
}

/// Generates the Rook attack `BitBoard` from a square and an occupancy.
/// Includes attacks on pieces of both sides; AND with the inverse of the
/// moving player's pieces to exclude self-captures.
#[inline(always)]
pub fn rook_moves(occupied: BitBoard, sq: SQ) -> BitBoard {
    debug_assert!(sq.is_okay());
    BitBoard(magic::rook_attacks(occupied.0, sq.0))
}

/// Generates the Queen attack `BitBoard` from a square and an occupancy:
/// the union of the bishop and rook attacks.
#[inline(always)]
pub fn queen_moves(occupied: BitBoard, sq: SQ) -> BitBoard {
    debug_assert!(sq.is_okay());
    BitBoard(magic::rook_attacks(occupied.0, sq.0) | magic::bishop_attacks(occupied.0, sq.0))
}

// BOARD FUNCTIONS

/// Generates the Knight attack `BitBoard` from a source square.
#[inline(always)]
pub fn knight_moves(sq: SQ) -> BitBoard {
    BitBoard(boards::knight_moves(sq))
}

/// Generates the King attack `BitBoard` from a source square.
#[inline(always)]
pub fn king_moves(sq: SQ) -> BitBoard {
    BitBoard(boards::king_moves(sq))
}

/// Attack `BitBoard` of a non-pawn piece type from a square with the given
/// occupancy.
#[inline]
pub fn attacks_bb(piece: PieceType, sq: SQ, occupied: BitBoard) -> BitBoard {
    debug_assert!(sq.is_okay());
    match piece {
        PieceType::N => knight_moves(sq),
        PieceType::B => bishop_moves(occupied, sq),
        PieceType::R => rook_moves(occupied, sq),
        PieceType::Q => queen_moves(occupied, sq),
        PieceType::K => king_moves(sq),
        _ => BitBoard(0),
    }
}

/// Gets the distance of two squares, in king moves.
#[inline(always)]
pub fn distance_of_sqs(sq_one: SQ, sq_two: SQ) -> u8 {
    boards::distance_of_sqs(sq_one, sq_two)
}

/// The line (diagonal / file / rank) `BitBoard` that both squares lie on,
/// if any.
#[inline(always)]
pub fn line_bb(sq_one: SQ, sq_two: SQ) -> BitBoard {
    BitBoard(boards::line_bb(sq_one, sq_two))
}

/// The `BitBoard` of squares strictly between two squares, if aligned.
#[inline(always)]
pub fn between_bb(sq_one: SQ, sq_two: SQ) -> BitBoard {
    BitBoard(boards::between_bb(sq_one, sq_two))
}

/// The `BitBoard` of files adjacent to the given file.
#[inline(always)]
pub fn adjacent_file(f: File) -> BitBoard {
    BitBoard(boards::adjacent_file(f))
}

/// Pawn attack `BitBoard` from a given square, per player.
#[inline(always)]
pub fn pawn_attacks_from(sq: SQ, player: Player) -> BitBoard {
    BitBoard(boards::pawn_attacks_from(sq, player))
}

/// Returns if three squares share a diagonal, file, or rank.
#[inline(always)]
pub fn aligned(s1: SQ, s2: SQ, s3: SQ) -> bool {
    boards::aligned(s1, s2, s3)
}

// ZOBRIST FUNCTIONS

/// Returns the Zobrist key for a given piece at a given square.
#[inline(always)]
pub fn z_square(sq: SQ, piece: Piece) -> u64 {
    zobrist::z_square(sq, piece)
}

/// Returns the Zobrist key for an en-passant file, from its square.
#[inline(always)]
pub fn z_ep(sq: SQ) -> u64 {
    zobrist::z_ep(sq)
}

/// Returns the Zobrist key for a castling-rights set.
///
/// # Safety
///
/// The bits must be less than 16.
#[inline(always)]
pub fn z_castle(castle: u8) -> u64 {
    zobrist::z_castle(castle)
}

/// Returns the Zobrist key for the side to move being Black.
#[inline(always)]
pub fn z_side() -> u64 {
    zobrist::z_side()
}

/// Returns the Zobrist key for having no pawns.
#[inline(always)]
pub fn z_no_pawns() -> u64 {
    zobrist::z_no_pawns()
}
