//! Precomputed board geometry: knight/king/pawn attacks, square distance,
//! and the line / between tables used by pin and alignment tests.

use crate::core::file_of_sq;
use crate::core::masks::*;
use crate::core::sq::SQ;
use crate::core::u8_to_u64;
use crate::core::{File, Player};

use super::magic::{bishop_attacks, rook_attacks};

use lazy_static::lazy_static;

pub(super) struct BoardTables {
    knight_table: [u64; SQ_CNT],
    king_table: [u64; SQ_CNT],
    distance_table: [[u8; SQ_CNT]; SQ_CNT],
    line_bitboard: [[u64; SQ_CNT]; SQ_CNT],
    between_sqs_bb: [[u64; SQ_CNT]; SQ_CNT],
    adjacent_files_bb: [u64; FILE_CNT],
    pawn_attacks_from: [[u64; SQ_CNT]; PLAYER_CNT],
}

impl BoardTables {
    fn new() -> BoardTables {
        let mut t = BoardTables {
            knight_table: gen_knight_moves(),
            king_table: gen_king_moves(),
            distance_table: [[0; SQ_CNT]; SQ_CNT],
            line_bitboard: [[0; SQ_CNT]; SQ_CNT],
            between_sqs_bb: [[0; SQ_CNT]; SQ_CNT],
            adjacent_files_bb: [0; FILE_CNT],
            pawn_attacks_from: [[0; SQ_CNT]; PLAYER_CNT],
        };
        t.gen_distance_table();
        t.gen_between_and_line_bbs();
        t.gen_adjacent_file_bbs();
        t.gen_pawn_attacks();
        t
    }

    fn gen_distance_table(&mut self) {
        for i in 0..SQ_CNT as u8 {
            for j in 0..SQ_CNT as u8 {
                self.distance_table[i as usize][j as usize] = SQ(i).distance(SQ(j));
            }
        }
    }

    fn gen_between_and_line_bbs(&mut self) {
        for i in 0..SQ_CNT as u8 {
            for j in 0..SQ_CNT as u8 {
                let i_bb: u64 = 1_u64 << i;
                let j_bb: u64 = 1_u64 << j;
                if rook_attacks(0, i) & j_bb != 0 {
                    self.line_bitboard[i as usize][j as usize] =
                        (rook_attacks(0, j) & rook_attacks(0, i)) | i_bb | j_bb;
                    self.between_sqs_bb[i as usize][j as usize] =
                        rook_attacks(i_bb, j) & rook_attacks(j_bb, i);
                } else if bishop_attacks(0, i) & j_bb != 0 {
                    self.line_bitboard[i as usize][j as usize] =
                        (bishop_attacks(0, j) & bishop_attacks(0, i)) | i_bb | j_bb;
                    self.between_sqs_bb[i as usize][j as usize] =
                        bishop_attacks(i_bb, j) & bishop_attacks(j_bb, i);
                }
            }
        }
    }

    fn gen_adjacent_file_bbs(&mut self) {
        for file in 0..FILE_CNT {
            if file != 0 {
                self.adjacent_files_bb[file] |= FILE_BB[file - 1];
            }
            if file != 7 {
                self.adjacent_files_bb[file] |= FILE_BB[file + 1];
            }
        }
    }

    fn gen_pawn_attacks(&mut self) {
        // white, from ranks 1-7
        for i in 0..56_u8 {
            let mut bb: u64 = 0;
            if file_of_sq(i) != File::A {
                bb |= u8_to_u64(i + 7);
            }
            if file_of_sq(i) != File::H {
                bb |= u8_to_u64(i + 9);
            }
            self.pawn_attacks_from[0][i as usize] = bb;
        }

        // black, from ranks 2-8
        for i in 8..64_u8 {
            let mut bb: u64 = 0;
            if file_of_sq(i) != File::A {
                bb |= u8_to_u64(i - 9);
            }
            if file_of_sq(i) != File::H {
                bb |= u8_to_u64(i - 7);
            }
            self.pawn_attacks_from[1][i as usize] = bb;
        }
    }
}

fn gen_knight_moves() -> [u64; SQ_CNT] {
    let mut moves: [u64; SQ_CNT] = [0; SQ_CNT];
    for (index, spot) in moves.iter_mut().enumerate() {
        let mut mask: u64 = 0;
        let file = index % 8;

        // 1 UP   + 2 LEFT
        if file > 1 && index < 56 {
            mask |= 1 << (index + 6);
        }
        // 2 UP   + 1 LEFT
        if file != 0 && index < 48 {
            mask |= 1 << (index + 15);
        }
        // 2 UP   + 1 RIGHT
        if file != 7 && index < 48 {
            mask |= 1 << (index + 17);
        }
        // 1 UP   + 2 RIGHT
        if file < 6 && index < 56 {
            mask |= 1 << (index + 10);
        }
        // 1 DOWN + 2 RIGHT
        if file < 6 && index > 7 {
            mask |= 1 << (index - 6);
        }
        // 2 DOWN + 1 RIGHT
        if file != 7 && index > 15 {
            mask |= 1 << (index - 15);
        }
        // 2 DOWN + 1 LEFT
        if file != 0 && index > 15 {
            mask |= 1 << (index - 17);
        }
        // 1 DOWN + 2 LEFT
        if file > 1 && index > 7 {
            mask |= 1 << (index - 10);
        }
        *spot = mask;
    }
    moves
}

fn gen_king_moves() -> [u64; SQ_CNT] {
    let mut moves: [u64; SQ_CNT] = [0; SQ_CNT];
    for (index, spot) in moves.iter_mut().enumerate() {
        let mut mask: u64 = 0;
        let file = index % 8;
        // LEFT
        if file != 0 {
            mask |= 1 << (index - 1);
        }
        // RIGHT
        if file != 7 {
            mask |= 1 << (index + 1);
        }
        // UP
        if index < 56 {
            mask |= 1 << (index + 8);
        }
        // DOWN
        if index > 7 {
            mask |= 1 << (index - 8);
        }
        // LEFT UP
        if file != 0 && index < 56 {
            mask |= 1 << (index + 7);
        }
        // LEFT DOWN
        if file != 0 && index > 7 {
            mask |= 1 << (index - 9);
        }
        // RIGHT DOWN
        if file != 7 && index > 7 {
            mask |= 1 << (index - 7);
        }
        // RIGHT UP
        if file != 7 && index < 56 {
            mask |= 1 << (index + 9);
        }
        *spot = mask;
    }
    moves
}

lazy_static! {
    static ref TABLES: BoardTables = BoardTables::new();
}

/// Forces initialization of the board tables.
#[cold]
pub(super) fn init_boards() {
    lazy_static::initialize(&TABLES);
}

/// Knight attack set from a source square.
#[inline(always)]
pub fn knight_moves(sq: SQ) -> u64 {
    debug_assert!(sq.is_okay());
    unsafe { *TABLES.knight_table.get_unchecked(sq.0 as usize) }
}

/// King attack set from a source square.
#[inline(always)]
pub fn king_moves(sq: SQ) -> u64 {
    debug_assert!(sq.is_okay());
    unsafe { *TABLES.king_table.get_unchecked(sq.0 as usize) }
}

/// Chebyshev (king-move) distance between two squares.
#[inline(always)]
pub fn distance_of_sqs(sq_one: SQ, sq_two: SQ) -> u8 {
    debug_assert!(sq_one.is_okay());
    debug_assert!(sq_two.is_okay());
    TABLES.distance_table[sq_one.0 as usize][sq_two.0 as usize]
}

/// The full line (diagonal / file / rank) both squares lie on, or 0 if they
/// are not aligned.
#[inline(always)]
pub fn line_bb(sq_one: SQ, sq_two: SQ) -> u64 {
    debug_assert!(sq_one.is_okay());
    debug_assert!(sq_two.is_okay());
    unsafe {
        *(TABLES.line_bitboard.get_unchecked(sq_one.0 as usize)).get_unchecked(sq_two.0 as usize)
    }
}

/// The squares strictly between two aligned squares, or 0 if not aligned.
#[inline(always)]
pub fn between_bb(sq_one: SQ, sq_two: SQ) -> u64 {
    debug_assert!(sq_one.is_okay());
    debug_assert!(sq_two.is_okay());
    unsafe {
        *(TABLES.between_sqs_bb.get_unchecked(sq_one.0 as usize)).get_unchecked(sq_two.0 as usize)
    }
}

/// The files adjacent to the given file.
#[inline(always)]
pub fn adjacent_file(f: File) -> u64 {
    unsafe { *TABLES.adjacent_files_bb.get_unchecked(f as usize) }
}

/// Pawn attack set from a given square, per player.
#[inline(always)]
pub fn pawn_attacks_from(sq: SQ, player: Player) -> u64 {
    debug_assert!(sq.is_okay());
    unsafe {
        *TABLES
            .pawn_attacks_from
            .get_unchecked(player as usize)
            .get_unchecked(sq.0 as usize)
    }
}

/// Returns if three squares share a diagonal, file, or rank.
#[inline(always)]
pub fn aligned(s1: SQ, s2: SQ, s3: SQ) -> bool {
    (line_bb(s1, s2) & u8_to_u64(s3.0)) != 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::bit_twiddles::popcount64;

    #[test]
    fn king_mask_gen() {
        let sum: u64 = (0..64_u8)
            .map(|s| popcount64(king_moves(SQ(s))) as u64)
            .sum();
        assert_eq!(sum, (3 * 4) + (5 * 6 * 4) + (8 * 6 * 6));
    }

    #[test]
    fn knight_mask_gen() {
        let sum: u64 = (0..64_u8)
            .map(|s| popcount64(knight_moves(SQ(s))) as u64)
            .sum();
        assert_eq!(
            sum,
            (2 * 4) + (4 * 4) + (3 * 2 * 4) + (4 * 4 * 4) + (6 * 4 * 4) + (8 * 4 * 4)
        );
    }

    #[test]
    fn pawn_attacks_shift() {
        // pawn attacks are the NW/NE shifts of the square, edge-masked
        assert_eq!(pawn_attacks_from(SQ::A2, Player::White), SQ::B3.to_bb().0);
        assert_eq!(
            pawn_attacks_from(SQ::E4, Player::White),
            SQ::D5.to_bb().0 | SQ::F5.to_bb().0
        );
        assert_eq!(
            pawn_attacks_from(SQ::E4, Player::Black),
            SQ::D3.to_bb().0 | SQ::F3.to_bb().0
        );
        assert_eq!(pawn_attacks_from(SQ::H7, Player::Black), SQ::G6.to_bb().0);
    }

    #[test]
    fn lines_and_between() {
        assert_eq!(between_bb(SQ::A1, SQ::A4), SQ::A2.to_bb().0 | SQ::A3.to_bb().0);
        assert_eq!(between_bb(SQ::A1, SQ::C3), SQ::B2.to_bb().0);
        assert_eq!(between_bb(SQ::A1, SQ::B3), 0);
        assert!(aligned(SQ::A1, SQ::B2, SQ::C3));
        assert!(!aligned(SQ::A1, SQ::B2, SQ::C4));
        assert_eq!(line_bb(SQ::A1, SQ::B3), 0);
        // full diagonal through b2 and c3 includes a1 and h8
        let diag = line_bb(SQ::B2, SQ::C3);
        assert_ne!(diag & SQ::A1.to_bb().0, 0);
        assert_ne!(diag & SQ::H8.to_bb().0, 0);
    }

    #[test]
    fn distances() {
        assert_eq!(distance_of_sqs(SQ::A1, SQ::H8), 7);
        assert_eq!(distance_of_sqs(SQ::E4, SQ::E4), 0);
        assert_eq!(distance_of_sqs(SQ::B2, SQ::C4), 2);
    }
}
