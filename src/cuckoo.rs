//! Detection support for upcoming repetitions: a cuckoo hash table of every
//! reversible single-piece move, keyed by the Zobrist XOR between the
//! positions the move connects.
//!
//! At each search ply, one lookup against the XOR of the current key and a
//! key earlier on the line answers whether some reversible move could bridge
//! the two positions. A hit does not prove a repetition exists on the line;
//! the caller must combine it with its own path-of-keys check. The table
//! merely narrows the candidates to at most one per probe.

use crate::core::bitboard::BitBoard;
use crate::core::sq::{NO_SQ, SQ};
use crate::core::{Piece, PieceType, ALL_PIECE_TYPES, ALL_PLAYERS};
use crate::helper::prelude::{attacks_bb, z_side, z_square};

use lazy_static::lazy_static;

/// Number of slots in the table. Power of two; about 3,700 entries live in it.
const CUCKOO_SIZE: usize = 8192;

/// A reversible move of `piece` between `s1` and `s2`. Pawns are excluded
/// since pawn moves are irreversible.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Cuckoo {
    pub piece: Piece,
    pub s1: SQ,
    pub s2: SQ,
}

impl Cuckoo {
    const fn empty_slot() -> Cuckoo {
        Cuckoo {
            piece: Piece::None,
            s1: NO_SQ,
            s2: NO_SQ,
        }
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.piece == Piece::None || self.s1 == NO_SQ || self.s2 == NO_SQ
    }

    /// The Zobrist XOR between the two positions this move connects.
    #[inline]
    pub fn key(&self) -> u64 {
        if self.is_empty() {
            0
        } else {
            z_side() ^ z_square(self.s1, self.piece) ^ z_square(self.s2, self.piece)
        }
    }
}

#[inline(always)]
fn hash1(key: u64) -> usize {
    (key & (CUCKOO_SIZE as u64 - 1)) as usize
}

#[inline(always)]
fn hash2(key: u64) -> usize {
    ((key >> 16) & (CUCKOO_SIZE as u64 - 1)) as usize
}

struct CuckooTable {
    slots: Vec<Cuckoo>,
}

impl CuckooTable {
    #[cold]
    fn build() -> CuckooTable {
        let mut table = CuckooTable {
            slots: vec![Cuckoo::empty_slot(); CUCKOO_SIZE],
        };

        let mut count = 0;
        for player in &ALL_PLAYERS {
            for pt in &ALL_PIECE_TYPES {
                if *pt == PieceType::P {
                    continue;
                }
                let piece = Piece::make_lossy(*player, *pt);
                for s1 in 0..63_u8 {
                    for s2 in (s1 + 1)..64_u8 {
                        if attacks_bb(*pt, SQ(s1), BitBoard(0)).contains(SQ(s2)) {
                            table.place(Cuckoo {
                                piece,
                                s1: SQ(s1),
                                s2: SQ(s2),
                            });
                            count += 1;
                        }
                    }
                }
            }
        }
        debug_assert_eq!(count, 3668);
        table
    }

    /// Inserts an entry, displacing occupants between their two candidate
    /// slots until an empty one is found. Terminates in at most a handful
    /// of swaps at this load factor.
    fn place(&mut self, mut entry: Cuckoo) {
        let mut h = hash1(entry.key());
        loop {
            std::mem::swap(&mut self.slots[h], &mut entry);
            if entry.is_empty() {
                return;
            }
            let key = entry.key();
            h = if h == hash1(key) { hash2(key) } else { hash1(key) };
        }
    }

    #[inline]
    fn lookup(&self, key: u64) -> Option<Cuckoo> {
        let a = self.slots[hash1(key)];
        if a.key() == key && !a.is_empty() {
            return Some(a);
        }
        let b = self.slots[hash2(key)];
        if b.key() == key && !b.is_empty() {
            return Some(b);
        }
        None
    }
}

lazy_static! {
    static ref CUCKOO_TABLE: CuckooTable = CuckooTable::build();
}

/// Forces the one-shot build of the cuckoo table.
#[cold]
pub(crate) fn init_cuckoo() {
    lazy_static::initialize(&CUCKOO_TABLE);
}

/// Looks up a reversible move matching the given Zobrist XOR. Examines
/// exactly two slots.
#[inline]
pub fn lookup(key: u64) -> Option<Cuckoo> {
    CUCKOO_TABLE.lookup(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key_of(piece: Piece, s1: SQ, s2: SQ) -> u64 {
        z_side() ^ z_square(s1, piece) ^ z_square(s2, piece)
    }

    #[test]
    fn knight_round_trip() {
        let key = key_of(Piece::WhiteKnight, SQ::B1, SQ::C3);
        let hit = lookup(key).unwrap();
        assert_eq!(hit.piece, Piece::WhiteKnight);
        assert_eq!(hit.s1, SQ::B1);
        assert_eq!(hit.s2, SQ::C3);
    }

    #[test]
    fn every_insertion_findable() {
        for player in &ALL_PLAYERS {
            for pt in &ALL_PIECE_TYPES {
                if *pt == PieceType::P {
                    continue;
                }
                let piece = Piece::make_lossy(*player, *pt);
                for s1 in 0..63_u8 {
                    for s2 in (s1 + 1)..64_u8 {
                        if attacks_bb(*pt, SQ(s1), BitBoard(0)).contains(SQ(s2)) {
                            let key = key_of(piece, SQ(s1), SQ(s2));
                            let hit = lookup(key).expect("inserted entry must be found");
                            assert_eq!(hit.key(), key);
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn pawn_moves_absent() {
        // A pawn "move" key must miss: pawn moves are irreversible and are
        // never inserted.
        let key = key_of(Piece::WhitePawn, SQ::E2, SQ::E3);
        assert!(lookup(key).is_none());
    }

    #[test]
    fn irreversible_jumps_absent() {
        // No knight attack connects b1 and b2.
        let key = key_of(Piece::WhiteKnight, SQ::B1, SQ::B2);
        assert!(lookup(key).is_none());
    }
}
