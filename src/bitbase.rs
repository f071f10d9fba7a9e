//! The KPK bitbase: an exact win/draw verdict for every King + Pawn vs King
//! position, built once at startup by retrograde fixed-point iteration.
//!
//! There are 24 possible pawn squares (files A to D, ranks 2 to 7);
//! positions with the pawn on files E to H must be mirrored before probing.
//!
//! A KPK index is an integer in `[0, 196608)`, mapped to minimize the
//! number of iterations:
//!
//! ```md,ignore
//! bits 00-05: white king square
//! bits 06-11: black king square
//! bit     12: side to move
//! bits 13-14: white pawn file (FILE_A .. FILE_D)
//! bits 15-17: white pawn rank (RANK_2 .. RANK_7, biased by RANK_2)
//! ```

use crate::core::sq::SQ;
use crate::core::{File, Player, Rank};
use crate::helper::prelude::{king_moves, pawn_attacks_from};

use bitflags::bitflags;
use lazy_static::lazy_static;

/// pawn square * side to move * white king square * black king square
const MAX_INDEX: usize = 24 * 2 * 64 * 64;

bitflags! {
    /// Verdict of a KPK position during the retrograde build. The empty set
    /// marks an invalid position (overlapping pieces or capturable king).
    struct Outcome: u8 {
        const UNKNOWN = 0b0001;
        const DRAW    = 0b0010;
        const WIN     = 0b0100;
        const LOSE    = 0b1000;
    }
}

#[inline]
fn index(active: Player, wk_sq: SQ, bk_sq: SQ, wp_sq: SQ) -> usize {
    debug_assert!(wp_sq.file() <= File::D);
    debug_assert!(Rank::R2 <= wp_sq.rank() && wp_sq.rank() <= Rank::R7);

    (wk_sq.0 as usize)
        | (bk_sq.0 as usize) << 6
        | (active as usize) << 12
        | (wp_sq.file() as usize) << 13
        | (wp_sq.rank() as usize - Rank::R2 as usize) << 15
}

#[derive(Copy, Clone)]
struct KpkPosition {
    active: Player,
    wk_sq: SQ,
    bk_sq: SQ,
    wp_sq: SQ,
    result: Outcome,
}

impl KpkPosition {
    /// Decodes an index and classifies the position immediately if it is
    /// invalid, an immediate win, or an immediate draw.
    fn new(idx: usize) -> KpkPosition {
        let wk_sq = SQ((idx & 0x3F) as u8);
        let bk_sq = SQ(((idx >> 6) & 0x3F) as u8);
        let active = if (idx >> 12) & 0x1 == 0 {
            Player::White
        } else {
            Player::Black
        };
        let wp_sq = SQ::make(
            crate::core::ALL_FILES[(idx >> 13) & 0x03],
            crate::core::ALL_RANKS[((idx >> 15) & 0x07) + Rank::R2 as usize],
        );

        debug_assert_eq!(index(active, wk_sq, bk_sq, wp_sq), idx);

        let push_sq = wp_sq + SQ(8);

        // Pieces overlapping or a king capturable by the side to move
        let result = if wk_sq.distance(bk_sq) <= 1
            || wk_sq == wp_sq
            || bk_sq == wp_sq
            || (active == Player::White && pawn_attacks_from(wp_sq, Player::White).contains(bk_sq))
        {
            Outcome::empty()
        }
        // Immediate win if the pawn promotes without getting captured
        else if active == Player::White
            && wp_sq.rank() == Rank::R7
            && wk_sq != push_sq
            && (bk_sq.distance(push_sq) > 1 || king_moves(wk_sq).contains(push_sq))
        {
            Outcome::WIN
        }
        // Immediate draw if black is stalemated or captures an undefended pawn
        else if active == Player::Black
            && ((king_moves(bk_sq)
                & !(king_moves(wk_sq) | pawn_attacks_from(wp_sq, Player::White)))
                .is_empty()
                || (king_moves(bk_sq) & !king_moves(wk_sq)).contains(wp_sq))
        {
            Outcome::DRAW
        } else {
            Outcome::UNKNOWN
        };

        KpkPosition {
            active,
            wk_sq,
            bk_sq,
            wp_sq,
            result,
        }
    }

    /// Classifies the position from the verdicts of its children.
    ///
    /// White to move: WIN if any child is WIN, DRAW if all children are
    /// DRAW, else UNKNOWN. Black to move: the dual.
    fn classify(&self, db: &[KpkPosition]) -> Outcome {
        let (good, bad) = if self.active == Player::White {
            (Outcome::WIN, Outcome::DRAW)
        } else {
            (Outcome::DRAW, Outcome::WIN)
        };

        let mut r = Outcome::empty();
        let mut b = king_moves(if self.active == Player::White {
            self.wk_sq
        } else {
            self.bk_sq
        });
        while let Some(ksq) = b.pop_some_lsb() {
            r |= if self.active == Player::White {
                db[index(Player::Black, ksq, self.bk_sq, self.wp_sq)].result
            } else {
                db[index(Player::White, self.wk_sq, ksq, self.wp_sq)].result
            };
        }

        if self.active == Player::White {
            // Single push
            if self.wp_sq.rank() < Rank::R7 {
                let push_sq = self.wp_sq + SQ(8);
                r |= db[index(Player::Black, self.wk_sq, self.bk_sq, push_sq)].result;

                // Double push, if the square in front holds neither king
                if self.wp_sq.rank() == Rank::R2
                    && push_sq != self.wk_sq
                    && push_sq != self.bk_sq
                {
                    r |= db[index(Player::Black, self.wk_sq, self.bk_sq, push_sq + SQ(8))].result;
                }
            }
        }

        if r.intersects(good) {
            good
        } else if r.intersects(Outcome::UNKNOWN) {
            Outcome::UNKNOWN
        } else {
            bad
        }
    }
}

/// The frozen bitbase: bit `i` is set iff index `i` is a win for white.
struct KpkBitbase {
    bits: Vec<u64>,
}

impl KpkBitbase {
    #[cold]
    fn build() -> KpkBitbase {
        let mut db: Vec<KpkPosition> = (0..MAX_INDEX).map(KpkPosition::new).collect();

        // Iterate until no unknown position can be changed to a win or a
        // draw. Converges in around 15 passes.
        let mut repeat = true;
        while repeat {
            repeat = false;
            for idx in 0..MAX_INDEX {
                if db[idx].result == Outcome::UNKNOWN {
                    let r = db[idx].classify(&db);
                    db[idx].result = r;
                    repeat |= r != Outcome::UNKNOWN;
                }
            }
        }

        let mut bits = vec![0_u64; MAX_INDEX / 64];
        for (idx, pos) in db.iter().enumerate() {
            if pos.result == Outcome::WIN {
                bits[idx >> 6] |= 1_u64 << (idx & 0x3F);
            }
        }
        KpkBitbase { bits }
    }

    #[inline]
    fn bit(&self, idx: usize) -> bool {
        self.bits[idx >> 6] & (1_u64 << (idx & 0x3F)) != 0
    }
}

lazy_static! {
    static ref KPK_BITBASE: KpkBitbase = KpkBitbase::build();
}

/// Forces the one-shot build of the bitbase.
#[cold]
pub(crate) fn init_bitbase() {
    lazy_static::initialize(&KPK_BITBASE);
}

/// Probes the bitbase: returns true iff white wins with best play.
///
/// # Safety
///
/// The caller must normalize the pawn to files A-D (mirroring the board
/// horizontally if needed) before calling; this is a precondition, asserted
/// in debug builds only.
#[inline]
pub fn probe(active: Player, wk_sq: SQ, wp_sq: SQ, bk_sq: SQ) -> bool {
    KPK_BITBASE.bit(index(active, wk_sq, bk_sq, wp_sq))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_win_trivial_promotion() {
        // Pawn on the 7th, both defender routes cut off: seeded as a win
        // before any iteration.
        let idx = index(Player::White, SQ::E6, SQ::A8, SQ::E7);
        assert_eq!(KpkPosition::new(idx).result, Outcome::WIN);
        assert!(probe(Player::White, SQ::E6, SQ::E7, SQ::A8));
    }

    #[test]
    fn known_draw_rook_pawn() {
        // Black king holds the corner in front of the a-pawn.
        assert!(!probe(Player::Black, SQ::A1, SQ::A2, SQ::A3));
    }

    #[test]
    fn known_wins_and_draws() {
        // King in front of its pawn with the opposition wins.
        assert!(probe(Player::Black, SQ::E6, SQ::E5, SQ::E8));
        // Pawn blocked by the defending king directly is drawn.
        assert!(!probe(Player::White, SQ::D4, SQ::D5, SQ::D6));
    }

    #[test]
    fn rebuild_matches_frozen() {
        let again = KpkBitbase::build();
        assert_eq!(again.bits.len(), KPK_BITBASE.bits.len());
        for (a, b) in again.bits.iter().zip(KPK_BITBASE.bits.iter()) {
            assert_eq!(a, b);
        }
    }
}
